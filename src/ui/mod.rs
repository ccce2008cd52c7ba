// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one renders from borrowed data and reports user actions as a `Message`.
//!
//! # Gallery
//!
//! - [`searchbar`] - Query input and submit button
//! - [`image_grid`] - Responsive thumbnail grid
//! - [`modal`] - Lightbox overlay over an explicit host element
//! - [`image_cache`] - Thumbnail and full-size image handles
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Error banner, pagination control
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode
//! - [`notifications`] - Toast notification system

pub mod components;
pub mod design_tokens;
pub mod image_cache;
pub mod image_grid;
pub mod modal;
pub mod notifications;
pub mod searchbar;
pub mod styles;
pub mod theming;
pub mod widgets;
