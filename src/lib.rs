// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an image search gallery built with the Iced GUI framework.
//!
//! It queries a Pixabay-compatible search API, lays the results out as a
//! responsive thumbnail grid with "load more" pagination, and opens any
//! result full-size in a lightbox. Interface text is localized with Fluent
//! and user preferences live in a sectioned `settings.toml`.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod api;
pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod ui;

pub use app::config;
