// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`error_banner`] - Inline error message replacing the grid
//! - [`pagination`] - Load-more / end-of-results control

pub mod error_banner;
pub mod pagination;
