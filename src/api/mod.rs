// SPDX-License-Identifier: MPL-2.0
//! Image search API access.
//!
//! - [`client`] - Translates a query and page number into an HTTP call
//! - [`record`] - Search hit records
//! - [`image_loader`] - Downloads thumbnail and full-size image bytes

pub mod client;
pub mod image_loader;
pub mod record;

pub use client::{ApiSettings, Client};
pub use record::ImageRecord;
