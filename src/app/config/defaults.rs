// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **API**: Image search endpoint and request parameters
//! - **Gallery**: Thumbnail grid sizing and full image caching

// ==========================================================================
// API Defaults
// ==========================================================================

/// Default image search endpoint (Pixabay-compatible).
pub const DEFAULT_API_ENDPOINT: &str = "https://pixabay.com/api/";

/// Environment variable consulted for the API key when none is configured.
pub const ENV_API_KEY: &str = "PIXABAY_API_KEY";

/// Default number of records requested per page.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Minimum page size accepted by the search API.
pub const MIN_PER_PAGE: u32 = 3;

/// Maximum page size accepted by the search API.
pub const MAX_PER_PAGE: u32 = 200;

/// Default HTTP request timeout (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Minimum HTTP request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum HTTP request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default thumbnail tile width in logical pixels.
pub const DEFAULT_THUMBNAIL_WIDTH: f32 = 240.0;

/// Minimum thumbnail tile width.
pub const MIN_THUMBNAIL_WIDTH: f32 = 120.0;

/// Maximum thumbnail tile width.
pub const MAX_THUMBNAIL_WIDTH: f32 = 480.0;

/// Number of full-size images kept decoded in memory.
pub const DEFAULT_FULL_IMAGE_CACHE_SIZE: usize = 16;

/// Upper bound for the full-size image cache.
pub const MAX_FULL_IMAGE_CACHE_SIZE: usize = 128;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_PER_PAGE >= MIN_PER_PAGE && DEFAULT_PER_PAGE <= MAX_PER_PAGE);
    assert!(DEFAULT_TIMEOUT_SECS >= MIN_TIMEOUT_SECS && DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);
    assert!(DEFAULT_THUMBNAIL_WIDTH >= MIN_THUMBNAIL_WIDTH);
    assert!(DEFAULT_THUMBNAIL_WIDTH <= MAX_THUMBNAIL_WIDTH);
    assert!(DEFAULT_FULL_IMAGE_CACHE_SIZE > 0);
    assert!(DEFAULT_FULL_IMAGE_CACHE_SIZE <= MAX_FULL_IMAGE_CACHE_SIZE);
};
