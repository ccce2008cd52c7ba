// SPDX-License-Identifier: MPL-2.0
//! Search newtypes.
//!
//! This module provides type-safe wrappers for the search term and the
//! pagination cursor, keeping normalization and bounds in one place.

// =============================================================================
// Query
// =============================================================================

/// Normalized (lowercased) search text as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Normalizes raw input text.
    #[must_use]
    pub fn normalize(input: &str) -> Self {
        Self(input.to_lowercase())
    }

    /// Returns the normalized text, untrimmed, as shown in the search field.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the term sent to the API.
    #[must_use]
    pub fn term(&self) -> &str {
        self.0.trim()
    }

    /// Returns whether the query is empty or whitespace-only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.term().is_empty()
    }
}

// =============================================================================
// PageCursor
// =============================================================================

/// Next page number to request, 1-based and never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageCursor(u32);

impl PageCursor {
    /// First page of any result set.
    pub const FIRST: Self = Self(1);

    /// Creates a cursor, clamping zero to the first page.
    #[must_use]
    pub fn new(page: u32) -> Self {
        Self(page.max(1))
    }

    /// Returns the raw page number.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Moves to the following page.
    #[must_use]
    pub fn advance(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Restores the cursor to the page a failed or empty request asked for.
    #[must_use]
    pub fn roll_back_to(self, page: u32) -> Self {
        Self::new(page.min(self.0))
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::FIRST
    }
}
