// SPDX-License-Identifier: MPL-2.0
//! Search session state.
//!
//! - [`query`] - Normalized search text and page cursor newtypes
//! - [`state`] - Gallery state, reducers and the effects they request

pub mod query;
pub mod state;

pub use query::{PageCursor, Query};
pub use state::{
    Effect, FetchOrigin, FetchRequest, GalleryError, PaginationControl, Selection, State,
};
