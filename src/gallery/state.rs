// SPDX-License-Identifier: MPL-2.0
//! Gallery state and its transitions.
//!
//! Every user or network event has one reducer method. Reducers only mutate
//! `State` and return an [`Effect`] describing the side effect the
//! application must perform (issue a request, show a toast, scroll, load an
//! image). Nothing in this module touches the network or the widget tree.
//!
//! State machine: `Idle -> Loading -> {Idle with results | Idle with error}`,
//! re-entered on every submit or load-more. A query change returns to `Idle`
//! with no results and invalidates the request in flight, if any.

use super::query::{PageCursor, Query};
use crate::api::ImageRecord;
use crate::config::DEFAULT_PER_PAGE;
use crate::error::Error;
use std::ops::Range;

/// What triggered a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    Submit,
    LoadMore,
}

/// A search request tagged with the query generation that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: String,
    pub page: u32,
    pub generation: u64,
    pub origin: FetchOrigin,
}

/// User-facing gallery errors shown in the inline banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// The request succeeded but returned no records.
    NoResults { query: String },
    /// Transport, HTTP or parse failure.
    RequestFailed,
}

impl GalleryError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GalleryError::NoResults { .. } => "error-no-results",
            GalleryError::RequestFailed => "error-request-failed",
        }
    }

    /// Returns the Fluent arguments for the message.
    #[must_use]
    pub fn i18n_args(&self) -> Vec<(&'static str, &str)> {
        match self {
            GalleryError::NoResults { query } => vec![("query", query.as_str())],
            GalleryError::RequestFailed => Vec::new(),
        }
    }
}

/// Image selected for the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub url: String,
    pub caption: String,
}

/// Control rendered below the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationControl {
    Hidden,
    LoadMore,
    /// Disabled "End" button once a partial page has been seen.
    End,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Blank submission: show a transient warning toast.
    WarnEmptyQuery,
    /// Issue the search request.
    Fetch(FetchRequest),
    /// The query changed; cached thumbnails for old results can go.
    ResultsCleared,
    /// New records were appended at `range`.
    PageAppended {
        range: Range<usize>,
        scroll_to_bottom: bool,
    },
    /// Load the full-size image for the lightbox.
    LoadFullImage(String),
}

/// Root gallery state.
#[derive(Debug, Clone)]
pub struct State {
    query: Query,
    images: Vec<ImageRecord>,
    cursor: PageCursor,
    per_page: usize,
    last_page_len: usize,
    loading: bool,
    error: Option<GalleryError>,
    modal_open: bool,
    selection: Option<Selection>,
    generation: u64,
    in_flight: Option<FetchRequest>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl State {
    /// Creates an idle state; `per_page` is the page size requested from the API.
    #[must_use]
    pub fn new(per_page: u32) -> Self {
        Self {
            query: Query::default(),
            images: Vec::new(),
            cursor: PageCursor::FIRST,
            per_page: per_page.max(1) as usize,
            last_page_len: 0,
            loading: false,
            error: None,
            modal_open: false,
            selection: None,
            generation: 0,
            in_flight: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.cursor.get()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&GalleryError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<&FetchRequest> {
        self.in_flight.as_ref()
    }

    #[must_use]
    pub fn last_page_len(&self) -> usize {
        self.last_page_len
    }

    /// Returns the lightbox selection while the modal is open.
    #[must_use]
    pub fn lightbox(&self) -> Option<&Selection> {
        if self.modal_open {
            self.selection.as_ref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// The grid is hidden while an error banner is shown.
    #[must_use]
    pub fn shows_gallery(&self) -> bool {
        !self.images.is_empty() && self.error.is_none()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    #[must_use]
    pub fn pagination_control(&self) -> PaginationControl {
        if self.loading || self.error.is_some() || self.last_page_len == 0 {
            PaginationControl::Hidden
        } else if self.last_page_len >= self.per_page {
            PaginationControl::LoadMore
        } else {
            PaginationControl::End
        }
    }

    // =========================================================================
    // Search input
    // =========================================================================

    /// Stores the normalized input. A different query resets results,
    /// pagination and error, and orphans the request in flight.
    pub fn input_changed(&mut self, text: &str) -> Effect {
        let query = Query::normalize(text);
        if query == self.query {
            return Effect::None;
        }
        self.query = query;
        self.images.clear();
        self.cursor = PageCursor::FIRST;
        self.last_page_len = 0;
        self.error = None;
        self.loading = false;
        self.generation = self.generation.wrapping_add(1);
        if let Some(stale) = self.in_flight.take() {
            tracing::debug!(query = %stale.query, page = stale.page, "query changed, request orphaned");
        }
        Effect::ResultsCleared
    }

    /// Starts a fetch for the current query, or asks for a warning if blank.
    pub fn submit(&mut self) -> Effect {
        if self.query.is_blank() {
            return Effect::WarnEmptyQuery;
        }
        if self.loading {
            return Effect::None;
        }
        self.start_fetch(FetchOrigin::Submit)
    }

    /// Fetches the next page; ignored unless the load-more control is shown.
    pub fn load_more(&mut self) -> Effect {
        if self.pagination_control() != PaginationControl::LoadMore {
            return Effect::None;
        }
        self.start_fetch(FetchOrigin::LoadMore)
    }

    fn start_fetch(&mut self, origin: FetchOrigin) -> Effect {
        let request = FetchRequest {
            query: self.query.term().to_string(),
            page: self.cursor.get(),
            generation: self.generation,
            origin,
        };
        self.loading = true;
        self.error = None;
        self.in_flight = Some(request.clone());
        Effect::Fetch(request)
    }

    // =========================================================================
    // Fetch results
    // =========================================================================

    /// Dispatches a completed request to the matching reducer.
    pub fn fetch_completed(
        &mut self,
        request: &FetchRequest,
        result: Result<Vec<ImageRecord>, Error>,
    ) -> Effect {
        match result {
            Ok(records) => self.fetch_succeeded(request, records),
            Err(error) => self.fetch_failed(request, &error),
        }
    }

    /// Appends a page of results. An empty page is handled as
    /// [`State::fetch_empty`].
    pub fn fetch_succeeded(&mut self, request: &FetchRequest, records: Vec<ImageRecord>) -> Effect {
        if !self.settle(request) {
            return Effect::None;
        }
        if records.is_empty() {
            self.apply_empty(request);
            return Effect::None;
        }

        let start = self.images.len();
        self.last_page_len = records.len();
        self.images.extend(records);
        self.cursor = self.cursor.advance();
        tracing::debug!(
            query = %request.query,
            page = request.page,
            total = self.images.len(),
            "page appended"
        );

        Effect::PageAppended {
            range: start..self.images.len(),
            scroll_to_bottom: request.origin == FetchOrigin::LoadMore,
        }
    }

    /// Handles a successful request that returned zero records.
    pub fn fetch_empty(&mut self, request: &FetchRequest) -> Effect {
        if self.settle(request) {
            self.apply_empty(request);
        }
        Effect::None
    }

    /// Handles a transport, HTTP or parse failure.
    pub fn fetch_failed(&mut self, request: &FetchRequest, error: &Error) -> Effect {
        if !self.settle(request) {
            return Effect::None;
        }
        tracing::warn!(query = %request.query, page = request.page, %error, "search failed");
        self.cursor = self.cursor.roll_back_to(request.page);
        self.error = Some(GalleryError::RequestFailed);
        Effect::None
    }

    /// Clears the in-flight marker if `request` is the current one.
    fn settle(&mut self, request: &FetchRequest) -> bool {
        if self.in_flight.as_ref() != Some(request) {
            tracing::debug!(
                query = %request.query,
                page = request.page,
                "discarding stale search response"
            );
            return false;
        }
        self.in_flight = None;
        self.loading = false;
        true
    }

    fn apply_empty(&mut self, request: &FetchRequest) {
        self.last_page_len = 0;
        self.cursor = self.cursor.roll_back_to(request.page);
        self.error = Some(GalleryError::NoResults {
            query: request.query.clone(),
        });
    }

    // =========================================================================
    // Lightbox
    // =========================================================================

    /// Selects an image and opens the modal.
    pub fn open_modal(&mut self, url: String, caption: String) -> Effect {
        self.selection = Some(Selection {
            url: url.clone(),
            caption,
        });
        self.modal_open = true;
        Effect::LoadFullImage(url)
    }

    /// Flips the modal. Opening only happens when an image is selected.
    pub fn toggle_modal(&mut self) -> Effect {
        if self.modal_open {
            return self.close_modal();
        }
        match &self.selection {
            Some(selection) => {
                let url = selection.url.clone();
                self.modal_open = true;
                Effect::LoadFullImage(url)
            }
            None => Effect::None,
        }
    }

    /// Closes the modal and forgets the selection.
    pub fn close_modal(&mut self) -> Effect {
        self.modal_open = false;
        self.selection = None;
        Effect::None
    }
}
