// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::ImageRecord;
use crate::error::Error;
use crate::gallery::FetchRequest;
use crate::ui::notifications;
use crate::ui::{image_grid, modal, searchbar};
use iced::widget::image::Handle;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages and carry the results of background tasks.
#[derive(Debug, Clone)]
pub enum Message {
    Search(searchbar::Message),
    Grid(image_grid::Message),
    LoadMore,
    Modal(modal::Message),
    Notification(notifications::NotificationMessage),
    /// A search page finished; `request` identifies the query generation.
    SearchCompleted {
        request: FetchRequest,
        result: Result<Vec<ImageRecord>, Error>,
    },
    ThumbnailLoaded {
        id: u64,
        result: Result<Handle, Error>,
    },
    FullImageLoaded {
        url: String,
        result: Result<Handle, Error>,
    },
    /// Spinner animation and toast expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// API key, taking precedence over `PIXABAY_API_KEY` and the config file.
    pub api_key: Option<String>,
    /// Optional directory containing Fluent `.ftl` files.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Search submitted right after startup.
    pub query: Option<String>,
}
