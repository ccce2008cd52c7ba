// SPDX-License-Identifier: MPL-2.0
//! Downloads image bytes and wraps them in Iced image handles.
//!
//! Decoding happens lazily in the renderer; an empty body is rejected here so
//! the grid can fall back to its placeholder tile.

use super::Client;
use crate::error::{Error, Result};
use iced::widget::image::Handle;

/// Downloads the image at `url` and returns a renderable handle.
pub async fn load(client: Client, url: String) -> Result<Handle> {
    let bytes = client.fetch_bytes(&url).await?;
    handle_from_bytes(bytes).inspect_err(|err| {
        tracing::debug!(url, error = %err, "image download unusable");
    })
}

/// Wraps downloaded bytes, rejecting empty bodies.
pub fn handle_from_bytes(bytes: Vec<u8>) -> Result<Handle> {
    if bytes.is_empty() {
        return Err(Error::Parse("empty image body".to_string()));
    }
    Ok(Handle::from_bytes(bytes))
}
