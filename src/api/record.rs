// SPDX-License-Identifier: MPL-2.0
//! Image records as returned by the search API.

use serde::Deserialize;

/// One search hit.
///
/// Field names follow the Pixabay JSON schema; only the thumbnail URL, the
/// full-size URL and the tags are required by the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRecord {
    pub id: u64,

    /// Medium-sized preview used for grid thumbnails.
    #[serde(rename = "webformatURL")]
    pub preview_url: String,

    /// Full-size image shown in the lightbox.
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,

    /// Comma-separated tags, used as the caption.
    #[serde(default)]
    pub tags: String,

    #[serde(default, rename = "webformatWidth")]
    pub preview_width: u32,

    #[serde(default, rename = "webformatHeight")]
    pub preview_height: u32,

    /// Uploader name.
    #[serde(default)]
    pub user: String,
}

impl ImageRecord {
    /// Width/height ratio of the preview, `None` when the API omitted the
    /// dimensions.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.preview_width == 0 || self.preview_height == 0 {
            return None;
        }
        Some(self.preview_width as f32 / self.preview_height as f32)
    }

    /// Lightbox caption: the tags, followed by the uploader when known.
    #[must_use]
    pub fn caption(&self) -> String {
        match (self.tags.trim(), self.user.trim()) {
            (tags, "") => tags.to_string(),
            ("", user) => user.to_string(),
            (tags, user) => format!("{tags} · {user}"),
        }
    }
}

/// Top-level search response body.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default, rename = "totalHits")]
    pub total_hits: u64,
    #[serde(default)]
    pub hits: Vec<ImageRecord>,
}

#[cfg(test)]
pub(crate) fn sample(id: u64) -> ImageRecord {
    ImageRecord {
        id,
        preview_url: format!("https://cdn.example.test/preview/{id}.jpg"),
        large_image_url: format!("https://cdn.example.test/large/{id}.jpg"),
        tags: format!("tag-{id}, sample"),
        preview_width: 640,
        preview_height: 427,
        user: "tester".to_string(),
    }
}
