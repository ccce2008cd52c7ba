// SPDX-License-Identifier: MPL-2.0
//! Downloaded image handles for the grid and the lightbox.
//!
//! Thumbnails live as long as the result set they belong to. Full-size
//! images are kept in a bounded LRU keyed by URL so reopening a recent image
//! is instant.

use crate::api::ImageRecord;
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;

/// Download state of a single image.
#[derive(Debug, Clone)]
pub enum Slot<'a> {
    Loading,
    Ready(&'a Handle),
    Failed,
}

#[derive(Debug, Clone)]
enum Thumbnail {
    Loading,
    Ready(Handle),
    Failed,
}

#[derive(Debug)]
pub struct ImageCache {
    thumbnails: HashMap<u64, Thumbnail>,
    full: LruCache<String, Handle>,
    full_pending: HashSet<String>,
    full_failed: HashSet<String>,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FULL_IMAGE_CACHE_SIZE)
    }
}

impl ImageCache {
    /// Creates a cache keeping at most `full_capacity` full-size images.
    #[must_use]
    pub fn new(full_capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(full_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            thumbnails: HashMap::new(),
            full: LruCache::new(capacity),
            full_pending: HashSet::new(),
            full_failed: HashSet::new(),
        }
    }

    // =========================================================================
    // Thumbnails
    // =========================================================================

    /// Marks the previews of `records` as loading and returns the ones
    /// that still need a download as `(id, url)` pairs.
    pub fn request_thumbnails(&mut self, records: &[ImageRecord]) -> Vec<(u64, String)> {
        records
            .iter()
            .filter_map(|record| {
                if self.thumbnails.contains_key(&record.id) {
                    return None;
                }
                self.thumbnails.insert(record.id, Thumbnail::Loading);
                Some((record.id, record.preview_url.clone()))
            })
            .collect()
    }

    /// Stores a finished thumbnail download. Results for ids no longer
    /// tracked (the result set was cleared) are dropped.
    pub fn thumbnail_loaded(&mut self, id: u64, handle: Option<Handle>) {
        if let Some(slot) = self.thumbnails.get_mut(&id) {
            *slot = match handle {
                Some(handle) => Thumbnail::Ready(handle),
                None => Thumbnail::Failed,
            };
        }
    }

    #[must_use]
    pub fn thumbnail(&self, id: u64) -> Slot<'_> {
        match self.thumbnails.get(&id) {
            Some(Thumbnail::Ready(handle)) => Slot::Ready(handle),
            Some(Thumbnail::Failed) => Slot::Failed,
            Some(Thumbnail::Loading) | None => Slot::Loading,
        }
    }

    #[must_use]
    pub fn thumbnail_count(&self) -> usize {
        self.thumbnails.len()
    }

    /// Forgets every thumbnail, e.g. when the query changes.
    pub fn clear_thumbnails(&mut self) {
        self.thumbnails.clear();
    }

    // =========================================================================
    // Full-size images
    // =========================================================================

    /// Returns `true` when `url` must be downloaded. A previous failure is
    /// retried.
    pub fn request_full(&mut self, url: &str) -> bool {
        if self.full.contains(url) || self.full_pending.contains(url) {
            return false;
        }
        self.full_failed.remove(url);
        self.full_pending.insert(url.to_string());
        true
    }

    pub fn full_loaded(&mut self, url: String, handle: Option<Handle>) {
        self.full_pending.remove(&url);
        match handle {
            Some(handle) => {
                self.full.put(url, handle);
            }
            None => {
                self.full_failed.insert(url);
            }
        }
    }

    #[must_use]
    pub fn full_image(&self, url: &str) -> Slot<'_> {
        if let Some(handle) = self.full.peek(url) {
            Slot::Ready(handle)
        } else if self.full_failed.contains(url) {
            Slot::Failed
        } else {
            Slot::Loading
        }
    }

    #[must_use]
    pub fn full_count(&self) -> usize {
        self.full.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::record::sample;

    fn handle() -> Handle {
        Handle::from_bytes(vec![1_u8, 2, 3])
    }

    #[test]
    fn thumbnails_are_requested_once() {
        let mut cache = ImageCache::default();
        let records = vec![sample(1), sample(2)];

        assert_eq!(cache.request_thumbnails(&records).len(), 2);
        assert!(cache.request_thumbnails(&records).is_empty());
        assert!(matches!(cache.thumbnail(1), Slot::Loading));
    }

    #[test]
    fn thumbnail_result_updates_slot() {
        let mut cache = ImageCache::default();
        cache.request_thumbnails(&[sample(1), sample(2)]);

        cache.thumbnail_loaded(1, Some(handle()));
        cache.thumbnail_loaded(2, None);

        assert!(matches!(cache.thumbnail(1), Slot::Ready(_)));
        assert!(matches!(cache.thumbnail(2), Slot::Failed));
    }

    #[test]
    fn late_thumbnail_after_clear_is_dropped() {
        let mut cache = ImageCache::default();
        cache.request_thumbnails(&[sample(1)]);
        cache.clear_thumbnails();

        cache.thumbnail_loaded(1, Some(handle()));
        assert_eq!(cache.thumbnail_count(), 0);
    }

    #[test]
    fn full_image_lifecycle() {
        let mut cache = ImageCache::new(4);
        assert!(cache.request_full("a"));
        assert!(!cache.request_full("a"));
        assert!(matches!(cache.full_image("a"), Slot::Loading));

        cache.full_loaded("a".to_string(), Some(handle()));
        assert!(matches!(cache.full_image("a"), Slot::Ready(_)));
        assert!(!cache.request_full("a"));
    }

    #[test]
    fn failed_full_image_is_retried() {
        let mut cache = ImageCache::new(4);
        cache.request_full("a");
        cache.full_loaded("a".to_string(), None);
        assert!(matches!(cache.full_image("a"), Slot::Failed));

        assert!(cache.request_full("a"));
        assert!(matches!(cache.full_image("a"), Slot::Loading));
    }

    #[test]
    fn full_cache_is_bounded() {
        let mut cache = ImageCache::new(2);
        for url in ["a", "b", "c"] {
            cache.request_full(url);
            cache.full_loaded(url.to_string(), Some(handle()));
        }
        assert_eq!(cache.full_count(), 2);
        assert!(matches!(cache.full_image("a"), Slot::Loading));
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut cache = ImageCache::new(0);
        cache.request_full("a");
        cache.full_loaded("a".to_string(), Some(handle()));
        assert_eq!(cache.full_count(), 1);
    }
}
