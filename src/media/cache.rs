// SPDX-License-Identifier: MPL-2.0
//! In-memory cache of downloaded artworks.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used images are evicted first
//! - **Count-bounded**: Capacity comes from `[assets] cache_images`
//! - **URL-keyed**: A work fetched at two tiers is cached twice

use crate::domain::gallery::{CacheCapacity, ImageSize};
use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;

/// A decoded-on-demand image ready for the renderer.
#[derive(Debug, Clone)]
pub struct CachedImage {
    pub handle: image::Handle,
    pub size: ImageSize,
}

impl CachedImage {
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>, size: ImageSize) -> Self {
        Self {
            handle: image::Handle::from_bytes(bytes),
            size,
        }
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// LRU cache of fetched images keyed by URL.
pub struct ImageCache {
    cache: LruCache<String, CachedImage>,
    stats: CacheStats,
}

impl ImageCache {
    #[must_use]
    pub fn new(capacity: CacheCapacity) -> Self {
        let capacity = NonZeroUsize::new(capacity.value()).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Inserts an image, evicting the least recently used one at capacity.
    pub fn insert(&mut self, url: String, image: CachedImage) {
        if let Some((evicted, _)) = self.cache.push(url.clone(), image) {
            if evicted != url {
                self.stats.evictions += 1;
            }
        }
        self.stats.insertions += 1;
    }

    /// Inserts an image without evicting `keep`.
    ///
    /// `keep` is moved to the front before the insertion so eviction picks
    /// another entry. With a capacity of one the insertion is skipped instead.
    /// Returns true if the image was stored.
    pub fn insert_keeping(&mut self, url: String, image: CachedImage, keep: &str) -> bool {
        if keep != url && self.cache.contains(keep) {
            if self.cache.cap().get() == 1 {
                return false;
            }
            self.cache.promote(keep);
        }
        self.insert(url, image);
        true
    }

    /// Looks up an image and marks it as recently used.
    pub fn get(&mut self, url: &str) -> Option<CachedImage> {
        match self.cache.get(url) {
            Some(image) => {
                self.stats.hits += 1;
                Some(image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Looks up an image without touching LRU order or statistics.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&CachedImage> {
        self.cache.peek(url)
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.cache.contains(url)
    }

    /// Filters `urls` down to the ones not cached yet.
    #[must_use]
    pub fn urls_to_prefetch(&self, urls: &[String]) -> Vec<String> {
        urls.iter()
            .filter(|url| !self.cache.contains(url.as_str()))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .field("stats", &self.stats)
            .finish()
    }
}
