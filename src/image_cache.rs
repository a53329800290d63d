//! Decoded page cache for fast paging.
//!
//! Keeps RGB8 pixel data of recently shown and preloaded pages using an
//! LRU policy, so flipping back and forth does not decode again.

use log::debug;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Decoded RGB8 pixel data of one page.
#[derive(Clone)]
pub struct CachedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl CachedImage {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }
}

/// LRU cache for storing decoded pages.
pub struct ImageCache {
    cache: LruCache<PathBuf, CachedImage>,
}

impl ImageCache {
    /// Creates a new cache. A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    /// Retrieves a page from the cache if it exists.
    pub fn get(&mut self, path: &Path) -> Option<CachedImage> {
        let result = self.cache.get(path).cloned();
        if result.is_some() {
            debug!("Cache HIT: {}", path.display());
        } else {
            debug!("Cache MISS: {}", path.display());
        }
        result
    }

    pub fn put(&mut self, path: PathBuf, cached_image: CachedImage) {
        debug!(
            "Cache PUT: {} ({}x{})",
            path.display(),
            cached_image.width,
            cached_image.height
        );
        self.cache.put(path, cached_image);
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }

    /// Drops every entry, used when another folder is loaded.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> CachedImage {
        CachedImage::new(vec![0, 0, 0], 1, 1)
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut cache = ImageCache::new(2);
        cache.put(PathBuf::from("/a.png"), pixel());
        cache.put(PathBuf::from("/b.png"), pixel());

        assert!(cache.get(Path::new("/a.png")).is_some());
        cache.put(PathBuf::from("/c.png"), pixel());

        assert!(cache.contains(Path::new("/a.png")));
        assert!(!cache.contains(Path::new("/b.png")));
        assert!(cache.contains(Path::new("/c.png")));
    }

    #[test]
    fn test_clear_and_zero_capacity() {
        let mut cache = ImageCache::new(0);
        cache.put(PathBuf::from("/a.png"), pixel());
        cache.put(PathBuf::from("/b.png"), pixel());
        assert_eq!(cache.cache.len(), 1);

        cache.clear();
        assert_eq!(cache.cache.len(), 0);
        assert!(cache.get(Path::new("/b.png")).is_none());
    }
}
