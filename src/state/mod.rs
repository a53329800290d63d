//! State management for the viewer.

use crate::config::IMAGE_CACHE_CAPACITY;
use crate::image_cache::ImageCache;
use std::sync::{Arc, Mutex};

pub mod session;

pub use session::GallerySession;

/// Application-wide state container.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<GallerySession>>,
    /// LRU cache for decoded pages.
    pub image_cache: Arc<Mutex<ImageCache>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(GallerySession::new())),
            image_cache: Arc::new(Mutex::new(ImageCache::new(IMAGE_CACHE_CAPACITY))),
        }
    }
}
