//! Page decoding and display.
//!
//! Uses `rayon::spawn` for decoding, then `slint::invoke_from_event_loop`
//! to update the UI from the background thread. A decoded page is only
//! shown if it is still the current page when it arrives.

use crate::image_cache::{CachedImage, ImageCache};
use crate::image_loader;
use crate::services::NavigationService;
use crate::state::AppState;
use crate::status::StatusMessage;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

fn decode(path: &Path) -> crate::error::Result<CachedImage> {
    let (data, width, height) = image_loader::load_image_blocking(path)?;
    Ok(CachedImage::new(data, width, height))
}

fn show_cached(ui: &crate::AppWindow, cached: CachedImage) {
    let image = image_loader::create_slint_image(cached.data, cached.width, cached.height);
    crate::ui::set_page_image(ui, image);
}

/// Displays `path`, from the cache when possible, otherwise decoded on a
/// worker thread. Adjacent pages are preloaded afterwards.
pub fn load_and_display_image(ui: slint::Weak<crate::AppWindow>, path: PathBuf, state: &AppState) {
    let navigation = NavigationService::new(state.session.clone());
    let cache = state.image_cache.clone();

    let cached = cache.lock().ok().and_then(|mut c| c.get(&path));
    if let Some(cached_image) = cached {
        if let Some(ui) = ui.upgrade() {
            show_cached(&ui, cached_image);
        }
        preload_adjacent_images(&navigation, cache);
        return;
    }

    rayon::spawn(move || {
        let result = decode(&path);

        let _ = slint::invoke_from_event_loop(move || {
            let Some(ui) = ui.upgrade() else {
                return;
            };

            match result {
                Ok(cached_image) => {
                    if let Ok(mut c) = cache.lock() {
                        c.put(path.clone(), cached_image.clone());
                    }
                    if navigation.is_current(&path) {
                        show_cached(&ui, cached_image);
                    } else {
                        debug!("Discarding stale page {}", path.display());
                    }
                    preload_adjacent_images(&navigation, cache);
                }
                Err(err) if navigation.is_current(&path) => {
                    crate::ui::set_error(&ui, &err, StatusMessage::from_image_error(&err));
                }
                Err(err) => warn!("Failed to load stale page {}: {}", path.display(), err),
            }
        });
    });
}

/// Decodes the previous and next pages in the background if not cached.
fn preload_adjacent_images(navigation: &NavigationService, cache: Arc<Mutex<ImageCache>>) {
    let (prev_path, next_path) = match navigation.neighbours() {
        Ok(neighbours) => neighbours,
        Err(e) => {
            warn!("Skipping preload: {}", e);
            return;
        }
    };

    for path in [next_path, prev_path].into_iter().flatten() {
        let should_load = cache
            .lock()
            .map(|c| !c.contains(&path))
            .unwrap_or(false);
        if !should_load {
            continue;
        }

        let cache = cache.clone();
        rayon::spawn(move || {
            // Preload failures surface again when the page is opened.
            if let Ok(cached_image) = decode(&path) {
                if let Ok(mut cache) = cache.lock() {
                    cache.put(path, cached_image);
                }
            }
        });
    }
}
