//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - Folder scans and page steps run directly in the Slint callbacks.
//! - `slint::spawn_local`: the native folder dialog, which must stay on the main thread.
//! - `rayon::spawn`: image decoding and preloading.
//! - `slint::invoke_from_event_loop`: hands decoded pages back to the UI thread.

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::{open_folder, setup_handlers};
pub use state_helpers::*;
