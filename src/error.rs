//! Unified error types for the viewer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the gallery core and the image pipeline.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The selected folder does not exist.
    #[error("folder does not exist: {}", .0.display())]
    NotFound(PathBuf),
    /// Listing the folder failed for any other reason.
    #[error("failed to scan {}: {}", path.display(), source)]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error loading or decoding an image file
    #[error("failed to load image: {0}")]
    ImageLoad(String),
    #[error("gallery state lock poisoned")]
    StatePoisoned,
}

impl From<image::ImageError> for GalleryError {
    fn from(err: image::ImageError) -> Self {
        GalleryError::ImageLoad(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, GalleryError>;
