//! Text shown in the status line under the page.

use crate::error::GalleryError;
use std::fmt;
use std::path::PathBuf;

/// Every message the status line can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Prompt,
    Scanning(PathBuf),
    FolderNotFound(PathBuf),
    NoImages(PathBuf),
    /// A folder was just loaded; always on the first page.
    Found { count: usize, folder: Option<String> },
    /// `page` is zero-based; it is shown one-based.
    Page {
        page: usize,
        total: usize,
        folder: Option<String>,
    },
    ScanFailed(String),
    ImageLoadFailed(String),
}

impl StatusMessage {
    /// Maps a failed folder load to its status line.
    pub fn from_load_error(err: &GalleryError) -> Self {
        match err {
            GalleryError::NotFound(path) => StatusMessage::FolderNotFound(path.clone()),
            other => StatusMessage::ScanFailed(other.to_string()),
        }
    }

    /// Maps a failed page decode to its status line.
    pub fn from_image_error(err: &GalleryError) -> Self {
        match err {
            GalleryError::ImageLoad(msg) => StatusMessage::ImageLoadFailed(msg.clone()),
            other => StatusMessage::ImageLoadFailed(other.to_string()),
        }
    }
}

fn folder_suffix(folder: Option<&str>) -> String {
    match folder {
        Some(name) if !name.is_empty() => format!(" - {}", name),
        _ => String::new(),
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Prompt => write!(f, "Tap \"Open folder\" to choose a folder"),
            StatusMessage::Scanning(path) => write!(f, "Scanning: {}", path.display()),
            StatusMessage::FolderNotFound(path) => {
                write!(f, "Folder does not exist: {}", path.display())
            }
            StatusMessage::NoImages(path) => {
                write!(f, "No image files found in {}", path.display())
            }
            StatusMessage::Found { count, folder } => write!(
                f,
                "Found {} images, page 1{}",
                count,
                folder_suffix(folder.as_deref())
            ),
            StatusMessage::Page {
                page,
                total,
                folder,
            } => write!(
                f,
                "Page {}/{}{}",
                page + 1,
                total,
                folder_suffix(folder.as_deref())
            ),
            StatusMessage::ScanFailed(msg) => write!(f, "Scan failed: {}", msg),
            StatusMessage::ImageLoadFailed(msg) => write!(f, "Failed to load image: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_one_based() {
        let msg = StatusMessage::Page {
            page: 0,
            total: 12,
            folder: Some("Manga".to_string()),
        };
        assert_eq!(msg.to_string(), "Page 1/12 - Manga");
    }

    #[test]
    fn test_folder_suffix_omitted_without_name() {
        let msg = StatusMessage::Found {
            count: 3,
            folder: None,
        };
        assert_eq!(msg.to_string(), "Found 3 images, page 1");

        let msg = StatusMessage::Page {
            page: 1,
            total: 3,
            folder: Some(String::new()),
        };
        assert_eq!(msg.to_string(), "Page 2/3");
    }

    #[test]
    fn test_from_load_error() {
        let missing = PathBuf::from("/nowhere");
        let status = StatusMessage::from_load_error(&GalleryError::NotFound(missing.clone()));
        assert_eq!(status, StatusMessage::FolderNotFound(missing));

        let err = GalleryError::Scan {
            path: PathBuf::from("/locked"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(matches!(
            StatusMessage::from_load_error(&err),
            StatusMessage::ScanFailed(_)
        ));
    }

    #[test]
    fn test_image_error_not_prefixed_twice() {
        let status = StatusMessage::from_image_error(&GalleryError::ImageLoad("bad header".into()));
        assert_eq!(status.to_string(), "Failed to load image: bad header");
    }
}
