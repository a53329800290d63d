//! Gallery session: the listing of one folder and the current page in it.

use crate::error::{GalleryError, Result};
use crate::file_utils;
use log::debug;
use std::path::{Path, PathBuf};

/// Direction for paging through the gallery.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Next,
    Previous,
}

/// Holds the loaded folder, its sorted image files, and the page cursor.
///
/// `cursor` is always a valid index into `pages` while `pages` is non-empty.
#[derive(Debug, Default)]
pub struct GallerySession {
    folder_path: Option<PathBuf>,
    pages: Vec<PathBuf>,
    cursor: usize,
}

impl GallerySession {
    /// Creates a new empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `folder` and replaces the session with its image files.
    ///
    /// On success the cursor is reset to the first page and the number of
    /// pages is returned (zero for a folder without images). On failure the
    /// session is left untouched.
    pub fn load(&mut self, folder: &Path) -> Result<usize> {
        let start = std::time::Instant::now();
        let expanded = file_utils::expand_tilde(folder);
        let folder = std::path::absolute(&expanded).map_err(|source| GalleryError::Scan {
            path: expanded.clone(),
            source,
        })?;

        let pages = file_utils::scan_directory(&folder)?;
        debug!(
            "Scanned {:?}: {} pages in {:?}",
            folder,
            pages.len(),
            start.elapsed()
        );

        self.folder_path = Some(folder);
        self.pages = pages;
        self.cursor = 0;
        Ok(self.pages.len())
    }

    fn step(&mut self, direction: Direction) -> Option<&Path> {
        let new_cursor = match direction {
            Direction::Next if self.cursor + 1 < self.pages.len() => self.cursor + 1,
            Direction::Previous if self.cursor > 0 => self.cursor - 1,
            _ => {
                debug!("No page available in direction {:?}", direction);
                return None;
            }
        };

        self.cursor = new_cursor;
        self.current()
    }

    /// Moves to the next page. Returns the new current page, or `None` when
    /// already on the last page.
    pub fn next(&mut self) -> Option<&Path> {
        self.step(Direction::Next)
    }

    /// Moves to the previous page. Returns the new current page, or `None`
    /// when already on the first page.
    pub fn prev(&mut self) -> Option<&Path> {
        self.step(Direction::Previous)
    }

    /// The current page, or `None` for an empty gallery.
    pub fn current(&self) -> Option<&Path> {
        self.pages.get(self.cursor).map(PathBuf::as_path)
    }

    pub fn peek_next(&self) -> Option<&Path> {
        self.pages.get(self.cursor + 1).map(PathBuf::as_path)
    }

    pub fn peek_prev(&self) -> Option<&Path> {
        let index = self.cursor.checked_sub(1)?;
        self.pages.get(index).map(PathBuf::as_path)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Zero-based index of the current page, `None` for an empty gallery.
    pub fn cursor(&self) -> Option<usize> {
        (!self.pages.is_empty()).then_some(self.cursor)
    }

    pub fn folder_path(&self) -> Option<&Path> {
        self.folder_path.as_deref()
    }

    /// Last component of the loaded folder, if any.
    pub fn folder_name(&self) -> Option<String> {
        self.folder_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }
}
