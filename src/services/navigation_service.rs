//! Service for opening folders and paging through them.
//!
//! Wraps the shared `GallerySession` so UI handlers never touch the lock
//! directly and always get status text alongside the new page.

use crate::error::{GalleryError, Result};
use crate::state::GallerySession;
use crate::status::StatusMessage;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// What the UI should show after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Page to display, `None` for an empty gallery.
    pub current: Option<PathBuf>,
    pub index: Option<usize>,
    pub total: usize,
    pub status: StatusMessage,
}

/// Service for managing page navigation.
#[derive(Clone)]
pub struct NavigationService {
    session: Arc<Mutex<GallerySession>>,
}

impl NavigationService {
    /// Creates a new navigation service.
    pub fn new(session: Arc<Mutex<GallerySession>>) -> Self {
        Self { session }
    }

    fn lock(&self) -> Result<MutexGuard<'_, GallerySession>> {
        self.session.lock().map_err(|_| GalleryError::StatePoisoned)
    }

    fn view(session: &GallerySession, status: StatusMessage) -> PageView {
        PageView {
            current: session.current().map(Path::to_path_buf),
            index: session.cursor(),
            total: session.page_count(),
            status,
        }
    }

    fn page_status(session: &GallerySession) -> StatusMessage {
        StatusMessage::Page {
            page: session.cursor().unwrap_or(0),
            total: session.page_count(),
            folder: session.folder_name(),
        }
    }

    /// Loads `folder` into the session.
    ///
    /// An empty folder is a success with `current == None` and a
    /// "no images" status. Errors leave the session as it was.
    pub fn open_folder(&self, folder: &Path) -> Result<PageView> {
        let mut session = self.lock()?;
        let count = session.load(folder)?;

        let status = if count == 0 {
            let folder = session
                .folder_path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| folder.to_path_buf());
            StatusMessage::NoImages(folder)
        } else {
            StatusMessage::Found {
                count,
                folder: session.folder_name(),
            }
        };
        Ok(Self::view(&session, status))
    }

    /// Moves to the next page. `Ok(None)` when already on the last page.
    pub fn next(&self) -> Result<Option<PageView>> {
        let mut session = self.lock()?;
        if session.next().is_none() {
            return Ok(None);
        }
        let status = Self::page_status(&session);
        Ok(Some(Self::view(&session, status)))
    }

    /// Moves to the previous page. `Ok(None)` when already on the first page.
    pub fn previous(&self) -> Result<Option<PageView>> {
        let mut session = self.lock()?;
        if session.prev().is_none() {
            return Ok(None);
        }
        let status = Self::page_status(&session);
        Ok(Some(Self::view(&session, status)))
    }

    /// Returns true if `path` is still the page the user is looking at.
    pub fn is_current(&self, path: &Path) -> bool {
        self.lock()
            .map(|session| session.current() == Some(path))
            .unwrap_or(false)
    }

    /// Pages adjacent to the current one, as `(previous, next)`.
    pub fn neighbours(&self) -> Result<(Option<PathBuf>, Option<PathBuf>)> {
        let session = self.lock()?;
        Ok((
            session.peek_prev().map(Path::to_path_buf),
            session.peek_next().map(Path::to_path_buf),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn service() -> NavigationService {
        NavigationService::new(Arc::new(Mutex::new(GallerySession::new())))
    }

    #[test]
    fn test_open_and_page() {
        let dir = tempdir().expect("failed to create temp dir");
        for name in ["b.png", "A.JPG", "c.gif"] {
            File::create(dir.path().join(name)).unwrap();
        }
        let folder_name = dir
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        let service = service();

        let view = service.open_folder(dir.path()).unwrap();
        assert_eq!(view.current, Some(dir.path().join("A.JPG")));
        assert_eq!(view.index, Some(0));
        assert_eq!(view.total, 2);
        assert_eq!(
            view.status,
            StatusMessage::Found {
                count: 2,
                folder: folder_name.clone()
            }
        );

        let view = service.next().unwrap().expect("second page");
        assert_eq!(view.current, Some(dir.path().join("b.png")));
        assert_eq!(
            view.status,
            StatusMessage::Page {
                page: 1,
                total: 2,
                folder: folder_name
            }
        );
        assert!(service.is_current(&dir.path().join("b.png")));
        assert!(!service.is_current(&dir.path().join("A.JPG")));

        assert!(service.next().unwrap().is_none());
        assert!(service.previous().unwrap().is_some());
        assert!(service.previous().unwrap().is_none());
    }

    #[test]
    fn test_open_empty_folder() {
        let dir = tempdir().expect("failed to create temp dir");
        File::create(dir.path().join("notes.txt")).unwrap();
        let service = service();

        let view = service.open_folder(dir.path()).unwrap();
        assert_eq!(view.current, None);
        assert_eq!(view.index, None);
        assert_eq!(view.total, 0);
        assert!(matches!(view.status, StatusMessage::NoImages(_)));
        assert!(service.next().unwrap().is_none());
        assert_eq!(service.neighbours().unwrap(), (None, None));
    }

    #[test]
    fn test_open_missing_folder() {
        let dir = tempdir().expect("failed to create temp dir");
        let service = service();

        let err = service.open_folder(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, GalleryError::NotFound(_)));
    }

    #[test]
    fn test_poisoned_lock_is_an_error() {
        let session = Arc::new(Mutex::new(GallerySession::new()));
        let poisoner = session.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the session lock");
        })
        .join();

        let service = NavigationService::new(session);
        assert!(matches!(service.next(), Err(GalleryError::StatePoisoned)));
        assert!(!service.is_current(Path::new("/a.png")));
    }
}
