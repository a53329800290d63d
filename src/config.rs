//! Application configuration constants.

/// File name suffixes (lowercase, with the dot) that count as pages.
pub const SUPPORTED_IMAGE_SUFFIXES: [&str; 5] = [".jpg", ".jpeg", ".png", ".bmp", ".webp"];

/// Number of decoded pages kept in memory.
pub const IMAGE_CACHE_CAPACITY: usize = 10;

pub const WINDOW_TITLE: &str = "Folder Page Viewer";

/// Initial window size in logical pixels (portrait phone layout).
pub const WINDOW_SIZE: (f32, f32) = (360.0, 640.0);

/// Folders offered in the folder dialog, relative to the storage root.
pub const COMMON_FOLDERS: [(&str, &str); 6] = [
    ("DCIM", "DCIM"),
    ("Download", "Download"),
    ("Pictures", "Pictures"),
    ("Documents", "Documents"),
    ("漫画", "漫画"),
    ("Manga", "Manga"),
];

/// Folders offered under "manual selection". `~` is expanded on selection.
pub const MANUAL_FOLDERS: [(&str, &str); 4] = [
    ("Current directory", "."),
    ("Home directory", "~"),
    ("Pictures", "~/Pictures"),
    ("Downloads", "~/Downloads"),
];
