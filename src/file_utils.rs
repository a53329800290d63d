use crate::config::SUPPORTED_IMAGE_SUFFIXES;
use crate::error::{GalleryError, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Returns true if the file name ends with a supported image suffix, ignoring case.
pub fn is_supported_image_name(name: &OsStr) -> bool {
    let name = name.to_string_lossy().to_lowercase();
    SUPPORTED_IMAGE_SUFFIXES
        .iter()
        .any(|suffix| name.ends_with(suffix))
}

/// Replaces a leading `~` component with the home directory.
///
/// Paths without a leading `~`, or any path when the home directory is
/// unknown, are returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Lists the image files directly inside `dir`, sorted ascending by path.
///
/// Entries are matched by name only. A missing directory is reported as
/// [`GalleryError::NotFound`]; every other I/O failure is a scan error.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let scan_error = |source| GalleryError::Scan {
        path: dir.to_path_buf(),
        source,
    };

    if !dir.try_exists().map_err(scan_error)? {
        return Err(GalleryError::NotFound(dir.to_path_buf()));
    }

    let mut image_files = fs::read_dir(dir)
        .map_err(scan_error)?
        .filter_map(|entry| match entry {
            Ok(entry) if is_supported_image_name(&entry.file_name()) => Some(Ok(entry.path())),
            Ok(_) => None,
            Err(e) => Some(Err(scan_error(e))),
        })
        .collect::<Result<Vec<PathBuf>>>()?;

    image_files.sort();
    Ok(image_files)
}
