//! Folder shortcuts offered by the folder dialog.

use crate::config::{COMMON_FOLDERS, MANUAL_FOLDERS};
use crate::file_utils::expand_tilde;
use std::path::{Path, PathBuf};

/// Which preset list an entry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetGroup {
    /// Folders under the storage root (DCIM, Pictures, ...).
    Common,
    /// Developer shortcuts such as the current and home directories.
    Manual,
}

/// A labelled folder the user can open with one click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPreset {
    pub label: String,
    pub path: PathBuf,
}

/// Base directory that common folders are relative to.
pub fn storage_root() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn common_presets(root: &Path) -> Vec<FolderPreset> {
    COMMON_FOLDERS
        .iter()
        .map(|(label, relative)| FolderPreset {
            label: (*label).to_string(),
            path: root.join(relative),
        })
        .collect()
}

fn manual_presets() -> Vec<FolderPreset> {
    MANUAL_FOLDERS
        .iter()
        .map(|(label, path)| FolderPreset {
            label: (*label).to_string(),
            path: expand_tilde(Path::new(path)),
        })
        .collect()
}

/// All presets of a group, with paths resolved for this machine.
pub fn presets(group: PresetGroup) -> Vec<FolderPreset> {
    match group {
        PresetGroup::Common => common_presets(&storage_root()),
        PresetGroup::Manual => manual_presets(),
    }
}

/// Resolves the preset at `index`, `None` if out of range.
pub fn resolve(group: PresetGroup, index: usize) -> Option<FolderPreset> {
    presets(group).into_iter().nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_presets_are_under_root() {
        let root = PathBuf::from("/storage/emulated/0");
        let presets = common_presets(&root);

        assert_eq!(presets.len(), COMMON_FOLDERS.len());
        assert_eq!(presets[0].label, "DCIM");
        assert_eq!(presets[0].path, root.join("DCIM"));
        assert!(presets.iter().all(|p| p.path.starts_with(&root)));
        assert!(presets.iter().any(|p| p.path == root.join("漫画")));
    }

    #[test]
    fn test_manual_presets_expand_tilde() {
        let presets = manual_presets();

        assert_eq!(presets[0].path, PathBuf::from("."));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(presets[1].path, home);
            assert_eq!(presets[3].path, home.join("Downloads"));
        }
    }

    #[test]
    fn test_resolve_out_of_range() {
        assert!(resolve(PresetGroup::Common, COMMON_FOLDERS.len()).is_none());
        assert!(resolve(PresetGroup::Manual, 99).is_none());
        assert_eq!(
            resolve(PresetGroup::Manual, 0).map(|p| p.label),
            Some("Current directory".to_string())
        );
    }
}
