//! Workspace lookup: the directory tree mirroring the device filesystem.

use std::path::{Path, PathBuf};

/// Location of the generated WebClips, relative to the workspace root.
pub const APPLIED_THEME_PATH: &str = "AppliedTheme/HomeDomain/Library/WebClips";

/// Name of the manifest recording the applied theme, inside the applied folder.
pub const MANIFEST_FILE: &str = "Info.plist";

/// Supplies the workspace root, if one is mounted.
pub trait WorkspaceProvider {
    fn workspace_root(&self) -> Option<PathBuf>;

    /// Folder holding the applied theme, when a workspace is available.
    fn applied_theme_folder(&self) -> Option<PathBuf> {
        self.workspace_root().map(|root| applied_theme_folder(&root))
    }
}

pub fn applied_theme_folder(root: &Path) -> PathBuf {
    root.join(APPLIED_THEME_PATH)
}

/// Workspace backed by a configured directory. Unavailable unless the
/// directory exists.
#[derive(Clone, Debug, Default)]
pub struct DirWorkspace {
    root: Option<PathBuf>,
}

impl DirWorkspace {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }
}

impl WorkspaceProvider for DirWorkspace {
    fn workspace_root(&self) -> Option<PathBuf> {
        self.root.as_ref().filter(|p| p.is_dir()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_is_unavailable() {
        let ws = DirWorkspace::new(Some(PathBuf::from("/definitely/not/here")));
        assert!(ws.workspace_root().is_none());
        assert!(ws.applied_theme_folder().is_none());
        assert!(DirWorkspace::default().workspace_root().is_none());
    }

    #[test]
    fn test_applied_folder_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let ws = DirWorkspace::new(Some(tmp.path().to_path_buf()));
        assert_eq!(
            ws.applied_theme_folder().unwrap(),
            tmp.path()
                .join("AppliedTheme")
                .join("HomeDomain")
                .join("Library")
                .join("WebClips")
        );
    }
}
