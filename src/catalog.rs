//! Theme discovery: scanning the themes folder and the icons inside a theme.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::ThemeError;
use crate::types::{Theme, ThemeIcon};

/// Suffix marking the preview-resolution copy of an icon.
pub const LARGE_SUFFIX: &str = "-large";

/// In-memory list of themes found under a themes root.
#[derive(Clone, Debug)]
pub struct ThemeCatalog {
    root: PathBuf,
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            themes: Vec::new(),
        }
    }

    /// Themes root, created on first use (best effort).
    pub fn themes_folder(&self) -> &Path {
        if !self.root.exists() {
            if let Err(e) = fs::create_dir_all(&self.root) {
                debug!(root = %self.root.display(), error = %e, "cannot create themes folder");
            }
        }
        &self.root
    }

    pub fn theme_folder(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Rescan the themes root, replacing the current list.
    pub fn refresh(&mut self) -> &[Theme] {
        self.themes.clear();
        let root = self.themes_folder().to_path_buf();
        let entries = match fs::read_dir(&root) {
            Ok(entries) => entries,
            Err(source) => {
                let err = ThemeError::DirectoryListingFailed { path: root, source };
                warn!("{err}");
                return &self.themes;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            // unreadable themes are skipped
            let Ok(children) = fs::read_dir(&path) else { continue };
            let icon_count = children.flatten().filter(|c| c.path().is_file()).count();
            self.themes.push(Theme {
                name: entry.file_name().to_string_lossy().to_string(),
                icon_count,
            });
        }
        &self.themes
    }

    /// Generation sources of a theme, with their `-large` previews attached.
    pub fn icons(&self, theme: &Theme) -> Vec<ThemeIcon> {
        let folder = self.theme_folder(&theme.name);
        let mut res: Vec<ThemeIcon> = WalkDir::new(&folder)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let path = e.into_path();
                let bundle_id = icon_bundle_id(&path)?;
                let preview = large_icon_path(&folder, &bundle_id);
                Some(ThemeIcon {
                    bundle_id,
                    path,
                    preview: preview.exists().then_some(preview),
                })
            })
            .collect();
        res.sort_by(|a, b| a.bundle_id.cmp(&b.bundle_id));
        res
    }

    /// Move a theme folder to the Trash, removing it directly if that fails.
    pub fn delete_theme(&mut self, name: &str) -> Result<()> {
        let folder = self.theme_folder(name);
        if !folder.is_dir() {
            return Err(ThemeError::ThemeNotFound { name: name.to_string() }.into());
        }
        if trash::delete(&folder).is_err() {
            fs::remove_dir_all(&folder)
                .with_context(|| format!("Failed to remove theme {:?}", folder))?;
        }
        self.themes.retain(|t| t.name != name);
        Ok(())
    }
}

/// Bundle id a theme file generates a WebClip for.
/// `None` for `-large` previews, which are never generation sources.
pub fn icon_bundle_id(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    if stem.is_empty() || stem.ends_with(LARGE_SUFFIX) {
        return None;
    }
    Some(stem.to_string())
}

fn large_icon_path(folder: &Path, bundle_id: &str) -> PathBuf {
    folder.join(format!("{bundle_id}{LARGE_SUFFIX}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme_tree() -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        let ocean = tmp.path().join("Ocean");
        fs::create_dir(&ocean).unwrap();
        for f in ["com.apple.Phone.png", "com.apple.Phone-large.png", "com.apple.Notes.png"] {
            fs::write(ocean.join(f), f).unwrap();
        }
        fs::create_dir(tmp.path().join("Empty")).unwrap();
        fs::write(tmp.path().join("stray.png"), "x").unwrap();
        tmp
    }

    #[test]
    fn test_refresh_counts_icons() {
        let tmp = theme_tree();
        let mut catalog = ThemeCatalog::new(tmp.path());
        let mut themes = catalog.refresh().to_vec();
        themes.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            themes,
            vec![
                Theme { name: "Empty".into(), icon_count: 0 },
                Theme { name: "Ocean".into(), icon_count: 3 },
            ]
        );

        // refresh replaces rather than appends
        fs::remove_dir(tmp.path().join("Empty")).unwrap();
        assert_eq!(catalog.refresh().len(), 1);
    }

    #[test]
    fn test_refresh_creates_missing_root() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("Themes");
        let mut catalog = ThemeCatalog::new(&root);
        assert!(catalog.refresh().is_empty());
        assert!(root.is_dir());
    }

    #[test]
    fn test_icons_skip_large_variants() {
        let tmp = theme_tree();
        let catalog = ThemeCatalog::new(tmp.path());
        let theme = Theme { name: "Ocean".into(), icon_count: 3 };
        let icons = catalog.icons(&theme);
        let ids: Vec<_> = icons.iter().map(|i| i.bundle_id.as_str()).collect();
        assert_eq!(ids, ["com.apple.Notes", "com.apple.Phone"]);
        assert!(icons[0].preview.is_none());
        assert_eq!(
            icons[1].preview.as_deref(),
            Some(tmp.path().join("Ocean").join("com.apple.Phone-large.png").as_path())
        );
    }

    #[test]
    fn test_icon_bundle_id() {
        assert_eq!(icon_bundle_id(Path::new("a/com.apple.Phone.png")).as_deref(), Some("com.apple.Phone"));
        assert_eq!(icon_bundle_id(Path::new("a/com.apple.Phone-large.png")), None);
    }

    #[test]
    fn test_refresh_counts_only_files() {
        let tmp = theme_tree();
        fs::create_dir(tmp.path().join("Ocean").join("extras")).unwrap();
        let mut catalog = ThemeCatalog::new(tmp.path());
        let ocean = catalog
            .refresh()
            .iter()
            .find(|t| t.name == "Ocean")
            .cloned()
            .unwrap();
        assert_eq!(ocean.icon_count, 3);
    }

    // Unreadable theme folders can't be staged when tests run as root, so the
    // skip is exercised through entries that aren't listable directories.
    #[cfg(unix)]
    #[test]
    fn test_refresh_skips_dangling_links() {
        let tmp = theme_tree();
        std::os::unix::fs::symlink(tmp.path().join("Gone"), tmp.path().join("Broken")).unwrap();
        let mut catalog = ThemeCatalog::new(tmp.path());
        let mut names: Vec<_> = catalog.refresh().iter().map(|t| t.name.clone()).collect();
        names.sort();
        assert_eq!(names, ["Empty", "Ocean"]);
    }

    #[test]
    fn test_refresh_unlistable_root_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("Themes");
        fs::write(&root, "not a folder").unwrap();
        let mut catalog = ThemeCatalog::new(&root);
        assert!(catalog.refresh().is_empty());
    }

    #[test]
    fn test_delete_missing_theme_fails() {
        let tmp = theme_tree();
        let mut catalog = ThemeCatalog::new(tmp.path());
        assert!(catalog.delete_theme("Nope").is_err());
    }
}
