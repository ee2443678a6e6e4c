//! Configuration management.
//!
//! Config file location: ~/.config/webclip-themer/config.toml

use anyhow::{Context, Result};
use home::home_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::applier::ApplyOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the device workspace. Nothing is applied without one.
    pub workspace: Option<PathBuf>,
    pub themes_dir: PathBuf,
    /// Directories scanned for installed `.app` bundles.
    /// Relative entries resolve against the workspace.
    pub app_dirs: Vec<PathBuf>,
    pub theme: ThemeSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: None,
            themes_dir: default_themes_dir(home_dir()),
            app_dirs: vec![PathBuf::from("Applications")],
            theme: ThemeSettings::default(),
        }
    }
}

/// `~/Documents/WebClipThemer/Themes`, or relative to the working directory
/// when there is no home directory.
fn default_themes_dir(home: Option<PathBuf>) -> PathBuf {
    let docs = match home {
        Some(home) => home.join("Documents"),
        None => {
            warn!("Could not determine home directory; themes folder is relative to the working directory");
            PathBuf::from("Documents")
        }
    };
    docs.join("WebClipThemer").join("Themes")
}

/// Toggles applied to every theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub hide_display_names: bool,
    pub as_app_clips: bool,
}

impl From<ThemeSettings> for ApplyOptions {
    fn from(s: ThemeSettings) -> Self {
        ApplyOptions {
            hide_display_names: s.hide_display_names,
            as_app_clips: s.as_app_clips,
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        let home = home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("webclip-themer").join("config.toml"))
    }

    /// Load config from the default location, creating it if missing.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content).with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// App directories with relative entries joined onto the workspace.
    /// Relative entries are dropped when no workspace is configured.
    pub fn resolved_app_dirs(&self) -> Vec<PathBuf> {
        self.app_dirs
            .iter()
            .filter_map(|d| {
                if d.is_absolute() {
                    Some(d.clone())
                } else {
                    self.workspace.as_ref().map(|w| w.join(d))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.workspace.is_none());
        assert!(config.themes_dir.ends_with("WebClipThemer/Themes"));
        assert!(!config.theme.hide_display_names);
        assert!(!config.theme.as_app_clips);
    }

    #[test]
    fn test_default_themes_dir_without_home() {
        assert_eq!(
            default_themes_dir(Some(PathBuf::from("/Users/me"))),
            PathBuf::from("/Users/me/Documents/WebClipThemer/Themes")
        );
        assert_eq!(
            default_themes_dir(None),
            PathBuf::from("Documents/WebClipThemer/Themes")
        );
    }

    #[test]
    fn test_load_creates_default_then_roundtrips() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.toml");
        let loaded = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(loaded, Config::default());

        let mut config = loaded;
        config.workspace = Some(tmp.path().join("ws"));
        config.theme.hide_display_names = true;
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[theme]\nas_app_clips = true\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert!(config.theme.as_app_clips);
        assert!(!config.theme.hide_display_names);
        assert_eq!(config.app_dirs, vec![PathBuf::from("Applications")]);
    }

    #[test]
    fn test_resolved_app_dirs() {
        let mut config = Config {
            app_dirs: vec![PathBuf::from("Applications"), PathBuf::from("/opt/apps")],
            ..Config::default()
        };
        assert_eq!(config.resolved_app_dirs(), vec![PathBuf::from("/opt/apps")]);
        config.workspace = Some(PathBuf::from("/ws"));
        assert_eq!(
            config.resolved_app_dirs(),
            vec![PathBuf::from("/ws/Applications"), PathBuf::from("/opt/apps")]
        );
    }
}
