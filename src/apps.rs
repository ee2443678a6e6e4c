//! Installed-app lookup: bundle identifier to display name.

use anyhow::{Context, Result};
use plist::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Supplies the apps installed on the device, keyed by bundle id.
pub trait InstalledApps {
    fn installed_apps(&self) -> HashMap<String, String>;
}

impl InstalledApps for HashMap<String, String> {
    fn installed_apps(&self) -> HashMap<String, String> {
        self.clone()
    }
}

/// Scans directories for `.app` bundles and reads their Info.plist.
#[derive(Clone, Debug, Default)]
pub struct BundleScan {
    dirs: Vec<PathBuf>,
}

impl BundleScan {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }
}

impl InstalledApps for BundleScan {
    fn installed_apps(&self) -> HashMap<String, String> {
        let mut res = HashMap::new();
        for dir in &self.dirs {
            if !dir.is_dir() {
                debug!(dir = %dir.display(), "app directory missing, skipping");
                continue;
            }
            for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
                let Ok(ent) = entry else { continue };
                let p = ent.path();
                if p.extension().and_then(|s| s.to_str()) != Some("app") {
                    continue;
                }
                match read_info_from_app(p) {
                    Ok((Some(bid), name)) => {
                        let name = name.unwrap_or_else(|| bundle_stem(p));
                        res.insert(bid, name);
                    }
                    Ok((None, _)) => debug!(bundle = %p.display(), "no CFBundleIdentifier"),
                    Err(e) => debug!(bundle = %p.display(), error = %e, "unreadable bundle"),
                }
            }
        }
        res
    }
}

/// Read CFBundleIdentifier and the display name from a bundle's Info.plist.
/// Handles both `Contents/Info.plist` (macOS) and a root `Info.plist` (iOS).
pub fn read_info_from_app(path: &Path) -> Result<(Option<String>, Option<String>)> {
    let info = [path.join("Contents").join("Info.plist"), path.join("Info.plist")]
        .into_iter()
        .find(|p| p.exists());
    let Some(info) = info else {
        return Ok((None, None));
    };
    let v = Value::from_file(&info).with_context(|| format!("Read plist {:?}", info))?;
    let dict = v.as_dictionary();
    let bundle_id = dict
        .and_then(|dict| dict.get("CFBundleIdentifier"))
        .and_then(|v| v.as_string())
        .map(|s| s.to_string());
    let bundle_name = dict
        .and_then(|dict| {
            dict.get("CFBundleDisplayName")
                .or_else(|| dict.get("CFBundleName"))
        })
        .and_then(|v| v.as_string())
        .map(|s| s.to_string());
    Ok((bundle_id, bundle_name))
}

fn bundle_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
