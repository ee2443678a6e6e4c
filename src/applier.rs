//! Applying and erasing themes in the workspace.
//!
//! Applying a theme writes a manifest naming the theme into the applied-theme
//! folder, then one WebClip per installed app that the theme has an icon for.
//! Structural failures abort; per-app failures are logged and collected.
//! Erasing is always best effort.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

use crate::apps::InstalledApps;
use crate::catalog::icon_bundle_id;
use crate::error::{ThemeError, ThemeResult};
use crate::webclip::{make_webclip, replace_file, BLANK_TITLE};
use crate::workspace::{WorkspaceProvider, MANIFEST_FILE};

/// Everything an apply needs, passed explicitly.
pub struct ThemingContext<'a> {
    pub themes_root: PathBuf,
    pub workspace: &'a dyn WorkspaceProvider,
    pub apps: &'a dyn InstalledApps,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    pub hide_display_names: bool,
    pub as_app_clips: bool,
}

/// Manifest recording which theme is applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedThemeManifest {
    #[serde(rename = "ThemeName")]
    pub theme_name: String,
}

#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Bundle ids a WebClip was written for.
    pub created: Vec<String>,
    /// Bundle ids with an icon but no installed app.
    pub skipped: Vec<String>,
    pub failed: Vec<ThemeError>,
}

#[derive(Debug)]
pub enum ApplyOutcome {
    Applied(ApplyReport),
    /// No workspace mounted; nothing was touched.
    NoWorkspace,
}

pub fn apply_theme(ctx: &ThemingContext<'_>, theme_name: &str, options: ApplyOptions) -> ThemeResult<ApplyOutcome> {
    let theme_folder = ctx.themes_root.join(theme_name);
    if !is_theme_name(theme_name) || !theme_folder.is_dir() {
        return Err(ThemeError::ThemeNotFound {
            name: theme_name.to_string(),
        });
    }
    let Some(applied) = ctx.workspace.applied_theme_folder() else {
        debug!(theme = theme_name, "no workspace, skipping apply");
        return Ok(ApplyOutcome::NoWorkspace);
    };

    write_manifest(&applied, theme_name)?;

    let apps = ctx.apps.installed_apps();
    let entries = fs::read_dir(&theme_folder).map_err(|source| ThemeError::DirectoryListingFailed {
        path: theme_folder.clone(),
        source,
    })?;

    let mut report = ApplyReport::default();
    for entry in entries.flatten() {
        let file = entry.path();
        if !file.is_file() {
            continue;
        }
        let Some(bundle_id) = icon_bundle_id(&file) else { continue };
        let Some(name) = apps.get(&bundle_id) else {
            report.skipped.push(bundle_id);
            continue;
        };
        let title = if options.hide_display_names { BLANK_TITLE } else { name.as_str() };
        let res = fs::read(&file)
            .map_err(|source| ThemeError::WebClipCreationFailed {
                bundle_id: bundle_id.clone(),
                source,
            })
            .and_then(|image| make_webclip(&applied, title, &image, &bundle_id, options.as_app_clips));
        match res {
            Ok(_) => report.created.push(bundle_id),
            Err(e) => {
                warn!(bundle_id = ?e.bundle_id(), "{e}");
                report.failed.push(e);
            }
        }
    }

    info!(
        theme = theme_name,
        created = report.created.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "applied theme"
    );
    Ok(ApplyOutcome::Applied(report))
}

/// A theme name is a single plain path component inside the themes root.
fn is_theme_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == name
    )
}

fn write_manifest(applied: &Path, theme_name: &str) -> ThemeResult<()> {
    let path = applied.join(MANIFEST_FILE);
    let manifest = AppliedThemeManifest {
        theme_name: theme_name.to_string(),
    };
    let write = || -> std::io::Result<()> {
        fs::create_dir_all(applied)?;
        let mut buf = Vec::new();
        plist::to_writer_xml(&mut buf, &manifest).map_err(std::io::Error::other)?;
        replace_file(&path, &buf)
    };
    write().map_err(|source| ThemeError::ManifestWriteFailed { path: path.clone(), source })
}

/// Remove everything inside the applied-theme folder, keeping the folder.
/// Returns how many entries were removed.
pub fn erase_applied_theme(workspace: &dyn WorkspaceProvider) -> usize {
    let Some(applied) = workspace.applied_theme_folder() else {
        return 0;
    };
    let entries = match fs::read_dir(&applied) {
        Ok(entries) => entries,
        Err(source) => {
            debug!("{}", ThemeError::DirectoryListingFailed { path: applied, source });
            return 0;
        }
    };
    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        let res = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        match res {
            Ok(()) => removed += 1,
            Err(e) => warn!(path = %path.display(), error = %e, "failed to remove applied item"),
        }
    }
    info!(removed, "erased applied theme");
    removed
}

/// Name of the applied theme, read back from the manifest.
pub fn current_applied_theme(workspace: &dyn WorkspaceProvider) -> Option<String> {
    let path = workspace.applied_theme_folder()?.join(MANIFEST_FILE);
    if !path.exists() {
        return None;
    }
    plist::from_file::<_, AppliedThemeManifest>(&path)
        .ok()
        .map(|m| m.theme_name)
}
