//! Background tasks used by the UI for scanning themes, applying and erasing
//! the applied theme, without blocking the UI thread.
//!
//! Only one task runs at a time; the UI disables its controls while
//! `task_running` is set.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;

use tracing::error;

use crate::applier::{apply_theme, current_applied_theme, erase_applied_theme, ApplyOutcome, ThemingContext};
use crate::apps::{BundleScan, InstalledApps};
use crate::catalog::ThemeCatalog;
use crate::config::Config;
use crate::types::{ProgressUpdate, TaskKind};
use crate::workspace::DirWorkspace;

use super::GuiState;

/// Mark a task as started and hand back the config snapshot it works from.
fn begin(state_arc: &Arc<Mutex<GuiState>>, kind: TaskKind, message: String) -> (std::sync::mpsc::Sender<ProgressUpdate>, Config) {
    let mut s = state_arc.lock().unwrap();
    s.task_running = true;
    let tx = s.progress_tx.clone();
    let _ = tx.send(ProgressUpdate::step(kind, 0.0, message));
    (tx, s.config.clone())
}

fn installed_apps(config: &Config) -> HashMap<String, String> {
    BundleScan::new(config.resolved_app_dirs()).installed_apps()
}

/// Spawn a background task to rescan themes, installed apps and the applied theme.
pub fn spawn_refresh_themes(state_arc: Arc<Mutex<GuiState>>) {
    let kind = TaskKind::RefreshThemes;
    let (tx, config) = begin(&state_arc, kind.clone(), "Scanning themes...".into());
    thread::spawn(move || {
        let mut catalog = ThemeCatalog::new(&config.themes_dir);
        catalog.refresh();
        let _ = tx.send(ProgressUpdate::step(kind.clone(), 0.4, "Scanning installed apps..."));
        let apps = installed_apps(&config);
        let workspace = DirWorkspace::new(config.workspace.clone());
        let current = current_applied_theme(&workspace);

        let count = catalog.themes().len();
        {
            let mut s = state_arc.lock().unwrap();
            let mut themes = catalog.themes().to_vec();
            themes.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            if let Some(sel) = s.selected.clone() {
                if !themes.iter().any(|t| t.name == sel) {
                    s.selected = None;
                    s.icons.clear();
                }
            }
            s.themes = themes;
            s.installed = apps;
            s.current_theme = current;
            if let Some(sel) = s.selected.clone() {
                if let Some(theme) = s.themes.iter().find(|t| t.name == sel).cloned() {
                    s.icons = catalog.icons(&theme);
                }
            }
        }
        let _ = tx.send(ProgressUpdate::done(kind, format!("Found {} themes", count)));
    });
}

/// Load the icon list of a theme into the UI state. Cheap enough to run inline.
pub fn select_theme(state_arc: &Arc<Mutex<GuiState>>, name: &str) {
    let mut s = state_arc.lock().unwrap();
    let catalog = ThemeCatalog::new(&s.config.themes_dir);
    let Some(theme) = s.themes.iter().find(|t| t.name == name).cloned() else {
        s.status_msgs.push(format!("Theme {} not found.", name));
        return;
    };
    s.icons = catalog.icons(&theme);
    s.selected = Some(theme.name);
}

/// Spawn a background task applying the named theme to the workspace.
pub fn spawn_apply_theme(state_arc: Arc<Mutex<GuiState>>, name: String) {
    let kind = TaskKind::ApplyTheme(name.clone());
    let (tx, config) = begin(&state_arc, kind.clone(), format!("Applying {}...", name));
    thread::spawn(move || {
        let apps = installed_apps(&config);
        let workspace = DirWorkspace::new(config.workspace.clone());
        let ctx = ThemingContext {
            themes_root: config.themes_dir.clone(),
            workspace: &workspace,
            apps: &apps,
        };
        let _ = tx.send(ProgressUpdate::step(kind.clone(), 0.3, "Writing WebClips..."));
        match apply_theme(&ctx, &name, config.theme.into()) {
            Ok(ApplyOutcome::Applied(report)) => {
                {
                    let mut s = state_arc.lock().unwrap();
                    for e in &report.failed {
                        s.status_msgs.push(format!("Error: {}", e));
                    }
                    s.current_theme = current_applied_theme(&workspace);
                }
                let _ = tx.send(ProgressUpdate::done(
                    kind,
                    format!(
                        "Applied {}: {} icons, {} apps not installed, {} failed",
                        name,
                        report.created.len(),
                        report.skipped.len(),
                        report.failed.len()
                    ),
                ));
            }
            Ok(ApplyOutcome::NoWorkspace) => {
                let _ = tx.send(ProgressUpdate::done(kind, "No workspace configured; nothing applied"));
            }
            Err(e) => {
                error!("{e}");
                let _ = tx.send(ProgressUpdate::failed(kind, e.to_string()));
            }
        }
    });
}

/// Spawn a background task removing every generated WebClip and the manifest.
pub fn spawn_erase_applied(state_arc: Arc<Mutex<GuiState>>) {
    let kind = TaskKind::EraseTheme;
    let (tx, config) = begin(&state_arc, kind.clone(), "Erasing applied theme...".into());
    thread::spawn(move || {
        let workspace = DirWorkspace::new(config.workspace.clone());
        let removed = erase_applied_theme(&workspace);
        {
            let mut s = state_arc.lock().unwrap();
            s.current_theme = current_applied_theme(&workspace);
        }
        let _ = tx.send(ProgressUpdate::done(kind, format!("Removed {} items", removed)));
    });
}

/// Spawn a background task moving a theme folder to the Trash, then rescan.
pub fn spawn_delete_theme(state_arc: Arc<Mutex<GuiState>>, name: String) {
    let kind = TaskKind::DeleteTheme(name.clone());
    let (tx, config) = begin(&state_arc, kind.clone(), format!("Deleting {}...", name));
    thread::spawn(move || {
        let mut catalog = ThemeCatalog::new(&config.themes_dir);
        match catalog.delete_theme(&name) {
            Ok(()) => {
                let _ = tx.send(ProgressUpdate::done(kind, format!("Moved {} to Trash", name)));
                spawn_refresh_themes(state_arc);
            }
            Err(e) => {
                error!("{e:?}");
                let _ = tx.send(ProgressUpdate::failed(kind, format!("{:?}", e)));
            }
        }
    });
}
