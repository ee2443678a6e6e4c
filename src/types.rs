//! Core data types shared across the application.

use egui::Color32;
use std::path::PathBuf;

/// A theme folder discovered under the themes root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub icon_count: usize,
}

/// One generation source inside a theme folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeIcon {
    pub bundle_id: String,
    pub path: PathBuf,
    pub preview: Option<PathBuf>, // <id>-large.png, if shipped
}

/// Kind of background task currently running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskKind {
    Idle,
    RefreshThemes,
    ApplyTheme(String),
    EraseTheme,
    DeleteTheme(String),
}

/// Progress update message sent from background tasks to the UI.
#[derive(Clone, Debug)]
pub struct ProgressUpdate {
    pub kind: TaskKind,
    pub progress: f32,   // 0.0 ..= 1.0
    pub message: String, // human friendly
    pub finished: bool,  // whether task finished
    pub error: Option<String>,
}

impl ProgressUpdate {
    pub fn step(kind: TaskKind, progress: f32, message: impl Into<String>) -> Self {
        Self {
            kind,
            progress,
            message: message.into(),
            finished: false,
            error: None,
        }
    }

    pub fn done(kind: TaskKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            progress: 1.0,
            message: message.into(),
            finished: true,
            error: None,
        }
    }

    pub fn failed(kind: TaskKind, error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            kind,
            progress: 0.0,
            message: error.clone(),
            finished: true,
            error: Some(error),
        }
    }
}

pub struct StateColors {
    pub default: Color32,
    pub hover: Color32,
    pub selected: Option<Color32>, // None = use default theme color
}
