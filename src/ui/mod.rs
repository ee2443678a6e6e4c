//! Egui-based UI for the WebClip Themer.
//!
//! This module defines the application state, the eframe App implementation,
//! and wires UI actions to background tasks defined in ui::tasks.

use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use eframe::{egui, App};
use tracing::warn;

use crate::config::Config;
use crate::style::set_appkit_style;
use crate::types::{ProgressUpdate, TaskKind, Theme, ThemeIcon};

mod list;
mod panels;
pub mod tasks;

/// Shared UI state synchronized across UI thread and worker threads.
pub struct GuiState {
    pub config: Config,
    pub themes: Vec<Theme>,
    pub selected: Option<String>,
    pub icons: Vec<ThemeIcon>,
    pub installed: HashMap<String, String>,
    pub current_theme: Option<String>,

    // progress channel
    pub progress_tx: mpsc::Sender<ProgressUpdate>,
    pub progress_rx: mpsc::Receiver<ProgressUpdate>,
    pub current_task: TaskKind,
    pub current_progress: f32,
    pub current_message: String,
    pub task_running: bool, // disables controls, not a lock

    // status log
    pub status_msgs: Vec<String>,
}

impl GuiState {
    pub fn new(config: Config) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            config,
            themes: Vec::new(),
            selected: None,
            icons: Vec::new(),
            installed: HashMap::new(),
            current_theme: None,
            progress_tx: tx,
            progress_rx: rx,
            current_task: TaskKind::Idle,
            current_progress: 0.0,
            current_message: String::new(),
            task_running: false,
            status_msgs: Vec::new(),
        }
    }

    /// Persist the current config, logging instead of failing.
    pub fn save_config(&mut self) {
        if let Err(e) = self.config.save() {
            warn!("{e:?}");
            self.status_msgs.push(format!("Cannot save settings: {:?}", e));
        }
    }
}

/// Main eframe application that renders and controls the UI.
pub struct ThemerApp {
    pub state: Arc<Mutex<GuiState>>,
}

impl ThemerApp {
    /// Start with the given config and immediately trigger a theme scan.
    pub fn new(config: Config) -> Self {
        let state = Arc::new(Mutex::new(GuiState::new(config)));
        tasks::spawn_refresh_themes(state.clone());
        Self { state }
    }
}

/// Egui frame update: handles theme, progress messages, and UI layout.
impl App for ThemerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        set_appkit_style(ctx);

        // pull updates from progress channel (non-blocking)
        {
            let mut s = self.state.lock().unwrap();
            while let Ok(update) = s.progress_rx.try_recv() {
                s.current_task = update.kind.clone();
                s.current_progress = update.progress;
                s.current_message = update.message.clone();
                s.task_running = !update.finished;
                if let Some(err) = update.error {
                    s.status_msgs.push(format!("Error: {}", err));
                } else if update.finished {
                    s.status_msgs.push(update.message);
                }
            }
        }

        panels::top::show(ctx, &self.state);
        panels::bottom::show(ctx, &self.state);
        panels::side::show(ctx, &self.state);
        panels::central::show(ctx, &self.state);

        // request repaint for smooth progress updates
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
