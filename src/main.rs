mod applier;
mod apps;
mod catalog;
mod config;
mod error;
mod osx;
mod style;
mod types;
mod ui;
mod webclip;
mod workspace;

use eframe::egui;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        warn!("{e:?}; using defaults");
        Config::default()
    });
    info!(
        workspace = ?config.workspace,
        themes = %config.themes_dir.display(),
        "starting"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "WebClip Themer",
        native_options,
        Box::new(|_cc| Ok(Box::new(ui::ThemerApp::new(config)))),
    )
}
