use crate::ui::GuiState;
use eframe::egui;
use eframe::epaint::Color32;
use std::sync::{Arc, Mutex};

/// Render the bottom status bar with counts and the latest status message.
pub fn show(ctx: &egui::Context, state: &Arc<Mutex<GuiState>>) {
    egui::TopBottomPanel::bottom("bottom_status")
        .resizable(false)
        .show(ctx, |ui| {
            let (themes_len, installed_len, last) = {
                let s = state.lock().unwrap();
                (s.themes.len(), s.installed.len(), s.status_msgs.last().cloned())
            };

            ui.horizontal(|ui| {
                ui.set_height(32.0);
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "Themes: {}  •  Installed apps: {}  •  {}",
                            themes_len,
                            installed_len,
                            last.unwrap_or_default()
                        ))
                        .color(Color32::from_rgb(110, 112, 124))
                        .monospace(),
                    );
                });
            });
        });
}
