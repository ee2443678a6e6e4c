use crate::ui::GuiState;
use eframe::egui;
use std::sync::{Arc, Mutex};

/// Render the top header panel: title, workspace and applied theme.
pub fn show(ctx: &egui::Context, state: &Arc<Mutex<GuiState>>) {
    let (workspace, current) = {
        let s = state.lock().unwrap();
        (
            s.config
                .workspace
                .as_ref()
                .map(|p| p.display().to_string()),
            s.current_theme.clone(),
        )
    };
    let scale = ctx.pixels_per_point();
    egui::TopBottomPanel::top("top").show(ctx, |ui| {
        ui.add_space(8.0 * scale);
        ui.horizontal(|ui| {
            ui.heading(format!("🎨 WebClip Themer v{}", env!("CARGO_PKG_VERSION")));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match current {
                    Some(name) => ui.label(format!("Applied: {}", name)),
                    None => ui.weak("No theme applied"),
                };
            });
        });
        match workspace {
            Some(w) => ui.label(format!("Workspace: {}", w)),
            None => ui.colored_label(
                egui::Color32::from_rgb(200, 70, 70),
                "⚠ No workspace configured; set `workspace` in the config file",
            ),
        };
        ui.add_space(6.0 * scale);
    });
}
