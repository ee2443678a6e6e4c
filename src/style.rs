//! AppKit-inspired light look for the themer window.

use eframe::{egui, epaint};
use epaint::{Color32, Stroke};

const ACCENT: Color32 = Color32::from_rgb(0, 122, 255);

/// Apply a macOS-like light theme to the current egui Context.
pub fn set_appkit_style(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.window_fill = Color32::from_rgb(236, 236, 236);
    visuals.panel_fill = Color32::WHITE;
    visuals.selection.bg_fill = ACCENT;
    visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(245, 245, 247);
    visuals.widgets.noninteractive.bg_fill = Color32::WHITE;
    visuals.striped = true;
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 4.0);
    });
}
