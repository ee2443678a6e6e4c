use eframe::egui;
use std::sync::{Arc, Mutex};

use crate::types::StateColors;
use crate::ui::GuiState;
use crate::ui::{list, tasks};

use egui::{Color32, Vec2};

/// Render the left sidebar with the themes list and refresh button.
pub fn show(ctx: &egui::Context, state: &Arc<Mutex<GuiState>>) {
    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(260.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            let disabled = {
                let s = state.lock().unwrap();
                s.task_running
            };
            ui.horizontal(|ui| {
                ui.set_height(32.0);
                ui.label(egui::RichText::new("THEMES").strong().size(16.0));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let tx = ui.add_enabled(!disabled, egui::Button::new("Refresh"));
                    if tx.clicked() {
                        tasks::spawn_refresh_themes(state.clone());
                    }
                });
            });
            ui.separator();
            let (themes, selected, current) = {
                let s = state.lock().unwrap();
                (s.themes.clone(), s.selected.clone(), s.current_theme.clone())
            };
            if themes.is_empty() {
                ui.add_space(8.0);
                ui.label(
                    "No themes found.\nThemes are folders of icons named <bundle id>.png inside the themes folder.",
                );
                return;
            }
            egui::ScrollArea::vertical().show(ui, |ui| {
                for theme in &themes {
                    let label = format!("{} ({} icons)", theme.name, theme.icon_count);
                    let applied = current.as_deref() == Some(theme.name.as_str());
                    let is_selected = selected.as_deref() == Some(theme.name.as_str());
                    let full_width = ui.available_width();
                    let resp = list::list_item(
                        ui,
                        &label,
                        Vec2::new(full_width, 24.0),
                        is_selected,
                        applied,
                        StateColors {
                            default: Color32::from_rgb(247, 248, 250),
                            hover: Color32::WHITE,
                            selected: Some(Color32::from_rgb(58, 128, 246)),
                        },
                    );
                    if resp.clicked() {
                        tasks::select_theme(state, &theme.name);
                    }
                }
            });
        });
}
