use crate::error::ThemeError;
use crate::osx::reveal_in_finder;
use crate::types::TaskKind;
use crate::ui::tasks;
use crate::ui::GuiState;
use crate::workspace::{DirWorkspace, WorkspaceProvider};
use eframe::egui;
use std::sync::{Arc, Mutex};

/// Render the central panel: settings, actions and icons of the selected theme.
pub fn show(ctx: &egui::Context, state: &Arc<Mutex<GuiState>>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (selected, icons, installed, settings, task_running, progress, message, current_task, themes_dir, workspace) = {
            let s = state.lock().unwrap();
            (
                s.selected.clone(),
                s.icons.clone(),
                s.installed.clone(),
                s.config.theme,
                s.task_running,
                s.current_progress,
                s.current_message.clone(),
                s.current_task.clone(),
                s.config.themes_dir.clone(),
                s.config.workspace.clone(),
            )
        };

        // Settings apply to every theme, so they stay visible without a selection
        ui.horizontal(|ui| {
            let mut hide = settings.hide_display_names;
            let mut clips = settings.as_app_clips;
            let hide_resp = ui.add_enabled(!task_running, egui::Checkbox::new(&mut hide, "Hide App Labels"));
            let clips_resp = ui.add_enabled(!task_running, egui::Checkbox::new(&mut clips, "As App Clips"));
            if hide_resp.changed() || clips_resp.changed() {
                let mut s = state.lock().unwrap();
                s.config.theme.hide_display_names = hide;
                s.config.theme.as_app_clips = clips;
                s.save_config();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!task_running, egui::Button::new("Erase Applied Theme"))
                    .on_hover_text("Remove every generated WebClip from the workspace")
                    .clicked()
                {
                    tasks::spawn_erase_applied(state.clone());
                }
                if ui.button("Show Applied in Finder").clicked() {
                    let applied = DirWorkspace::new(workspace.clone()).applied_theme_folder();
                    let res = match applied {
                        Some(p) => reveal_in_finder(&p),
                        None => Err(ThemeError::WorkspaceUnavailable.into()),
                    };
                    if let Err(e) = res {
                        let mut s = state.lock().unwrap();
                        s.status_msgs.push(format!("Cannot reveal applied theme: {:?}", e));
                    }
                }
            });
        });

        if task_running && !matches!(current_task, TaskKind::Idle) {
            ui.label(message.clone());
            ui.add(egui::ProgressBar::new(progress).desired_height(6.0));
        }

        ui.add_space(6.0);
        ui.separator();
        ui.add_space(6.0);

        let Some(name) = selected else {
            ui.centered_and_justified(|ui| {
                ui.label("Select a theme from the left to see its icons.");
            });
            return;
        };

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(egui::RichText::new(&name).strong().size(20.0));
                let matched = icons.iter().filter(|i| installed.contains_key(&i.bundle_id)).count();
                ui.label(format!("{} icons, {} for installed apps", icons.len(), matched));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                if ui
                    .add_enabled(
                        !task_running,
                        egui::Button::new(egui::RichText::new("🗑 Delete Theme").color(egui::Color32::WHITE))
                            .fill(egui::Color32::from_rgb(220, 68, 68)),
                    )
                    .clicked()
                {
                    tasks::spawn_delete_theme(state.clone(), name.clone());
                }
                if ui.button("Show in Finder").clicked() {
                    if let Err(e) = reveal_in_finder(&themes_dir.join(&name)) {
                        let mut s = state.lock().unwrap();
                        s.status_msgs.push(format!("Cannot reveal in Finder: {:?}", e));
                    }
                }
                if ui
                    .add_enabled(
                        !task_running,
                        egui::Button::new(egui::RichText::new("Apply").color(egui::Color32::WHITE))
                            .fill(egui::Color32::from_rgb(0, 122, 255)),
                    )
                    .clicked()
                {
                    tasks::spawn_apply_theme(state.clone(), name.clone());
                }
            });
        });

        ui.add_space(8.0);
        ui.label(egui::RichText::new("Icons").strong().size(16.0));
        ui.add_space(6.0);

        if icons.is_empty() {
            ui.label("This theme has no icons.");
            return;
        }
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.style_mut().wrap_mode = Some(egui::TextWrapMode::Extend);
                egui::Grid::new("theme_icons").striped(true).show(ui, |ui| {
                    for icon in &icons {
                        match installed.get(&icon.bundle_id) {
                            Some(app) => ui.label(app),
                            None => ui.weak("not installed"),
                        };
                        ui.monospace(&icon.bundle_id)
                            .on_hover_text(icon.path.display().to_string());
                        if icon.preview.is_some() {
                            ui.weak("preview");
                        } else {
                            ui.label("");
                        }
                        ui.end_row();
                    }
                });
            });
    });
}
