use crate::types::StateColors;
use eframe::emath::{Align2, Vec2};
use eframe::epaint::{FontId, StrokeKind};
use egui::{Color32, Response, Sense, Ui};

/// Selectable theme row. `applied` draws a green dot at the right edge.
pub fn list_item(
    ui: &mut Ui,
    text: &str,
    size: Vec2,
    selected: bool,
    applied: bool,
    colors: StateColors,
) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let mut visuals = ui.style().interact_selectable(&response, selected);

        visuals.bg_fill = if selected {
            colors.selected.unwrap_or(visuals.bg_fill)
        } else if response.hovered() {
            colors.hover
        } else {
            colors.default
        };

        let painter = ui.painter();
        painter.rect_filled(rect, 2.0, visuals.bg_fill);
        painter.rect_stroke(rect, 2.0, visuals.bg_stroke, StrokeKind::Middle);
        painter.text(
            rect.left_center() + Vec2::new(10.0, 0.0),
            Align2::LEFT_CENTER,
            text,
            FontId::default(),
            visuals.text_color(),
        );
        if applied {
            painter.circle_filled(
                rect.right_center() - Vec2::new(12.0, 0.0),
                4.0,
                Color32::from_rgb(52, 199, 89),
            );
        }
    }

    response
}
