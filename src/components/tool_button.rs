use eframe::egui;

use crate::tools::ToolType;

const BUTTON_SIZE: f32 = 36.0;

/// Square icon button for one paint tool.
pub struct ToolButton {
    pub tool: ToolType,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: ToolType, selected: bool) -> Self {
        Self { tool, selected }
    }

    fn hint(&self) -> String {
        let usage = if self.tool.is_drag() {
            "click and drag on the canvas"
        } else {
            "click a cell"
        };
        format!("{}: {}", self.tool.name(), usage)
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::Vec2::splat(BUTTON_SIZE), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.visuals();
            let widget = ui.style().interact_selectable(&response, self.selected);
            let fill = if self.selected {
                visuals.selection.bg_fill
            } else {
                widget.weak_bg_fill
            };
            let painter = ui.painter();
            painter.rect_filled(rect, widget.rounding, fill);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.tool.icon(),
                egui::FontId::proportional(BUTTON_SIZE * 0.55),
                widget.text_color(),
            );
            if self.selected {
                painter.rect_stroke(rect, widget.rounding, visuals.selection.stroke);
            }
        }

        response.on_hover_text(self.hint())
    }
}
