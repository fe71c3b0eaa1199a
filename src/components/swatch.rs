use eframe::egui;

use crate::color::Color;

/// A clickable color square with a checkerboard behind translucent colors.
pub fn color_swatch(ui: &mut egui::Ui, color: Color, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        if color.a < 1.0 {
            let half = rect.width() / 2.0;
            painter.rect_filled(rect, 3.0, egui::Color32::WHITE);
            for (dx, dy) in [(0.0, 0.0), (half, half)] {
                let cell = egui::Rect::from_min_size(rect.min + egui::vec2(dx, dy), egui::Vec2::splat(half));
                painter.rect_filled(cell, 0.0, egui::Color32::from_gray(0xd0));
            }
        }
        painter.rect_filled(rect, 3.0, color.to_color32());

        let stroke = if selected {
            egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243))
        } else {
            egui::Stroke::new(1.0, egui::Color32::from_gray(160))
        };
        painter.rect_stroke(rect, 3.0, stroke);
    }

    response.on_hover_text(color.to_string())
}
