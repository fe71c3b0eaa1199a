// src/renderer.rs
use eframe::egui::{self, Color32, Painter, Stroke};

use crate::grid::Grid;
use crate::input::CanvasLayout;

#[derive(Debug, Clone)]
pub struct Renderer {
    checker_light: Color32,
    checker_dark: Color32,
    grid_line: Color32,
    show_grid_lines: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            checker_light: Color32::WHITE,
            checker_dark: Color32::from_gray(0xf0),
            grid_line: Color32::from_rgba_unmultiplied(0xe0, 0xe0, 0xe0, 128),
            show_grid_lines: true,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_grid_lines(&self) -> bool {
        self.show_grid_lines
    }

    pub fn set_show_grid_lines(&mut self, show: bool) {
        self.show_grid_lines = show;
    }

    /// Draws the checkerboard, the non-empty cells and the grid lines.
    ///
    /// Returns the number of cells that were painted.
    pub fn render(&self, painter: &Painter, layout: &CanvasLayout, grid: &Grid) -> usize {
        painter.rect_filled(layout.rect(), 0.0, self.checker_dark);
        for y in 0..layout.rows {
            for x in 0..layout.columns {
                if (x + y) % 2 == 0 {
                    painter.rect_filled(layout.cell_rect(x, y), 0.0, self.checker_light);
                }
            }
        }

        let mut painted = 0;
        for (x, y, pixel) in grid.pixels() {
            if pixel.is_empty() {
                continue;
            }
            painter.rect_filled(layout.cell_rect(x, y), 0.0, pixel.color().to_color32());
            painted += 1;
        }

        if self.show_grid_lines {
            let rect = layout.rect();
            let stroke = Stroke::new(1.0, self.grid_line);
            for x in 0..=layout.columns {
                let px = rect.min.x + x as f32 * layout.pixel_size;
                painter.line_segment([egui::pos2(px, rect.min.y), egui::pos2(px, rect.max.y)], stroke);
            }
            for y in 0..=layout.rows {
                let py = rect.min.y + y as f32 * layout.pixel_size;
                painter.line_segment([egui::pos2(rect.min.x, py), egui::pos2(rect.max.x, py)], stroke);
            }
        }

        painted
    }
}
