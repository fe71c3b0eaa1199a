use crate::editor::{Editor, GestureOutcome};
use crate::input::{CanvasLayout, InputHandler, route_event};
use crate::renderer::Renderer;

/// Draws the canvas and feeds pointer gestures to the editor.
pub fn central_panel(ctx: &egui::Context, editor: &mut Editor, input: &mut InputHandler, renderer: &Renderer) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let pixel_size = editor.settings().pixel_size;
            let size = CanvasLayout::new(egui::Pos2::ZERO, pixel_size, editor.grid()).size();
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            let layout = CanvasLayout::new(response.rect.min, pixel_size, editor.grid());

            for event in input.process_input(&response, &layout) {
                match route_event(&event, editor) {
                    GestureOutcome::ColorPicked(color) => {
                        log::info!("Picked color {}", color);
                    }
                    GestureOutcome::Committed => {
                        log::debug!("Committed after {:?}", event);
                    }
                    GestureOutcome::Painted | GestureOutcome::Ignored => {}
                }
            }

            renderer.render(&painter, &layout, editor.grid());
        });
    });
}
