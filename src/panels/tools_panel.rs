
use crate::color::{Color, DEFAULT_PALETTE};
use crate::command::Command;
use crate::components::{ToolButton, color_swatch};
use crate::editor::Editor;
use crate::grid::{MAX_DIMENSION, MIN_DIMENSION};
use crate::settings::{MAX_PIXEL_SIZE, MIN_PIXEL_SIZE};
use crate::tools::{BrushShape, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, ToolType};

/// Widget state that lives between frames but is not part of the editor.
#[derive(Debug, Clone)]
pub struct PanelState {
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub keep_content: bool,
    pub show_grid_lines: bool,
}

impl PanelState {
    pub fn for_editor(editor: &Editor) -> Self {
        Self {
            canvas_width: editor.committed_grid().width(),
            canvas_height: editor.committed_grid().height(),
            keep_content: false,
            show_grid_lines: true,
        }
    }
}

/// Draws the left tool panel and returns the commands the user triggered.
pub fn tools_panel(ctx: &egui::Context, editor: &Editor, state: &mut PanelState) -> Vec<Command> {
    let mut commands = Vec::new();
    let settings = editor.settings();

    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.horizontal_wrapped(|ui| {
                for tool in ToolType::ALL {
                    if ToolButton::new(tool, settings.tool == tool).show(ui).clicked() {
                        commands.push(Command::SetTool(tool));
                    }
                }
            });

            if settings.tool == ToolType::Brush {
                ui.separator();
                ui.label("Brush");
                ui.horizontal(|ui| {
                    for shape in BrushShape::ALL {
                        if ui
                            .selectable_label(settings.brush.shape == shape, shape.name())
                            .clicked()
                        {
                            commands.push(Command::SetBrushShape(shape));
                        }
                    }
                });
                let mut size = settings.brush.size.get();
                if ui
                    .add(egui::Slider::new(&mut size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).text("Size"))
                    .changed()
                {
                    commands.push(Command::SetBrushSize(size));
                }
            }

            ui.separator();
            ui.heading("Colors");
            ui.horizontal(|ui| {
                ui.label("Current:");
                // Unmultiplied so translucent picks keep their exact channels.
                let mut picked = settings.color.to_rgba8();
                if ui.color_edit_button_srgba_unmultiplied(&mut picked).changed() {
                    commands.push(Command::SetColor(Color::from_rgba8(picked)));
                }
                ui.label(settings.color.to_string());
            });

            egui::Grid::new("palette_grid").spacing([4.0, 4.0]).show(ui, |ui| {
                for (i, swatch) in DEFAULT_PALETTE.iter().enumerate() {
                    if color_swatch(ui, *swatch, swatch.equals_loose(&settings.color)).clicked() {
                        commands.push(Command::SetColor(*swatch));
                    }
                    if i % 5 == 4 {
                        ui.end_row();
                    }
                }
            });

            ui.label("Recent");
            ui.horizontal_wrapped(|ui| {
                for recent in settings.recent_colors.colors() {
                    if color_swatch(ui, *recent, recent.equals_loose(&settings.color)).clicked() {
                        commands.push(Command::SetColor(*recent));
                    }
                }
            });

            ui.separator();
            ui.heading("History");
            ui.horizontal(|ui| {
                let idle = !editor.is_import_pending();
                if ui
                    .add_enabled(idle && editor.can_undo(), egui::Button::new("↶ Undo"))
                    .clicked()
                {
                    commands.push(Command::Undo);
                }
                if ui
                    .add_enabled(idle && editor.can_redo(), egui::Button::new("↷ Redo"))
                    .clicked()
                {
                    commands.push(Command::Redo);
                }
            });
            ui.label(format!("History: {} states", editor.history().len()));

            ui.separator();
            ui.heading("Canvas");
            ui.horizontal(|ui| {
                let dims = MIN_DIMENSION..=MAX_DIMENSION;
                ui.add(egui::DragValue::new(&mut state.canvas_width).range(dims.clone()));
                ui.label("×");
                ui.add(egui::DragValue::new(&mut state.canvas_height).range(dims));
            });
            ui.checkbox(&mut state.keep_content, "Keep content");
            ui.horizontal(|ui| {
                let idle = !editor.is_import_pending();
                if ui.add_enabled(idle, egui::Button::new("Resize")).clicked() {
                    let (width, height) = (state.canvas_width, state.canvas_height);
                    commands.push(if state.keep_content {
                        Command::ResizePreserving { width, height }
                    } else {
                        Command::Resize { width, height }
                    });
                }
                if ui.add_enabled(idle, egui::Button::new("Clear")).clicked() {
                    commands.push(Command::Clear);
                }
            });

            ui.checkbox(&mut state.show_grid_lines, "Grid lines");
            let mut zoom = settings.pixel_size;
            if ui
                .add(egui::Slider::new(&mut zoom, MIN_PIXEL_SIZE..=MAX_PIXEL_SIZE).text("Zoom"))
                .changed()
            {
                commands.push(Command::SetPixelSize(zoom));
            }

            ui.separator();
            if ui.button("Export PNG").clicked() {
                commands.push(Command::Export);
            }
            if editor.is_import_pending() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Importing…");
                });
            } else {
                ui.weak("Drop an image on the window to import it.");
            }
        });

    commands
}
