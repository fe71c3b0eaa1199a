use crate::command::{Command, CommandOutput};
use crate::codec::ExportedImage;
use crate::editor::Editor;
use crate::file_handler::FileHandler;
use crate::input::InputHandler;
use crate::panels::{PanelState, central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::settings::EditorSettings;
use crate::snapshot::GridSnapshot;

/// What survives an app restart: tool settings and the committed canvas.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PersistedState {
    pub settings: EditorSettings,
    pub canvas: Option<GridSnapshot>,
}

pub struct PaintApp {
    editor: Editor,
    input: InputHandler,
    renderer: Renderer,
    panel: PanelState,
    file_handler: FileHandler,
    status: Option<String>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::from_state(PersistedState::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = cc
            .storage
            .and_then(|storage| eframe::get_value::<PersistedState>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::from_state(state)
    }

    pub fn from_state(state: PersistedState) -> Self {
        let PersistedState { settings, canvas } = state;
        let editor = match canvas.map(GridSnapshot::into_grid) {
            Some(Ok(grid)) => Editor::with_grid(grid, settings),
            Some(Err(err)) => {
                log::warn!("Discarding unreadable saved canvas: {}", err);
                Editor::new(settings)
            }
            None => Editor::new(settings),
        };
        let panel = PanelState::for_editor(&editor);

        Self {
            editor,
            input: InputHandler::new(),
            renderer: Renderer::new(),
            panel,
            file_handler: FileHandler::new(),
            status: None,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn persisted_state(&self) -> PersistedState {
        PersistedState {
            settings: self.editor.settings().clone(),
            canvas: Some(self.editor.snapshot()),
        }
    }

    pub fn execute_command(&mut self, command: Command) {
        log::debug!("Executing {:?}", command);
        // Undo and redo can change the canvas size too.
        let refresh = command.mutates_canvas();

        match command.execute(&mut self.editor) {
            Ok(CommandOutput::Exported(image)) => self.save_export(image),
            Ok(_) => {
                if refresh {
                    self.refresh_panel();
                }
            }
            Err(err) => {
                log::warn!("Command failed: {}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    /// Re-reads the canvas size after it changed, keeping the checkboxes.
    fn refresh_panel(&mut self) {
        self.panel = PanelState {
            keep_content: self.panel.keep_content,
            show_grid_lines: self.panel.show_grid_lines,
            ..PanelState::for_editor(&self.editor)
        };
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save_export(&mut self, image: ExportedImage) {
        match std::fs::write(&image.file_name, &image.bytes) {
            Ok(()) => self.status = Some(format!("Saved {}", image.file_name)),
            Err(err) => {
                log::error!("Failed to write {}: {}", image.file_name, err);
                self.status = Some(format!("Could not save {}: {}", image.file_name, err));
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn save_export(&mut self, image: ExportedImage) {
        match download(&image) {
            Ok(()) => {
                log::info!("Downloaded {} ({} bytes)", image.file_name, image.bytes.len());
                self.status = Some(format!("Downloaded {}", image.file_name));
            }
            Err(err) => {
                log::error!("Failed to download {}: {:?}", image.file_name, err);
                self.status = Some(format!("Could not download {}", image.file_name));
            }
        }
    }

    fn poll_import(&mut self, ctx: &egui::Context) {
        match self.editor.poll_import() {
            Some(Ok(())) => {
                self.refresh_panel();
                self.file_handler.clear_processed_files();
                self.status = Some("Image imported".to_owned());
            }
            Some(Err(err)) => {
                self.file_handler.clear_processed_files();
                self.status = Some(err.to_string());
            }
            None if self.editor.is_import_pending() => ctx.request_repaint(),
            None => {}
        }
    }

    fn shortcut_commands(ctx: &egui::Context) -> Vec<Command> {
        ctx.input(|i| {
            let mut commands = Vec::new();
            if i.modifiers.command && i.key_pressed(egui::Key::Z) {
                commands.push(if i.modifiers.shift {
                    Command::Redo
                } else {
                    Command::Undo
                });
            }
            if i.modifiers.command && i.key_pressed(egui::Key::Y) {
                commands.push(Command::Redo);
            }
            commands
        })
    }
}

/// Hands the PNG to the browser through a temporary object URL.
#[cfg(target_arch = "wasm32")]
fn download(image: &ExportedImage) -> Result<(), eframe::wasm_bindgen::JsValue> {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};

    let bytes = js_sys::Uint8Array::from(image.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(&image.file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.persisted_state());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_import(ctx);

        let mut commands = self.file_handler.take_dropped_files(ctx);
        commands.extend(Self::shortcut_commands(ctx));
        commands.extend(tools_panel(ctx, &self.editor, &mut self.panel));

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let grid = self.editor.committed_grid();
                ui.label(format!("{}×{}", grid.width(), grid.height()));
                ui.separator();
                ui.label(self.editor.settings().tool.name());
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });

        self.renderer.set_show_grid_lines(self.panel.show_grid_lines);
        central_panel(ctx, &mut self.editor, &mut self.input, &self.renderer);
        self.file_handler.preview_files_being_dropped(ctx);

        for command in commands {
            if self.editor.is_import_pending() && command.mutates_canvas() {
                log::warn!("Skipping {:?} while an import is pending", command);
                continue;
            }
            self.execute_command(command);
        }
    }
}
