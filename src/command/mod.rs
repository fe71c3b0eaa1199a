mod history;

pub use history::{HISTORY_CAPACITY, History, HistoryEntry};

use crate::codec::ExportedImage;
use crate::color::Color;
use crate::editor::Editor;
use crate::error::CanvasResult;
use crate::tools::{BrushShape, BrushSize, ToolType};

/// Editor actions produced by the UI panels.
#[derive(Clone, PartialEq)]
pub enum Command {
    Undo,
    Redo,
    Clear,
    /// Start over on an empty canvas of the given size
    Resize { width: usize, height: usize },
    /// Change the canvas size, keeping the overlapping content
    ResizePreserving { width: usize, height: usize },
    SetTool(ToolType),
    SetColor(Color),
    SetBrushShape(BrushShape),
    SetBrushSize(u8),
    SetPixelSize(f32),
    Export,
    /// Encoded image bytes to decode in the background
    Import(Vec<u8>),
}

/// What executing a command produced
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Done,
    /// The command was a defined no-op (e.g. undo at the oldest state)
    Unchanged,
    Exported(ExportedImage),
}

/// Result type for command operations
pub type CommandResult = CanvasResult<CommandOutput>;

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Undo => write!(f, "Undo"),
            Command::Redo => write!(f, "Redo"),
            Command::Clear => write!(f, "Clear"),
            Command::Resize { width, height } => f
                .debug_struct("Resize")
                .field("width", width)
                .field("height", height)
                .finish(),
            Command::ResizePreserving { width, height } => f
                .debug_struct("ResizePreserving")
                .field("width", width)
                .field("height", height)
                .finish(),
            Command::SetTool(tool) => f.debug_tuple("SetTool").field(tool).finish(),
            Command::SetColor(color) => f.debug_tuple("SetColor").field(color).finish(),
            Command::SetBrushShape(shape) => f.debug_tuple("SetBrushShape").field(shape).finish(),
            Command::SetBrushSize(size) => f.debug_tuple("SetBrushSize").field(size).finish(),
            Command::SetPixelSize(size) => f.debug_tuple("SetPixelSize").field(size).finish(),
            Command::Export => write!(f, "Export"),
            // Skip dumping the raw bytes
            Command::Import(bytes) => f
                .debug_struct("Import")
                .field("len", &bytes.len())
                .finish(),
        }
    }
}

impl Command {
    /// Execute the command against the editor
    pub fn execute(self, editor: &mut Editor) -> CommandResult {
        let changed = |did_change: bool| {
            if did_change {
                CommandOutput::Done
            } else {
                CommandOutput::Unchanged
            }
        };

        match self {
            Command::Undo => editor.undo().map(changed),
            Command::Redo => editor.redo().map(changed),
            Command::Clear => editor.clear().map(|_| CommandOutput::Done),
            Command::Resize { width, height } => {
                editor.resize(width, height).map(|_| CommandOutput::Done)
            }
            Command::ResizePreserving { width, height } => editor
                .resize_preserving(width, height)
                .map(|_| CommandOutput::Done),
            Command::SetTool(tool) => {
                log::info!("Tool selected: {}", tool.name());
                editor.settings_mut().tool = tool;
                Ok(CommandOutput::Done)
            }
            Command::SetColor(color) => {
                editor.settings_mut().color = color;
                Ok(CommandOutput::Done)
            }
            Command::SetBrushShape(shape) => {
                editor.settings_mut().brush.shape = shape;
                Ok(CommandOutput::Done)
            }
            Command::SetBrushSize(size) => {
                editor.settings_mut().brush.size = BrushSize::new(size)?;
                Ok(CommandOutput::Done)
            }
            Command::SetPixelSize(size) => {
                editor.settings_mut().set_pixel_size(size);
                Ok(CommandOutput::Done)
            }
            Command::Export => editor.export_png().map(CommandOutput::Exported),
            Command::Import(bytes) => editor.begin_import(bytes).map(|_| CommandOutput::Done),
        }
    }

    /// Returns true if the command replaces the canvas content
    pub fn mutates_canvas(&self) -> bool {
        matches!(
            self,
            Command::Undo
                | Command::Redo
                | Command::Clear
                | Command::Resize { .. }
                | Command::ResizePreserving { .. }
                | Command::Import(_)
        )
    }
}
