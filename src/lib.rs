#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod codec;
pub mod color;
pub mod command;
pub mod components;
pub mod editor;
pub mod error;
pub mod file_handler;
pub mod grid;
pub mod input;
pub mod paint;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod snapshot;
pub mod stroke;
pub mod tools;
pub mod util;

pub use app::{PaintApp, PersistedState};
pub use codec::{ExportedImage, ImportJob};
pub use color::{Color, RecentColors, blend};
pub use command::{Command, CommandOutput, History, HistoryEntry};
pub use editor::{Editor, GestureOutcome};
pub use error::{CanvasError, CanvasResult};
pub use grid::{Grid, Pixel};
pub use input::{CanvasLayout, InputEvent, InputHandler};
pub use renderer::Renderer;
pub use settings::EditorSettings;
pub use snapshot::GridSnapshot;
pub use stroke::StrokeSession;
pub use tools::{Brush, BrushShape, BrushSize, ToolType};
