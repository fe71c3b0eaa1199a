use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::grid::Grid;
use crate::paint;

mod brush;
pub use brush::{Brush, BrushShape, BrushSize, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};

/// The paint tools offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    #[default]
    Pencil,
    Eraser,
    Brush,
    Fill,
    Eyedropper,
}

impl ToolType {
    pub const ALL: [ToolType; 5] = [
        ToolType::Pencil,
        ToolType::Eraser,
        ToolType::Brush,
        ToolType::Fill,
        ToolType::Eyedropper,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToolType::Pencil => "Pencil",
            ToolType::Eraser => "Eraser",
            ToolType::Brush => "Brush",
            ToolType::Fill => "Fill",
            ToolType::Eyedropper => "Eyedropper",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToolType::Pencil => "✏",
            ToolType::Eraser => "⌫",
            ToolType::Brush => "🖌",
            ToolType::Fill => "🪣",
            ToolType::Eyedropper => "💧",
        }
    }

    /// Drag tools paint continuously and commit once per stroke; the
    /// others act on a single click.
    pub fn is_drag(&self) -> bool {
        matches!(self, ToolType::Pencil | ToolType::Eraser | ToolType::Brush)
    }

    /// Applies one dab of a drag tool to `grid` in place.
    /// Click tools leave the grid alone. Returns true if any cell changed.
    pub(crate) fn apply_dab(&self, grid: &mut Grid, x: i32, y: i32, color: Color, brush: &Brush) -> bool {
        match self {
            ToolType::Pencil => paint::apply_pencil(grid, x, y, color),
            ToolType::Eraser => paint::apply_erase(grid, x, y),
            ToolType::Brush => paint::apply_brush(grid, x, y, brush, color),
            ToolType::Fill | ToolType::Eyedropper => false,
        }
    }
}
