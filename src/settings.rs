use serde::{Deserialize, Serialize};

use crate::color::{Color, RecentColors};
use crate::tools::{Brush, ToolType};

pub const DEFAULT_CANVAS_SIZE: usize = 32;
pub const DEFAULT_PIXEL_SIZE: f32 = 16.0;
pub const MIN_PIXEL_SIZE: f32 = 4.0;
pub const MAX_PIXEL_SIZE: f32 = 48.0;

/// Per-session tool configuration supplied to every paint operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorSettings {
    pub color: Color,
    pub tool: ToolType,
    pub brush: Brush,
    /// On-screen size of one canvas cell, in points
    pub pixel_size: f32,
    pub recent_colors: RecentColors,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            tool: ToolType::Pencil,
            brush: Brush::default(),
            pixel_size: DEFAULT_PIXEL_SIZE,
            recent_colors: RecentColors::default(),
        }
    }
}

impl EditorSettings {
    pub fn set_pixel_size(&mut self, size: f32) {
        self.pixel_size = size.clamp(MIN_PIXEL_SIZE, MAX_PIXEL_SIZE);
    }
}
