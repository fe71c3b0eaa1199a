use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, CanvasResult};

pub const MIN_BRUSH_SIZE: u8 = 1;
pub const MAX_BRUSH_SIZE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushShape {
    #[default]
    Circle,
    Square,
}

impl BrushShape {
    pub const ALL: [BrushShape; 2] = [BrushShape::Circle, BrushShape::Square];

    pub fn name(&self) -> &'static str {
        match self {
            BrushShape::Circle => "Circle",
            BrushShape::Square => "Square",
        }
    }
}

/// Brush diameter in cells, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BrushSize(u8);

impl BrushSize {
    pub fn new(size: u8) -> CanvasResult<Self> {
        if (MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(CanvasError::InvalidBrushSize(size))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Half extent of the footprint: `floor(size / 2)`.
    pub fn radius(self) -> i32 {
        (self.0 / 2) as i32
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for BrushSize {
    type Error = CanvasError;

    fn try_from(size: u8) -> CanvasResult<Self> {
        Self::new(size)
    }
}

impl From<BrushSize> for u8 {
    fn from(size: BrushSize) -> u8 {
        size.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Brush {
    pub shape: BrushShape,
    pub size: BrushSize,
}

impl Brush {
    pub fn new(shape: BrushShape, size: u8) -> CanvasResult<Self> {
        Ok(Self {
            shape,
            size: BrushSize::new(size)?,
        })
    }

    /// Offsets from the brush center covered by one dab.
    pub fn offsets(&self) -> Vec<(i32, i32)> {
        let r = self.size.radius();
        let mut offsets = Vec::with_capacity(((2 * r + 1) * (2 * r + 1)) as usize);
        for dy in -r..=r {
            for dx in -r..=r {
                if self.shape == BrushShape::Square || dx * dx + dy * dy <= r * r {
                    offsets.push((dx, dy));
                }
            }
        }
        offsets
    }

    /// Absolute cells covered by a dab at `(cx, cy)`, not clipped to any grid.
    pub fn footprint(&self, cx: i32, cy: i32) -> Vec<(i32, i32)> {
        self.offsets()
            .into_iter()
            .map(|(dx, dy)| (cx + dx, cy + dy))
            .collect()
    }
}
