use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{CanvasError, CanvasResult};
use crate::grid::{Grid, Pixel};

/// Wire form of one cell: `{"color": {r, g, b, a}, "isEmpty": bool}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRecord {
    pub color: Color,
    #[serde(rename = "isEmpty")]
    pub is_empty: bool,
}

/// JSON-serializable grid handed to and received from the persistence
/// collaborator: `{width, height, pixels: [[PixelRecord]]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Vec<PixelRecord>>,
}

impl GridSnapshot {
    pub fn to_json(&self) -> CanvasResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> CanvasResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts back into a grid. The stored `isEmpty` flags are ignored and
    /// recomputed from each color; alpha outside `0.0..=1.0` is rejected.
    pub fn into_grid(self) -> CanvasResult<Grid> {
        let bad_alpha = self.pixels.iter().enumerate().find_map(|(y, row)| {
            row.iter()
                .position(|record| !record.color.has_valid_alpha())
                .map(|x| (x, y, row[x].color.a))
        });
        if let Some((x, y, a)) = bad_alpha {
            return Err(CanvasError::MalformedSnapshot(format!(
                "pixel ({}, {}) has alpha {} outside 0..=1",
                x, y, a
            )));
        }

        let rows: Vec<Vec<Pixel>> = self
            .pixels
            .into_iter()
            .map(|row| row.into_iter().map(|record| Pixel::new(record.color)).collect())
            .collect();
        Grid::from_rows(self.width, self.height, rows)
    }
}

impl From<&Grid> for GridSnapshot {
    fn from(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            pixels: grid
                .rows()
                .map(|row| {
                    row.iter()
                        .map(|p| PixelRecord {
                            color: p.color(),
                            is_empty: p.is_empty(),
                        })
                        .collect()
                })
                .collect(),
        }
    }
}

impl TryFrom<GridSnapshot> for Grid {
    type Error = CanvasError;

    fn try_from(snapshot: GridSnapshot) -> CanvasResult<Grid> {
        snapshot.into_grid()
    }
}
