use std::sync::Arc;

use crate::color::Color;
use crate::error::{CanvasError, CanvasResult};

/// Smallest allowed side length of a canvas.
pub const MIN_DIMENSION: usize = 8;
/// Largest allowed side length of a canvas.
pub const MAX_DIMENSION: usize = 128;

/// A single canvas cell. `is_empty` is always derived from the color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    color: Color,
    is_empty: bool,
}

impl Pixel {
    pub const EMPTY: Pixel = Pixel {
        color: Color::TRANSPARENT,
        is_empty: true,
    };

    pub fn new(color: Color) -> Self {
        Self {
            color,
            is_empty: color.is_transparent(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Pixel::EMPTY
    }
}

// Rows are shared between clones and copied on first write, so history
// entries and stroke scratch buffers stay independent without copying
// the whole canvas on every snapshot.
type Row = Arc<Vec<Pixel>>;

/// A row-major `width` x `height` pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Row>,
}

pub fn validate_dimensions(width: usize, height: usize) -> CanvasResult<()> {
    let range = MIN_DIMENSION..=MAX_DIMENSION;
    if range.contains(&width) && range.contains(&height) {
        Ok(())
    } else {
        Err(CanvasError::InvalidDimensions { width, height })
    }
}

impl Grid {
    /// Creates a fully transparent canvas.
    pub fn create_empty(width: usize, height: usize) -> CanvasResult<Self> {
        validate_dimensions(width, height)?;
        let row: Row = Arc::new(vec![Pixel::EMPTY; width]);
        Ok(Self {
            width,
            height,
            rows: vec![row; height],
        })
    }

    /// Builds a grid from row-major pixels, checking the shape.
    pub fn from_rows(width: usize, height: usize, rows: Vec<Vec<Pixel>>) -> CanvasResult<Self> {
        validate_dimensions(width, height)?;
        if rows.len() != height {
            return Err(CanvasError::MalformedSnapshot(format!(
                "expected {} rows, found {}",
                height,
                rows.len()
            )));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(CanvasError::MalformedSnapshot(format!(
                "row {} has {} pixels, expected {}",
                y,
                row.len(),
                width
            )));
        }
        Ok(Self {
            width,
            height,
            rows: rows.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Checked access; out-of-range coordinates are an error.
    pub fn get(&self, x: i32, y: i32) -> CanvasResult<Pixel> {
        self.pixel(x, y).ok_or(CanvasError::OutOfBounds { x, y })
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Pixel> {
        if self.contains(x, y) {
            Some(self.rows[y as usize][x as usize])
        } else {
            None
        }
    }

    /// Overwrites one cell. Returns false (and does nothing) outside the grid.
    pub(crate) fn set(&mut self, x: i32, y: i32, pixel: Pixel) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        Arc::make_mut(&mut self.rows[y as usize])[x as usize] = pixel;
        true
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Every cell with its coordinate, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Pixel)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, p)| (x, y, *p)))
    }

    pub fn is_blank(&self) -> bool {
        self.pixels().all(|(_, _, p)| p.is_empty())
    }

    /// Replaces the canvas with an empty one of the new size.
    /// Existing content is discarded.
    pub fn resize(&self, width: usize, height: usize) -> CanvasResult<Grid> {
        Grid::create_empty(width, height)
    }

    /// Like [`Grid::resize`] but keeps the overlapping top-left region.
    pub fn resize_preserving(&self, width: usize, height: usize) -> CanvasResult<Grid> {
        let mut out = Grid::create_empty(width, height)?;
        for (y, row) in self.rows.iter().enumerate().take(height) {
            let keep = row.len().min(width);
            Arc::make_mut(&mut out.rows[y])[..keep].copy_from_slice(&row[..keep]);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_does_not_leak_into_clone() {
        let original = Grid::create_empty(8, 8).unwrap();
        let mut copy = original.clone();
        assert!(copy.set(3, 3, Pixel::new(Color::BLACK)));
        assert!(original.get(3, 3).unwrap().is_empty());
        assert_eq!(copy.get(3, 3).unwrap().color(), Color::BLACK);
        // Untouched rows remain shared.
        assert!(Arc::ptr_eq(&original.rows[0], &copy.rows[0]));
        assert!(!Arc::ptr_eq(&original.rows[3], &copy.rows[3]));
    }

    #[test]
    fn test_set_outside_is_ignored() {
        let mut grid = Grid::create_empty(8, 8).unwrap();
        let before = grid.clone();
        assert!(!grid.set(-1, 0, Pixel::new(Color::BLACK)));
        assert!(!grid.set(0, 8, Pixel::new(Color::BLACK)));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_pixel_empty_flag_follows_alpha() {
        assert!(Pixel::new(Color::CLEAR).is_empty());
        assert!(!Pixel::new(Color::rgba(255, 255, 255, 0.01)).is_empty());
    }
}
