//! Paint operations.
//!
//! The public functions take a grid by reference and return a new grid; the
//! input is never modified. The `apply_*` variants work in place on a buffer
//! the caller already owns, such as a stroke's scratch grid.

use crate::color::{Color, blend};
use crate::grid::{Grid, Pixel};
use crate::tools::Brush;

pub fn pencil(grid: &Grid, x: i32, y: i32, color: Color) -> Grid {
    let mut out = grid.clone();
    apply_pencil(&mut out, x, y, color);
    out
}

pub fn erase(grid: &Grid, x: i32, y: i32) -> Grid {
    let mut out = grid.clone();
    apply_erase(&mut out, x, y);
    out
}

pub fn brush(grid: &Grid, cx: i32, cy: i32, brush: &Brush, color: Color) -> Grid {
    let mut out = grid.clone();
    apply_brush(&mut out, cx, cy, brush, color);
    out
}

pub(crate) fn apply_pencil(grid: &mut Grid, x: i32, y: i32, color: Color) -> bool {
    match grid.pixel(x, y) {
        Some(existing) => grid.set(x, y, Pixel::new(blend(color, existing.color()))),
        None => false,
    }
}

pub(crate) fn apply_erase(grid: &mut Grid, x: i32, y: i32) -> bool {
    grid.set(x, y, Pixel::EMPTY)
}

pub(crate) fn apply_brush(grid: &mut Grid, cx: i32, cy: i32, brush: &Brush, color: Color) -> bool {
    let mut changed = false;
    for (x, y) in brush.footprint(cx, cy) {
        changed |= apply_pencil(grid, x, y, color);
    }
    changed
}

/// 4-connected flood fill of the region that exactly matches the seed color.
///
/// Filling with the seed's own color, or seeding outside the grid, returns
/// an unchanged grid.
pub fn flood_fill(grid: &Grid, x: i32, y: i32, color: Color) -> Grid {
    let Some(seed) = grid.pixel(x, y) else {
        return grid.clone();
    };
    let target = seed.color();
    if target.equals_exact(&color) {
        return grid.clone();
    }

    let mut out = grid.clone();
    let replacement = Pixel::new(color);
    let mut stack = vec![(x, y)];

    while let Some((x, y)) = stack.pop() {
        match out.pixel(x, y) {
            Some(p) if p.color().equals_exact(&target) => {}
            _ => continue,
        }
        out.set(x, y, replacement);
        stack.extend([(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]);
    }

    out
}

/// Color under the eyedropper, or `None` for an empty or off-canvas cell.
pub fn sample(grid: &Grid, x: i32, y: i32) -> Option<Color> {
    grid.pixel(x, y)
        .filter(|p| !p.is_empty())
        .map(|p| p.color())
}
