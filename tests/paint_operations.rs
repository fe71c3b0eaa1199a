use std::collections::HashSet;

use pixel_paint::paint;
use pixel_paint::{Brush, BrushShape, Color, Grid, Pixel, blend};

const A: Color = Color::rgb(0, 200, 0);
const W: Color = Color::rgb(40, 40, 40);
const B: Color = Color::rgb(0, 0, 255);

fn painted_cells(grid: &Grid) -> HashSet<(i32, i32)> {
    grid.pixels()
        .filter(|(_, _, p)| !p.is_empty())
        .map(|(x, y, _)| (x as i32, y as i32))
        .collect()
}

// Rows 0-1 and 3-7 of color A, split by a wall of W along row 2.
fn walled_grid() -> Grid {
    let rows = (0..8)
        .map(|y| {
            let color = if y == 2 { W } else { A };
            vec![Pixel::new(color); 8]
        })
        .collect();
    Grid::from_rows(8, 8, rows).unwrap()
}

#[test]
fn test_pencil_blends_over_existing() {
    let grid = Grid::create_empty(8, 8).unwrap();
    let grid = paint::pencil(&grid, 0, 0, Color::rgb(255, 255, 255));
    let grid = paint::pencil(&grid, 0, 0, Color::rgba(0, 0, 0, 0.5));

    let color = grid.get(0, 0).unwrap().color();
    assert_eq!((color.r, color.g, color.b), (128, 128, 128));
    assert_eq!(color.a, 1.0);
}

#[test]
fn test_pencil_outside_is_noop() {
    let grid = Grid::create_empty(8, 8).unwrap();
    assert_eq!(paint::pencil(&grid, 8, 0, A), grid);
    assert_eq!(paint::pencil(&grid, -1, -1, A), grid);
}

#[test]
fn test_erase_empties_cell() {
    let grid = paint::pencil(&Grid::create_empty(8, 8).unwrap(), 3, 3, A);
    let erased = paint::erase(&grid, 3, 3);
    assert_eq!(erased.get(3, 3).unwrap(), Pixel::EMPTY);
    assert!(erased.is_blank());
}

#[test]
fn test_fill_stops_at_wall() {
    let grid = walled_grid();
    let filled = paint::flood_fill(&grid, 0, 0, B);

    for (x, y, pixel) in filled.pixels() {
        let expected = match y {
            0 | 1 => B,
            2 => W,
            _ => A,
        };
        assert_eq!(pixel.color(), expected, "cell ({}, {})", x, y);
    }
}

#[test]
fn test_fill_same_color_is_noop() {
    let grid = walled_grid();
    assert_eq!(paint::flood_fill(&grid, 0, 0, A), grid);
    assert_eq!(paint::flood_fill(&grid, 100, 0, B), grid);
}

#[test]
fn test_fill_is_exact_on_alpha() {
    let nearly = Color::rgba(0, 200, 0, 0.999);
    let rows = (0..8)
        .map(|y| {
            let mut row = vec![Pixel::new(A); 8];
            if y == 0 {
                row[1] = Pixel::new(nearly);
            }
            row
        })
        .collect();
    let grid = Grid::from_rows(8, 8, rows).unwrap();

    let filled = paint::flood_fill(&grid, 7, 7, B);
    assert_eq!(filled.get(1, 0).unwrap().color(), nearly);
    assert_eq!(filled.get(0, 0).unwrap().color(), B);
}

#[test]
fn test_fill_large_canvas_does_not_overflow() {
    let grid = Grid::create_empty(128, 128).unwrap();
    let filled = paint::flood_fill(&grid, 64, 64, B);
    assert!(filled.pixels().all(|(_, _, p)| p.color() == B));
}

#[test]
fn test_circle_brush_footprint() {
    let brush = Brush::new(BrushShape::Circle, 5).unwrap();
    let grid = paint::brush(&Grid::create_empty(10, 10).unwrap(), 5, 5, &brush, A);
    let cells = painted_cells(&grid);

    assert_eq!(cells.len(), 13);
    for &(x, y) in &cells {
        let (dx, dy) = (x - 5, y - 5);
        assert!(dx * dx + dy * dy <= 4);
        assert!(cells.contains(&(5 - dy, 5 + dx)), "not rotation symmetric at ({}, {})", x, y);
    }
    for corner in [(3, 3), (7, 3), (3, 7), (7, 7)] {
        assert!(!cells.contains(&corner));
    }
}

#[test]
fn test_square_brush_footprint() {
    let brush = Brush::new(BrushShape::Square, 5).unwrap();
    let grid = paint::brush(&Grid::create_empty(10, 10).unwrap(), 5, 5, &brush, A);
    let cells = painted_cells(&grid);

    let expected: HashSet<_> = (3..=7).flat_map(|x| (3..=7).map(move |y| (x, y))).collect();
    assert_eq!(cells, expected);
}

#[test]
fn test_brush_clips_at_edges() {
    let brush = Brush::new(BrushShape::Square, 5).unwrap();
    let grid = paint::brush(&Grid::create_empty(8, 8).unwrap(), 0, 0, &brush, A);
    assert_eq!(painted_cells(&grid).len(), 9);
}

#[test]
fn test_sample_ignores_empty_cells() {
    let grid = paint::pencil(&Grid::create_empty(8, 8).unwrap(), 2, 2, A);
    assert_eq!(paint::sample(&grid, 2, 2), Some(A));
    assert_eq!(paint::sample(&grid, 3, 3), None);
    assert_eq!(paint::sample(&grid, -4, 0), None);
}

#[test]
fn test_blend_edges() {
    assert_eq!(blend(Color::TRANSPARENT, Color::TRANSPARENT), Color::CLEAR);
    assert_eq!(blend(A, Color::TRANSPARENT), A);
    assert_eq!(blend(Color::rgba(9, 9, 9, 0.0), W), W);
}
