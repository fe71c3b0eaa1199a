use egui::{Pos2, Rect, Response, Vec2};

use crate::grid::Grid;

mod router;
pub use router::route_event;

/// Where the canvas sits on screen and how large one cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    /// Top-left corner of cell (0, 0) in screen coordinates
    pub origin: Pos2,
    /// Side length of one cell in points
    pub pixel_size: f32,
    pub columns: usize,
    pub rows: usize,
}

impl CanvasLayout {
    pub fn new(origin: Pos2, pixel_size: f32, grid: &Grid) -> Self {
        Self {
            origin,
            pixel_size,
            columns: grid.width(),
            rows: grid.height(),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(
            self.columns as f32 * self.pixel_size,
            self.rows as f32 * self.pixel_size,
        )
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.size())
    }

    /// The cell under `pos`, or `None` outside the canvas.
    pub fn cell_at(&self, pos: Pos2) -> Option<(i32, i32)> {
        let local = pos - self.origin;
        let x = (local.x / self.pixel_size).floor();
        let y = (local.y / self.pixel_size).floor();
        let inside = x >= 0.0 && y >= 0.0 && x < self.columns as f32 && y < self.rows as f32;
        inside.then_some((x as i32, y as i32))
    }

    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        let min = self.origin + Vec2::new(x as f32, y as f32) * self.pixel_size;
        Rect::from_min_size(min, Vec2::splat(self.pixel_size))
    }
}

/// Canvas gestures in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed over a cell
    PointerDown { x: i32, y: i32 },
    /// Held pointer moved onto a different cell
    PointerMove { x: i32, y: i32 },
    /// Primary button released
    PointerUp,
    /// Held pointer left the canvas
    PointerLeave,
}

/// One frame's worth of primary-button pointer state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub pressed: bool,
    pub released: bool,
    pub down: bool,
    pub pos: Option<Pos2>,
}

/// Turns raw pointer state into [`InputEvent`]s, one cell change at a time.
#[derive(Debug, Default)]
pub struct InputHandler {
    dragging: bool,
    last_cell: Option<(i32, i32)>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Reads this frame's pointer state for the canvas widget.
    pub fn process_input(&mut self, response: &Response, layout: &CanvasLayout) -> Vec<InputEvent> {
        let over_canvas = response.contains_pointer();
        let sample = response.ctx.input(|i| PointerSample {
            pressed: i.pointer.primary_pressed() && over_canvas,
            released: i.pointer.primary_released(),
            down: i.pointer.primary_down(),
            pos: i.pointer.interact_pos(),
        });
        self.translate(sample, layout)
    }

    pub fn translate(&mut self, sample: PointerSample, layout: &CanvasLayout) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let cell = sample.pos.and_then(|pos| layout.cell_at(pos));

        if sample.pressed {
            if let Some((x, y)) = cell {
                self.dragging = true;
                self.last_cell = Some((x, y));
                events.push(InputEvent::PointerDown { x, y });
            }
        } else if self.dragging && sample.down {
            match cell {
                Some((x, y)) if self.last_cell != Some((x, y)) => {
                    self.last_cell = Some((x, y));
                    events.push(InputEvent::PointerMove { x, y });
                }
                Some(_) => {}
                None => {
                    events.push(InputEvent::PointerLeave);
                    self.reset();
                }
            }
        }

        if self.dragging && (sample.released || !sample.down) {
            events.push(InputEvent::PointerUp);
            self.reset();
        }

        events
    }

    fn reset(&mut self) {
        self.dragging = false;
        self.last_cell = None;
    }
}
