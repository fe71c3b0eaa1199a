use std::collections::HashSet;

use crate::color::Color;
use crate::grid::Grid;
use crate::tools::{Brush, ToolType};

/// An in-progress drag stroke.
///
/// Dabs go into a scratch copy of the committed grid; each pointer cell is
/// painted at most once per stroke because blending is not idempotent.
#[derive(Debug, Clone)]
pub struct StrokeSession {
    tool: ToolType,
    color: Color,
    brush: Brush,
    scratch: Grid,
    visited: HashSet<(i32, i32)>,
}

impl StrokeSession {
    /// Starts a stroke on a copy of `committed` and paints the first dab.
    pub fn begin(committed: &Grid, tool: ToolType, color: Color, brush: Brush, x: i32, y: i32) -> Self {
        let mut session = Self {
            tool,
            color,
            brush,
            scratch: committed.clone(),
            visited: HashSet::new(),
        };
        session.extend(x, y);
        session
    }

    /// Paints at `(x, y)` unless that cell was already visited or lies
    /// outside the canvas. Returns true if a dab was applied.
    pub fn extend(&mut self, x: i32, y: i32) -> bool {
        if !self.scratch.contains(x, y) || !self.visited.insert((x, y)) {
            return false;
        }
        self.tool
            .apply_dab(&mut self.scratch, x, y, self.color, &self.brush);
        true
    }

    pub fn tool(&self) -> ToolType {
        self.tool
    }

    /// The grid as it looks with this stroke applied so far.
    pub fn preview(&self) -> &Grid {
        &self.scratch
    }

    /// Number of distinct pointer cells painted.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn finish(self) -> Grid {
        self.scratch
    }
}
