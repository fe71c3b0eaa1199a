//! The editing session: committed grid, history, tool settings, the active
//! stroke and any pending import.
//!
//! Every change follows snapshot-then-replace: a new grid value is built,
//! becomes the committed grid, and an owned copy goes into the history.

use crate::codec::{self, ExportedImage, ImportJob};
use crate::color::Color;
use crate::command::{History, HistoryEntry};
use crate::error::{CanvasError, CanvasResult};
use crate::grid::{Grid, validate_dimensions};
use crate::paint;
use crate::settings::{DEFAULT_CANVAS_SIZE, EditorSettings};
use crate::snapshot::GridSnapshot;
use crate::stroke::StrokeSession;
use crate::tools::ToolType;

/// What a pointer gesture did to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nothing happened (off canvas, no-op fill, empty sample, import pending...)
    Ignored,
    /// The stroke preview changed; nothing committed yet
    Painted,
    /// A new grid was committed and recorded in history
    Committed,
    /// The eyedropper picked this color and made it current
    ColorPicked(Color),
}

#[derive(Debug)]
pub struct Editor {
    grid: Grid,
    history: History,
    settings: EditorSettings,
    stroke: Option<StrokeSession>,
    pending_import: Option<ImportJob>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl Editor {
    /// A session on an empty 32x32 canvas.
    pub fn new(settings: EditorSettings) -> Self {
        let grid = Grid::create_empty(DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE)
            .unwrap_or_else(|_| unreachable!("default canvas size is within bounds"));
        Self::with_grid(grid, settings)
    }

    /// A session seeded with `grid`, which becomes the oldest history entry.
    pub fn with_grid(grid: Grid, settings: EditorSettings) -> Self {
        let mut history = History::new();
        history.commit(HistoryEntry::new(grid.clone()));
        Self {
            grid,
            history,
            settings,
            stroke: None,
            pending_import: None,
        }
    }

    /// The grid to display: the stroke preview while dragging, otherwise the
    /// committed grid.
    pub fn grid(&self) -> &Grid {
        match &self.stroke {
            Some(stroke) => stroke.preview(),
            None => &self.grid,
        }
    }

    pub fn committed_grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut EditorSettings {
        &mut self.settings
    }

    pub fn is_stroke_active(&self) -> bool {
        self.stroke.is_some()
    }

    pub fn is_import_pending(&self) -> bool {
        self.pending_import.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replaces the session content with `grid` and starts a fresh history.
    pub fn load(&mut self, grid: Grid) -> CanvasResult<()> {
        self.ensure_no_import()?;
        self.stroke = None;
        self.history.clear();
        self.history.commit(HistoryEntry::new(grid.clone()));
        log::info!("Loaded {}x{} canvas", grid.width(), grid.height());
        self.grid = grid;
        Ok(())
    }

    pub fn load_snapshot(&mut self, snapshot: GridSnapshot) -> CanvasResult<()> {
        self.load(snapshot.into_grid()?)
    }

    /// The committed grid in persistence form.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::from(&self.grid)
    }

    fn ensure_no_import(&self) -> CanvasResult<()> {
        if self.pending_import.is_some() {
            log::warn!("Rejected canvas change while an import is pending");
            return Err(CanvasError::ImportPending);
        }
        Ok(())
    }

    fn commit(&mut self, grid: Grid) {
        self.history.commit(HistoryEntry::new(grid.clone()));
        self.grid = grid;
    }

    // ---- pointer gestures ----

    /// Pointer pressed on cell `(x, y)`. Drag tools start a stroke; fill and
    /// eyedropper act immediately.
    pub fn pointer_down(&mut self, x: i32, y: i32) -> GestureOutcome {
        if self.pending_import.is_some() {
            log::debug!("Ignoring pointer down at ({}, {}): import pending", x, y);
            return GestureOutcome::Ignored;
        }
        if !self.grid.contains(x, y) {
            return GestureOutcome::Ignored;
        }
        // A stroke left open (missed release) is finished first.
        self.finish_stroke();

        match self.settings.tool {
            ToolType::Fill => self.fill(x, y),
            ToolType::Eyedropper => self.pick_color(x, y),
            tool => {
                let color = self.settings.color;
                if tool != ToolType::Eraser {
                    self.settings.recent_colors.remember(color);
                }
                log::debug!("{} stroke started at ({}, {})", tool.name(), x, y);
                self.stroke = Some(StrokeSession::begin(
                    &self.grid,
                    tool,
                    color,
                    self.settings.brush,
                    x,
                    y,
                ));
                GestureOutcome::Painted
            }
        }
    }

    /// Pointer dragged onto cell `(x, y)`.
    pub fn pointer_move(&mut self, x: i32, y: i32) -> GestureOutcome {
        match self.stroke.as_mut().map(|stroke| stroke.extend(x, y)) {
            Some(true) => GestureOutcome::Painted,
            _ => GestureOutcome::Ignored,
        }
    }

    /// Pointer released: the whole stroke becomes one history entry.
    pub fn pointer_up(&mut self) -> GestureOutcome {
        if self.finish_stroke() {
            GestureOutcome::Committed
        } else {
            GestureOutcome::Ignored
        }
    }

    /// Pointer left the canvas mid-drag; treated like a release.
    pub fn pointer_leave(&mut self) -> GestureOutcome {
        self.pointer_up()
    }

    fn finish_stroke(&mut self) -> bool {
        let Some(stroke) = self.stroke.take() else {
            return false;
        };
        log::debug!(
            "{} stroke finished over {} cells",
            stroke.tool().name(),
            stroke.visited_count()
        );
        self.commit(stroke.finish());
        true
    }

    /// Flood fills from `(x, y)` with the current color. An open stroke is
    /// committed first; a same-color fill adds nothing on top of it.
    pub fn fill(&mut self, x: i32, y: i32) -> GestureOutcome {
        if self.pending_import.is_some() {
            return GestureOutcome::Ignored;
        }
        // The seed check must see any open stroke's paint.
        let finished = self.finish_stroke();
        let color = self.settings.color;
        match self.grid.pixel(x, y) {
            Some(seed) if !seed.color().equals_exact(&color) => {}
            _ if finished => return GestureOutcome::Committed,
            _ => return GestureOutcome::Ignored,
        }
        self.settings.recent_colors.remember(color);
        let filled = paint::flood_fill(&self.grid, x, y, color);
        log::debug!("Flood fill at ({}, {}) with {}", x, y, color);
        self.commit(filled);
        GestureOutcome::Committed
    }

    /// Makes the color under `(x, y)` current, if the cell is not empty.
    pub fn pick_color(&mut self, x: i32, y: i32) -> GestureOutcome {
        match paint::sample(self.grid(), x, y) {
            Some(color) => {
                log::debug!("Eyedropper picked {}", color);
                self.settings.color = color;
                GestureOutcome::ColorPicked(color)
            }
            None => GestureOutcome::Ignored,
        }
    }

    // ---- history ----

    /// Returns false when already at the oldest state.
    pub fn undo(&mut self) -> CanvasResult<bool> {
        self.ensure_no_import()?;
        self.finish_stroke();
        match self.history.undo() {
            Some(entry) => {
                self.grid = entry.grid().clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Returns false when already at the newest state.
    pub fn redo(&mut self) -> CanvasResult<bool> {
        self.ensure_no_import()?;
        self.finish_stroke();
        match self.history.redo() {
            Some(entry) => {
                self.grid = entry.grid().clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // ---- canvas commands ----

    /// Empties the canvas, keeping its size.
    pub fn clear(&mut self) -> CanvasResult<()> {
        self.ensure_no_import()?;
        self.finish_stroke();
        let cleared = Grid::create_empty(self.grid.width(), self.grid.height())?;
        self.commit(cleared);
        Ok(())
    }

    /// Replaces the canvas with an empty one of the new size.
    pub fn resize(&mut self, width: usize, height: usize) -> CanvasResult<()> {
        self.ensure_no_import()?;
        let resized = self.grid.resize(width, height)?;
        self.finish_stroke();
        log::info!("Canvas resized to {}x{}", width, height);
        self.commit(resized);
        Ok(())
    }

    /// Resizes keeping the overlapping top-left content.
    pub fn resize_preserving(&mut self, width: usize, height: usize) -> CanvasResult<()> {
        self.ensure_no_import()?;
        validate_dimensions(width, height)?;
        self.finish_stroke();
        let resized = self.grid.resize_preserving(width, height)?;
        log::info!("Canvas resized to {}x{} (content kept)", width, height);
        self.commit(resized);
        Ok(())
    }

    // ---- import / export ----

    pub fn export_png(&self) -> CanvasResult<ExportedImage> {
        codec::export_png(&self.grid)
    }

    /// Starts decoding `bytes` in the background. Painting is suspended
    /// until [`Editor::poll_import`] reports completion.
    pub fn begin_import(&mut self, bytes: Vec<u8>) -> CanvasResult<()> {
        self.ensure_no_import()?;
        self.finish_stroke();
        log::info!("Starting import of {} bytes", bytes.len());
        self.pending_import = Some(ImportJob::spawn(bytes));
        Ok(())
    }

    /// Completes a finished import. `None` while nothing has finished.
    /// On failure the grid is left unchanged.
    pub fn poll_import(&mut self) -> Option<CanvasResult<()>> {
        let result = self.pending_import.as_mut()?.poll()?;
        self.pending_import = None;
        Some(self.complete_import(result))
    }

    /// Blocks until a pending import finishes.
    pub fn wait_for_import(&mut self) -> Option<CanvasResult<()>> {
        let job = self.pending_import.take()?;
        Some(self.complete_import(job.wait()))
    }

    /// Decodes and commits `bytes` synchronously.
    pub fn import_now(&mut self, bytes: &[u8]) -> CanvasResult<()> {
        self.ensure_no_import()?;
        self.finish_stroke();
        self.complete_import(codec::import_image(bytes))
    }

    fn complete_import(&mut self, result: CanvasResult<Grid>) -> CanvasResult<()> {
        match result {
            Ok(grid) => {
                self.commit(grid);
                Ok(())
            }
            Err(err) => {
                log::error!("Import failed: {}", err);
                Err(err)
            }
        }
    }
}
