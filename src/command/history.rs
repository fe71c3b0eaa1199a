use crate::grid::Grid;
use crate::util::time;

/// Maximum number of stored snapshots.
pub const HISTORY_CAPACITY: usize = 50;

/// An immutable grid snapshot and the time it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    grid: Grid,
    timestamp: u64,
}

impl HistoryEntry {
    pub fn new(grid: Grid) -> Self {
        Self::with_timestamp(grid, time::timestamp_millis())
    }

    pub fn with_timestamp(grid: Grid, timestamp: u64) -> Self {
        Self { grid, timestamp }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Milliseconds since the UNIX epoch
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

/// Bounded undo/redo stack of grid snapshots with a cursor.
///
/// The cursor is `None` until the first commit, otherwise it points at the
/// snapshot currently shown.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new snapshot, dropping any redo tail. At capacity the
    /// oldest snapshot is evicted and the cursor stays at the end.
    pub fn commit(&mut self, entry: HistoryEntry) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push(entry);

        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.remove(0);
        }
        self.cursor = Some(self.entries.len() - 1);
        log::debug!("History commit: {} entries, cursor {:?}", self.entries.len(), self.cursor);
    }

    /// Steps back one snapshot. At the oldest state nothing changes.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                self.entries.get(c - 1)
            }
            _ => None,
        }
    }

    /// Steps forward one snapshot. At the newest state nothing changes.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        let next = self.cursor.map_or(0, |c| c + 1);
        self.cursor = Some(next);
        self.entries.get(next)
    }

    /// Returns true if there is an older snapshot to go back to
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    /// Returns true if there is a newer snapshot to go forward to
    pub fn can_redo(&self) -> bool {
        match self.cursor {
            Some(c) => c + 1 < self.entries.len(),
            None => !self.entries.is_empty(),
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear the history
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}
