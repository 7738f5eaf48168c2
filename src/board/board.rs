//! Immutable 3x3 board snapshot

use super::{Cell, Mark, TOTAL_CELLS};

/// One board snapshot, cells in row-major order.
///
/// Boards are plain values: placing a mark yields a new board and leaves
/// the original untouched, so history entries can never alias each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board directly from its nine cells
    pub fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    /// Get cell at index, `None` when out of range
    #[inline]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Check if the cell at index exists and is empty
    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Copy of this board with `mark` written at `index`.
    ///
    /// No rule checks; see [`crate::rules::apply_move`] for the guarded move.
    /// Panics if `index` is out of range.
    #[inline]
    pub fn with_cell(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = Cell::from(mark);
        next
    }

    /// Number of occupied cells
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.mark_count() == TOTAL_CELLS
    }
}
