//! Linear history of board snapshots with a movable cursor

use std::fmt;

use crate::board::Board;
use crate::error::{GameError, Result};
use tracing::debug;

/// Entry in the jumpable move list.
///
/// `index` doubles as the stable identity key when rendering the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDescriptor {
    pub index: usize,
    pub label: String,
}

impl MoveDescriptor {
    fn for_index(index: usize) -> Self {
        let label = if index > 0 {
            format!("Go to move #{}", index)
        } else {
            "Go to game start".to_string()
        };
        Self { index, label }
    }
}

impl fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Board snapshots from the empty board onward, plus the displayed index.
///
/// Always holds at least the initial empty board and keeps
/// `cursor < boards.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    boards: Vec<Board>,
    cursor: usize,
}

impl GameHistory {
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Record a board after the cursor, discarding any abandoned future
    pub fn append(&mut self, board: Board) {
        let discarded = self.boards.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(cursor = self.cursor, discarded, "Truncating future history");
        }
        self.boards.truncate(self.cursor + 1);
        self.boards.push(board);
        self.cursor = self.boards.len() - 1;
    }

    /// Move the cursor without touching the recorded boards
    pub fn set_cursor(&mut self, index: usize) -> Result<()> {
        if index >= self.boards.len() {
            return Err(GameError::MoveOutOfRange {
                requested: index,
                len: self.boards.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }

    /// Board at the cursor
    #[inline]
    pub fn current(&self) -> &Board {
        &self.boards[self.cursor]
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false; the initial board is never removed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// One descriptor per recorded board, in order
    pub fn move_descriptors(&self) -> Vec<MoveDescriptor> {
        (0..self.boards.len()).map(MoveDescriptor::for_index).collect()
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
