//! Move validation and application

use crate::board::{Board, Mark};
use tracing::{debug, trace};

use super::win::evaluate;

/// Check whether the player to move may place a mark at `index`
pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.is_empty(index) && !evaluate(board).is_won()
}

/// Apply a move, returning the resulting board.
///
/// Returns `None` when the index is off the board, the cell is taken, or the
/// game is already won. The input board is never modified.
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Option<Board> {
    if board.get(index).is_none() {
        debug!(index, "Ignoring move off the board");
        return None;
    }
    if !board.is_empty(index) {
        debug!(index, "Ignoring move on occupied cell");
        return None;
    }
    if let Some(winner) = evaluate(board).winner() {
        debug!(index, %winner, "Ignoring move after game is won");
        return None;
    }

    trace!(index, %mark, "Applying move");
    Some(board.with_cell(index, mark))
}
