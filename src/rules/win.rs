//! Win condition checking
//!
//! A player wins by holding all three cells of any row, column or diagonal.

use crate::board::{Board, Cell, Mark};
use tracing::instrument;

/// The eight winning lines: rows, columns, diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Outcome of evaluating a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinResult {
    NoWinner,
    Winner(Mark),
}

impl WinResult {
    #[inline]
    pub fn winner(self) -> Option<Mark> {
        match self {
            WinResult::Winner(mark) => Some(mark),
            WinResult::NoWinner => None,
        }
    }

    #[inline]
    pub fn is_won(self) -> bool {
        matches!(self, WinResult::Winner(_))
    }
}

/// Evaluate the board against every winning line
#[instrument(level = "trace", ret)]
pub fn evaluate(board: &Board) -> WinResult {
    match find_winning_line(board).and_then(|[a, _, _]| board.get(a)) {
        Some(cell) => cell.mark().map_or(WinResult::NoWinner, WinResult::Winner),
        None => WinResult::NoWinner,
    }
}

/// First winning line found, scanning in [`WINNING_LINES`] order
pub fn find_winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();
    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(indices: &[usize], mark: Mark) -> Board {
        indices
            .iter()
            .fold(Board::new(), |board, &i| board.with_cell(i, mark))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), WinResult::NoWinner);
        assert_eq!(find_winning_line(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_x() {
        for line in WINNING_LINES {
            let board = board_with(&line, Mark::X);
            assert_eq!(evaluate(&board), WinResult::Winner(Mark::X), "line {:?}", line);
            assert_eq!(find_winning_line(&board), Some(line));
        }
    }

    #[test]
    fn test_every_line_wins_for_o() {
        for line in WINNING_LINES {
            let board = board_with(&line, Mark::O);
            assert_eq!(evaluate(&board), WinResult::Winner(Mark::O), "line {:?}", line);
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[0, 1], Mark::X);
        assert_eq!(evaluate(&board), WinResult::NoWinner);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[0, 1], Mark::X).with_cell(2, Mark::O);
        assert_eq!(evaluate(&board), WinResult::NoWinner);
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X
        // X O O
        // O X X
        let board = board_with(&[0, 2, 3, 7, 8], Mark::X)
            .with_cell(1, Mark::O)
            .with_cell(4, Mark::O)
            .with_cell(5, Mark::O)
            .with_cell(6, Mark::O);
        assert!(board.is_full());
        assert_eq!(evaluate(&board), WinResult::NoWinner);
    }

    #[test]
    fn test_win_result_helpers() {
        assert_eq!(WinResult::Winner(Mark::O).winner(), Some(Mark::O));
        assert_eq!(WinResult::NoWinner.winner(), None);
        assert!(WinResult::Winner(Mark::X).is_won());
        assert!(!WinResult::NoWinner.is_won());
    }
}
