//! Game controller: turn policy over the board history
//!
//! The controller owns a [`GameHistory`] and nothing else. Whose turn it is,
//! whether the game is won and the status line are all recomputed from the
//! history on every call, so they can never disagree with the move count.

use std::fmt;

use crate::board::{Board, Mark};
use crate::error::Result;
use crate::rules::{self, WinResult};
use tracing::debug;

use super::history::{GameHistory, MoveDescriptor};

/// Status line shown above the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Winner(Mark),
    NextPlayer(Mark),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Winner(mark) => write!(f, "Winner: {}", mark),
            GameStatus::NextPlayer(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

/// Single game session
#[derive(Debug, Clone, Default)]
pub struct GameController {
    history: GameHistory,
}

impl GameController {
    pub fn new() -> Self {
        Self {
            history: GameHistory::new(),
        }
    }

    /// Player to move on the displayed board
    #[inline]
    pub fn next_player(&self) -> Mark {
        Mark::for_move(self.history.cursor())
    }

    /// Handle a click on cell `index`.
    ///
    /// Returns `true` if a mark was placed. Clicks on occupied cells or after
    /// the game is won change nothing.
    pub fn handle_cell_click(&mut self, index: usize) -> bool {
        let mark = self.next_player();
        match rules::apply_move(self.history.current(), index, mark) {
            Some(board) => {
                self.history.append(board);
                debug!(index, %mark, cursor = self.history.cursor(), "Move played");
                true
            }
            None => false,
        }
    }

    /// Display the board recorded at `index`
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        self.history.set_cursor(index)?;
        debug!(index, next = %self.next_player(), "Jumped to move");
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            WinResult::Winner(mark) => GameStatus::Winner(mark),
            WinResult::NoWinner => GameStatus::NextPlayer(self.next_player()),
        }
    }

    #[inline]
    pub fn winner(&self) -> WinResult {
        rules::evaluate(self.history.current())
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        rules::find_winning_line(self.history.current())
    }

    #[inline]
    pub fn current_board(&self) -> &Board {
        self.history.current()
    }

    #[inline]
    pub fn current_move(&self) -> usize {
        self.history.cursor()
    }

    pub fn move_descriptors(&self) -> Vec<MoveDescriptor> {
        self.history.move_descriptors()
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::error::GameError;

    fn play(moves: &[usize]) -> GameController {
        let mut game = GameController::new();
        for &index in moves {
            assert!(game.handle_cell_click(index), "move {} rejected", index);
        }
        game
    }

    #[test]
    fn test_first_click_places_x() {
        let game = play(&[4]);
        assert_eq!(game.current_board().get(4), Some(Cell::X));
        assert_eq!(game.status().to_string(), "Next player: O");
    }

    #[test]
    fn test_turns_alternate() {
        let game = play(&[0, 1, 2]);
        let board = game.current_board();
        assert_eq!(board.get(0), Some(Cell::X));
        assert_eq!(board.get(1), Some(Cell::O));
        assert_eq!(board.get(2), Some(Cell::X));
        assert_eq!(game.next_player(), Mark::O);
    }

    #[test]
    fn test_occupied_click_is_noop() {
        let mut game = play(&[4]);
        let before = game.history().clone();
        assert!(!game.handle_cell_click(4));
        assert_eq!(*game.history(), before);
    }

    #[test]
    fn test_win_reported_and_play_stops() {
        let mut game = play(&[0, 1, 3, 2, 6]);
        assert_eq!(game.status(), GameStatus::Winner(Mark::X));
        assert_eq!(game.status().to_string(), "Winner: X");
        assert_eq!(game.winning_line(), Some([0, 3, 6]));

        let before = game.history().clone();
        assert!(!game.handle_cell_click(4));
        assert_eq!(*game.history(), before);
    }

    #[test]
    fn test_jump_rederives_turn_and_status() {
        let mut game = play(&[0, 1, 3, 2, 6]);
        game.jump_to(4).unwrap();
        assert_eq!(game.status(), GameStatus::NextPlayer(Mark::X));
        assert_eq!(game.winning_line(), None);

        game.jump_to(1).unwrap();
        assert_eq!(game.next_player(), Mark::O);
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn test_jump_then_play_overwrites_future() {
        let mut game = play(&[0, 1, 2]);
        game.jump_to(1).unwrap();
        assert!(game.handle_cell_click(8));
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_move(), 2);
        assert_eq!(game.current_board().get(8), Some(Cell::O));
        assert_eq!(game.current_board().get(1), Some(Cell::Empty));
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut game = play(&[0]);
        assert_eq!(
            game.jump_to(5),
            Err(GameError::MoveOutOfRange { requested: 5, len: 2 })
        );
        assert_eq!(game.current_move(), 1);
    }
}
