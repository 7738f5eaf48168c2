//! Two-player tic-tac-toe with time travel
//!
//! Players alternate placing X and O on a 3x3 grid; X always moves first.
//! Every accepted move is recorded as a board snapshot, and any earlier
//! snapshot can be revisited. Playing a move from an earlier snapshot
//! discards the snapshots that followed it.
//!
//! # Architecture
//!
//! - [`board`]: Cells, marks and the immutable 3x3 board
//! - [`rules`]: Win detection and move validation
//! - [`game`]: Board history and the controller that drives it
//! - [`ui`]: egui front end rendering the controller's views
//! - [`config`]: Command-line window and logging options
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameController, GameStatus, Mark};
//!
//! let mut game = GameController::new();
//! for index in [0, 1, 3, 2, 6] {
//!     game.handle_cell_click(index);
//! }
//! assert_eq!(game.status(), GameStatus::Winner(Mark::X));
//!
//! // Look at the board after the second move; X is to play there
//! game.jump_to(2).unwrap();
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```
//!
//! Turn, winner and status are never stored. They are derived from the
//! history cursor and the displayed board each time they are asked for.

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use error::{GameError, Result};
pub use game::{GameController, GameHistory, GameStatus, MoveDescriptor};
pub use rules::WinResult;
