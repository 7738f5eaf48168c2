//! Game rules for tic-tac-toe
//!
//! - Win conditions (three in a row on any of eight lines)
//! - Move validation (empty cell, game not yet won)

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{apply_move, is_valid_move};
pub use win::{evaluate, find_winning_line, WinResult, WINNING_LINES};
