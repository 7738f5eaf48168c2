//! GUI module for the tic-tac-toe game
//!
//! Renders the controller's derived views with egui/eframe and forwards
//! cell clicks and history jumps back to it.

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
