//! Game session state: history of boards and the controller driving it

pub mod controller;
pub mod history;

pub use controller::{GameController, GameStatus};
pub use history::{GameHistory, MoveDescriptor};
