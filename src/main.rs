//! Tic-tac-toe GUI
//!
//! A graphical two-player game with a jumpable move history.

use clap::Parser;
use tictactoe::config::Config;
use tictactoe::ui::TicTacToeApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    info!(width = config.width, height = config.height, "Starting tic-tac-toe");

    eframe::run_native(
        "Tic-Tac-Toe",
        config.native_options(),
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
}
