//! Command-line configuration for the game window

use clap::Parser;

/// Tic-tac-toe with a jumpable move history
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Config {
    /// Initial window width in points
    #[arg(long, default_value_t = 720.0)]
    pub width: f32,

    /// Initial window height in points
    #[arg(long, default_value_t = 480.0)]
    pub height: f32,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "tictactoe=trace")
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}

/// Smallest window that still fits the board and the move list
pub const MIN_WINDOW_SIZE: [f32; 2] = [480.0, 360.0];

impl Config {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.width, self.height])
                .with_min_inner_size(MIN_WINDOW_SIZE)
                .with_title("Tic-Tac-Toe"),
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 480.0,
            log_filter: "info".to_string(),
        }
    }
}
