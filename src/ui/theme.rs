//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 240, 228);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 50, 40);

// Marks
pub const X_COLOR: Color32 = Color32::from_rgb(200, 60, 60);
pub const O_COLOR: Color32 = Color32::from_rgb(50, 100, 190);

// Markers
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 80);

pub fn hover_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 40)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const CENTRAL_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const MARK_RADIUS_RATIO: f32 = 0.3;
pub const MARK_STROKE_WIDTH: f32 = 8.0;
pub const WIN_LINE_WIDTH: f32 = 6.0;
