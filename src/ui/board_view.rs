//! Board rendering for the tic-tac-toe GUI

use crate::{Board, Mark, Pos, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index if any.
    ///
    /// Every click on a cell is reported; the controller decides whether it
    /// counts.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        next_player: Mark,
        winning_line: Option<[usize; 3]>,
    ) -> Option<usize> {
        let available_size = ui.available_size();

        // Square board that fits the panel
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(120.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        let pointer_cell = response
            .hover_pos()
            .and_then(|pointer| self.screen_to_board(pointer));

        // Hover preview only where a move would be accepted
        if let Some(pos) = pointer_cell {
            if crate::rules::is_valid_move(board, pos.to_index()) {
                self.draw_hover_preview(&painter, pos, next_player);
            }
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        if response.clicked() {
            pointer_cell.map(Pos::to_index)
        } else {
            None
        }
    }

    /// Draw the two inner lines in each direction
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (index, cell) in board.cells().iter().enumerate() {
            if let Some(mark) = cell.mark() {
                self.draw_mark(painter, Pos::from_index(index), mark, 255);
            }
        }
    }

    /// Draw an X as two strokes or an O as a ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, alpha: u8) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARK_RADIUS_RATIO;

        match mark {
            Mark::X => {
                let color = X_COLOR.gamma_multiply(alpha as f32 / 255.0);
                let stroke = Stroke::new(MARK_STROKE_WIDTH, color);
                let d = Vec2::splat(radius);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment(
                    [center + Vec2::new(-radius, radius), center + Vec2::new(radius, -radius)],
                    stroke,
                );
            }
            Mark::O => {
                let color = O_COLOR.gamma_multiply(alpha as f32 / 255.0);
                painter.circle_stroke(center, radius, Stroke::new(MARK_STROKE_WIDTH, color));
            }
        }
    }

    /// Draw a line through the three winning cells
    fn draw_winning_line(&self, painter: &Painter, line: [usize; 3]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);
        let start = self.board_to_screen(Pos::from_index(line[0]));
        let end = self.board_to_screen(Pos::from_index(line[2]));
        painter.line_segment([start, end], stroke);

        for index in line {
            let cell = self.cell_rect(Pos::from_index(index)).shrink(4.0);
            painter.rect_stroke(
                cell,
                CornerRadius::same(4),
                Stroke::new(2.0, WIN_HIGHLIGHT),
                StrokeKind::Inside,
            );
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Mark) {
        painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(4), hover_fill());
        self.draw_mark(painter, pos, turn, 70);
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the screen coordinates of the cell center
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
