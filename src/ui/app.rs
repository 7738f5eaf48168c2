//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel};
use tracing::{error, info};

use crate::game::{GameController, GameStatus};
use crate::Mark;
use super::board_view::BoardView;
use super::theme::*;

/// Main tic-tac-toe application
#[derive(Default)]
pub struct TicTacToeApp {
    game: GameController,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Start over with a fresh history
    fn new_game(&mut self) {
        info!("Starting new game");
        self.game = GameController::new();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Move #{}", self.game.current_move()));
                });
            });
        });
    }

    /// Render the side panel with status and move list
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_moves_card(ui);
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(20.0).strong().color(X_COLOR));
            ui.label(RichText::new("O").size(20.0).strong().color(O_COLOR));
            ui.add_space(4.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render the status line
    fn render_status_card(&self, ui: &mut egui::Ui) {
        let status = self.game.status();
        let (mark, accent) = match status {
            GameStatus::Winner(mark) => (mark, WIN_HIGHLIGHT),
            GameStatus::NextPlayer(mark) => (mark, TEXT_PRIMARY),
        };
        let mark_color = match mark {
            Mark::X => X_COLOR,
            Mark::O => O_COLOR,
        };

        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(mark.as_str()).size(28.0).strong().color(mark_color));
                ui.add_space(8.0);
                ui.label(RichText::new(status.to_string()).size(16.0).strong().color(accent));
            });
        });
    }

    /// Render the jumpable move list
    fn render_moves_card(&mut self, ui: &mut egui::Ui) {
        let current = self.game.current_move();
        let mut selected = None;

        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("HISTORY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ScrollArea::vertical().show(ui, |ui| {
                for descriptor in self.game.move_descriptors() {
                    // The move index is stable within a history, so it keys the row
                    ui.push_id(descriptor.index, |ui| {
                        let is_current = descriptor.index == current;
                        let color = if is_current { TEXT_PRIMARY } else { TEXT_SECONDARY };
                        let text = RichText::new(&descriptor.label).size(13.0).color(color);
                        if ui.selectable_label(is_current, text).clicked() {
                            selected = Some(descriptor.index);
                        }
                    });
                }
            });
        });

        if let Some(index) = selected {
            if let Err(err) = self.game.jump_to(index) {
                error!(%err, "Move list offered an index outside the history");
            }
        }
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(CENTRAL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let clicked = ui
                    .vertical_centered(|ui| {
                        self.board_view.show(
                            ui,
                            self.game.current_board(),
                            self.game.next_player(),
                            self.game.winning_line(),
                        )
                    })
                    .inner;

                if let Some(index) = clicked {
                    self.game.handle_cell_click(index);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.new_game();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
