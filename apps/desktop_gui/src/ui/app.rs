use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::Column;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{events::UiEvent, orchestration::dispatch_backend_command, reducer::ViewState},
    ui::widgets::marker_disc,
};

const CELL_SIZE: f32 = 44.0;
const SCORE_MARKER_SIZE: f32 = 26.0;

pub struct ConnectMoreApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    server_url: String,
    players_input: String,
    status: String,
    view: ViewState,
}

impl ConnectMoreApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        server_url: String,
        players_input: String,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            server_url,
            players_input,
            status: String::new(),
            view: ViewState::default(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.view.apply(event);
        }
    }

    fn queue(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Server");
            ui.add(egui::TextEdit::singleline(&mut self.server_url).desired_width(220.0));
            ui.separator();
            ui.label("Players (2 - 6)");
            ui.add(egui::TextEdit::singleline(&mut self.players_input).desired_width(36.0));
            if ui.button("New Game").clicked() {
                let cmd = BackendCommand::CreateGame {
                    server_url: self.server_url.trim().to_string(),
                    players: self.players_input.clone(),
                };
                self.queue(cmd);
            }
            ui.separator();
            ui.label(egui::RichText::new(self.view.status_line()).strong());
        });
        if !self.status.is_empty() {
            ui.small(egui::RichText::new(&self.status).weak());
        }
    }

    fn show_board(&mut self, ui: &mut egui::Ui) {
        let Some(board) = &self.view.board else {
            ui.centered_and_justified(|ui| {
                ui.label("Enter the number of players and press New Game.");
            });
            return;
        };

        let mut clicked: Option<Column> = None;
        ui.label(board.caption);
        ui.add_space(6.0);
        egui::Grid::new("board_grid")
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                for header in &board.headers {
                    let button = egui::Button::new(header.label.as_str());
                    if ui.add_sized([CELL_SIZE, 24.0], button).clicked() {
                        clicked = Some(header.column);
                    }
                }
                ui.end_row();

                for row in &board.rows {
                    for cell in row {
                        marker_disc(ui, &cell.marker, CELL_SIZE);
                    }
                    ui.end_row();
                }
            });

        if let Some(column) = clicked {
            self.queue(BackendCommand::PlayColumn { column });
        }
    }

    fn show_scores(&self, ui: &mut egui::Ui) {
        let Some(scores) = &self.view.scores else {
            return;
        };

        ui.heading(scores.title);
        egui::Grid::new("score_grid")
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                for row in &scores.rows {
                    ui.label(if row.current { "▶" } else { "" });
                    marker_disc(ui, &row.marker, SCORE_MARKER_SIZE);
                    let score = row
                        .score
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    let text = egui::RichText::new(score).size(18.0);
                    ui.label(if row.current { text.strong() } else { text });
                    ui.end_row();
                }
            });
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.view.alerts.front().cloned() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Connect More")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message.as_str());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.view.dismiss_alert();
        }
    }
}

impl eframe::App for ConnectMoreApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("game_controls").show(ctx, |ui| self.show_controls(ui));
        egui::SidePanel::right("scoreboard")
            .resizable(false)
            .min_width(140.0)
            .show(ctx, |ui| self.show_scores(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.show_board(ui));
        self.show_alert(ctx);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
