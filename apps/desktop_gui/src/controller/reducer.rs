//! Folds backend events into what the window currently shows.

use std::collections::VecDeque;

use client_core::{BoardView, ScoreView, SessionPhase};

use crate::controller::events::UiEvent;

#[derive(Debug, Clone)]
pub struct ViewState {
    pub board: Option<BoardView>,
    pub scores: Option<ScoreView>,
    pub phase: SessionPhase,
    pub alerts: VecDeque<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            board: None,
            scores: None,
            phase: SessionPhase::NoGame,
            alerts: VecDeque::new(),
        }
    }
}

impl ViewState {
    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Board(board) => self.board = Some(board),
            UiEvent::Scores(scores) => self.scores = Some(scores),
            UiEvent::Alert(message) => self.alerts.push_back(message),
            UiEvent::Phase(phase) => self.phase = phase,
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    pub fn status_line(&self) -> String {
        match self.phase {
            SessionPhase::NoGame => "No game yet".to_string(),
            SessionPhase::AwaitingMove { current_player } => {
                format!("Player {current_player} to move")
            }
            SessionPhase::Finished => "Game over".to_string(),
        }
    }
}
