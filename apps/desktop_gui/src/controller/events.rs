//! Events flowing from the backend worker to the UI thread.

use client_core::{BoardView, ScoreView, SessionPhase};

#[derive(Debug, Clone)]
pub enum UiEvent {
    Board(BoardView),
    Scores(ScoreView),
    /// Errors and end-of-game announcements; shown one at a time in a modal.
    Alert(String),
    Phase(SessionPhase),
}
