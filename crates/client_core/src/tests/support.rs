use shared::{domain::PlayerId, protocol::GameState};

use crate::{board::BoardView, scoreboard::ScoreView, surface::DisplaySurface};

pub(crate) fn blank_state(width: usize, height: usize, num_players: u32) -> GameState {
    GameState {
        width,
        height,
        squares: vec![vec![0; width]; height],
        num_players,
        current_player: PlayerId(1),
        scores: vec![0; num_players as usize],
        empty_squares: (width * height) as u64,
        leaders: (1..=num_players).map(PlayerId).collect(),
    }
}

/// 4x4 board after player 1 dropped into the first column.
pub(crate) fn first_move_state() -> GameState {
    let mut state = blank_state(4, 4, 2);
    state.squares[0][0] = 1;
    state.current_player = PlayerId(2);
    state.empty_squares = 15;
    state.leaders = vec![PlayerId(1), PlayerId(2)];
    state
}

pub(crate) fn finished_state(leaders: &[u32]) -> GameState {
    let mut state = blank_state(2, 2, 2);
    state.squares = vec![vec![1, 2], vec![2, 1]];
    state.scores = vec![1, 0];
    state.empty_squares = 0;
    state.leaders = leaders.iter().copied().map(PlayerId).collect();
    state
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SurfaceCall {
    Board,
    Scores,
    Alert,
}

#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub board: Option<BoardView>,
    pub scores: Option<ScoreView>,
    pub alerts: Vec<String>,
    pub calls: Vec<SurfaceCall>,
}

impl DisplaySurface for RecordingSurface {
    fn show_board(&mut self, board: &BoardView) {
        self.board = Some(board.clone());
        self.calls.push(SurfaceCall::Board);
    }

    fn show_scores(&mut self, scores: &ScoreView) {
        self.scores = Some(scores.clone());
        self.calls.push(SurfaceCall::Scores);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
        self.calls.push(SurfaceCall::Alert);
    }
}
