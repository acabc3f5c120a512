use shared::{domain::PlayerId, protocol::Snapshot};
use tracing::{info, warn};

use crate::{
    board::{render_board, BoardView},
    markers::MarkerTable,
    outcome::{end_of_game, Outcome},
    scoreboard::{render_scores, ScoreView},
};

/// Whatever a client draws on. Each call replaces the whole region it names.
pub trait DisplaySurface {
    fn show_board(&mut self, board: &BoardView);
    fn show_scores(&mut self, scores: &ScoreView);
    /// Interruptive notification: errors and end-of-game announcements.
    fn alert(&mut self, message: &str);
}

/// What one render cycle did with a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presented {
    Rendered {
        current_player: PlayerId,
        outcome: Option<Outcome>,
    },
    /// The authority refused the action; nothing was redrawn.
    Rejected { message: String },
}

pub fn present(
    snapshot: &Snapshot,
    markers: &MarkerTable,
    surface: &mut dyn DisplaySurface,
) -> Presented {
    match snapshot {
        Snapshot::Error(error) => {
            warn!(reason = %error.message, "authority rejected action");
            surface.alert(&error.message);
            Presented::Rejected {
                message: error.message.clone(),
            }
        }
        Snapshot::Game(state) => {
            surface.show_board(&render_board(state, markers));
            surface.show_scores(&render_scores(state, markers));

            let outcome = end_of_game(state);
            if let Some(outcome) = &outcome {
                info!(%outcome, "game finished");
                surface.alert(&outcome.to_string());
            }

            Presented::Rendered {
                current_player: state.current_player,
                outcome,
            }
        }
    }
}
