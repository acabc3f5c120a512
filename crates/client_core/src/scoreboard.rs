use shared::{domain::PlayerId, protocol::GameState};
use tracing::warn;

use crate::markers::{Marker, MarkerTable};

pub const SCOREBOARD_TITLE: &str = "SCORE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub player: PlayerId,
    pub marker: Marker,
    pub score: Option<i64>,
    /// Whose turn it is.
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreView {
    pub title: &'static str,
    pub rows: Vec<ScoreRow>,
}

pub fn render_scores(state: &GameState, markers: &MarkerTable) -> ScoreView {
    let rows = state
        .players()
        .map(|player| {
            let marker = markers.for_player(player).copied().unwrap_or_else(|| {
                warn!(player = player.0, "no marker for player");
                *markers.placeholder()
            });
            let score = state.score_of(player);
            if score.is_none() {
                warn!(
                    player = player.0,
                    scores = state.scores.len(),
                    "score missing from snapshot"
                );
            }
            ScoreRow {
                player,
                marker,
                score,
                current: player == state.current_player,
            }
        })
        .collect();

    ScoreView {
        title: SCOREBOARD_TITLE,
        rows,
    }
}

#[cfg(test)]
#[path = "tests/scoreboard_tests.rs"]
mod tests;
