use std::fmt;

use shared::{domain::PlayerId, protocol::GameState};
use tracing::warn;

/// How a finished game ended, as reported in the snapshot's `leaders`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Winner(PlayerId),
    /// Joint winners in the order the authority listed them.
    Tie(Vec<PlayerId>),
    /// Board is full but the snapshot named no leaders.
    Undecided,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(player) => write!(f, "Game Over! Player {player} wins!!!"),
            Self::Tie(players) => {
                let names = players
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Tie Game! Players {names} all win!!!")
            }
            Self::Undecided => write!(f, "Game Over!"),
        }
    }
}

/// Returns the outcome to announce, or `None` while squares remain empty.
pub fn end_of_game(state: &GameState) -> Option<Outcome> {
    if !state.is_full() {
        return None;
    }

    let outcome = match state.leaders.as_slice() {
        [] => {
            warn!("board is full but snapshot lists no leaders");
            Outcome::Undecided
        }
        [winner] => Outcome::Winner(*winner),
        leaders => Outcome::Tie(leaders.to_vec()),
    };
    Some(outcome)
}

#[cfg(test)]
#[path = "tests/outcome_tests.rs"]
mod tests;
