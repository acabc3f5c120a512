use serde::{Deserialize, Serialize};

use crate::domain::{Column, PlayerCount, PlayerId};

/// One board snapshot as emitted by the authority after every accepted action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub width: usize,
    pub height: usize,
    /// Indexed `[row][col]`; row 0 is the bottom of the board.
    #[serde(alias = "_squares")]
    pub squares: Vec<Vec<i64>>,
    pub num_players: u32,
    pub current_player: PlayerId,
    pub scores: Vec<i64>,
    pub empty_squares: u64,
    #[serde(default)]
    pub leaders: Vec<PlayerId>,
}

impl GameState {
    pub fn is_full(&self) -> bool {
        self.empty_squares == 0
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<i64> {
        self.squares.get(row)?.get(col).copied()
    }

    pub fn players(&self) -> impl Iterator<Item = PlayerId> {
        (1..=self.num_players).map(PlayerId)
    }

    pub fn score_of(&self, player: PlayerId) -> Option<i64> {
        self.scores.get(player.index()?).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorState {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    Game(GameState),
    Error(ErrorState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityRequest {
    CreateGame { players: PlayerCount },
    PlayColumn { column: Column },
}

impl AuthorityRequest {
    pub fn path(&self) -> String {
        match self {
            Self::CreateGame { players } => format!("/create/{players}"),
            Self::PlayColumn { column } => format!("/play/{column}"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateGame { .. } => "create_game",
            Self::PlayColumn { .. } => "play_column",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_underscored_squares_key() {
        let raw = r#"{"width":2,"height":1,"_squares":[[0,2]],"num_players":2,
            "current_player":1,"scores":[0,0],"empty_squares":1,"leaders":[1,2]}"#;
        let state: GameState = serde_json::from_str(raw).expect("state");
        assert_eq!(state.squares, vec![vec![0, 2]]);
        assert_eq!(state.leaders, vec![PlayerId(1), PlayerId(2)]);
    }

    #[test]
    fn leaders_default_to_empty() {
        let raw = r#"{"width":1,"height":1,"squares":[[0]],"num_players":2,
            "current_player":2,"scores":[3,4],"empty_squares":1}"#;
        let state: GameState = serde_json::from_str(raw).expect("state");
        assert!(state.leaders.is_empty());
        assert_eq!(state.score_of(PlayerId(2)), Some(4));
        assert_eq!(state.score_of(PlayerId(3)), None);
        assert!(!state.is_full());
    }

    #[test]
    fn request_paths_match_authority_routes() {
        let players = PlayerCount::try_from(3).expect("players");
        assert_eq!(AuthorityRequest::CreateGame { players }.path(), "/create/3");
        assert_eq!(
            AuthorityRequest::PlayColumn { column: Column(7) }.path(),
            "/play/7"
        );
    }
}
