//! Backend commands queued from UI to backend worker.

use shared::domain::Column;

pub enum BackendCommand {
    /// Player count is passed through as typed; the dispatcher validates it.
    CreateGame { server_url: String, players: String },
    PlayColumn { column: Column },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateGame { .. } => "create_game",
            Self::PlayColumn { .. } => "play_column",
        }
    }
}
