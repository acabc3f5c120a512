use shared::{
    domain::{Column, PlayerCount, PlayerId},
    protocol::{AuthorityRequest, Snapshot},
};
use tracing::{debug, error, info};

use crate::{
    decoder::decode_snapshot,
    error::ClientError,
    markers::MarkerTable,
    surface::{present, DisplaySurface, Presented},
    transport::Transport,
};

/// Session as observed through the snapshots this client has rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NoGame,
    AwaitingMove { current_player: PlayerId },
    Finished,
}

/// Turns player intents into authority requests and every reply into a render cycle.
pub struct GameDispatcher<T: Transport> {
    transport: T,
    markers: MarkerTable,
    phase: SessionPhase,
}

impl<T: Transport> GameDispatcher<T> {
    pub fn new(transport: T, markers: MarkerTable) -> Self {
        Self {
            transport,
            markers,
            phase: SessionPhase::NoGame,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[cfg(test)]
    fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends one request and decodes the reply without touching any display.
    pub async fn dispatch(&self, request: AuthorityRequest) -> Result<Snapshot, ClientError> {
        debug!(request = request.name(), path = %request.path(), "dispatching");
        let body = self.transport.fetch(&request).await?;
        Ok(decode_snapshot(&body)?)
    }

    /// Validates the typed player count locally; an invalid count never reaches the authority.
    pub async fn create_game(
        &mut self,
        players: &str,
        surface: &mut dyn DisplaySurface,
    ) -> Result<Presented, ClientError> {
        let players = match players.parse::<PlayerCount>() {
            Ok(players) => players,
            Err(err) => {
                surface.alert(err.user_message());
                return Err(err.into());
            }
        };
        info!(players = players.get(), "creating game");
        self.run(AuthorityRequest::CreateGame { players }, surface)
            .await
    }

    /// Always asks the authority; legality and turn order are its call.
    pub async fn play_column(
        &mut self,
        column: Column,
        surface: &mut dyn DisplaySurface,
    ) -> Result<Presented, ClientError> {
        self.run(AuthorityRequest::PlayColumn { column }, surface)
            .await
    }

    async fn run(
        &mut self,
        request: AuthorityRequest,
        surface: &mut dyn DisplaySurface,
    ) -> Result<Presented, ClientError> {
        match self.dispatch(request).await {
            Ok(snapshot) => {
                let presented = present(&snapshot, &self.markers, surface);
                self.observe(&presented);
                Ok(presented)
            }
            Err(err) => {
                error!(request = request.name(), error = %err, "render cycle failed");
                surface.alert(&err.user_message());
                Err(err)
            }
        }
    }

    fn observe(&mut self, presented: &Presented) {
        self.phase = match presented {
            Presented::Rendered {
                outcome: Some(_), ..
            } => SessionPhase::Finished,
            Presented::Rendered { current_player, .. } => SessionPhase::AwaitingMove {
                current_player: *current_player,
            },
            Presented::Rejected { .. } => self.phase,
        };
    }
}

#[cfg(test)]
#[path = "tests/dispatcher_tests.rs"]
mod tests;
