use shared::error::InputError;
use thiserror::Error;

use crate::{decoder::DecodeError, transport::TransportError};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ClientError {
    /// Text for the interruptive notification shown to the player.
    pub fn user_message(&self) -> String {
        match self {
            Self::Input(err) => err.user_message().to_string(),
            Self::Transport(err) => format!("Could not reach the game server: {err}"),
            Self::Decode(err) => format!("The game server sent an unreadable reply: {err}"),
        }
    }
}
