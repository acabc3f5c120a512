use thiserror::Error;

pub const INVALID_PLAYER_COUNT_MESSAGE: &str =
    "Invalid Number of Players, please enter a number between 2 and 6";

/// Rejections raised on the client before any request leaves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid Number of Players, please enter a number between 2 and 6 (got {0:?})")]
    PlayerCountNotANumber(String),
    #[error("Invalid Number of Players, please enter a number between 2 and 6 (got {0})")]
    PlayerCountOutOfRange(i64),
}

impl InputError {
    /// Text shown to the user, without the offending value.
    pub fn user_message(&self) -> &'static str {
        INVALID_PLAYER_COUNT_MESSAGE
    }
}
