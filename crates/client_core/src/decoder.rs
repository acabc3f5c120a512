use serde_json::Value;
use shared::protocol::{ErrorState, GameState, Snapshot};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),
    #[error("response is not a game state: {0}")]
    NotGameState(#[source] serde_json::Error),
}

/// Parses one authority response.
///
/// A set `error` field wins over every other field; anything else must
/// deserialize as a full [`GameState`].
pub fn decode_snapshot(raw: &str) -> Result<Snapshot, DecodeError> {
    let value: Value = serde_json::from_str(raw).map_err(DecodeError::NotJson)?;

    if let Some(message) = value.get("error").and_then(error_message) {
        return Ok(Snapshot::Error(ErrorState { message }));
    }

    let state: GameState = serde_json::from_value(value).map_err(DecodeError::NotGameState)?;
    Ok(Snapshot::Game(state))
}

/// `null`, `false`, `0` and `""` mean no error; other values are shown as-is.
fn error_message(error: &Value) -> Option<String> {
    match error {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
#[path = "tests/decoder_tests.rs"]
mod tests;
