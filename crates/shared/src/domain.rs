use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::InputError;

pub const MIN_PLAYERS: u32 = 2;
pub const MAX_PLAYERS: u32 = 6;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(PlayerId);
id_newtype!(Column);

impl PlayerId {
    /// Zero-based position of this player in per-player sequences such as `scores`.
    pub fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

/// Number of seats in a new game, always within `MIN_PLAYERS..=MAX_PLAYERS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlayerCount(u32);

impl PlayerCount {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for PlayerCount {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < i64::from(MIN_PLAYERS) || value > i64::from(MAX_PLAYERS) {
            return Err(InputError::PlayerCountOutOfRange(value));
        }
        Ok(Self(value as u32))
    }
}

impl FromStr for PlayerCount {
    type Err = InputError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| InputError::PlayerCountNotANumber(trimmed.to_string()))?;
        Self::try_from(value)
    }
}
