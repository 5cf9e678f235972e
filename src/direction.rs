use crate::error::{EchelonianError, Result};
use crate::glyphs;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Translation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// English -> Echelonian
    Encode,
    /// Echelonian -> English
    Decode,
}

impl Direction {
    /// Get direction name as string
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        }
    }

    /// The direction that undoes this one
    pub fn inverse(&self) -> Self {
        match self {
            Direction::Encode => Direction::Decode,
            Direction::Decode => Direction::Encode,
        }
    }

    /// Run the codec in this direction
    pub fn apply(&self, text: &str) -> String {
        match self {
            Direction::Encode => glyphs::encode(text),
            Direction::Decode => glyphs::decode(text),
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Encode
    }
}

impl FromStr for Direction {
    type Err = EchelonianError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "encode" | "to-echelonian" | "e2e" => Ok(Direction::Encode),
            "decode" | "to-english" | "e2en" => Ok(Direction::Decode),
            _ => Err(EchelonianError::InvalidDirection(value.to_string())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = EchelonianError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_str(value.as_str())
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
