use thiserror::Error;

use crate::direction::Direction;

/// Result type for Echelonian operations
pub type Result<T> = std::result::Result<T, EchelonianError>;

/// Error types for Echelonian translation
///
/// The codec itself never fails; these cover table validation and the
/// surfaces that feed text into it.
#[derive(Error, Debug)]
pub enum EchelonianError {
    /// A letter appears more than once in a glyph table
    #[error("Letter '{0}' is mapped more than once")]
    DuplicateLetter(char),

    /// Two letters share the same glyph
    #[error("Glyph '{glyph}' is shared by '{first}' and '{second}'")]
    DuplicateGlyph {
        glyph: char,
        first: char,
        second: char,
    },

    /// Invalid translation direction name
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    /// Nothing left to translate after trimming
    #[error("No text provided to {0}")]
    EmptyInput(Direction),

    /// Reading input failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
