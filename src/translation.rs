use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// A finished translation: what went in, what came out, and which way
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub direction: Direction,
    pub input: String,
    pub output: String,
}

impl Translation {
    pub fn new(direction: Direction, input: impl Into<String>) -> Self {
        let input = input.into();
        let output = direction.apply(&input);
        tracing::trace!(%direction, chars = input.chars().count(), "translated text");
        Self {
            direction,
            input,
            output,
        }
    }

    /// Number of chars in the input, which is also the output length
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Translate the output back the other way
    pub fn reverse(&self) -> Self {
        Self::new(self.direction.inverse(), self.output.clone())
    }
}

impl std::fmt::Display for Translation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.output)
    }
}
