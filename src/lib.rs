//! # Echelonian
//!
//! Two-way transliteration between English text and the Echelonian glyph
//! alphabet. Each lowercase Latin letter maps to exactly one glyph; digits,
//! punctuation, whitespace and anything else pass through unchanged.
//!
//! ```
//! use echelonian::{decode, encode};
//!
//! let glyphs = encode("Hello, World! 123");
//! assert_eq!(glyphs, "\\|LL⊗, W⊗⊸L□! 123");
//! assert_eq!(decode(&glyphs), "hello, world! 123");
//! ```

pub mod direction;
pub mod error;
pub mod glyphs;
pub mod translation;

#[cfg(feature = "wasm-bindgen")]
pub mod wasm;

#[cfg(test)]
mod tests;

pub use direction::Direction;
pub use error::{EchelonianError, Result};
pub use glyphs::{decode, encode, ECHELONIAN_GLYPHS};
pub use translation::Translation;

/// Main entry point for translating text
#[derive(Debug, Clone, Copy, Default)]
pub struct EchelonianTranslator;

impl EchelonianTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Translate English text to Echelonian glyphs
    pub fn to_echelonian(&self, text: &str) -> String {
        glyphs::encode(text)
    }

    /// Translate Echelonian glyphs to English text
    pub fn to_english(&self, text: &str) -> String {
        glyphs::decode(text)
    }

    pub fn translate(&self, direction: Direction, text: &str) -> Translation {
        Translation::new(direction, text)
    }

    /// Translate user-supplied text, trimming surrounding whitespace first
    ///
    /// Returns [`EchelonianError::EmptyInput`] when nothing is left to
    /// translate. Use [`translate`](Self::translate) to accept empty text.
    pub fn translate_input(&self, direction: Direction, raw: &str) -> Result<Translation> {
        let text = raw.trim();
        if text.is_empty() {
            tracing::warn!(%direction, "rejected empty input");
            return Err(EchelonianError::EmptyInput(direction));
        }
        Ok(self.translate(direction, text))
    }

    /// The letter to glyph table
    pub fn table(&self) -> &'static [(char, char)] {
        &ECHELONIAN_GLYPHS
    }
}

#[cfg(test)]
mod translator_tests {
    use super::*;

    #[test]
    fn test_translate_input_rejects_blank_text() {
        let translator = EchelonianTranslator::new();
        assert!(matches!(
            translator.translate_input(Direction::Decode, " \n\t "),
            Err(EchelonianError::EmptyInput(Direction::Decode))
        ));
        assert!(matches!(
            translator.translate_input(Direction::Encode, ""),
            Err(EchelonianError::EmptyInput(Direction::Encode))
        ));
    }

    #[test]
    fn test_translate_input_trims_surrounding_whitespace() {
        let translation = EchelonianTranslator::new()
            .translate_input(Direction::Encode, "  Hi \n")
            .unwrap();
        assert_eq!(translation.input, "Hi");
        assert_eq!(translation.output, "\\•");
    }

    #[test]
    fn test_translate_accepts_empty_text() {
        let translation = EchelonianTranslator::new().translate(Direction::Encode, "");
        assert_eq!(translation.input, "");
        assert_eq!(translation.output, "");
    }

    #[test]
    fn test_facade_matches_codec() {
        let translator = EchelonianTranslator::new();
        assert_eq!(translator.to_echelonian("İK\u{212A}"), "İ⊘⊘");
        assert_eq!(translator.to_english("İ⊘⊘"), "İkk");
        assert_eq!(translator.table().len(), 26);
    }
}
