use std::collections::HashMap;

use crate::error::{EchelonianError, Result};

const ALPHABET_SIZE: usize = 26; // number of letters in the glyph table

/// Echelonian glyph mapping for the 26 lowercase English letters
/// Ordered a..z so a letter's position in the table is `letter - 'a'`
pub const ECHELONIAN_GLYPHS: [(char, char); ALPHABET_SIZE] = [
    ('a', 'Δ'), ('b', '∇'), ('c', '○'), ('d', '□'), ('e', '|'), ('f', '—'),
    ('g', '/'), ('h', '\\'), ('i', '•'), ('j', '⊞'), ('k', '⊘'), ('l', 'L'),
    ('m', 'M'), ('n', 'N'), ('o', '⊗'), ('p', 'Π'), ('q', 'Ξ'), ('r', '⊸'),
    ('s', '∿'), ('t', '⊥'), ('u', '∪'), ('v', '∨'), ('w', 'W'), ('x', '✕'),
    ('y', 'Y'), ('z', 'Z'),
];

// Create a reverse lookup map for glyph to letter
lazy_static::lazy_static! {
    static ref REVERSE_GLYPHS: HashMap<char, char> = {
        debug_assert!(verify_bijection(&ECHELONIAN_GLYPHS).is_ok());
        let mut map = HashMap::with_capacity(ALPHABET_SIZE);
        for &(letter, glyph) in ECHELONIAN_GLYPHS.iter() {
            map.insert(glyph, letter);
        }
        tracing::debug!(entries = map.len(), "built reverse glyph table");
        map
    };
}

/// Look up the glyph for a lowercase English letter
pub fn glyph_for(letter: char) -> Option<char> {
    if letter.is_ascii_lowercase() {
        Some(ECHELONIAN_GLYPHS[(letter as u8 - b'a') as usize].1)
    } else {
        None
    }
}

/// Look up the lowercase English letter a glyph stands for
pub fn letter_for(glyph: char) -> Option<char> {
    REVERSE_GLYPHS.get(&glyph).copied()
}

/// Check whether a character belongs to the glyph set
pub fn is_glyph(c: char) -> bool {
    REVERSE_GLYPHS.contains_key(&c)
}

// The lookup key is lowercased, the emitted character is not.
fn encode_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => glyph_for(l).unwrap_or(c),
        _ => c,
    }
}

/// Convert English text to Echelonian glyphs
///
/// Letters are matched case-insensitively; every other character passes
/// through untouched. The output has exactly as many chars as the input.
pub fn encode(text: &str) -> String {
    text.chars().map(encode_char).collect()
}

/// Convert Echelonian glyphs back to lowercase English letters
///
/// Characters outside the glyph set pass through untouched. Casing lost by
/// [`encode`] is not recovered, and the glyphs `L M N W Y Z` are uppercase
/// ASCII letters, so those come back lowercased wherever they appear.
pub fn decode(text: &str) -> String {
    text.chars().map(|c| letter_for(c).unwrap_or(c)).collect()
}

/// Verify that a letter/glyph table is a bijection
pub fn verify_bijection(pairs: &[(char, char)]) -> Result<()> {
    let mut letters = HashMap::with_capacity(pairs.len());
    let mut glyphs: HashMap<char, char> = HashMap::with_capacity(pairs.len());

    for &(letter, glyph) in pairs {
        if letters.insert(letter, glyph).is_some() {
            return Err(EchelonianError::DuplicateLetter(letter));
        }
        if let Some(first) = glyphs.insert(glyph, letter) {
            return Err(EchelonianError::DuplicateGlyph {
                glyph,
                first,
                second: letter,
            });
        }
    }

    Ok(())
}
