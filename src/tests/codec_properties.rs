// Property tests for the glyph codec in src/glyphs.rs

#[cfg(test)]
mod roundtrip_tests {
    use crate::glyphs::{decode, encode, ECHELONIAN_GLYPHS};

    #[test]
    fn test_lowercase_letters_roundtrip() {
        for letter in 'a'..='z' {
            let s = letter.to_string();
            assert_eq!(decode(&encode(&s)), s, "letter {}", letter);
        }
    }

    #[test]
    fn test_uppercase_letters_come_back_lowercase() {
        for letter in 'A'..='Z' {
            let s = letter.to_string();
            assert_eq!(decode(&encode(&s)), letter.to_ascii_lowercase().to_string());
        }
    }

    #[test]
    fn test_upper_and_lower_share_a_glyph() {
        for &(letter, glyph) in ECHELONIAN_GLYPHS.iter() {
            let upper = letter.to_ascii_uppercase().to_string();
            assert_eq!(encode(&letter.to_string()), glyph.to_string());
            assert_eq!(encode(&upper), glyph.to_string());
        }
    }

    #[test]
    fn test_full_alphabet_sentence() {
        let text = "the quick brown fox jumps over the lazy dog";
        assert_eq!(decode(&encode(text)), text);

        let shouted = "THE QUICK BROWN FOX";
        assert_eq!(decode(&encode(shouted)), "the quick brown fox");
    }
}

#[cfg(test)]
mod passthrough_tests {
    use crate::glyphs::{decode, encode, is_glyph};

    // '/', '\\' and '|' are glyphs for g, h and e
    const PASSTHROUGH: &str = "0123456789 \t\n.,;:!?'\"()[]{}<>-_+=*&^%$#@~`";

    #[test]
    fn test_non_alphabetic_characters_unchanged() {
        for c in PASSTHROUGH.chars() {
            assert!(!is_glyph(c), "{:?} should not be a glyph", c);
            let s = c.to_string();
            assert_eq!(encode(&s), s);
            assert_eq!(decode(&s), s);
        }
    }

    #[test]
    fn test_length_is_preserved() {
        let samples = [
            "",
            "a",
            "Hello, World! 123",
            "ΔΔΔ mixed ⊗ input",
            "emoji 🐢 and combining e\u{301}",
            "İstanbul \u{212A}elvin",
        ];
        for text in samples {
            assert_eq!(encode(text).chars().count(), text.chars().count(), "encode {:?}", text);
            assert_eq!(decode(text).chars().count(), text.chars().count(), "decode {:?}", text);
        }
    }

    #[test]
    fn test_glyph_lookalike_separators_decode() {
        assert_eq!(decode("a/b\\c|d"), "agbhced");
    }
}
