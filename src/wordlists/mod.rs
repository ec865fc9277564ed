//! Word lists for word ladders
//!
//! Provides the embedded default dictionary and loaders for custom ones.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(
                !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn every_preset_length_is_covered() {
        for length in [3, 5, 7] {
            let count = WORDS.iter().filter(|w| w.len() == length).count();
            assert!(count >= 50, "only {count} words of length {length}");
        }
    }

    #[test]
    fn words_parse() {
        assert!(WORDS.iter().all(|&w| Word::new(w).is_ok()));
    }
}
