//! The dictionary the ladder graph is built over
//!
//! Built once from a list of lines and never mutated afterwards.

use super::{ExclusionFilter, Word};
use log::debug;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// An immutable set of words with a length index
///
/// Each length bucket is sorted, so enumeration order is the same on every
/// run for a given word list.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: FxHashSet<Word>,
    by_length: BTreeMap<usize, Vec<Word>>,
}

impl Lexicon {
    /// Build a lexicon from raw lines
    ///
    /// Each line is trimmed and lowercased. Lines that are empty or contain
    /// anything other than ASCII letters are skipped; duplicates are merged.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Lexicon;
    ///
    /// let lexicon = Lexicon::from_lines(["Cat", "bat ", "cat", "b4t", ""]);
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("cat"));
    /// ```
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut words = FxHashSet::default();
        let mut skipped = 0usize;

        for line in lines {
            match Word::new(line.as_ref().trim()) {
                Ok(word) => {
                    words.insert(word);
                }
                Err(_) => skipped += 1,
            }
        }

        let mut by_length: BTreeMap<usize, Vec<Word>> = BTreeMap::new();
        for word in &words {
            by_length.entry(word.length()).or_default().push(word.clone());
        }
        for bucket in by_length.values_mut() {
            bucket.sort_unstable();
        }

        debug!(
            "lexicon built: {} words across {} lengths, {skipped} lines skipped",
            words.len(),
            by_length.len()
        );

        Self { words, by_length }
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Plain membership, no filter
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.contains(text)
    }

    /// Look up the stored word for `text`
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.words.get(text)
    }

    /// Whether `text` is a playable word under `filter`
    ///
    /// True iff the text is alphabetic, in the dictionary, not a banned word
    /// and free of banned letters.
    #[must_use]
    pub fn is_valid(&self, text: &str, filter: &ExclusionFilter) -> bool {
        !text.is_empty()
            && text.bytes().all(|b| b.is_ascii_alphabetic())
            && filter.permits(text)
            && self.contains(text)
    }

    /// Words with exactly `length` letters, in sorted order
    ///
    /// Calling again restarts the enumeration.
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &Word> {
        self.by_length.get(&length).into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lexicon {
        Lexicon::from_lines(["cat", "bat", "bad", "bid", "big", "cold", "cord"])
    }

    #[test]
    fn from_lines_normalizes_and_skips() {
        let lexicon = Lexicon::from_lines(["  Cat  ", "CAT", "c-t", "", "two words", "dog"]);
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("cat"));
        assert!(lexicon.contains("dog"));
        assert!(!lexicon.contains("c-t"));
    }

    #[test]
    fn empty_lexicon() {
        let lexicon = Lexicon::from_lines(Vec::<String>::new());
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.words_of_length(3).count(), 0);
    }

    #[test]
    fn is_valid_checks_membership() {
        let lexicon = sample();
        let none = ExclusionFilter::none();
        assert!(lexicon.is_valid("cat", &none));
        assert!(!lexicon.is_valid("cot", &none));
        assert!(!lexicon.is_valid("", &none));
        assert!(!lexicon.is_valid("c4t", &none));
    }

    #[test]
    fn is_valid_applies_filter() {
        let lexicon = sample();
        let filter = ExclusionFilter::new(["bat"], ['g']);
        assert!(!lexicon.is_valid("bat", &filter));
        assert!(!lexicon.is_valid("big", &filter));
        assert!(lexicon.is_valid("bad", &filter));
    }

    #[test]
    fn words_of_length_is_sorted_and_restartable() {
        let lexicon = sample();
        let first: Vec<&str> = lexicon.words_of_length(3).map(Word::text).collect();
        let second: Vec<&str> = lexicon.words_of_length(3).map(Word::text).collect();
        assert_eq!(first, ["bad", "bat", "bid", "big", "cat"]);
        assert_eq!(first, second);

        let four: Vec<&str> = lexicon.words_of_length(4).map(Word::text).collect();
        assert_eq!(four, ["cold", "cord"]);
        assert_eq!(lexicon.words_of_length(9).count(), 0);
    }

    #[test]
    fn get_returns_stored_word() {
        let lexicon = sample();
        assert_eq!(lexicon.get("bid").map(Word::text), Some("bid"));
        assert!(lexicon.get("bud").is_none());
    }
}
