//! Exclusion filters
//!
//! A filter bans whole words and individual letters for the length of a game.

use std::collections::BTreeSet;

/// Banned words and banned letters applied on top of dictionary membership
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionFilter {
    banned_words: BTreeSet<String>,
    banned_letters: BTreeSet<u8>,
}

impl ExclusionFilter {
    /// A filter that lets every word through
    #[must_use]
    pub const fn none() -> Self {
        Self {
            banned_words: BTreeSet::new(),
            banned_letters: BTreeSet::new(),
        }
    }

    /// Build a filter from banned words and banned letters
    ///
    /// Both are lowercased. Non-letter characters in `letters` are ignored
    /// since no word can contain them.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::ExclusionFilter;
    ///
    /// let filter = ExclusionFilter::new(["words"], ['x', 'z']);
    /// assert!(!filter.permits("words"));
    /// assert!(!filter.permits("fox"));
    /// assert!(filter.permits("fog"));
    /// ```
    pub fn new<W, L>(words: W, letters: L) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        L: IntoIterator<Item = char>,
    {
        Self {
            banned_words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            banned_letters: letters
                .into_iter()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_lowercase() as u8)
                .collect(),
        }
    }

    /// True when neither words nor letters are banned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banned_words.is_empty() && self.banned_letters.is_empty()
    }

    /// Whether `text` survives the filter
    ///
    /// Says nothing about dictionary membership.
    #[must_use]
    pub fn permits(&self, text: &str) -> bool {
        if self.banned_words.contains(text) {
            return false;
        }
        !text.bytes().any(|b| self.banned_letters.contains(&b))
    }

    /// Banned words in sorted order
    pub fn banned_words(&self) -> impl Iterator<Item = &str> {
        self.banned_words.iter().map(String::as_str)
    }

    /// Banned letters in sorted order
    pub fn banned_letters(&self) -> impl Iterator<Item = char> {
        self.banned_letters.iter().map(|&b| char::from(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_permits_everything() {
        let filter = ExclusionFilter::none();
        assert!(filter.is_empty());
        assert!(filter.permits("fox"));
        assert!(filter.permits("banned"));
        assert_eq!(filter, ExclusionFilter::default());
    }

    #[test]
    fn banned_words_are_rejected() {
        let filter = ExclusionFilter::new(["Banned", "words"], []);
        assert!(!filter.permits("banned"));
        assert!(!filter.permits("words"));
        assert!(filter.permits("word"));
    }

    #[test]
    fn banned_words_match_exactly_not_as_substrings() {
        let filter = ExclusionFilter::new(["words"], []);
        assert!(filter.permits("swords"));
    }

    #[test]
    fn banned_letters_are_rejected_anywhere() {
        let filter = ExclusionFilter::new(Vec::<&str>::new(), ['X', 'z']);
        assert!(!filter.permits("xis"));
        assert!(!filter.permits("fox"));
        assert!(!filter.permits("daze"));
        assert!(filter.permits("dale"));
    }

    #[test]
    fn non_letters_are_ignored() {
        let filter = ExclusionFilter::new(Vec::<&str>::new(), ['1', ' ']);
        assert!(filter.is_empty());
    }

    #[test]
    fn accessors_are_sorted() {
        let filter = ExclusionFilter::new(["words", "banned"], ['z', 'x']);
        assert_eq!(filter.banned_words().collect::<Vec<_>>(), ["banned", "words"]);
        assert_eq!(filter.banned_letters().collect::<Vec<_>>(), ['x', 'z']);
    }
}
