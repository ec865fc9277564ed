//! Implicit word graph
//!
//! Edges are never stored. A word's neighbors are found by rewriting each
//! position to every other letter and keeping the results that are in the
//! lexicon.

use crate::core::{ALPHABET, ExclusionFilter, Lexicon, Word};

/// Every lexicon word one letter away from `word`
///
/// Ignores exclusion filters; use [`WordGraph`] for a filtered view. Results
/// come out position by position, and within a position in alphabetical order
/// of the substituted letter. The source word is never included.
///
/// # Examples
/// ```
/// use word_ladder::core::{Lexicon, Word};
/// use word_ladder::ladder::neighbors;
///
/// let lexicon = Lexicon::from_lines(["cat", "bat", "bad", "bid", "big"]);
/// let cat = Word::new("cat").unwrap();
/// let found: Vec<String> = neighbors(&lexicon, &cat).iter().map(|w| w.to_string()).collect();
/// assert_eq!(found, ["bat"]);
/// ```
#[must_use]
pub fn neighbors(lexicon: &Lexicon, word: &Word) -> Vec<Word> {
    let mut found = Vec::new();
    let mut buffer = word.letters().to_vec();

    for position in 0..buffer.len() {
        let original = buffer[position];
        for letter in ALPHABET {
            if letter == original {
                continue;
            }
            buffer[position] = letter;
            let candidate = std::str::from_utf8(&buffer)
                .ok()
                .and_then(|text| lexicon.get(text));
            if let Some(neighbor) = candidate {
                found.push(neighbor.clone());
            }
        }
        buffer[position] = original;
    }

    found
}

/// A lexicon seen through an exclusion filter
///
/// This is the graph every search and reachability probe walks. With no
/// filter it is exactly the lexicon graph.
#[derive(Debug, Clone, Copy)]
pub struct WordGraph<'a> {
    lexicon: &'a Lexicon,
    filter: Option<&'a ExclusionFilter>,
}

impl<'a> WordGraph<'a> {
    /// Graph over the whole lexicon
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            filter: None,
        }
    }

    /// Graph restricted to words that pass `filter`
    #[must_use]
    pub const fn filtered(lexicon: &'a Lexicon, filter: &'a ExclusionFilter) -> Self {
        Self {
            lexicon,
            filter: Some(filter),
        }
    }

    /// Whether `text` is a node of this graph
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        match self.filter {
            Some(filter) => self.lexicon.is_valid(text, filter),
            None => self.lexicon.contains(text),
        }
    }

    /// Neighbors of `word` that pass the filter, in [`neighbors`] order
    #[must_use]
    pub fn neighbors(&self, word: &Word) -> Vec<Word> {
        let mut found = neighbors(self.lexicon, word);
        if let Some(filter) = self.filter {
            found.retain(|w| filter.permits(w.text()));
        }
        found
    }

    /// Nodes of this graph with exactly `length` letters, sorted
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &'a Word> + use<'a> {
        let filter = self.filter;
        self.lexicon
            .words_of_length(length)
            .filter(move |w| filter.is_none_or(|f| f.permits(w.text())))
    }
}
