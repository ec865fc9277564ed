//! Word ladder word representation
//!
//! A Word is a non-empty run of lowercase ASCII letters. Its length is fixed at
//! construction and every move in the ladder keeps that length.

use std::borrow::Borrow;
use std::fmt;

/// The 26 letters a position can be rewritten to
pub const ALPHABET: [u8; 26] = *b"abcdefghijklmnopqrstuvwxyz";

/// A lowercase word, the node type of the ladder graph
///
/// Hashing and equality only look at the text, so a `&str` can be used to look
/// a `Word` up in a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is kept, so `" cat"` is rejected; trimming is the
    /// loader's job.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Cold").unwrap();
    /// assert_eq!(word.text(), "cold");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c0ld").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes, one per letter
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.text.len()
    }

    /// Text of this word with one position rewritten
    ///
    /// Returns `None` if the position is out of range or the letter is not a
    /// lowercase ASCII letter.
    #[must_use]
    pub fn substitute(&self, position: usize, letter: char) -> Option<String> {
        let letter = letter.to_ascii_lowercase();
        if position >= self.length() || !letter.is_ascii_lowercase() {
            return None;
        }

        let mut text = String::with_capacity(self.length());
        text.push_str(&self.text[..position]);
        text.push(letter);
        text.push_str(&self.text[position + 1..]);
        Some(text)
    }

    /// Two words are adjacent when they have equal length and differ in exactly
    /// one position
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.length() == other.length()
            && self
                .letters()
                .iter()
                .zip(other.letters())
                .filter(|(a, b)| a != b)
                .count()
                == 1
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
