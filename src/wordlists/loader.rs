//! Dictionary loading utilities
//!
//! Builds a lexicon from a file or from embedded constants.

use crate::core::Lexicon;
use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Load a lexicon from a newline-delimited file
///
/// Lines are trimmed and lowercased; anything that is not purely alphabetic is
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let lexicon = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Lexicon> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let lexicon = Lexicon::from_lines(content.lines());
    info!("loaded {} words from {}", lexicon.len(), path.display());
    Ok(lexicon)
}

/// Build a lexicon from a string slice
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::lexicon_from_slice;
/// use word_ladder::wordlists::WORDS;
///
/// let lexicon = lexicon_from_slice(WORDS);
/// assert!(lexicon.contains("cat"));
/// ```
#[must_use]
pub fn lexicon_from_slice(slice: &[&str]) -> Lexicon {
    Lexicon::from_lines(slice.iter().copied())
}
