//! Distance estimate used by best-first search

use crate::core::Word;

/// Number of positions where `word` and `target` hold different letters
///
/// Positions past the end of the shorter word are not compared. For words of
/// equal length this is the Hamming distance, a lower bound on the number of
/// single-letter moves between them.
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::ladder::heuristic;
///
/// let cold = Word::new("cold").unwrap();
/// let ward = Word::new("ward").unwrap();
/// assert_eq!(heuristic(&cold, &ward), 3);
/// assert_eq!(heuristic(&cold, &cold), 0);
/// ```
#[must_use]
pub fn heuristic(word: &Word, target: &Word) -> usize {
    word.letters()
        .iter()
        .zip(target.letters())
        .filter(|(a, b)| a != b)
        .count()
}
