//! Puzzle generation command
//!
//! Draws a solvable start/target pair for a difficulty without playing it.

use crate::core::{Lexicon, Word};
use crate::game::Difficulty;
use crate::ladder::{BreadthFirst, Strategy, WordGraph, select_start_and_target};
use rand::Rng;

/// A generated puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleResult {
    pub difficulty: Difficulty,
    pub start: Word,
    pub target: Word,
    /// Fewest moves needed, from a breadth-first search
    pub optimal_moves: usize,
}

/// Generate a puzzle for `difficulty`
///
/// # Errors
///
/// Returns an error if no connected pair is found within `max_attempts`
/// start draws.
pub fn new_puzzle<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    difficulty: Difficulty,
    rng: &mut R,
    max_attempts: usize,
) -> Result<PuzzleResult, String> {
    let filter = difficulty.filter();
    let graph = WordGraph::filtered(lexicon, &filter);
    let length = difficulty.word_length();

    let (start, target) = select_start_and_target(&graph, length, rng, max_attempts)
        .ok_or_else(|| format!("No solvable {length}-letter puzzle found for {difficulty}"))?;

    let optimal_moves = BreadthFirst
        .search(&graph, &start, &target)
        .moves()
        .ok_or_else(|| format!("Selected pair {start} -> {target} is not connected"))?;

    Ok(PuzzleResult {
        difficulty,
        start,
        target,
        optimal_moves,
    })
}
