//! One-shot hint command
//!
//! Runs a strategy from a given word toward a given target and reports the
//! next move with the full ladder.

use crate::core::Word;
use crate::ladder::{HintEngine, Strategy, WordGraph};
use std::time::{Duration, Instant};

/// Result of a hint query
pub struct HintResult {
    pub current: Word,
    pub target: Word,
    pub strategy: &'static str,
    pub next_move: Option<Word>,
    pub ladder: Option<Vec<Word>>,
    pub expanded: usize,
    pub duration: Duration,
}

/// Find the next move from `current` to `target`
///
/// # Errors
///
/// Returns an error if:
/// - Either word is not a valid word
/// - The words differ in length
/// - Either word is not in the (filtered) dictionary
pub fn hint_word<S: Strategy>(
    graph: &WordGraph<'_>,
    strategy: S,
    current: &str,
    target: &str,
) -> Result<HintResult, String> {
    let current = parse_known(graph, current)?;
    let target = parse_known(graph, target)?;

    if current.length() != target.length() {
        return Err(format!(
            "Words must have the same length: '{current}' has {}, '{target}' has {}",
            current.length(),
            target.length()
        ));
    }

    let engine = HintEngine::new(strategy, *graph);
    let start = Instant::now();
    let outcome = engine.search(&current, &target);
    let duration = start.elapsed();

    Ok(HintResult {
        strategy: engine.strategy().name(),
        next_move: outcome.next_move().cloned(),
        expanded: outcome.expanded,
        ladder: outcome.path,
        current,
        target,
        duration,
    })
}

fn parse_known(graph: &WordGraph<'_>, text: &str) -> Result<Word, String> {
    let word = Word::new(text.trim()).map_err(|e| format!("Invalid word '{text}': {e}"))?;
    if !graph.contains(word.text()) {
        return Err(format!("Word '{word}' not in dictionary"));
    }
    Ok(word)
}
