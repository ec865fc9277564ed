//! Picking start and target words that are guaranteed to be connected
//!
//! A puzzle is only generated when the target can actually be reached from
//! the start under the game's filter, so every game is winnable.

use super::graph::WordGraph;
use super::strategy::{BreadthFirst, Strategy};
use crate::core::{ExclusionFilter, Lexicon, Word};
use log::{debug, warn};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Uniformly random word of `length` letters that passes `filter`
///
/// Returns `None` if no such word exists.
pub fn random_valid_word<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    length: usize,
    filter: &ExclusionFilter,
    rng: &mut R,
) -> Option<Word> {
    random_node(&WordGraph::filtered(lexicon, filter), length, rng)
}

fn random_node<R: Rng + ?Sized>(graph: &WordGraph<'_>, length: usize, rng: &mut R) -> Option<Word> {
    let candidates: Vec<&Word> = graph.words_of_length(length).collect();
    candidates.choose(rng).map(|&word| word.clone())
}

/// Whether a breadth-first search from `start` reaches `target`
#[must_use]
pub fn is_reachable(graph: &WordGraph<'_>, start: &Word, target: &Word) -> bool {
    BreadthFirst.find_path(graph, start, target).is_some()
}

/// Every word reachable from `start`, `start` included
#[must_use]
pub fn reachable_from(graph: &WordGraph<'_>, start: &Word) -> FxHashSet<Word> {
    let mut seen: FxHashSet<Word> = FxHashSet::default();
    let mut queue = VecDeque::new();

    seen.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(word) = queue.pop_front() {
        for neighbor in graph.neighbors(&word) {
            if seen.insert(neighbor.clone()) {
                queue.push_back(neighbor);
            }
        }
    }

    seen
}

/// First word of the same length as `start` that can be reached from it
///
/// Candidates are the graph's words of that length other than `start`, taken
/// in sorted order. Returns `None` when `start` has no reachable partner; the
/// caller is expected to draw a different start.
///
/// # Examples
/// ```
/// use word_ladder::core::{Lexicon, Word};
/// use word_ladder::ladder::{WordGraph, select_target};
///
/// let lexicon = Lexicon::from_lines(["cat", "bat", "dog"]);
/// let graph = WordGraph::new(&lexicon);
///
/// let cat = Word::new("cat").unwrap();
/// assert_eq!(select_target(&graph, &cat).unwrap().text(), "bat");
///
/// let dog = Word::new("dog").unwrap();
/// assert!(select_target(&graph, &dog).is_none());
/// ```
#[must_use]
pub fn select_target(graph: &WordGraph<'_>, start: &Word) -> Option<Word> {
    let component = reachable_from(graph, start);
    let target = graph
        .words_of_length(start.length())
        .filter(|&candidate| candidate != start)
        .find(|&candidate| component.contains(candidate))
        .cloned();

    debug!(
        "target for {start}: {} ({} words reachable)",
        target.as_ref().map_or("none", Word::text),
        component.len() - 1
    );
    target
}

/// Draw start words until one has a reachable target
///
/// Gives up after `max_attempts` draws, or at once if the graph has no words
/// of `length` letters.
pub fn select_start_and_target<R: Rng + ?Sized>(
    graph: &WordGraph<'_>,
    length: usize,
    rng: &mut R,
    max_attempts: usize,
) -> Option<(Word, Word)> {
    for attempt in 1..=max_attempts {
        let start = random_node(graph, length, rng)?;
        if let Some(target) = select_target(graph, &start) {
            debug!("puzzle {start} -> {target} found on attempt {attempt}");
            return Some((start, target));
        }
    }

    warn!("no connected {length}-letter pair found in {max_attempts} attempts");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn sample() -> Lexicon {
        Lexicon::from_lines([
            "cat", "bat", "bad", "bid", "big", "dog", "fox", "cold", "cord",
        ])
    }

    #[test]
    fn random_word_has_requested_length() {
        let lexicon = sample();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = random_valid_word(&lexicon, 3, &ExclusionFilter::none(), &mut rng).unwrap();
            assert_eq!(word.length(), 3);
            assert!(lexicon.contains(word.text()));
        }
    }

    #[test]
    fn random_word_respects_filter() {
        let lexicon = sample();
        let filter = ExclusionFilter::new(["cold"], []);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let word = random_valid_word(&lexicon, 4, &filter, &mut rng).unwrap();
            assert_eq!(word.text(), "cord");
        }
    }

    #[test]
    fn random_word_none_when_nothing_matches() {
        let lexicon = sample();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(random_valid_word(&lexicon, 7, &ExclusionFilter::none(), &mut rng).is_none());

        let filter = ExclusionFilter::new(["cold", "cord"], []);
        assert!(random_valid_word(&lexicon, 4, &filter, &mut rng).is_none());
    }

    #[test]
    fn random_word_is_reproducible_with_seed() {
        let lexicon = sample();
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            random_valid_word(&lexicon, 3, &ExclusionFilter::none(), &mut rng)
        };
        assert_eq!(draw(42), draw(42));
    }

    #[test]
    fn reachable_from_covers_component() {
        let lexicon = sample();
        let graph = WordGraph::new(&lexicon);
        let component = reachable_from(&graph, &w("cat"));
        let mut texts: Vec<&str> = component.iter().map(Word::text).collect();
        texts.sort_unstable();
        assert_eq!(texts, ["bad", "bat", "bid", "big", "cat"]);
    }

    #[test]
    fn select_target_takes_first_reachable_in_order() {
        let lexicon = sample();
        let graph = WordGraph::new(&lexicon);
        // "bad" sorts before every other candidate and is reachable
        assert_eq!(select_target(&graph, &w("cat")), Some(w("bad")));
        assert_eq!(select_target(&graph, &w("bad")), Some(w("bat")));
    }

    #[test]
    fn select_target_round_trips_through_bfs() {
        let lexicon = sample();
        let filter = ExclusionFilter::new(["bat"], []);
        let graph = WordGraph::filtered(&lexicon, &filter);
        for start in lexicon.words_of_length(3) {
            if let Some(target) = select_target(&graph, start) {
                assert_ne!(&target, start);
                assert!(is_reachable(&graph, start, &target), "{start} -> {target}");
            }
        }
    }

    #[test]
    fn select_target_none_for_isolated_start() {
        let lexicon = sample();
        let graph = WordGraph::new(&lexicon);
        assert_eq!(select_target(&graph, &w("dog")), None);
        assert_eq!(select_target(&graph, &w("fox")), None);
    }

    #[test]
    fn select_target_honors_filter() {
        let lexicon = sample();
        // Without "bat", "cat" is cut off from the rest
        let filter = ExclusionFilter::new(["bat"], []);
        let graph = WordGraph::filtered(&lexicon, &filter);
        assert_eq!(select_target(&graph, &w("cat")), None);
        assert_eq!(select_target(&graph, &w("big")), Some(w("bad")));
    }

    #[test]
    fn start_and_target_are_connected() {
        let lexicon = sample();
        let graph = WordGraph::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..10 {
            let (start, target) = select_start_and_target(&graph, 3, &mut rng, 100).unwrap();
            assert_ne!(start, target);
            assert!(is_reachable(&graph, &start, &target));
        }
    }

    #[test]
    fn start_and_target_gives_up() {
        let lexicon = Lexicon::from_lines(["dog", "fox", "cold", "cord"]);
        let graph = WordGraph::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(9);
        assert!(select_start_and_target(&graph, 3, &mut rng, 25).is_none());
        assert!(select_start_and_target(&graph, 5, &mut rng, 25).is_none());
        assert!(select_start_and_target(&graph, 4, &mut rng, 25).is_some());
    }
}
