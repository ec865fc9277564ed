//! Generic graph search over the implicit word graph
//!
//! All three strategies run the same loop and differ only in the frontier
//! they use and how they rank a newly discovered word.
//!
//! Nodes are marked visited when first discovered, not when expanded, and a
//! visited node is never enqueued again. The first path that reaches a node is
//! therefore the one that sticks, even if a cheaper one turns up later. The
//! search ends the first time the target is *expanded*.

use super::frontier::{Frontier, FrontierEntry};
use super::graph::WordGraph;
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Result of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Path from start to target inclusive, if one was found
    pub path: Option<Vec<Word>>,
    /// Number of nodes expanded, target excluded
    pub expanded: usize,
}

impl SearchOutcome {
    /// The first move from the start word
    ///
    /// `None` if no path was found or the start already is the target.
    #[must_use]
    pub fn next_move(&self) -> Option<&Word> {
        self.path.as_ref().and_then(|path| path.get(1))
    }

    /// Number of moves in the found path
    #[must_use]
    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len() - 1)
    }
}

/// Run a search from `start` until `target` is expanded
///
/// `rank` receives a newly discovered word and the number of moves on the
/// path that discovered it, and returns its frontier priority.
pub(crate) fn run<F, R>(
    graph: &WordGraph<'_>,
    start: &Word,
    target: &Word,
    mut frontier: F,
    rank: R,
) -> SearchOutcome
where
    F: Frontier,
    R: Fn(&Word, usize) -> usize,
{
    let mut visited: FxHashSet<Word> = FxHashSet::default();
    let mut expanded = 0;

    // Different lengths can never meet
    if start.length() != target.length() {
        return SearchOutcome {
            path: None,
            expanded,
        };
    }

    visited.insert(start.clone());
    frontier.push(FrontierEntry {
        priority: rank(start, 0),
        word: start.clone(),
        path: vec![start.clone()],
    });

    while let Some(entry) = frontier.pop() {
        if entry.word == *target {
            return SearchOutcome {
                path: Some(entry.path),
                expanded,
            };
        }
        expanded += 1;

        let cost = entry.path.len();
        for neighbor in graph.neighbors(&entry.word) {
            if visited.contains(&neighbor) {
                continue;
            }
            visited.insert(neighbor.clone());

            let mut path = Vec::with_capacity(entry.path.len() + 1);
            path.extend_from_slice(&entry.path);
            path.push(neighbor.clone());

            frontier.push(FrontierEntry {
                priority: rank(&neighbor, cost),
                word: neighbor,
                path,
            });
        }
    }

    SearchOutcome {
        path: None,
        expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Lexicon;
    use crate::ladder::frontier::{FifoFrontier, PriorityFrontier};

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn texts(path: &[Word]) -> Vec<&str> {
        path.iter().map(Word::text).collect()
    }

    #[test]
    fn finds_unique_ladder() {
        let lexicon = Lexicon::from_lines(["cat", "bat", "bad", "bid", "big"]);
        let graph = WordGraph::new(&lexicon);
        let outcome = run(&graph, &w("cat"), &w("big"), FifoFrontier::default(), |_, _| 0);

        let path = outcome.path.as_deref().unwrap();
        assert_eq!(texts(path), ["cat", "bat", "bad", "bid", "big"]);
        assert_eq!(outcome.next_move().map(Word::text), Some("bat"));
        assert_eq!(outcome.moves(), Some(4));
        assert_eq!(outcome.expanded, 4);
    }

    #[test]
    fn start_equal_to_target() {
        let lexicon = Lexicon::from_lines(["cat", "bat"]);
        let graph = WordGraph::new(&lexicon);
        let outcome = run(&graph, &w("cat"), &w("cat"), FifoFrontier::default(), |_, _| 0);

        assert_eq!(outcome.moves(), Some(0));
        assert_eq!(outcome.next_move(), None);
        assert_eq!(outcome.expanded, 0);
    }

    #[test]
    fn unreachable_target_exhausts_component() {
        let lexicon = Lexicon::from_lines(["cat", "bat", "bad", "dog", "dot"]);
        let graph = WordGraph::new(&lexicon);
        let outcome = run(&graph, &w("cat"), &w("dog"), FifoFrontier::default(), |_, _| 0);

        assert_eq!(outcome.path, None);
        assert_eq!(outcome.next_move(), None);
        assert_eq!(outcome.expanded, 3);
    }

    #[test]
    fn different_lengths_short_circuit() {
        let lexicon = Lexicon::from_lines(["cat", "cats"]);
        let graph = WordGraph::new(&lexicon);
        let outcome = run(&graph, &w("cat"), &w("cats"), FifoFrontier::default(), |_, _| 0);

        assert_eq!(outcome.path, None);
        assert_eq!(outcome.expanded, 0);
    }

    #[test]
    fn rank_sees_path_cost() {
        let lexicon = Lexicon::from_lines(["cat", "bat", "bad", "bid", "big"]);
        let graph = WordGraph::new(&lexicon);
        let seen = std::cell::RefCell::new(Vec::new());
        let outcome = run(
            &graph,
            &w("cat"),
            &w("big"),
            PriorityFrontier::default(),
            |word, cost| {
                seen.borrow_mut().push((word.to_string(), cost));
                cost
            },
        );

        assert!(outcome.path.is_some());
        assert_eq!(
            seen.into_inner(),
            [
                ("cat".to_string(), 0),
                ("bat".to_string(), 1),
                ("bad".to_string(), 2),
                ("bid".to_string(), 3),
                ("big".to_string(), 4),
            ]
        );
    }

    #[test]
    fn first_discovered_path_is_kept() {
        // The ranking steers the search down cat-bat-bag-bog, which discovers
        // "cog" before "cot" is expanded. The shorter cat-cot-cog route is
        // never recorded.
        let lexicon = Lexicon::from_lines(["cat", "cot", "cog", "bat", "bag", "bog"]);
        let graph = WordGraph::new(&lexicon);
        let outcome = run(
            &graph,
            &w("cat"),
            &w("cog"),
            PriorityFrontier::default(),
            |word, _| if word.text().contains('b') { 0 } else { 10 },
        );
        assert_eq!(
            texts(outcome.path.as_deref().unwrap()),
            ["cat", "bat", "bag", "bog", "cog"]
        );
    }
}
