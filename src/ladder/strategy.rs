//! Hint strategies
//!
//! Defines the Strategy trait and the three concrete searches.

use super::frontier::{FifoFrontier, PriorityFrontier};
use super::graph::WordGraph;
use super::heuristic::heuristic;
use super::search::{SearchOutcome, run};
use crate::core::Word;
use log::debug;
use std::fmt;

/// A search that finds a ladder from the current word to the target
pub trait Strategy {
    /// Short display name
    fn name(&self) -> &'static str;

    /// Search `graph` from `current` until `target` is expanded
    fn search(&self, graph: &WordGraph<'_>, current: &Word, target: &Word) -> SearchOutcome;

    /// Full ladder from `current` to `target`, both included
    fn find_path(&self, graph: &WordGraph<'_>, current: &Word, target: &Word) -> Option<Vec<Word>> {
        self.search(graph, current, target).path
    }

    /// The next word to play
    ///
    /// Returns `None` if `current == target` or the target is unreachable.
    fn hint(&self, graph: &WordGraph<'_>, current: &Word, target: &Word) -> Option<Word> {
        let outcome = self.search(graph, current, target);
        debug!(
            "{} search {current} -> {target}: {} expanded, {:?} moves",
            self.name(),
            outcome.expanded,
            outcome.moves()
        );
        outcome.next_move().cloned()
    }
}

/// Expands words in the order they were discovered
///
/// Finds a ladder with the fewest moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl Strategy for BreadthFirst {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(&self, graph: &WordGraph<'_>, current: &Word, target: &Word) -> SearchOutcome {
        run(graph, current, target, FifoFrontier::default(), |_, _| 0)
    }
}

/// Expands the cheapest accumulated path first, every move costing 1
///
/// Ties go to the word discovered first. On this unweighted graph it finds
/// ladders of the same length as [`BreadthFirst`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl Strategy for UniformCost {
    fn name(&self) -> &'static str {
        "UCS"
    }

    fn search(&self, graph: &WordGraph<'_>, current: &Word, target: &Word) -> SearchOutcome {
        run(
            graph,
            current,
            target,
            PriorityFrontier::default(),
            |_, cost| cost,
        )
    }
}

/// Expands the word closest to the target by [`heuristic`] first
///
/// Ranks by the estimate alone, without the cost already paid, so this is a
/// greedy search and the ladder it finds may be longer than necessary. Ties go
/// to the word discovered first.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFirst;

impl Strategy for BestFirst {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(&self, graph: &WordGraph<'_>, current: &Word, target: &Word) -> SearchOutcome {
        run(
            graph,
            current,
            target,
            PriorityFrontier::default(),
            |word, _| heuristic(word, target),
        )
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyType {
    /// Breadth-first search (default)
    #[default]
    BreadthFirst,
    /// Uniform-cost search
    UniformCost,
    /// Heuristic best-first search
    BestFirst,
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => BreadthFirst.name(),
            Self::UniformCost => UniformCost.name(),
            Self::BestFirst => BestFirst.name(),
        }
    }

    fn search(&self, graph: &WordGraph<'_>, current: &Word, target: &Word) -> SearchOutcome {
        match self {
            Self::BreadthFirst => BreadthFirst.search(graph, current, target),
            Self::UniformCost => UniformCost.search(graph, current, target),
            Self::BestFirst => BestFirst.search(graph, current, target),
        }
    }
}

impl StrategyType {
    /// All strategies, in menu order
    pub const ALL: [Self; 3] = [Self::BreadthFirst, Self::UniformCost, Self::BestFirst];

    /// Parse a strategy name or its one-letter menu key
    ///
    /// Supported names: "b"/"bfs"/"breadth-first", "u"/"ucs"/"uniform-cost",
    /// "a"/"a*"/"astar"/"best-first". Case-insensitive.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "b" | "bfs" | "breadth-first" => Some(Self::BreadthFirst),
            "u" | "ucs" | "uniform-cost" => Some(Self::UniformCost),
            "a" | "a*" | "astar" | "best-first" => Some(Self::BestFirst),
            _ => None,
        }
    }

    /// Create strategy from name string
    ///
    /// Defaults to breadth-first if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
