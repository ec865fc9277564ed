//! Main hint interface

use super::graph::WordGraph;
use super::search::SearchOutcome;
use super::strategy::Strategy;
use crate::core::Word;

/// Produces next-move hints over one graph with one strategy
pub struct HintEngine<'a, S: Strategy> {
    strategy: S,
    graph: WordGraph<'a>,
}

impl<'a, S: Strategy> HintEngine<'a, S> {
    /// Create a new engine
    ///
    /// # Parameters
    /// - `strategy`: The search used to find ladders
    /// - `graph`: The (possibly filtered) word graph to search
    pub const fn new(strategy: S, graph: WordGraph<'a>) -> Self {
        Self { strategy, graph }
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// The next word to play from `current` toward `target`
    pub fn hint(&self, current: &Word, target: &Word) -> Option<Word> {
        self.strategy.hint(&self.graph, current, target)
    }

    /// Raw search result, including the expansion count
    pub fn search(&self, current: &Word, target: &Word) -> SearchOutcome {
        self.strategy.search(&self.graph, current, target)
    }
}
