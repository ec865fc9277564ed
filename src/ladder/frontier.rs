//! Frontier structures shared by the search strategies
//!
//! Entries own their word and the full path that discovered it, so the next
//! move can be read off the path without a predecessor map.

use crate::core::Word;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

/// A discovered node waiting to be expanded
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    /// Ordering key; lower is expanded first by priority frontiers
    pub priority: usize,
    pub word: Word,
    /// Start word first, `word` last
    pub path: Vec<Word>,
}

/// Container deciding the expansion order of a search
pub trait Frontier {
    fn push(&mut self, entry: FrontierEntry);

    /// Next entry to expand, or `None` when exhausted
    fn pop(&mut self) -> Option<FrontierEntry>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in-first-out; ignores priorities
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<FrontierEntry>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.queue.push_back(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Lowest priority first, ties in insertion order
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<Ranked>>,
    next_sequence: u64,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(Ranked { sequence, entry }));
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(ranked)| ranked.entry)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Debug)]
struct Ranked {
    sequence: u64,
    entry: FrontierEntry,
}

impl Ranked {
    const fn key(&self) -> (usize, u64) {
        (self.entry.priority, self.sequence)
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(priority: usize, text: &str) -> FrontierEntry {
        let word = Word::new(text).unwrap();
        FrontierEntry {
            priority,
            path: vec![word.clone()],
            word,
        }
    }

    fn drain(frontier: &mut impl Frontier) -> Vec<String> {
        std::iter::from_fn(|| frontier.pop())
            .map(|e| e.word.to_string())
            .collect()
    }

    #[test]
    fn fifo_ignores_priority() {
        let mut frontier = FifoFrontier::default();
        frontier.push(entry(5, "cat"));
        frontier.push(entry(0, "bat"));
        frontier.push(entry(2, "bad"));
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&mut frontier), ["cat", "bat", "bad"]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn priority_pops_lowest_first() {
        let mut frontier = PriorityFrontier::default();
        frontier.push(entry(3, "cat"));
        frontier.push(entry(1, "bat"));
        frontier.push(entry(2, "bad"));
        assert_eq!(drain(&mut frontier), ["bat", "bad", "cat"]);
    }

    #[test]
    fn priority_ties_break_by_insertion_order() {
        let mut frontier = PriorityFrontier::default();
        frontier.push(entry(1, "zoo"));
        frontier.push(entry(1, "ant"));
        frontier.push(entry(0, "elk"));
        frontier.push(entry(1, "bee"));
        assert_eq!(drain(&mut frontier), ["elk", "zoo", "ant", "bee"]);
    }

    #[test]
    fn empty_frontier_pops_none() {
        let mut fifo = FifoFrontier::default();
        let mut heap = PriorityFrontier::default();
        assert!(fifo.pop().is_none());
        assert!(heap.pop().is_none());
    }
}
