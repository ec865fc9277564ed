//! Strategy comparison - runs every strategy over the same random puzzles
//!
//! Reports ladder lengths, expansion counts and timings side by side.

use crate::core::Word;
use crate::ladder::{Strategy, StrategyType, WordGraph, reachable_from};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::time::{Duration, Instant};

/// Totals for one strategy across all puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyStats {
    pub strategy: StrategyType,
    pub solved: usize,
    pub total_moves: usize,
    pub total_expanded: usize,
    pub duration: Duration,
}

impl StrategyStats {
    const fn new(strategy: StrategyType) -> Self {
        Self {
            strategy,
            solved: 0,
            total_moves: 0,
            total_expanded: 0,
            duration: Duration::ZERO,
        }
    }

    /// Mean ladder length over solved puzzles
    #[must_use]
    pub fn average_moves(&self) -> f64 {
        if self.solved == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.solved as f64
    }

    /// Mean expansions per puzzle
    #[must_use]
    pub fn average_expanded(&self, puzzles: usize) -> f64 {
        if puzzles == 0 {
            return 0.0;
        }
        self.total_expanded as f64 / puzzles as f64
    }
}

/// Result of comparing the strategies
#[derive(Debug, Clone)]
pub struct CompareResult {
    pub length: usize,
    pub puzzles: usize,
    /// One entry per strategy, in [`StrategyType::ALL`] order
    pub stats: Vec<StrategyStats>,
    /// Puzzles where BFS and UCS found ladders of equal length
    pub bfs_ucs_agree: usize,
    /// Puzzles where best-first found a longer ladder than BFS
    pub best_first_longer: usize,
}

/// Compare all strategies on `count` random connected pairs of `length`
/// letters
///
/// # Errors
///
/// Returns an error if `count` is zero or the graph has no connected pair
/// of that length.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_compare<R: Rng + ?Sized>(
    graph: &WordGraph<'_>,
    length: usize,
    count: usize,
    rng: &mut R,
) -> Result<CompareResult, String> {
    if count == 0 {
        return Err("Puzzle count must be at least 1".to_string());
    }

    let connected: Vec<&Word> = graph
        .words_of_length(length)
        .filter(|&word| !graph.neighbors(word).is_empty())
        .collect();
    if connected.is_empty() {
        return Err(format!("No connected {length}-letter words in dictionary"));
    }

    println!("🎯 Comparing strategies on {count} puzzles...");

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░"),
    );

    let mut stats: Vec<StrategyStats> =
        StrategyType::ALL.iter().map(|&s| StrategyStats::new(s)).collect();
    let mut bfs_ucs_agree = 0;
    let mut best_first_longer = 0;

    for _ in 0..count {
        let (start, target) = random_pair(graph, &connected, rng)
            .ok_or_else(|| format!("No connected {length}-letter pair found"))?;
        pb.set_message(format!("{start} → {target}"));

        let mut moves = Vec::with_capacity(stats.len());
        for entry in &mut stats {
            let started = Instant::now();
            let outcome = entry.strategy.search(graph, &start, &target);
            entry.duration += started.elapsed();
            entry.total_expanded += outcome.expanded;
            if let Some(length) = outcome.moves() {
                entry.solved += 1;
                entry.total_moves += length;
            }
            moves.push(outcome.moves());
        }
        debug!("{start} -> {target}: moves {moves:?}");

        // moves follows StrategyType::ALL: BFS, UCS, best-first
        if moves[0] == moves[1] {
            bfs_ucs_agree += 1;
        }
        if matches!((moves[0], moves[2]), (Some(bfs), Some(best)) if best > bfs) {
            best_first_longer += 1;
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(CompareResult {
        length,
        puzzles: count,
        stats,
        bfs_ucs_agree,
        best_first_longer,
    })
}

/// Random start among `connected` and a random other word from its component
fn random_pair<R: Rng + ?Sized>(
    graph: &WordGraph<'_>,
    connected: &[&Word],
    rng: &mut R,
) -> Option<(Word, Word)> {
    let start = *connected.choose(rng)?;
    let mut component: Vec<Word> = reachable_from(graph, start)
        .into_iter()
        .filter(|word| word != start)
        .collect();
    component.sort_unstable();
    let target = component.choose(rng)?.clone();
    Some((start.clone(), target))
}
