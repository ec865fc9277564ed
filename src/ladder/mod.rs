//! Word ladder search engine
//!
//! The implicit word graph, reachability checks for puzzle generation, and
//! the three hint strategies.

mod engine;
pub mod frontier;
mod graph;
mod heuristic;
pub mod reachability;
mod search;
pub mod strategy;

pub use engine::HintEngine;
pub use graph::{WordGraph, neighbors};
pub use heuristic::heuristic;
pub use reachability::{
    is_reachable, random_valid_word, reachable_from, select_start_and_target, select_target,
};
pub use search::SearchOutcome;
pub use strategy::{BestFirst, BreadthFirst, Strategy, StrategyType, UniformCost};
