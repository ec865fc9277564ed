//! Command implementations

pub mod analyze;
pub mod compare;
pub mod graph;
pub mod hint;
pub mod new_game;
pub mod play;

pub use analyze::{ConnectivityReport, analyze_length};
pub use compare::{CompareResult, StrategyStats, run_compare};
pub use graph::{DEFAULT_NEIGHBOR_LIMIT, DEFAULT_WORD_LIMIT, GraphRow, graph_preview};
pub use hint::{HintResult, hint_word};
pub use new_game::{PuzzleResult, new_puzzle};
pub use play::{GameSummary, run_play};
