//! Word Ladder
//!
//! A word ladder puzzle engine: change one letter at a time to walk from a
//! start word to a target word, with breadth-first, uniform-cost and
//! heuristic best-first hints.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::{Lexicon, Word};
//! use word_ladder::ladder::{BreadthFirst, HintEngine, WordGraph};
//!
//! let lexicon = Lexicon::from_lines(["cat", "bat", "bad", "bid", "big"]);
//! let engine = HintEngine::new(BreadthFirst, WordGraph::new(&lexicon));
//!
//! let cat = Word::new("cat").unwrap();
//! let big = Word::new("big").unwrap();
//! assert_eq!(engine.hint(&cat, &big).unwrap().text(), "bat");
//! ```

// Core domain types
pub mod core;

// Graph search and hint strategies
pub mod ladder;

// Difficulty presets and game sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
