//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_compare_result, print_connectivity_report, print_game_status, print_graph_preview,
    print_hint_result, print_puzzle,
};
