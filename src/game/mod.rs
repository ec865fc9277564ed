//! The word ladder game
//!
//! Difficulty presets and the per-puzzle session state.

mod difficulty;
mod session;

pub use difficulty::Difficulty;
pub use session::{GameSession, HINT_PENALTY, HintOutcome, MoveOutcome, POINTS_PER_TURN};
