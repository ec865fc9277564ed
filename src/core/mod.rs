//! Core domain types for word ladders
//!
//! Words, exclusion filters and the lexicon. Everything here is immutable once
//! built and free of I/O.

mod filter;
mod lexicon;
mod word;

pub use filter::ExclusionFilter;
pub use lexicon::Lexicon;
pub use word::{ALPHABET, Word, WordError};
