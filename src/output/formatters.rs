//! Formatting utilities for terminal output

use crate::core::{ExclusionFilter, Word};

/// Format a ladder as "cat → bat → bad"
#[must_use]
pub fn format_ladder(ladder: &[Word]) -> String {
    ladder
        .iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Per-letter match marks against the target: '●' where the letter is
/// already right, '○' where it still has to change
#[must_use]
pub fn match_marks(word: &Word, target: &Word) -> String {
    word.letters()
        .iter()
        .zip(target.letters())
        .map(|(a, b)| if a == b { '●' } else { '○' })
        .collect()
}

/// Describe what a filter bans, e.g. "letters x, z; words banned, words"
///
/// `None` when nothing is banned.
#[must_use]
pub fn format_filter(filter: &ExclusionFilter) -> Option<String> {
    let letters: Vec<String> = filter.banned_letters().map(String::from).collect();
    let words: Vec<&str> = filter.banned_words().collect();

    let mut parts = Vec::new();
    if !letters.is_empty() {
        parts.push(format!("letters {}", letters.join(", ")));
    }
    if !words.is_empty() {
        parts.push(format!("words {}", words.join(", ")));
    }
    (!parts.is_empty()).then(|| parts.join("; "))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
