//! Difficulty presets

use crate::core::ExclusionFilter;
use std::fmt;

/// A difficulty level: word length, budgets and exclusion filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// 3-letter words, 15 turns, 5 hints
    #[default]
    Beginner,
    /// 5-letter words, 10 turns, 3 hints
    Advanced,
    /// 7-letter words, 7 turns, no hints, restricted letters
    Challenge,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Advanced, Self::Challenge];

    /// Parse a level name or its menu number ("1", "2", "3")
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "1" | "beginner" => Some(Self::Beginner),
            "2" | "advanced" => Some(Self::Advanced),
            "3" | "challenge" => Some(Self::Challenge),
            _ => None,
        }
    }

    /// Create difficulty from name string
    ///
    /// Defaults to beginner if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Advanced => "Advanced",
            Self::Challenge => "Challenge",
        }
    }

    #[must_use]
    pub const fn word_length(self) -> usize {
        match self {
            Self::Beginner => 3,
            Self::Advanced => 5,
            Self::Challenge => 7,
        }
    }

    #[must_use]
    pub const fn turn_limit(self) -> usize {
        match self {
            Self::Beginner => 15,
            Self::Advanced => 10,
            Self::Challenge => 7,
        }
    }

    #[must_use]
    pub const fn hint_limit(self) -> usize {
        match self {
            Self::Beginner => 5,
            Self::Advanced => 3,
            Self::Challenge => 0,
        }
    }

    /// Exclusion filter for this level
    ///
    /// Challenge bans the letters 'x' and 'z' and the words "banned" and
    /// "words". Neither word has 7 letters, so the word ban never matches a
    /// Challenge word; it is kept as configured.
    #[must_use]
    pub fn filter(self) -> ExclusionFilter {
        match self {
            Self::Beginner | Self::Advanced => ExclusionFilter::none(),
            Self::Challenge => ExclusionFilter::new(["banned", "words"], ['x', 'z']),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert_eq!(Difficulty::Beginner.word_length(), 3);
        assert_eq!(Difficulty::Advanced.word_length(), 5);
        assert_eq!(Difficulty::Challenge.word_length(), 7);

        assert_eq!(Difficulty::Beginner.turn_limit(), 15);
        assert_eq!(Difficulty::Advanced.turn_limit(), 10);
        assert_eq!(Difficulty::Challenge.turn_limit(), 7);

        assert_eq!(Difficulty::Beginner.hint_limit(), 5);
        assert_eq!(Difficulty::Advanced.hint_limit(), 3);
        assert_eq!(Difficulty::Challenge.hint_limit(), 0);
    }

    #[test]
    fn only_challenge_filters() {
        assert!(Difficulty::Beginner.filter().is_empty());
        assert!(Difficulty::Advanced.filter().is_empty());

        let filter = Difficulty::Challenge.filter();
        assert!(!filter.permits("banned"));
        assert!(!filter.permits("words"));
        assert!(!filter.permits("complex"));
        assert!(!filter.permits("puzzled"));
        assert!(filter.permits("battled"));
    }

    #[test]
    fn challenge_word_ban_is_inert_at_its_length() {
        let filter = Difficulty::Challenge.filter();
        let length = Difficulty::Challenge.word_length();
        assert!(filter.banned_words().all(|w| w.len() != length));
    }

    #[test]
    fn parse_names_and_numbers() {
        assert_eq!(Difficulty::parse("1"), Some(Difficulty::Beginner));
        assert_eq!(Difficulty::parse("Advanced"), Some(Difficulty::Advanced));
        assert_eq!(Difficulty::parse(" 3 "), Some(Difficulty::Challenge));
        assert_eq!(Difficulty::parse("4"), None);
        assert_eq!(Difficulty::from_name("expert"), Difficulty::Beginner);
    }
}
