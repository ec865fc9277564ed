//! Game session state
//!
//! Turn and hint bookkeeping for one puzzle. Holds no I/O; the `play` command
//! drives it from the terminal.

use super::Difficulty;
use crate::core::{ExclusionFilter, Lexicon, Word};
use crate::ladder::{Strategy, WordGraph, select_start_and_target};
use log::debug;
use rand::Rng;

/// Points per unused turn in a won game
pub const POINTS_PER_TURN: usize = 10;
/// Points deducted per hint used
pub const HINT_PENALTY: usize = 5;

/// Result of proposing a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The new word is valid and is now the current word
    Accepted(Word),
    /// The move did not produce a valid word; the turn is still spent
    Rejected { attempted: Option<String> },
    /// The game has already ended; nothing was charged
    GameOver,
}

/// Result of asking for a hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    /// Next word to play; one hint was charged
    Suggested(Word),
    /// The search found no ladder; nothing was charged
    NoSuggestion,
    /// The hint budget is spent
    NoHintsLeft,
}

/// One puzzle from start word to target word
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    lexicon: &'a Lexicon,
    difficulty: Difficulty,
    filter: ExclusionFilter,
    target: Word,
    history: Vec<Word>,
    turns_used: usize,
    hints_used: usize,
}

impl<'a> GameSession<'a> {
    /// Start a session on a given puzzle
    #[must_use]
    pub fn new(lexicon: &'a Lexicon, difficulty: Difficulty, start: Word, target: Word) -> Self {
        Self {
            lexicon,
            difficulty,
            filter: difficulty.filter(),
            target,
            history: vec![start],
            turns_used: 0,
            hints_used: 0,
        }
    }

    /// Draw a solvable puzzle for `difficulty`
    ///
    /// Returns `None` if no connected pair turns up within `max_attempts`
    /// start draws.
    pub fn generate<R: Rng + ?Sized>(
        lexicon: &'a Lexicon,
        difficulty: Difficulty,
        rng: &mut R,
        max_attempts: usize,
    ) -> Option<Self> {
        let filter = difficulty.filter();
        let graph = WordGraph::filtered(lexicon, &filter);
        let (start, target) =
            select_start_and_target(&graph, difficulty.word_length(), rng, max_attempts)?;
        debug!("{difficulty} puzzle: {start} -> {target}");
        Some(Self::new(lexicon, difficulty, start, target))
    }

    /// The graph moves and hints are checked against
    #[must_use]
    pub fn graph(&self) -> WordGraph<'_> {
        WordGraph::filtered(self.lexicon, &self.filter)
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn start(&self) -> &Word {
        &self.history[0]
    }

    #[must_use]
    pub fn current(&self) -> &Word {
        &self.history[self.history.len() - 1]
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Every word the player has stood on, start first
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    #[must_use]
    pub const fn turns_used(&self) -> usize {
        self.turns_used
    }

    #[must_use]
    pub const fn hints_used(&self) -> usize {
        self.hints_used
    }

    #[must_use]
    pub const fn turns_left(&self) -> usize {
        self.difficulty.turn_limit().saturating_sub(self.turns_used)
    }

    #[must_use]
    pub const fn hints_left(&self) -> usize {
        self.difficulty.hint_limit().saturating_sub(self.hints_used)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        *self.current() == self.target
    }

    /// Won, or out of turns
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.turns_left() == 0
    }

    /// Rewrite one letter of the current word
    ///
    /// Every move costs a turn, including ones that produce a word outside
    /// the dictionary, a filtered word, or an out-of-range position.
    pub fn propose(&mut self, position: usize, letter: char) -> MoveOutcome {
        if self.is_over() {
            return MoveOutcome::GameOver;
        }
        self.turns_used += 1;

        let attempted = self.current().substitute(position, letter);
        let accepted = attempted
            .as_deref()
            .filter(|text| self.lexicon.is_valid(text, &self.filter))
            .and_then(|text| self.lexicon.get(text))
            .cloned();

        match accepted {
            Some(word) => {
                self.history.push(word.clone());
                MoveOutcome::Accepted(word)
            }
            None => MoveOutcome::Rejected { attempted },
        }
    }

    /// Ask `strategy` for the next move
    pub fn request_hint<S: Strategy>(&mut self, strategy: &S) -> HintOutcome {
        if self.hints_left() == 0 {
            return HintOutcome::NoHintsLeft;
        }

        match strategy.hint(&self.graph(), self.current(), &self.target) {
            Some(word) => {
                self.hints_used += 1;
                HintOutcome::Suggested(word)
            }
            None => HintOutcome::NoSuggestion,
        }
    }

    /// Final score: 10 points per unused turn minus 5 per hint, floored at 0
    ///
    /// A game that is not won scores 0.
    #[must_use]
    pub fn score(&self) -> usize {
        if !self.is_won() {
            return 0;
        }
        (self.turns_left() * POINTS_PER_TURN).saturating_sub(self.hints_used * HINT_PENALTY)
    }
}
