//! Interactive game mode
//!
//! Line-based game loop over a `GameSession`.

use super::graph::{DEFAULT_NEIGHBOR_LIMIT, DEFAULT_WORD_LIMIT, graph_preview};
use crate::core::Lexicon;
use crate::game::{Difficulty, GameSession, HintOutcome, MoveOutcome};
use crate::ladder::StrategyType;
use crate::output::{print_game_status, print_graph_preview};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// How a played game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub start: String,
    pub target: String,
    pub won: bool,
    pub quit: bool,
    pub turns_used: usize,
    pub hints_used: usize,
    pub score: usize,
}

impl GameSummary {
    fn from_session(game: &GameSession<'_>, quit: bool) -> Self {
        Self {
            start: game.start().to_string(),
            target: game.target().to_string(),
            won: game.is_won(),
            quit,
            turns_used: game.turns_used(),
            hints_used: game.hints_used(),
            score: game.score(),
        }
    }
}

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Hint,
    View,
    Quit,
    Move { position: usize, letter: char },
    Unknown,
}

fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "h" | "hint" => return Command::Hint,
        "v" | "view" => return Command::View,
        "q" | "quit" | "exit" => return Command::Quit,
        _ => {}
    }

    let mut parts = input.split_whitespace();
    let (Some(position), Some(letter), None) = (parts.next(), parts.next(), parts.next()) else {
        return Command::Unknown;
    };
    let mut letters = letter.chars();
    match (position.parse::<usize>(), letters.next(), letters.next()) {
        (Ok(position), Some(letter), None) => Command::Move { position, letter },
        _ => Command::Unknown,
    }
}

/// Play one generated puzzle, reading commands from `input`
///
/// Commands are `h` (hint), `v` (view part of the word graph), `q` (quit),
/// or a move written as `<position> <letter>`, positions counting from 0.
/// End of input counts as quitting.
///
/// # Errors
///
/// Returns an error if no solvable puzzle can be generated for the
/// difficulty or reading input fails.
pub fn run_play<R, I>(
    lexicon: &Lexicon,
    difficulty: Difficulty,
    rng: &mut R,
    max_attempts: usize,
    input: &mut I,
) -> Result<GameSummary, String>
where
    R: Rng + ?Sized,
    I: BufRead,
{
    let mut game = GameSession::generate(lexicon, difficulty, rng, max_attempts).ok_or_else(|| {
        format!(
            "No solvable {}-letter puzzle found for {difficulty}",
            difficulty.word_length()
        )
    })?;

    println!("\n{} {}", "🎮 YOU SELECTED:".blue(), difficulty.name().bold());

    while !game.is_over() {
        print_game_status(&game);

        let Some(line) = read_line(input, "Enter a move '<position> <letter>', or h / v / q")?
        else {
            return Ok(GameSummary::from_session(&game, true));
        };

        match parse_command(&line) {
            Command::Quit => return Ok(GameSummary::from_session(&game, true)),
            Command::View => {
                let graph = game.graph();
                let rows = graph_preview(
                    &graph,
                    difficulty.word_length(),
                    DEFAULT_WORD_LIMIT,
                    DEFAULT_NEIGHBOR_LIMIT,
                );
                print_graph_preview(&rows);
            }
            Command::Hint if game.hints_left() == 0 => {
                // Out of hints: the round goes straight on to a move
                println!("{}", "⚠ NO AI HINTS LEFT! TRY YOUR LUCK".red());
                let Some((position, letter)) = read_move(input, game.current().length())? else {
                    return Ok(GameSummary::from_session(&game, true));
                };
                play_move(&mut game, position, letter);
            }
            Command::Hint => {
                let Some(choice) = read_line(input, "Select algorithm: [B] BFS, [U] UCS, [A] A*")?
                else {
                    return Ok(GameSummary::from_session(&game, true));
                };
                let Some(strategy) = StrategyType::parse(&choice) else {
                    continue;
                };
                match game.request_hint(&strategy) {
                    HintOutcome::Suggested(word) => {
                        println!("{} {}", "💡 AI SUGGESTS:".green(), word.text().bold());
                    }
                    HintOutcome::NoSuggestion => {
                        println!("{}", "⚠ NO SUGGESTIONS AVAILABLE".red());
                    }
                    HintOutcome::NoHintsLeft => {
                        println!("{}", "⚠ NO AI HINTS LEFT! TRY YOUR LUCK".red());
                    }
                }
            }
            Command::Move { position, letter } => play_move(&mut game, position, letter),
            Command::Unknown => print_move_usage(game.current().length()),
        }
    }

    let summary = GameSummary::from_session(&game, false);
    if summary.won {
        println!(
            "{}",
            format!(
                "🎉 CONGRATULATIONS! YOU FOUND THE TARGET WORD! SCORE: {}",
                summary.score
            )
            .green()
            .bold()
        );
    } else {
        println!("{}", "💀 GAME OVER! YOU'VE RUN OUT OF TURNS.".red().bold());
    }
    Ok(summary)
}

fn play_move(game: &mut GameSession<'_>, position: usize, letter: char) {
    match game.propose(position, letter) {
        MoveOutcome::Accepted(word) => println!("✓ {}", word.text().green()),
        MoveOutcome::Rejected { .. } => {
            println!("{}", "⚠ INVALID WORD. TRY AGAIN.".red());
        }
        MoveOutcome::GameOver => {}
    }
}

fn print_move_usage(length: usize) {
    println!(
        "Enter a position (0-{}) and a letter, e.g. '0 b'",
        length.saturating_sub(1)
    );
}

/// Prompt until the player enters a move; `None` on quit or end of input
fn read_move<I: BufRead>(input: &mut I, length: usize) -> Result<Option<(usize, char)>, String> {
    loop {
        let Some(line) = read_line(input, "Enter a move '<position> <letter>'")? else {
            return Ok(None);
        };
        match parse_command(&line) {
            Command::Move { position, letter } => return Ok(Some((position, letter))),
            Command::Quit => return Ok(None),
            _ => print_move_usage(length),
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<I: BufRead>(input: &mut I, prompt: &str) -> Result<Option<String>, String> {
    print!("{} ", format!("{prompt}:").yellow());
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}
