//! Word Ladder - CLI
//!
//! Play word ladder puzzles in the terminal and inspect the hint searches.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use word_ladder::{
    commands::{
        DEFAULT_NEIGHBOR_LIMIT, DEFAULT_WORD_LIMIT, analyze_length, graph_preview, hint_word,
        new_puzzle, run_compare, run_play,
    },
    core::Lexicon,
    game::Difficulty,
    ladder::{StrategyType, WordGraph},
    output::{
        print_compare_result, print_connectivity_report, print_graph_preview, print_hint_result,
        print_puzzle,
    },
    wordlists::{WORDS, loader},
};

/// Start draws tried before giving up on a puzzle
const MAX_PUZZLE_ATTEMPTS: usize = 1000;

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder puzzles with BFS, UCS and A* hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Difficulty: beginner (default), advanced, challenge
    #[arg(short, long, global = true, default_value = "beginner")]
    difficulty: String,

    /// Strategy: bfs (default), ucs, astar
    #[arg(short, long, global = true, default_value = "bfs")]
    strategy: String,

    /// Seed for reproducible puzzles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a puzzle in the terminal (default)
    Play,

    /// Suggest the next move from one word to another
    Hint {
        /// The word you are on
        current: String,
        /// The word you are heading for
        target: String,
    },

    /// Generate a solvable puzzle
    New,

    /// Show part of the dictionary graph
    Graph {
        /// Number of words to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_WORD_LIMIT)]
        words: usize,
    },

    /// Report how well connected the dictionary is
    Analyze {
        /// Word length (default: the difficulty's length)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Compare all strategies on random puzzles
    Compare {
        /// Number of random puzzles
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn load_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    match path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("Failed to load dictionary from {}", path.display())),
        None => Ok(loader::lexicon_from_slice(WORDS)),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lexicon = load_lexicon(cli.dictionary.as_deref())?;
    let difficulty = Difficulty::from_name(&cli.difficulty);
    let strategy = StrategyType::from_name(&cli.strategy);
    let mut rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let filter = difficulty.filter();
    let graph = WordGraph::filtered(&lexicon, &filter);

    match command {
        Commands::Play => {
            let mut input = io::stdin().lock();
            run_play(
                &lexicon,
                difficulty,
                &mut rng,
                MAX_PUZZLE_ATTEMPTS,
                &mut input,
            )
            .map_err(|e| anyhow::anyhow!(e))?;
        }
        Commands::Hint { current, target } => {
            let result =
                hint_word(&graph, strategy, &current, &target).map_err(|e| anyhow::anyhow!(e))?;
            print_hint_result(&result);
        }
        Commands::New => {
            let puzzle = new_puzzle(&lexicon, difficulty, &mut rng, MAX_PUZZLE_ATTEMPTS)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_puzzle(&puzzle);
        }
        Commands::Graph { words } => {
            let rows = graph_preview(
                &graph,
                difficulty.word_length(),
                words,
                DEFAULT_NEIGHBOR_LIMIT,
            );
            print_graph_preview(&rows);
        }
        Commands::Analyze { length } => {
            let length = length.unwrap_or_else(|| difficulty.word_length());
            let report = analyze_length(&graph, length).map_err(|e| anyhow::anyhow!(e))?;
            print_connectivity_report(&report);
        }
        Commands::Compare { count } => {
            let result = run_compare(&graph, difficulty.word_length(), count, &mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_compare_result(&result);
        }
    }

    Ok(())
}
