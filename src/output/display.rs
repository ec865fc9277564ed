//! Display functions for command results

use super::formatters::{create_progress_bar, format_filter, format_ladder, match_marks};
use crate::commands::{CompareResult, ConnectivityReport, GraphRow, HintResult, PuzzleResult};
use crate::game::GameSession;
use crate::ladder::Strategy;
use colored::Colorize;

/// Print the current state of a game
pub fn print_game_status(game: &GameSession<'_>) {
    let difficulty = game.difficulty();
    let turn_limit = difficulty.turn_limit();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Current: {}   Target: {}",
        game.current().text().to_uppercase().bright_yellow().bold(),
        game.target().text().to_uppercase().green().bold()
    );
    println!("         {}", match_marks(game.current(), game.target()));

    let bar = create_progress_bar(game.turns_left() as f64, turn_limit as f64, 20);
    println!(
        "Turns:   [{}] {}/{}",
        bar.green(),
        game.turns_left(),
        turn_limit
    );
    println!(
        "Hints:   {}/{}",
        game.hints_left(),
        difficulty.hint_limit()
    );
    if let Some(banned) = format_filter(&difficulty.filter()) {
        println!("Banned:  {}", banned.red());
    }
    if game.history().len() > 1 {
        println!("Ladder:  {}", format_ladder(game.history()).bright_black());
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print a partial view of the word graph
pub fn print_graph_preview(rows: &[GraphRow]) {
    println!("\n{}", "📖 DICTIONARY GRAPH (partial view)".bright_cyan().bold());
    if rows.is_empty() {
        println!("   (no words of this length)");
        return;
    }

    for row in rows {
        let shown: Vec<&str> = row.neighbors.iter().map(|w| w.text()).collect();
        let more = row.degree - row.neighbors.len();
        let suffix = if more > 0 {
            format!(" (+{more} more)").bright_black().to_string()
        } else {
            String::new()
        };
        println!(
            "   {} → {}{}",
            row.word.text().bright_yellow(),
            if shown.is_empty() {
                "∅".to_string()
            } else {
                shown.join(", ")
            },
            suffix
        );
    }
}

/// Print the result of a hint query
pub fn print_hint_result(result: &HintResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {} → {}",
        format!("{}:", result.strategy).bright_cyan().bold(),
        result.current.text().to_uppercase().bright_yellow(),
        result.target.text().to_uppercase().green()
    );
    println!("{}", "─".repeat(60).cyan());

    match (&result.next_move, &result.ladder) {
        (Some(next), Some(ladder)) => {
            println!("{} {}", "💡 AI SUGGESTS:".green(), next.text().bold());
            println!("   Ladder:   {}", format_ladder(ladder));
            println!("   Moves:    {}", ladder.len() - 1);
        }
        (None, Some(_)) => println!("{}", "✅ Already at the target".green()),
        _ => println!("{}", "⚠ NO SUGGESTIONS AVAILABLE".red()),
    }
    println!("   Expanded: {}", result.expanded);
    println!(
        "   Time:     {:.2}ms",
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Print a generated puzzle
pub fn print_puzzle(puzzle: &PuzzleResult) {
    let difficulty = puzzle.difficulty;
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEW PUZZLE:".bright_cyan().bold(),
        difficulty.name().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n   {} → {}",
        puzzle.start.text().to_uppercase().bright_yellow().bold(),
        puzzle.target.text().to_uppercase().green().bold()
    );
    println!("   Fewest moves: {}", puzzle.optimal_moves);
    println!(
        "   Turns: {}   Hints: {}",
        difficulty.turn_limit(),
        difficulty.hint_limit()
    );
    if let Some(banned) = format_filter(&difficulty.filter()) {
        println!("   Banned: {}", banned.red());
    }
}

/// Print a connectivity report
pub fn print_connectivity_report(report: &ConnectivityReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ",
        format!("CONNECTIVITY: {}-LETTER WORDS", report.length)
            .bright_cyan()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let connected = report.words - report.isolated;
    let bar = create_progress_bar(connected as f64, report.words as f64, 30);
    println!("\n📊 {} words, {} edges", report.words, report.edges);
    println!(
        "   Connected:   [{}] {}",
        bar.green(),
        format!("{connected}/{}", report.words).bright_yellow()
    );
    println!("   Isolated:    {}", report.isolated);
    println!("   Mean degree: {:.2}", report.mean_degree);
    if let Some((word, degree)) = &report.max_degree {
        println!("   Max degree:  {degree} ({})", word.text().bold());
    }
    println!(
        "   Components:  {} (largest {})",
        report.components, report.largest_component
    );
}

/// Print a strategy comparison
pub fn print_compare_result(result: &CompareResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STRATEGY COMPARISON".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} random {}-letter puzzles",
        result.puzzles, result.length
    );
    println!(
        "\n   {:<6} {:>8} {:>11} {:>13} {:>10}",
        "", "Solved", "Avg moves", "Avg expanded", "Time"
    );
    for stats in &result.stats {
        println!(
            "   {:<6} {:>8} {:>11} {:>13} {:>10}",
            stats.strategy.name().bold(),
            stats.solved,
            format!("{:.2}", stats.average_moves()).bright_yellow(),
            format!("{:.1}", stats.average_expanded(result.puzzles)),
            format!("{:.2}ms", stats.duration.as_secs_f64() * 1000.0)
        );
    }

    println!(
        "\n   BFS/UCS same length: {}/{}",
        result.bfs_ucs_agree, result.puzzles
    );
    println!(
        "   A* longer than BFS:  {}/{}",
        result.best_first_longer, result.puzzles
    );
}
