//! Display functions for command results

use super::formatters::{state_name, tile_row};
use crate::commands::EvalResult;
use crate::stats::PlayerStats;
use colored::Colorize;

/// Print the result of a one-shot evaluation
pub fn print_eval_result(result: &EvalResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess:    {}",
        result.guess.text().bright_yellow().bold()
    );
    println!("Solution: {}", result.solution.text().bright_white().bold());
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n{}  {}",
        tile_row(result.guess.letters(), &result.evaluation),
        result.evaluation.to_emoji()
    );

    println!();
    for (i, (&letter, &state)) in result
        .guess
        .letters()
        .iter()
        .zip(result.evaluation.states())
        .enumerate()
    {
        println!("  {}. {letter} — {}", i + 1, state_name(state));
    }

    if result.evaluation.is_win() {
        println!("\n{}", "Exact match!".green().bold());
    }
}

/// Print persisted player statistics
pub fn print_stats(stats: &PlayerStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PLAYER STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Games played:     {}", stats.games_played);
    println!(
        "   Games won:        {}",
        stats.games_won.to_string().green()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:   {}", stats.current_streak);
    println!("   Best streak:      {}", stats.best_streak);
    println!(
        "   Time-trial best:  {} words",
        stats.time_trial_best.to_string().bright_yellow()
    );
    println!();
}
