//! Display functions for command results

use super::formatters::{colored_feedback, create_progress_bar, guesses_word};
use super::report::stats_block;
use crate::commands::{PlayResult, TestAllResult};
use crate::game::GameState;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Write a finished AI game turn by turn
///
/// # Errors
/// Any error writing to `out`.
pub fn write_play_result(out: &mut impl Write, result: &PlayResult) -> io::Result<()> {
    writeln!(out, "\n{}", "==== WORDLE AI ====".bright_cyan().bold())?;
    writeln!(out, "\n{}", result.dictionary)?;
    writeln!(out, "Word Length is {}", result.word_length)?;

    for (i, turn) in result.record.turns.iter().enumerate() {
        writeln!(out, "\n-- Turn {} --", i + 1)?;
        writeln!(out, "AI Dictionary Size: {}", turn.candidates)?;
        writeln!(out, "  Guess: {}", turn.guess.to_uppercase())?;
        writeln!(
            out,
            "Results: {}  {}",
            turn.feedback,
            colored_feedback(&turn.feedback)
        )?;
    }

    let turns = result.record.num_turns();
    match result.record.state {
        GameState::Won => writeln!(
            out,
            "\n{}  solved in {turns} {}\n",
            "==== YOU WIN! ====".green().bold(),
            guesses_word(turns)
        ),
        GameState::LimitReached | GameState::InProgress => writeln!(
            out,
            "\n{}\t (The Answer was: {})\n",
            "==== YOU LOSE! ====".red().bold(),
            result.record.word.to_uppercase().bright_yellow()
        ),
    }
}

/// Write benchmark statistics and the win distribution
///
/// # Errors
/// Any error writing to `out`.
pub fn write_test_all_result(
    out: &mut impl Write,
    result: &TestAllResult,
    report: Option<&Path>,
) -> io::Result<()> {
    writeln!(out)?;
    write!(
        out,
        "{}",
        stats_block(&result.title, &result.stats, result.elapsed)
    )?;

    let stats = &result.stats;
    if stats.wins > 0 {
        writeln!(out, "\n📈 {}", "Guess Distribution".bright_cyan().bold())?;
        let max_count = stats.distribution.values().copied().max().unwrap_or(0);
        for turns in 1..=stats.max_win_turns() {
            let count = stats.distribution.get(&turns).copied().unwrap_or(0);
            let bar = create_progress_bar(count, max_count, 40);
            writeln!(out, "  {turns:>2}: {} {count:5}", bar.green())?;
        }
    }
    if stats.losses > 0 {
        writeln!(
            out,
            "  {}",
            format!("{} unsolved", stats.losses).red().bold()
        )?;
    }

    if let Some(path) = report {
        writeln!(out, "\nResults written to '{}'", path.display())?;
    }
    writeln!(out)
}

/// Print a finished AI game to stdout
///
/// # Errors
/// Any error writing to stdout.
pub fn print_play_result(result: &PlayResult) -> io::Result<()> {
    write_play_result(&mut io::stdout().lock(), result)
}

/// Print benchmark results to stdout
///
/// # Errors
/// Any error writing to stdout.
pub fn print_test_all_result(result: &TestAllResult, report: Option<&Path>) -> io::Result<()> {
    write_test_all_result(&mut io::stdout().lock(), result, report)
}
