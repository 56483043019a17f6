//! Test all answers - comprehensive solver evaluation
//!
//! Runs the solver against every answer word in parallel and aggregates the
//! outcomes.

use super::RunConfig;
use crate::core::Dictionary;
use crate::error::Result;
use crate::game::{GameRecord, Stats, simulate};
use crate::wordlists::DictionaryKind;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Outcome of a full benchmark run
#[derive(Debug, Clone)]
pub struct TestAllResult {
    /// Dictionary title, e.g. `"Wordle Dictionary - 5"`
    pub title: String,
    /// One record per answer word, in dictionary order
    pub records: Vec<GameRecord>,
    pub stats: Stats,
    pub elapsed: Duration,
}

/// Run the solver on every answer word of `kind`
///
/// Games run in parallel; each owns its own solver state and only the loaded
/// dictionaries are shared.
///
/// # Errors
/// Dictionary loading errors, or the first core error raised by any game.
/// A core error aborts the whole run.
pub fn run_test_all(
    config: &RunConfig,
    kind: DictionaryKind,
    length: Option<usize>,
    show_progress: bool,
) -> Result<TestAllResult> {
    let answers = config.source.load_answers(kind, length)?;
    let guesses = config.source.load_guesses(kind, length)?;
    let title = kind.display_name(length);

    log::info!("testing {} answers from {title}", answers.len());
    let start = Instant::now();

    let pb = progress_bar(answers.len(), show_progress);
    let records = play_all(config, &answers, &guesses, &pb)?;
    pb.finish_and_clear();

    let stats = Stats::from_records(&records);
    let elapsed = start.elapsed();
    log::info!(
        "finished {} games in {:.2}s ({} wins)",
        stats.total_games(),
        elapsed.as_secs_f64(),
        stats.wins
    );

    Ok(TestAllResult {
        title,
        records,
        stats,
        elapsed,
    })
}

fn play_all(
    config: &RunConfig,
    answers: &Dictionary,
    guesses: &Dictionary,
    pb: &ProgressBar,
) -> Result<Vec<GameRecord>> {
    answers
        .words()
        .par_iter()
        .map(|hidden| {
            let record = simulate(hidden, guesses, &config.strategy, config.max_turns);
            pb.inc(1);
            record
        })
        .collect()
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {elapsed}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
