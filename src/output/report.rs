//! Benchmark report rendering
//!
//! The report is a plain text file: an aligned statistics block followed by
//! one line per tested word.

use super::formatters::outcome_label;
use crate::commands::TestAllResult;
use crate::game::{GameRecord, Stats};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const RULE: &str = "======================================================================";

/// Render the statistics block
#[must_use]
pub fn stats_block(title: &str, stats: &Stats, elapsed: Duration) -> String {
    let rows = [
        (
            "Overall:",
            format!("{} games", stats.total_games()),
            String::new(),
            format!("[{:.2} Turn Avg.]", stats.average_turns()),
        ),
        (
            "   Wins:",
            format!("{} games", stats.wins),
            format!("({:.2}%)", stats.win_ratio()),
            format!("[{:.2} Turn Avg.]", stats.average_win_turns()),
        ),
        (
            " Losses:",
            format!("{} games", stats.losses),
            format!("({:.2}%)", stats.loss_ratio()),
            format!("[{:.2} Turn Avg.]", stats.average_loss_turns()),
        ),
    ];

    let games_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0);
    let ratio_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(0);
    let turns_width = rows.iter().map(|r| r.3.len()).max().unwrap_or(0);

    let table: String = rows
        .iter()
        .map(|(label, games, ratio, turns)| {
            format!("{label}   {games:>games_width$}   {ratio:>ratio_width$}   {turns:>turns_width$}\n")
        })
        .collect();

    format!(
        "========================== WORDLE AI  STATS ==========================\n\n\
         {title}\n\
         * Took {:.3} seconds.\n\n\
         {table}\n\
         {RULE}\n",
        elapsed.as_secs_f64()
    )
}

/// Render one line per game, e.g. `"crane: 3 turns  [WIN]"`
#[must_use]
pub fn game_results(records: &[GameRecord]) -> String {
    let lines: String = records
        .iter()
        .map(|record| {
            format!(
                "{}: {} turns  [{}]\n",
                record.word,
                record.num_turns(),
                outcome_label(record.won())
            )
        })
        .collect();

    format!("==== GAME RESULTS ====\n\n{lines}\n======================\n")
}

/// Full report file contents
#[must_use]
pub fn render_report(result: &TestAllResult) -> String {
    format!(
        "{}\n\n{}",
        stats_block(&result.title, &result.stats, result.elapsed),
        game_results(&result.records)
    )
}

/// Path of the report for a dictionary title
#[must_use]
pub fn report_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("{title} Results.txt"))
}

/// Write the report into `dir`, creating the directory if needed
///
/// # Errors
/// Any I/O error creating the directory or writing the file.
pub fn write_report(dir: &Path, result: &TestAllResult) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = report_path(dir, &result.title);
    fs::write(&path, render_report(result))?;
    log::debug!("wrote report to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};
    use crate::game::{GameState, TurnRecord};

    fn record(word: &str, turns: usize, won: bool) -> GameRecord {
        let hidden = Word::new(word).unwrap();
        let turn = TurnRecord {
            guess: word.to_string(),
            feedback: Feedback::calculate(&hidden, &hidden).unwrap(),
            candidates: 1,
        };
        GameRecord {
            word: word.to_string(),
            turns: vec![turn; turns],
            state: if won { GameState::Won } else { GameState::LimitReached },
        }
    }

    fn sample() -> TestAllResult {
        let records = vec![record("crane", 3, true), record("slate", 6, false)];
        TestAllResult {
            title: "Wordle Dictionary - 5".to_string(),
            stats: Stats::from_records(&records),
            records,
            elapsed: Duration::from_millis(1500),
        }
    }

    #[test]
    fn game_lines() {
        let text = game_results(&sample().records);
        assert!(text.contains("crane: 3 turns  [WIN]\n"));
        assert!(text.contains("slate: 6 turns  [LOSE]\n"));
    }

    #[test]
    fn stats_block_is_aligned() {
        let result = sample();
        let block = stats_block(&result.title, &result.stats, result.elapsed);

        assert!(block.contains("Wordle Dictionary - 5\n"));
        assert!(block.contains("* Took 1.500 seconds."));

        let rows: Vec<&str> = block
            .lines()
            .filter(|l| l.contains("Turn Avg."))
            .collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("Overall:"));
        assert!(rows[1].starts_with("   Wins:"));
        assert!(rows[2].starts_with(" Losses:"));
        assert!(rows.iter().all(|r| r.len() == rows[0].len()));
        assert!(rows[1].contains("(50.00%)"));
        assert!(rows[0].contains("[4.50 Turn Avg.]"));
    }

    #[test]
    fn stats_block_layout() {
        let result = sample();
        let block = stats_block(&result.title, &result.stats, result.elapsed);
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(lines.len(), 10);
        assert!(lines[0].contains("WORDLE AI  STATS"));
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Wordle Dictionary - 5");
        assert_eq!(lines[3], "* Took 1.500 seconds.");
        assert_eq!(lines[4], "");
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], RULE);
        assert!(block.ends_with('\n'));
    }

    #[test]
    fn empty_results_keep_their_frame() {
        assert_eq!(
            game_results(&[]),
            "==== GAME RESULTS ====\n\n\n======================\n"
        );
    }

    #[test]
    fn write_report_creates_file() {
        let dir = std::env::temp_dir().join(format!("wordle_ai_report_{}", std::process::id()));
        let path = write_report(&dir, &sample()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert!(path.ends_with("Wordle Dictionary - 5 Results.txt"));
        assert!(contents.contains("==== GAME RESULTS ===="));
        assert!(contents.contains("crane: 3 turns  [WIN]"));
    }
}
