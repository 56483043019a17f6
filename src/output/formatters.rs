//! Formatting utilities for terminal output

use crate::core::{Feedback, Status};
use colored::{ColoredString, Colorize};

/// Color one guess letter by its status
fn color_letter(letter: char, status: Status) -> ColoredString {
    let text = letter.to_ascii_uppercase().to_string();
    match status {
        Status::Correct => text.black().on_green().bold(),
        Status::Present => text.black().on_yellow().bold(),
        Status::Absent => text.white().on_bright_black(),
    }
}

/// Format feedback as colored letter tiles
#[must_use]
pub fn colored_feedback(feedback: &Feedback) -> String {
    feedback
        .entries()
        .iter()
        .map(|e| color_letter(char::from(e.letter), e.status).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u64, max: u64, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((value as f64 / max as f64) * width as f64).round() as usize
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Label used for a finished game in reports
#[must_use]
pub const fn outcome_label(won: bool) -> &'static str {
    if won { "WIN" } else { "LOSE" }
}

/// `"guess"` or `"guesses"`
#[must_use]
pub const fn guesses_word(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
