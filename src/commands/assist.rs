//! Solver assistant for games played elsewhere
//!
//! The solver suggests a guess, the player types the feedback the real game
//! showed, and the candidates narrow until the word is found or the turns
//! run out.

use super::RunConfig;
use crate::core::{Dictionary, Feedback, Word};
use crate::game::GameState;
use crate::output::formatters::{colored_feedback, guesses_word};
use crate::solver::{GuessSelector, Solver};
use crate::wordlists::DictionaryKind;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Word length assumed when none is given
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Run the assistant against the guesses of `kind`
///
/// Returns the final state; `InProgress` means input ended first.
///
/// # Errors
/// Dictionary errors, `NoCandidatesRemain` when the typed feedback rules out
/// every word, or I/O errors.
pub fn run_assist(
    config: &RunConfig,
    kind: DictionaryKind,
    length: Option<usize>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<GameState> {
    let length = length.unwrap_or(DEFAULT_WORD_LENGTH);
    let guesses = config.source.load_guesses(kind, Some(length))?;

    writeln!(out, "\n{}", "==== WORDLE ASSIST ====".bright_cyan().bold())?;
    writeln!(out, "\n{}", kind.display_name(Some(length)))?;
    assist(&guesses, &config.strategy, length, config.max_turns, input, out)
}

/// Suggest guesses from `guesses` and narrow them with typed feedback
///
/// # Errors
/// See [`run_assist`].
pub fn assist<S: GuessSelector>(
    guesses: &Dictionary,
    strategy: &S,
    length: usize,
    max_turns: usize,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<GameState> {
    let mut solver = Solver::new(strategy, guesses, length, max_turns)?;

    for turn in 0..max_turns {
        let guess = solver.next_guess(turn)?;
        writeln!(out, "\n-- Guess {} of {max_turns} --", turn + 1)?;
        writeln!(out, "Possible Words: {}", solver.candidates().len())?;
        writeln!(out, "  Guess: {}", guess.text().to_uppercase())?;

        let Some(feedback) = read_feedback(guess, input, out)? else {
            log::debug!("input closed mid-game");
            return Ok(GameState::InProgress);
        };
        writeln!(
            out,
            "Results: {}  {}",
            colored_feedback(&feedback),
            feedback.to_emoji()
        )?;

        if feedback.is_won() {
            writeln!(
                out,
                "\n{}  solved in {} {}\n",
                "==== SOLVED! ====".green().bold(),
                turn + 1,
                guesses_word(turn + 1)
            )?;
            return Ok(GameState::Won);
        }
        solver.update(&feedback)?;
    }

    writeln!(
        out,
        "\n{}  {} words still possible\n",
        "==== OUT OF TURNS ====".red().bold(),
        solver.candidates().len()
    )?;
    Ok(GameState::LimitReached)
}

/// Prompt until the feedback line parses for `guess`; `None` at end of input
fn read_feedback(
    guess: &Word,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<Feedback>> {
    loop {
        write!(out, "\nEnter the feedback (O correct, - present, X absent): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.trim().is_empty() {
            continue;
        }

        match Feedback::parse(guess, &line) {
            Some(feedback) => return Ok(Some(feedback)),
            None => writeln!(
                out,
                "\n{} feedback must be {} marks of O/G/🟩, -/Y/🟨 or X/_/⬜",
                "ERROR!".red().bold(),
                guess.len()
            )?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordleError;
    use crate::solver::LetterCoverage;
    use std::io::Cursor;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(words.iter().map(|w| Word::new(*w).unwrap()))
    }

    fn run(words: &[&str], lines: &str, max_turns: usize) -> (Result<GameState>, String) {
        let dict = dictionary(words);
        let mut input = Cursor::new(lines.as_bytes().to_vec());
        let mut out = Vec::new();
        let state = assist(&dict, &LetterCoverage::new(), 5, max_turns, &mut input, &mut out);
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn typed_feedback_narrows_to_the_answer() {
        // crane and slate tie, so crane comes first; hidden word is slate
        let (state, text) = run(&["crane", "slate", "ox"], "XXOXO\nOOOOO\n", 6);

        assert_eq!(state.unwrap(), GameState::Won);
        assert!(text.contains("Guess: CRANE"));
        assert!(text.contains("Guess: SLATE"));
        assert!(text.contains("⬜⬜🟩⬜🟩"));
        assert!(text.contains("solved in 2 guesses"));
    }

    #[test]
    fn unreadable_feedback_reprompts() {
        let (state, text) = run(&["crane", "slate"], "OOO\nOOZOO\n\nggggg\n", 6);

        assert_eq!(state.unwrap(), GameState::Won);
        assert_eq!(text.matches("feedback must be 5 marks").count(), 2);
        assert!(text.contains("solved in 1 guess\n"));
    }

    #[test]
    fn contradictory_feedback_is_an_error() {
        let (state, _) = run(&["crane", "slate"], "XXXXX\n", 6);
        let err = state.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WordleError>(),
            Some(WordleError::NoCandidatesRemain)
        ));
    }

    #[test]
    fn turn_cap_and_end_of_input() {
        let (state, text) = run(&["crane", "slate"], "XXOXO\n", 1);
        assert_eq!(state.unwrap(), GameState::LimitReached);
        assert!(text.contains("1 words still possible"));

        let (state, _) = run(&["crane", "slate"], "", 6);
        assert_eq!(state.unwrap(), GameState::InProgress);
    }

    #[test]
    fn runs_against_bundled_wordle_guesses() {
        let mut input = Cursor::new(b"OOOOO\n".to_vec());
        let mut out = Vec::new();
        let state = run_assist(
            &RunConfig::default(),
            DictionaryKind::Wordle,
            None,
            &mut input,
            &mut out,
        )
        .unwrap();

        assert_eq!(state, GameState::Won);
        assert!(String::from_utf8(out).unwrap().contains("Wordle Dictionary - 5"));
    }
}
