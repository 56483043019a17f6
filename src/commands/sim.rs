//! Human-played console game
//!
//! The player types guesses line by line against a hidden word.

use super::{RunConfig, Target, prepare_game};
use crate::core::{Dictionary, Word};
use crate::game::{Game, GameState};
use crate::output::formatters::{colored_feedback, guesses_word};
use crate::wordlists::DictionaryKind;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Why a typed guess was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("no word was input")]
    Empty,

    #[error("too many words were input")]
    TooManyWords,

    #[error("word must be {expected} letters [not {actual}]")]
    WrongLength { expected: usize, actual: usize },

    #[error("\"{0}\" could not be found in dictionary")]
    NotInDictionary(String),
}

/// Check one input line as a guess
///
/// The line must hold exactly one word of `length` letters that is in
/// `guesses` (case-insensitive).
///
/// # Errors
/// The first [`GuessError`] that applies.
pub fn validate_guess<'d>(
    line: &str,
    guesses: &'d Dictionary,
    length: usize,
) -> Result<&'d Word, GuessError> {
    let mut tokens = line.split_whitespace();
    let guess = tokens.next().ok_or(GuessError::Empty)?;
    if tokens.next().is_some() {
        return Err(GuessError::TooManyWords);
    }
    if guess.len() != length {
        return Err(GuessError::WrongLength {
            expected: length,
            actual: guess.len(),
        });
    }
    guesses
        .find(guess)
        .ok_or_else(|| GuessError::NotInDictionary(guess.to_ascii_lowercase()))
}

/// Play a console game, reading guesses from `input`
///
/// Returns the final state; `InProgress` means input ended first.
///
/// # Errors
/// Dictionary errors while choosing the hidden word, or I/O errors.
pub fn run_sim(
    config: &RunConfig,
    kind: DictionaryKind,
    target: &Target,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<GameState> {
    let (hidden, guesses) = prepare_game(config, kind, target)?;
    let mut game = Game::new(&hidden, config.max_turns)?;

    writeln!(out, "\n{}", "==== WORDLE SIM ====".bright_cyan().bold())?;
    writeln!(out, "\nWord Length is {}", game.word_length())?;

    while !game.state().is_over() {
        writeln!(out, "\n-- Guess {} of {} --", game.tries() + 1, game.max_turns())?;
        let Some(guess) = read_guess(&guesses, game.word_length(), input, out)? else {
            log::debug!("input closed mid-game");
            return Ok(GameState::InProgress);
        };

        let feedback = game.make_guess(guess)?;
        writeln!(out, "  Guess: {}", guess.text().to_uppercase())?;
        writeln!(out, "Results: {feedback}  {}", colored_feedback(feedback))?;
    }

    if game.state() == GameState::Won {
        writeln!(
            out,
            "\n{}  solved in {} {}\n",
            "==== YOU WIN! ====".green().bold(),
            game.tries(),
            guesses_word(game.tries())
        )?;
    } else {
        writeln!(
            out,
            "\n{}\t (The Answer was: {})\n",
            "==== YOU LOSE! ====".red().bold(),
            hidden.text().to_uppercase().bright_yellow()
        )?;
    }
    Ok(game.state())
}

/// Prompt until a valid guess is entered; `None` at end of input
fn read_guess<'d>(
    guesses: &'d Dictionary,
    length: usize,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<&'d Word>> {
    loop {
        write!(out, "\nPlease enter a Guess: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match validate_guess(&line, guesses, length) {
            Ok(word) => return Ok(Some(word)),
            Err(GuessError::Empty) => {}
            Err(e) => writeln!(out, "\n{} {e}", "ERROR!".red().bold())?,
        }
    }
}
