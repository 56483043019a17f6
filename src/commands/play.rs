//! Single AI game
//!
//! The solver plays one game against a chosen or random hidden word.

use super::{RunConfig, Target, prepare_game};
use crate::error::Result;
use crate::game::{GameRecord, simulate};
use crate::wordlists::DictionaryKind;

/// A finished AI game with the context it was played in
#[derive(Debug, Clone)]
pub struct PlayResult {
    pub dictionary: String,
    pub word_length: usize,
    /// Valid guesses of the hidden word's length
    pub guess_count: usize,
    pub record: GameRecord,
}

/// Let the solver play a single game
///
/// # Errors
/// Dictionary errors while choosing the hidden word, or any core error
/// raised during play.
pub fn play_ai(config: &RunConfig, kind: DictionaryKind, target: &Target) -> Result<PlayResult> {
    let (hidden, guesses) = prepare_game(config, kind, target)?;
    log::info!("AI playing {kind} game against a {}-letter word", hidden.len());

    let record = simulate(&hidden, &guesses, &config.strategy, config.max_turns)?;

    Ok(PlayResult {
        dictionary: kind.display_name(Some(hidden.len())),
        word_length: hidden.len(),
        guess_count: guesses.len(),
        record,
    })
}
