//! Game simulation
//!
//! A [`Game`] holds one hidden word and judges guesses against it until the
//! word is found or the turn cap is hit. [`simulate`] lets a solver play a
//! game to the end, and [`Stats`] aggregates many finished games.

mod simulate;
mod stats;

pub use simulate::{GameRecord, TurnRecord, simulate};
pub use stats::Stats;

use crate::core::{Feedback, Word};
use crate::error::{Result, WordleError};

/// Turn cap of the classic game
pub const DEFAULT_MAX_TURNS: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    /// The last guess matched the hidden word
    Won,
    /// The turn cap was reached without a match
    LimitReached,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One game against a fixed hidden word
#[derive(Debug, Clone)]
pub struct Game<'a> {
    hidden: &'a Word,
    max_turns: usize,
    history: Vec<Feedback>,
    state: GameState,
}

impl<'a> Game<'a> {
    /// Start a game
    ///
    /// # Errors
    /// `InvalidTurnCap` if `max_turns` is zero.
    pub fn new(hidden: &'a Word, max_turns: usize) -> Result<Self> {
        if max_turns == 0 {
            return Err(WordleError::InvalidTurnCap);
        }
        Ok(Self {
            hidden,
            max_turns,
            history: Vec::with_capacity(max_turns),
            state: GameState::InProgress,
        })
    }

    /// Judge a guess and advance the game
    ///
    /// A guess of the wrong length is rejected without using up a turn.
    ///
    /// # Errors
    /// - `GameOver` if the game already finished
    /// - `InvalidGuessLength` if `guess` and the hidden word differ in length
    pub fn make_guess(&mut self, guess: &Word) -> Result<&Feedback> {
        if self.state.is_over() {
            return Err(WordleError::GameOver);
        }

        let feedback = Feedback::calculate(guess, self.hidden)?;
        self.state = if feedback.is_won() {
            GameState::Won
        } else if self.history.len() + 1 >= self.max_turns {
            GameState::LimitReached
        } else {
            GameState::InProgress
        };
        self.history.push(feedback);

        Ok(&self.history[self.history.len() - 1])
    }

    #[must_use]
    pub const fn hidden(&self) -> &'a Word {
        self.hidden
    }

    /// Guesses made so far
    #[must_use]
    pub fn tries(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.hidden.len()
    }
}
