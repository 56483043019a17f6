//! Main Wordle solver interface

use super::strategy::{GuessContext, GuessSelector, LetterSet};
use crate::core::{
    ALPHABET_SIZE, Dictionary, DictionaryView, Feedback, Status, Word, letter_index, narrow,
};
use crate::error::{Result, WordleError};

/// Per-game Wordle AI
///
/// Holds the working candidate view for one hidden word and asks the
/// strategy for a guess each turn. Feedback only ever shrinks the view, and
/// the shared dictionary is never touched.
#[derive(Debug, Clone)]
pub struct Solver<'a, S: GuessSelector> {
    strategy: &'a S,
    guesses: DictionaryView<'a>,
    candidates: DictionaryView<'a>,
    absent: LetterSet,
    max_turns: usize,
}

impl<'a, S: GuessSelector> Solver<'a, S> {
    /// Create a solver for a hidden word of `word_length` letters
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `dictionary`: All valid guesses, of any length
    /// - `word_length`: Length of the hidden word
    /// - `max_turns`: Turn cap for the game
    ///
    /// # Errors
    /// `EmptyDictionary` if no word of `word_length` letters exists.
    pub fn new(
        strategy: &'a S,
        dictionary: &'a Dictionary,
        word_length: usize,
        max_turns: usize,
    ) -> Result<Self> {
        let guesses = DictionaryView::with_length(dictionary, word_length);
        if guesses.is_empty() {
            return Err(WordleError::EmptyDictionary);
        }

        Ok(Self {
            strategy,
            candidates: guesses.clone(),
            guesses,
            absent: [false; ALPHABET_SIZE],
            max_turns,
        })
    }

    /// Words still consistent with every feedback seen
    #[must_use]
    pub const fn candidates(&self) -> &DictionaryView<'a> {
        &self.candidates
    }

    /// Letters proven absent so far
    #[must_use]
    pub const fn absent_letters(&self) -> &LetterSet {
        &self.absent
    }

    /// Choose the guess for turn `turn` (zero-based)
    ///
    /// # Errors
    /// `NoCandidatesRemain` if feedback has eliminated every word.
    pub fn next_guess(&self, turn: usize) -> Result<&'a Word> {
        let ctx = GuessContext {
            candidates: &self.candidates,
            guesses: &self.guesses,
            turn,
            max_turns: self.max_turns,
            absent: &self.absent,
        };
        self.strategy.select_guess(&ctx)
    }

    /// Narrow the candidates with one round of feedback
    ///
    /// A letter counts as absent only when every one of its marks in the
    /// feedback is `Absent`.
    ///
    /// # Errors
    /// `NoCandidatesRemain` if no candidate survives.
    pub fn update(&mut self, feedback: &Feedback) -> Result<()> {
        for entry in feedback.entries() {
            if entry.status == Status::Absent && feedback.non_absent_count(entry.letter) == 0 {
                self.absent[letter_index(entry.letter)] = true;
            }
        }

        let before = self.candidates.len();
        narrow(&mut self.candidates, feedback)?;
        log::debug!(
            "{feedback}: {before} -> {} candidates",
            self.candidates.len()
        );
        Ok(())
    }
}
