//! Guess selection strategies
//!
//! Defines the `GuessSelector` trait and the runtime-selectable strategy set.

use super::coverage::LetterCoverage;
use crate::core::{ALPHABET_SIZE, DictionaryView, Word};
use crate::error::{Result, WordleError};

/// Letters proven absent from the hidden word, indexed by `letter_index`
pub type LetterSet = [bool; ALPHABET_SIZE];

/// Everything a strategy may look at when choosing a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessContext<'v, 'a> {
    /// Words still consistent with all feedback so far
    pub candidates: &'v DictionaryView<'a>,
    /// Every valid guess of the game's word length
    pub guesses: &'v DictionaryView<'a>,
    /// Guesses already made this game
    pub turn: usize,
    /// Turn cap for the game
    pub max_turns: usize,
    /// Letters known not to occur in the hidden word
    pub absent: &'v LetterSet,
}

impl GuessContext<'_, '_> {
    /// Guesses left before the turn cap, including the one being chosen
    #[must_use]
    pub const fn remaining_turns(&self) -> usize {
        self.max_turns.saturating_sub(self.turn)
    }
}

/// A strategy for selecting the next guess
pub trait GuessSelector {
    /// Select the next guess
    ///
    /// # Errors
    /// `NoCandidatesRemain` when the candidate view is empty; no selection is attempted.
    fn select_guess<'a>(&self, ctx: &GuessContext<'_, 'a>) -> Result<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Letter coverage, optionally exploring the full guess list
    Coverage(LetterCoverage),
    /// Uniformly random candidate
    Random(RandomStrategy),
}

impl GuessSelector for StrategyType {
    fn select_guess<'a>(&self, ctx: &GuessContext<'_, 'a>) -> Result<&'a Word> {
        match self {
            Self::Coverage(s) => s.select_guess(ctx),
            Self::Random(s) => s.select_guess(ctx),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 3] = ["coverage", "alternate", "random"];

    /// Create strategy from name string
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "coverage" => Some(Self::Coverage(LetterCoverage::new())),
            "alternate" => Some(Self::Coverage(LetterCoverage::alternate())),
            "random" => Some(Self::Random(RandomStrategy)),
            _ => None,
        }
    }

    /// Apply the repeat weighting option; random selection ignores it
    #[must_use]
    pub const fn with_halved_repeats(self, halve_repeats: bool) -> Self {
        match self {
            Self::Coverage(s) => Self::Coverage(s.with_halved_repeats(halve_repeats)),
            Self::Random(s) => Self::Random(s),
        }
    }
}

/// Random strategy
///
/// Samples uniformly from the remaining candidates. Baseline for comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomStrategy;

impl GuessSelector for RandomStrategy {
    fn select_guess<'a>(&self, ctx: &GuessContext<'_, 'a>) -> Result<&'a Word> {
        random_guess(ctx.candidates)
    }
}

/// Uniformly sample one candidate
///
/// # Errors
/// `NoCandidatesRemain` if the view is empty.
pub fn random_guess<'a>(candidates: &DictionaryView<'a>) -> Result<&'a Word> {
    if candidates.is_empty() {
        return Err(WordleError::NoCandidatesRemain);
    }
    candidates.pick_random_with(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(words.iter().map(|w| Word::new(*w).unwrap()))
    }

    #[test]
    fn from_name_known_and_unknown() {
        assert!(matches!(
            StrategyType::from_name("coverage"),
            Some(StrategyType::Coverage(s)) if !s.explores()
        ));
        assert!(matches!(
            StrategyType::from_name("Alternate"),
            Some(StrategyType::Coverage(s)) if s.explores()
        ));
        assert!(matches!(
            StrategyType::from_name("random"),
            Some(StrategyType::Random(_))
        ));
        assert!(StrategyType::from_name("entropy").is_none());
    }

    #[test]
    fn random_strategy_selects_from_candidates() {
        let dict = dictionary(&["crane", "slate", "irate"]);
        let guesses = DictionaryView::new(&dict);
        let mut candidates = DictionaryView::new(&dict);
        candidates.retain(|w| w.text() == "irate");

        let absent = [false; ALPHABET_SIZE];
        let ctx = GuessContext {
            candidates: &candidates,
            guesses: &guesses,
            turn: 0,
            max_turns: 6,
            absent: &absent,
        };

        for _ in 0..10 {
            assert_eq!(RandomStrategy.select_guess(&ctx).unwrap().text(), "irate");
        }
    }

    #[test]
    fn random_guess_on_empty_view_fails() {
        let dict = dictionary(&["crane"]);
        let mut view = DictionaryView::new(&dict);
        view.retain(|_| false);
        assert!(matches!(
            random_guess(&view),
            Err(WordleError::NoCandidatesRemain)
        ));
    }

    #[test]
    fn remaining_turns_saturates() {
        let dict = dictionary(&["crane"]);
        let view = DictionaryView::new(&dict);
        let absent = [false; ALPHABET_SIZE];
        let ctx = GuessContext {
            candidates: &view,
            guesses: &view,
            turn: 7,
            max_turns: 6,
            absent: &absent,
        };
        assert_eq!(ctx.remaining_turns(), 0);
    }
}
