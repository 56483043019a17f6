//! Letter-coverage guess scoring
//!
//! Each letter is weighted by how often it occurs across the remaining
//! candidates. A word scores the sum of the weights of its distinct letters,
//! so guesses that test many common letters at once win. Scores are kept in
//! half-units to allow repeats to count half without floating point.
//!
//! The alternate mode is an approximation of information gain, not an
//! entropy-optimal choice: while turns are plentiful relative to the number
//! of candidates it scores every valid guess, weighting only letters that
//! still split the candidates.

use super::strategy::{GuessContext, GuessSelector, LetterSet};
use crate::core::{ALPHABET_SIZE, DictionaryView, Word, letter_index};
use crate::error::{Result, WordleError};
use rayon::prelude::*;
use std::cmp::Reverse;

/// Per-letter weights indexed by `letter_index`
pub type LetterWeights = [u64; ALPHABET_SIZE];

/// Letter-coverage strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCoverage {
    explore: bool,
    halve_repeats: bool,
}

impl LetterCoverage {
    /// Score candidates only
    #[must_use]
    pub const fn new() -> Self {
        Self {
            explore: false,
            halve_repeats: false,
        }
    }

    /// Score the full guess list while many candidates remain
    #[must_use]
    pub const fn alternate() -> Self {
        Self {
            explore: true,
            halve_repeats: false,
        }
    }

    /// Count every repeat of a letter at half its weight
    #[must_use]
    pub const fn with_halved_repeats(mut self, halve_repeats: bool) -> Self {
        self.halve_repeats = halve_repeats;
        self
    }

    #[must_use]
    pub const fn explores(&self) -> bool {
        self.explore
    }

    #[must_use]
    pub const fn halves_repeats(&self) -> bool {
        self.halve_repeats
    }

    /// Whether this turn should be spent gathering information
    ///
    /// True while more than one turn remains and the candidates outnumber
    /// the remaining turns.
    #[must_use]
    pub fn should_explore(&self, ctx: &GuessContext<'_, '_>) -> bool {
        let remaining = ctx.remaining_turns();
        self.explore && remaining > 1 && ctx.candidates.len() > remaining
    }
}

impl GuessSelector for LetterCoverage {
    fn select_guess<'a>(&self, ctx: &GuessContext<'_, 'a>) -> Result<&'a Word> {
        let candidates = ctx.candidates;
        if candidates.is_empty() {
            return Err(WordleError::NoCandidatesRemain);
        }
        if candidates.len() == 1 {
            return candidates.get(0).ok_or(WordleError::NoCandidatesRemain);
        }

        if self.should_explore(ctx) {
            let weights = exploration_weights(candidates, ctx.absent);
            if let Some((word, score)) = best_by_coverage(ctx.guesses, &weights, self.halve_repeats)
                && score > 0
            {
                log::debug!(
                    "exploring with '{word}' ({} candidates, {} turns left)",
                    candidates.len(),
                    ctx.remaining_turns()
                );
                return Ok(word);
            }
        }

        let weights = letter_weights(candidates.iter());
        best_by_coverage(candidates, &weights, self.halve_repeats)
            .map(|(word, _)| word)
            .ok_or(WordleError::NoCandidatesRemain)
    }
}

/// Count letter occurrences across `words`
#[must_use]
pub fn letter_weights<'w>(words: impl IntoIterator<Item = &'w Word>) -> LetterWeights {
    let mut weights = [0u64; ALPHABET_SIZE];
    for word in words {
        for &letter in word.bytes() {
            weights[letter_index(letter)] += 1;
        }
    }
    weights
}

/// Weights for scoring guesses that need not be candidates
///
/// Letters proven absent weigh nothing, and neither do letters found in every
/// candidate since testing them cannot split the candidates.
#[must_use]
pub fn exploration_weights(candidates: &DictionaryView<'_>, absent: &LetterSet) -> LetterWeights {
    let mut weights = letter_weights(candidates.iter());
    let mut containing = [0usize; ALPHABET_SIZE];
    for word in candidates.iter() {
        for (slot, &count) in word.letter_counts().iter().enumerate() {
            if count > 0 {
                containing[slot] += 1;
            }
        }
    }

    for slot in 0..ALPHABET_SIZE {
        if absent[slot] || containing[slot] == candidates.len() {
            weights[slot] = 0;
        }
    }
    weights
}

/// Score a word in half-units
///
/// Each distinct letter adds twice its weight. With `halve_repeats` every
/// further occurrence adds its weight once more; otherwise repeats add nothing.
#[must_use]
pub fn coverage_score(word: &Word, weights: &LetterWeights, halve_repeats: bool) -> u64 {
    word.letter_counts()
        .iter()
        .zip(weights)
        .filter(|&(&count, _)| count > 0)
        .map(|(&count, &weight)| {
            let repeats = if halve_repeats { u64::from(count - 1) } else { 0 };
            weight * 2 + weight * repeats
        })
        .sum()
}

/// Highest scoring word of `pool` with its score
///
/// Ties go to the word that comes first in dictionary order. Returns `None`
/// if the pool is empty.
#[must_use]
pub fn best_by_coverage<'a>(
    pool: &DictionaryView<'a>,
    weights: &LetterWeights,
    halve_repeats: bool,
) -> Option<(&'a Word, u64)> {
    let master = pool.master();
    pool.indices()
        .par_iter()
        .map(|&index| (index, coverage_score(master.word(index), weights, halve_repeats)))
        .max_by_key(|&(index, score)| (score, Reverse(index)))
        .map(|(index, score)| (master.word(index), score))
}
