//! Candidate filtering
//!
//! Turns one round of feedback into letter constraints and removes every
//! candidate that could not have produced that feedback. Filters compose
//! across turns because each only ever removes words.

use super::word::{ALPHABET_SIZE, letter_index};
use super::{DictionaryView, Feedback, LetterFeedback, Status, Word};
use crate::error::{Result, WordleError};

/// Constraints implied by a single feedback sequence
///
/// For a letter `L` with `n` non-absent marks in the feedback:
/// - `Correct` at `i`: `L` must sit at `i`, and `L` occurs at least `n` times
/// - `Present` at `i`: `L` must not sit at `i`, and `L` occurs at least `n` times
/// - `Absent` at `i`: `L` must not sit at `i`, and `L` occurs exactly `n` times
#[derive(Debug, Clone)]
pub struct FeedbackFilter {
    entries: Vec<LetterFeedback>,
    min_counts: [u8; ALPHABET_SIZE],
    exact: [bool; ALPHABET_SIZE],
}

impl FeedbackFilter {
    #[must_use]
    pub fn new(feedback: &Feedback) -> Self {
        let mut min_counts = [0u8; ALPHABET_SIZE];
        let mut exact = [false; ALPHABET_SIZE];

        for entry in feedback.entries() {
            let slot = letter_index(entry.letter);
            match entry.status {
                Status::Correct | Status::Present => min_counts[slot] += 1,
                Status::Absent => exact[slot] = true,
            }
        }

        Self {
            entries: feedback.entries().to_vec(),
            min_counts,
            exact,
        }
    }

    /// Whether `word` is consistent with the feedback
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if word.len() != self.entries.len() {
            return false;
        }

        let positions_ok = self
            .entries
            .iter()
            .zip(word.bytes())
            .all(|(entry, &actual)| match entry.status {
                Status::Correct => actual == entry.letter,
                Status::Present | Status::Absent => actual != entry.letter,
            });

        positions_ok
            && self.entries.iter().all(|entry| {
                let slot = letter_index(entry.letter);
                let count = word.count_of(entry.letter);
                if self.exact[slot] {
                    count == self.min_counts[slot]
                } else {
                    count >= self.min_counts[slot]
                }
            })
    }
}

/// Whether `word` could be the hidden word given `feedback`
#[must_use]
pub fn is_consistent(word: &Word, feedback: &Feedback) -> bool {
    FeedbackFilter::new(feedback).matches(word)
}

/// Remove every candidate inconsistent with `feedback`
///
/// # Errors
/// `NoCandidatesRemain` if nothing survives. The view is left empty in that case.
pub fn narrow(candidates: &mut DictionaryView<'_>, feedback: &Feedback) -> Result<()> {
    let filter = FeedbackFilter::new(feedback);
    candidates.retain(|word| filter.matches(word));

    if candidates.is_empty() {
        Err(WordleError::NoCandidatesRemain)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    const WORDS: &[&str] = &[
        "alloy", "atoll", "cello", "crane", "crate", "eerie", "erase", "geese", "grate", "lolly",
        "llama", "sleep", "speed", "spree", "steed", "there", "three", "tweed", "emcee", "fluff",
    ];

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(words.iter().map(|w| Word::new(*w).unwrap()))
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn feedback(guess: &str, hidden: &str) -> Feedback {
        Feedback::calculate(&word(guess), &word(hidden)).unwrap()
    }

    fn texts(view: &DictionaryView<'_>) -> Vec<String> {
        view.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn crane_against_crate_leaves_only_crate() {
        let dict = dictionary(&["crane", "crate", "grate"]);
        let mut view = DictionaryView::new(&dict);

        let fb = feedback("crane", "crate");
        assert_eq!(fb.to_string(), "OOOXO");

        narrow(&mut view, &fb).unwrap();
        assert_eq!(texts(&view), ["crate"]);
    }

    #[test]
    fn absent_duplicate_caps_letter_count() {
        // 'l' scored present, correct and absent: hidden word has exactly two l's
        let fb = feedback("lolly", "alloy");
        assert!(is_consistent(&word("alloy"), &fb));
        assert!(!is_consistent(&word("lolly"), &fb));
        assert!(!is_consistent(&word("llama"), &fb));
    }

    #[test]
    fn present_requires_letter_elsewhere() {
        let fb = Feedback::parse(&word("crane"), "-XXXX").unwrap();
        assert!(is_consistent(&word("topic"), &fb));
        assert!(!is_consistent(&word("cobol"), &fb)); // 'c' at the rejected position
        assert!(!is_consistent(&word("bloom"), &fb)); // no 'c' at all
    }

    #[test]
    fn wrong_length_words_are_removed() {
        let fb = feedback("crane", "crate");
        assert!(!is_consistent(&word("crates"), &fb));
    }

    #[test]
    fn true_answer_always_survives() {
        for hidden in WORDS {
            for guess in WORDS {
                let fb = feedback(guess, hidden);
                assert!(
                    is_consistent(&word(hidden), &fb),
                    "guess={guess} eliminated hidden={hidden} with {fb}"
                );
            }
        }
    }

    #[test]
    fn filter_agrees_with_recomputed_feedback() {
        // a candidate survives exactly when it would have produced the same feedback
        for hidden in WORDS {
            for guess in WORDS {
                let fb = feedback(guess, hidden);
                for candidate in WORDS {
                    assert_eq!(
                        is_consistent(&word(candidate), &fb),
                        feedback(guess, candidate) == fb,
                        "guess={guess}, hidden={hidden}, candidate={candidate}"
                    );
                }
            }
        }
    }

    #[test]
    fn narrowing_is_idempotent_and_monotone() {
        let dict = dictionary(WORDS);
        for hidden in ["speed", "alloy", "three"] {
            for guess in ["erase", "lolly", "steed"] {
                let fb = feedback(guess, hidden);

                let mut once = DictionaryView::new(&dict);
                narrow(&mut once, &fb).unwrap();
                assert!(once.len() <= dict.len());

                let mut twice = once.clone();
                narrow(&mut twice, &fb).unwrap();
                assert_eq!(once.indices(), twice.indices());
            }
        }
    }

    #[test]
    fn narrowing_to_nothing_is_an_error() {
        let dict = dictionary(&["crane", "grate"]);
        let mut view = DictionaryView::new(&dict);
        let fb = feedback("crane", "crate");

        assert!(matches!(
            narrow(&mut view, &fb),
            Err(WordleError::NoCandidatesRemain)
        ));
        assert!(view.is_empty());
    }
}
