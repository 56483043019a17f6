//! Wordle feedback calculation and representation
//!
//! Feedback is one `(letter, status)` entry per guess position:
//! - `Absent` (no unclaimed copy of the letter in the hidden word)
//! - `Present` (letter in the hidden word, wrong position)
//! - `Correct` (letter in the correct position)
//!
//! Statuses are ordered `Absent < Present < Correct`.

use super::word::{ALPHABET_SIZE, Word, letter_index};
use crate::error::{Result, WordleError};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Absent,
    Present,
    Correct,
}

impl Status {
    /// Compact console glyph: `X` absent, `-` present, `O` correct
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'X',
            Self::Present => '-',
            Self::Correct => 'O',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Parse one feedback character
    ///
    /// Accepts the console glyphs, Wordle colour initials and emoji.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'O' | 'o' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            '-' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            'X' | 'x' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// A guessed letter together with its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterFeedback {
    pub letter: u8,
    pub status: Status,
}

/// Feedback for a whole guess, index-aligned to the guess letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    entries: Vec<LetterFeedback>,
}

impl Feedback {
    /// Calculate the feedback when `guess` is played against `hidden`
    ///
    /// Implements Wordle's rules including duplicate letters: a letter that
    /// occurs `k` times in the hidden word earns at most `k` non-absent marks.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches `Correct` and consume them
    /// 2. Second pass: left to right, mark `Present` while unconsumed copies remain
    ///
    /// # Errors
    /// `InvalidGuessLength` if the two words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_ai::core::{Feedback, Word};
    ///
    /// let hidden = Word::new("alloy").unwrap();
    /// let guess = Word::new("lolly").unwrap();
    /// let feedback = Feedback::calculate(&guess, &hidden).unwrap();
    ///
    /// assert_eq!(feedback.to_string(), "--OXO");
    /// ```
    pub fn calculate(guess: &Word, hidden: &Word) -> Result<Self> {
        if guess.len() != hidden.len() {
            return Err(WordleError::InvalidGuessLength {
                guess: guess.len(),
                hidden: hidden.len(),
            });
        }

        let mut remaining: [u8; ALPHABET_SIZE] = *hidden.letter_counts();
        let mut entries: Vec<LetterFeedback> = guess
            .bytes()
            .iter()
            .map(|&letter| LetterFeedback {
                letter,
                status: Status::Absent,
            })
            .collect();

        for (entry, &actual) in entries.iter_mut().zip(hidden.bytes()) {
            if entry.letter == actual {
                entry.status = Status::Correct;
                remaining[letter_index(actual)] -= 1;
            }
        }

        for entry in entries
            .iter_mut()
            .filter(|entry| entry.status != Status::Correct)
        {
            let left = &mut remaining[letter_index(entry.letter)];
            if *left > 0 {
                entry.status = Status::Present;
                *left -= 1;
            }
        }

        Ok(Self { entries })
    }

    /// Build feedback from statuses reported for a guess (e.g. typed by a human)
    ///
    /// # Errors
    /// `InvalidGuessLength` if the number of statuses differs from the guess length.
    pub fn from_statuses(guess: &Word, statuses: &[Status]) -> Result<Self> {
        if guess.len() != statuses.len() {
            return Err(WordleError::InvalidGuessLength {
                guess: statuses.len(),
                hidden: guess.len(),
            });
        }

        let entries = guess
            .bytes()
            .iter()
            .zip(statuses)
            .map(|(&letter, &status)| LetterFeedback { letter, status })
            .collect();

        Ok(Self { entries })
    }

    /// Parse feedback text like `"O-XXO"` or `"🟩🟨⬜⬜🟩"` for the given guess
    ///
    /// Returns `None` if a character is not a feedback glyph or the length is wrong.
    #[must_use]
    pub fn parse(guess: &Word, text: &str) -> Option<Self> {
        let statuses: Option<Vec<Status>> = text.trim().chars().map(Status::from_char).collect();
        Self::from_statuses(guess, &statuses?).ok()
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[LetterFeedback] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every letter is `Correct`
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.entries.iter().all(|e| e.status == Status::Correct)
    }

    /// Number of `Correct` or `Present` marks carried by `letter`
    #[must_use]
    pub fn non_absent_count(&self, letter: u8) -> usize {
        self.entries
            .iter()
            .filter(|e| e.letter == letter && e.status != Status::Absent)
            .count()
    }

    /// Emoji rendering, e.g. `"🟩🟨⬜⬜🟩"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.entries.iter().map(|e| e.status.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{}", entry.status.symbol())?;
        }
        Ok(())
    }
}
