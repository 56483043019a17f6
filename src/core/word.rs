//! Word representation
//!
//! A Word is a non-empty run of lowercase ASCII letters. Lengths vary between
//! dictionaries (the Scrabble list mixes them) but stay fixed within one game.

use std::fmt;
use thiserror::Error;

/// Size of the alphabet every word is drawn from
pub const ALPHABET_SIZE: usize = 26;

/// Longest accepted word; keeps every per-letter count within a `u8`
pub const MAX_WORD_LENGTH: usize = u8::MAX as usize;

/// A lowercase word with per-letter occurrence counts
///
/// Ordering and equality follow the text, so sorted dictionaries are alphabetical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    counts: [u8; ALPHABET_SIZE],
}

/// Error type for invalid words
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
    #[error("word has {0} letters, more than the limit of {max}", max = MAX_WORD_LENGTH)]
    TooLong(usize),
}

/// Index of a lowercase ASCII letter in the alphabet (`b'a'` is 0)
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, is not ASCII, contains
    /// anything other than letters, or is longer than [`MAX_WORD_LENGTH`].
    ///
    /// # Examples
    /// ```
    /// use wordle_ai::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }
        if text.len() > MAX_WORD_LENGTH {
            return Err(WordError::TooLong(text.len()));
        }

        text.make_ascii_lowercase();

        let mut counts = [0u8; ALPHABET_SIZE];
        for b in text.bytes() {
            counts[letter_index(b)] += 1;
        }

        Ok(Self { text, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Never true for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.bytes()[position]
    }

    /// How many times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.counts[letter_index(letter)]
        } else {
            0
        }
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.count_of(letter) > 0
    }

    /// Occurrence count of every letter, indexed by `letter_index`
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &[u8; ALPHABET_SIZE] {
        &self.counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.bytes(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_lengths_vary() {
        assert_eq!(Word::new("ox").unwrap().len(), 2);
        assert_eq!(Word::new("quixotic").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("caf\u{e9}"), Err(WordError::NonAscii));
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'c');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'a'));
        assert!(!word.has_letter(b'z'));
        assert!(!word.has_letter(b'A'));
    }

    #[test]
    fn word_length_limit() {
        let longest = Word::new("a".repeat(MAX_WORD_LENGTH)).unwrap();
        assert_eq!(longest.count_of(b'a'), u8::MAX);
        assert_eq!(
            Word::new("a".repeat(MAX_WORD_LENGTH + 1)),
            Err(WordError::TooLong(MAX_WORD_LENGTH + 1))
        );
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.count_of(b's'), 1);
        assert_eq!(word.count_of(b'e'), 2);
        assert_eq!(word.count_of(b'q'), 0);
        assert_eq!(word.letter_counts().iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_ordering_is_alphabetical() {
        let mut words = vec![
            Word::new("slate").unwrap(),
            Word::new("crane").unwrap(),
            Word::new("crab").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crab", "crane", "slate"]);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Crane".parse().unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
