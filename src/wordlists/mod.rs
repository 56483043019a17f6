//! Word lists for the simulator and solver
//!
//! Two dictionary kinds exist. Each can come from the lists embedded at build
//! time or from a directory holding files with the same names.

pub mod loader;

use crate::core::Dictionary;
use crate::error::Result;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// Lists generated by the build script
include!(concat!(env!("OUT_DIR"), "/wordle_answers.rs"));
include!(concat!(env!("OUT_DIR"), "/wordle_guesses.rs"));
include!(concat!(env!("OUT_DIR"), "/scrabble.rs"));

/// Which word list family to play with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DictionaryKind {
    /// Five-letter answers and guesses from the Wordle site
    #[default]
    Wordle,
    /// The Scrabble list, words of many lengths
    Scrabble,
}

impl DictionaryKind {
    pub const ALL: [Self; 2] = [Self::Wordle, Self::Scrabble];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wordle => "wordle",
            Self::Scrabble => "scrabble",
        }
    }

    /// Human readable title, e.g. `"Wordle Dictionary - 5"`
    #[must_use]
    pub fn display_name(self, length: Option<usize>) -> String {
        let length = length.map_or_else(|| "All".to_string(), |n| n.to_string());
        match self {
            Self::Wordle => format!("Wordle Dictionary - {length}"),
            Self::Scrabble => format!("Scrabble Dictionary - {length}"),
        }
    }

    const fn answers_file(self) -> &'static str {
        match self {
            Self::Wordle => "wordle-answers.txt",
            Self::Scrabble => "scrabble-dict.txt",
        }
    }

    const fn guesses_file(self) -> &'static str {
        match self {
            Self::Wordle => "wordle-guesses.txt",
            Self::Scrabble => "scrabble-dict.txt",
        }
    }

    const fn embedded_answers(self) -> &'static [&'static str] {
        match self {
            Self::Wordle => WORDLE_ANSWERS,
            Self::Scrabble => SCRABBLE,
        }
    }

    const fn embedded_guesses(self) -> &'static [&'static str] {
        match self {
            Self::Wordle => WORDLE_GUESSES,
            Self::Scrabble => SCRABBLE,
        }
    }
}

impl fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DictionaryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("invalid dictionary '{s}' (expected wordle or scrabble)"))
    }
}

/// Where dictionary words are read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DictionarySource {
    /// Lists compiled into the binary
    #[default]
    Embedded,
    /// A directory containing the dictionary text files
    Directory(PathBuf),
}

impl DictionarySource {
    /// Load the words that can be chosen as the hidden word
    ///
    /// # Errors
    /// Propagates loader errors; see [`loader::load_from_file`].
    pub fn load_answers(&self, kind: DictionaryKind, length: Option<usize>) -> Result<Dictionary> {
        self.load(kind.answers_file(), kind.embedded_answers(), length)
    }

    /// Load the words that are valid guesses
    ///
    /// # Errors
    /// Propagates loader errors; see [`loader::load_from_file`].
    pub fn load_guesses(&self, kind: DictionaryKind, length: Option<usize>) -> Result<Dictionary> {
        self.load(kind.guesses_file(), kind.embedded_guesses(), length)
    }

    fn load(
        &self,
        file_name: &str,
        embedded: &'static [&'static str],
        length: Option<usize>,
    ) -> Result<Dictionary> {
        match self {
            Self::Embedded => loader::parse_words(embedded.iter().copied(), length, false),
            Self::Directory(dir) => loader::load_from_file(dir.join(file_name), length, false),
        }
    }
}
