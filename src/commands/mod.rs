//! Command implementations

pub mod assist;
pub mod play;
pub mod prompt;
pub mod sim;
pub mod test_all;

pub use assist::{DEFAULT_WORD_LENGTH, assist, run_assist};
pub use play::{PlayResult, play_ai};
pub use prompt::{Command, CommandError, HELP_MESSAGE, parse_command, run_prompt};
pub use sim::{GuessError, run_sim, validate_guess};
pub use test_all::{TestAllResult, run_test_all};

use crate::core::{Dictionary, Word};
use crate::error::Result;
use crate::game::DEFAULT_MAX_TURNS;
use crate::solver::{LetterCoverage, StrategyType};
use crate::wordlists::{DictionaryKind, DictionarySource};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: DictionarySource,
    pub strategy: StrategyType,
    pub max_turns: usize,
    /// Directory the benchmark report is written to
    pub report_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source: DictionarySource::Embedded,
            strategy: StrategyType::Coverage(LetterCoverage::alternate()),
            max_turns: DEFAULT_MAX_TURNS,
            report_dir: PathBuf::from("Tests"),
        }
    }
}

/// Which hidden word a single game is played against
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Target {
    /// A random answer of any length
    #[default]
    Any,
    /// A random answer of this length
    Length(usize),
    /// This exact word, which must be a valid guess
    Word(String),
}

impl Target {
    /// Length filter to apply when loading the answer list
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::Any => None,
            Self::Length(n) => Some(*n),
            Self::Word(word) => Some(word.len()),
        }
    }
}

impl FromStr for Target {
    type Err = String;

    /// Digits give a length, letters give a word
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            s.parse()
                .map(Self::Length)
                .map_err(|e| format!("invalid length '{s}': {e}"))
        } else if !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(Self::Word(s.to_ascii_lowercase()))
        } else {
            Err(format!("invalid argument '{s}' (expected a length or a word)"))
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any length"),
            Self::Length(n) => write!(f, "length {n}"),
            Self::Word(word) => f.write_str(word),
        }
    }
}

/// Resolve `target` to a hidden word and load the guesses of its length
///
/// # Errors
/// Loader errors, `WordNotInDictionary` for an unknown target word, or
/// `EmptyDictionary` if there is no answer to pick.
fn prepare_game(
    config: &RunConfig,
    kind: DictionaryKind,
    target: &Target,
) -> Result<(Word, Dictionary)> {
    let hidden = match target {
        Target::Word(word) => Word::new(word.as_str())?,
        Target::Any | Target::Length(_) => config
            .source
            .load_answers(kind, target.length())?
            .pick_random()?
            .clone(),
    };

    let guesses = config.source.load_guesses(kind, Some(hidden.len()))?;
    guesses.require(hidden.text())?;
    Ok((hidden, guesses))
}
