//! Error types shared by the simulator, the filter and the solver

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::WordError;

/// Everything that can go wrong inside the game core or while loading word lists
#[derive(Error, Debug)]
pub enum WordleError {
    /// The guess and the hidden word differ in length
    #[error("guess has {guess} letters but the hidden word has {hidden}")]
    InvalidGuessLength { guess: usize, hidden: usize },

    /// A dictionary was required to hold at least one word
    #[error("empty dictionary was given")]
    EmptyDictionary,

    /// Filtering removed every candidate, so the answer was excluded
    #[error("no candidate words remain")]
    NoCandidatesRemain,

    /// A dictionary file could not be opened or read
    #[error("unable to open dictionary file '{}'", path.display())]
    DictionaryLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No word of the requested length exists in the source list
    #[error("dictionary does not contain any words{}", length_suffix(*.0))]
    NoMatchingWords(Option<usize>),

    /// A dictionary token contains something other than ASCII letters
    #[error("irregular characters found in dictionary word '{0}'")]
    IrregularWord(String),

    /// A requested word is not part of the dictionary
    #[error("\"{0}\" could not be found in dictionary")]
    WordNotInDictionary(String),

    /// A guess was made after the game had already ended
    #[error("the game is already over")]
    GameOver,

    /// A turn cap of zero was configured
    #[error("turn cap must allow at least one guess")]
    InvalidTurnCap,

    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

fn length_suffix(length: Option<usize>) -> String {
    length.map_or_else(String::new, |n| format!(" of length {n}"))
}

pub type Result<T, E = WordleError> = std::result::Result<T, E>;
