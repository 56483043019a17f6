//! Word list loading utilities
//!
//! Dictionary files are plain text holding whitespace-separated words, any
//! number per line. Every token of the requested length must be purely
//! alphabetic; tokens of other lengths are skipped without inspection.

use crate::core::{Dictionary, Word, WordError};
use crate::error::{Result, WordleError};
use std::fs;
use std::path::Path;

/// Build a dictionary from raw tokens
///
/// `length` of `None` keeps words of every length. Words are lowercased,
/// sorted and deduplicated.
///
/// # Errors
/// - `IrregularWord` if a token of the requested length is not alphabetic
/// - `InvalidWord` if a token is longer than [`MAX_WORD_LENGTH`](crate::core::MAX_WORD_LENGTH)
/// - `NoMatchingWords` if nothing matched and `allow_empty` is false
///
/// # Examples
/// ```
/// use wordle_ai::wordlists::loader::parse_words;
///
/// let dict = parse_words("Crane slate\nox".split_whitespace(), Some(5), false).unwrap();
/// assert_eq!(dict.len(), 2);
/// assert!(dict.contains("crane"));
/// ```
pub fn parse_words<'t>(
    tokens: impl IntoIterator<Item = &'t str>,
    length: Option<usize>,
    allow_empty: bool,
) -> Result<Dictionary> {
    let words = tokens
        .into_iter()
        .filter(|token| length.is_none_or(|n| token.len() == n))
        .map(|token| {
            Word::new(token).map_err(|e| match e {
                WordError::TooLong(_) => WordleError::InvalidWord(e),
                _ => WordleError::IrregularWord(token.to_string()),
            })
        })
        .collect::<Result<Vec<Word>>>()?;

    if words.is_empty() && !allow_empty {
        return Err(WordleError::NoMatchingWords(length));
    }

    Ok(Dictionary::new(words))
}

/// Load a dictionary from a file
///
/// # Errors
///
/// `DictionaryLoad` if the file cannot be read, otherwise the errors of
/// [`parse_words`].
///
/// # Examples
/// ```no_run
/// use wordle_ai::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("data/wordle-answers.txt", Some(5), false).unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    length: Option<usize>,
    allow_empty: bool,
) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordleError::DictionaryLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let dict = parse_words(content.split_whitespace(), length, allow_empty)?;
    log::debug!("loaded {} words from {}", dict.len(), path.display());
    Ok(dict)
}
