//! Word collections
//!
//! `Dictionary` owns a sorted, deduplicated word list. `DictionaryView` names a
//! subset of a dictionary by index so solvers can narrow their candidates
//! without copying or mutating the shared list.

use super::Word;
use crate::error::{Result, WordleError};
use rand::Rng;
use rand::seq::IndexedRandom;

/// An alphabetically ordered set of words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary, sorting and removing duplicates
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Word at `index` in dictionary order
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    /// Look up a word by its text (case-insensitive)
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let text = text.to_ascii_lowercase();
        self.words
            .binary_search_by(|w| w.text().cmp(text.as_str()))
            .ok()
            .map(|i| &self.words[i])
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// Return the dictionary's copy of `text`, failing if it is not present
    ///
    /// # Errors
    /// `WordNotInDictionary` if no entry matches.
    pub fn require(&self, text: &str) -> Result<&Word> {
        self.find(text)
            .ok_or_else(|| WordleError::WordNotInDictionary(text.to_ascii_lowercase()))
    }

    /// Pick a uniformly random word
    ///
    /// # Errors
    /// `EmptyDictionary` if there is nothing to pick from.
    pub fn pick_random(&self) -> Result<&Word> {
        self.pick_random_with(&mut rand::rng())
    }

    /// Pick a uniformly random word using the given generator
    ///
    /// # Errors
    /// `EmptyDictionary` if there is nothing to pick from.
    pub fn pick_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word> {
        self.words.choose(rng).ok_or(WordleError::EmptyDictionary)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// An index-based subset of a shared dictionary
///
/// Indices stay in ascending order, so iteration follows dictionary order.
/// The subset can only shrink.
#[derive(Debug, Clone)]
pub struct DictionaryView<'a> {
    master: &'a Dictionary,
    indices: Vec<usize>,
}

impl<'a> DictionaryView<'a> {
    /// View every word of `master`
    #[must_use]
    pub fn new(master: &'a Dictionary) -> Self {
        Self {
            master,
            indices: (0..master.len()).collect(),
        }
    }

    /// View only the words of `master` with exactly `length` letters
    #[must_use]
    pub fn with_length(master: &'a Dictionary, length: usize) -> Self {
        let indices = master
            .iter()
            .enumerate()
            .filter(|(_, w)| w.len() == length)
            .map(|(i, _)| i)
            .collect();
        Self { master, indices }
    }

    #[inline]
    #[must_use]
    pub fn master(&self) -> &'a Dictionary {
        self.master
    }

    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Words in the view, in dictionary order
    pub fn iter(&self) -> impl Iterator<Item = &'a Word> + '_ {
        let master = self.master;
        self.indices.iter().map(move |&i| master.word(i))
    }

    /// The `n`-th word of the view
    #[must_use]
    pub fn get(&self, n: usize) -> Option<&'a Word> {
        self.indices.get(n).map(|&i| self.master.word(i))
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.iter().any(|w| w == word)
    }

    /// Keep only the words matching `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&Word) -> bool) {
        let master = self.master;
        self.indices.retain(|&i| keep(master.word(i)));
    }

    /// Pick a uniformly random word from the view
    ///
    /// # Errors
    /// `NoCandidatesRemain` if the view is empty.
    pub fn pick_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&'a Word> {
        self.indices
            .choose(rng)
            .map(|&i| self.master.word(i))
            .ok_or(WordleError::NoCandidatesRemain)
    }
}
