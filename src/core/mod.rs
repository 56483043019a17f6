//! Core domain types for Wordle
//!
//! Words, dictionaries, feedback and candidate filtering. Nothing in here
//! performs I/O; everything is pure and deterministic apart from explicit
//! random picks.

mod dictionary;
mod feedback;
pub mod filter;
mod word;

pub use dictionary::{Dictionary, DictionaryView};
pub use feedback::{Feedback, LetterFeedback, Status};
pub use filter::{FeedbackFilter, narrow};
pub use word::{ALPHABET_SIZE, MAX_WORD_LENGTH, Word, WordError, letter_index};
