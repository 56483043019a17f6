//! Wordle AI
//!
//! A Wordle simulator with a letter-coverage solver and a parallel benchmark.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_ai::core::{Dictionary, Feedback, Word};
//! use wordle_ai::game::simulate;
//! use wordle_ai::solver::LetterCoverage;
//!
//! // Judge a guess
//! let hidden = Word::new("speed").unwrap();
//! let guess = Word::new("erase").unwrap();
//! let feedback = Feedback::calculate(&guess, &hidden).unwrap();
//! assert_eq!(feedback.to_string(), "-XX--");
//!
//! // Let the solver play
//! let dict = Dictionary::new(["crane", "crate", "grate"].map(|w| Word::new(w).unwrap()));
//! let record = simulate(&Word::new("crate").unwrap(), &dict, &LetterCoverage::new(), 6).unwrap();
//! assert!(record.won());
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Game state machine and statistics
pub mod game;

// Guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, WordleError};
