//! Wordle solving algorithms
//!
//! A [`Solver`] tracks one game's candidates; a [`GuessSelector`] picks each
//! guess from them.

pub mod coverage;
mod engine;
pub mod strategy;

pub use coverage::LetterCoverage;
pub use engine::Solver;
pub use strategy::{GuessContext, GuessSelector, LetterSet, RandomStrategy, StrategyType, random_guess};
