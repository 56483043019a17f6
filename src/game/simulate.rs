//! Solver-driven games

use super::{Game, GameState};
use crate::core::{Dictionary, Feedback, Word};
use crate::error::Result;
use crate::solver::{GuessSelector, Solver};

/// One turn of a finished game
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub guess: String,
    pub feedback: Feedback,
    /// Candidates the solver held when it chose the guess
    pub candidates: usize,
}

/// The outcome of a finished game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub word: String,
    pub turns: Vec<TurnRecord>,
    pub state: GameState,
}

impl GameRecord {
    #[must_use]
    pub fn num_turns(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn won(&self) -> bool {
        self.state == GameState::Won
    }
}

/// Let the solver play against `hidden` until the game ends
///
/// `guesses` holds every valid guess; only words of the hidden word's
/// length are considered.
///
/// # Errors
/// Any error from the game or the solver. `NoCandidatesRemain` here means
/// the hidden word is missing from `guesses`.
///
/// # Examples
/// ```
/// use wordle_ai::core::{Dictionary, Word};
/// use wordle_ai::game::simulate;
/// use wordle_ai::solver::LetterCoverage;
///
/// let dict = Dictionary::new(["crane", "crate", "grate"].map(|w| Word::new(w).unwrap()));
/// let hidden = Word::new("grate").unwrap();
///
/// let record = simulate(&hidden, &dict, &LetterCoverage::new(), 6).unwrap();
/// assert!(record.won());
/// ```
pub fn simulate<S: GuessSelector>(
    hidden: &Word,
    guesses: &Dictionary,
    strategy: &S,
    max_turns: usize,
) -> Result<GameRecord> {
    let mut game = Game::new(hidden, max_turns)?;
    let mut solver = Solver::new(strategy, guesses, hidden.len(), max_turns)?;
    let mut turns = Vec::new();

    while !game.state().is_over() {
        let candidates = solver.candidates().len();
        let guess = solver.next_guess(game.tries())?;
        let feedback = game.make_guess(guess)?.clone();

        if !game.state().is_over() {
            solver.update(&feedback)?;
        }

        turns.push(TurnRecord {
            guess: guess.text().to_string(),
            feedback,
            candidates,
        });
    }

    log::debug!(
        "{hidden}: {:?} after {} turns",
        game.state(),
        turns.len()
    );

    Ok(GameRecord {
        word: hidden.text().to_string(),
        turns,
        state: game.state(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordleError;
    use crate::solver::{LetterCoverage, RandomStrategy, StrategyType};
    use crate::wordlists::{DictionaryKind, DictionarySource};

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(words.iter().map(|w| Word::new(*w).unwrap()))
    }

    #[test]
    fn records_every_turn() {
        let dict = dictionary(&["crane", "crate", "grate", "irate", "slate"]);
        let hidden = Word::new("slate").unwrap();

        let record = simulate(&hidden, &dict, &LetterCoverage::new(), 6).unwrap();

        assert!(record.won());
        assert_eq!(record.word, "slate");
        assert_eq!(record.turns.last().unwrap().guess, "slate");
        assert_eq!(record.turns[0].candidates, 5);
        for pair in record.turns.windows(2) {
            assert!(pair[1].candidates < pair[0].candidates);
        }
    }

    #[test]
    fn cap_of_one_loses_unless_lucky() {
        let dict = dictionary(&["crane", "crate", "grate"]);
        let hidden = Word::new("grate").unwrap();

        // coverage opens with crate against these three
        let record = simulate(&hidden, &dict, &LetterCoverage::new(), 1).unwrap();
        assert_eq!(record.state, GameState::LimitReached);
        assert_eq!(record.num_turns(), 1);
    }

    #[test]
    fn missing_hidden_word_is_an_error() {
        let dict = dictionary(&["crane", "crate"]);
        let hidden = Word::new("fuzzy").unwrap();
        let result = simulate(&hidden, &dict, &LetterCoverage::new(), 6);
        assert!(matches!(result, Err(WordleError::NoCandidatesRemain)));
    }

    #[test]
    fn random_strategy_wins_with_enough_turns() {
        let dict = dictionary(&["crane", "crate", "grate", "irate", "slate"]);
        let hidden = Word::new("irate").unwrap();
        for _ in 0..20 {
            let record = simulate(&hidden, &dict, &RandomStrategy, dict.len()).unwrap();
            assert!(record.won());
        }
    }

    #[test]
    fn every_bundled_answer_finishes_within_the_cap() {
        let source = DictionarySource::Embedded;
        let answers = source.load_answers(DictionaryKind::Wordle, Some(5)).unwrap();
        let guesses = source.load_guesses(DictionaryKind::Wordle, Some(5)).unwrap();

        for name in StrategyType::NAMES {
            let strategy = StrategyType::from_name(name).unwrap();
            for hidden in answers.iter().step_by(7) {
                let record = simulate(hidden, &guesses, &strategy, 6).unwrap();
                assert!((1..=6).contains(&record.num_turns()), "{name} on {hidden}");
                assert!(record.state.is_over());
                assert_eq!(record.won(), record.turns.last().unwrap().feedback.is_won());
            }
        }
    }
}
