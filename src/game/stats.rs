//! Aggregate statistics over many games

use super::GameRecord;
use rustc_hash::FxHashMap;

/// Win and loss tallies with turn totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub wins: u64,
    pub losses: u64,
    pub win_turns: u64,
    pub loss_turns: u64,
    /// Number of games won in exactly `n` turns
    pub distribution: FxHashMap<usize, u64>,
}

impl Stats {
    /// Tally a list of finished games
    #[must_use]
    pub fn from_records<'r>(records: impl IntoIterator<Item = &'r GameRecord>) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.record(record);
        }
        stats
    }

    pub fn record(&mut self, record: &GameRecord) {
        if record.won() {
            self.add_win(record.num_turns());
        } else {
            self.add_loss(record.num_turns());
        }
    }

    pub fn add_win(&mut self, turns: usize) {
        self.wins += 1;
        self.win_turns += turns as u64;
        *self.distribution.entry(turns).or_insert(0) += 1;
    }

    pub fn add_loss(&mut self, turns: usize) {
        self.losses += 1;
        self.loss_turns += turns as u64;
    }

    #[must_use]
    pub const fn total_games(&self) -> u64 {
        self.wins + self.losses
    }

    #[must_use]
    pub const fn total_turns(&self) -> u64 {
        self.win_turns + self.loss_turns
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_ratio(&self) -> f64 {
        100.0 * divide(self.wins, self.total_games())
    }

    #[must_use]
    pub fn loss_ratio(&self) -> f64 {
        100.0 * divide(self.losses, self.total_games())
    }

    #[must_use]
    pub fn average_turns(&self) -> f64 {
        divide(self.total_turns(), self.total_games())
    }

    #[must_use]
    pub fn average_win_turns(&self) -> f64 {
        divide(self.win_turns, self.wins)
    }

    #[must_use]
    pub fn average_loss_turns(&self) -> f64 {
        divide(self.loss_turns, self.losses)
    }

    /// Highest turn count among wins
    #[must_use]
    pub fn max_win_turns(&self) -> usize {
        self.distribution.keys().copied().max().unwrap_or(0)
    }
}

fn divide(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
