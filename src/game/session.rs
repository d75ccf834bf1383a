//! Multi-round play session
//!
//! Ties the generator to a sequence of rounds and keeps running statistics.
//! Only one round is active at a time; starting a new one discards the old.

use super::{CodeGenerator, Round, RoundError, RoundState};
use crate::core::{Code, Score};
use rustc_hash::FxHashMap;
use tracing::info;

/// Results across all rounds of a session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub rounds_lost: usize,
    pub rounds_aborted: usize,
    /// Winning attempt count -> number of wins
    pub guess_distribution: FxHashMap<usize, usize>,
}

impl Statistics {
    /// Count a finished round
    pub fn record(&mut self, round: &Round) {
        match round.state() {
            RoundState::InProgress => return,
            RoundState::Won => {
                self.rounds_won += 1;
                *self.guess_distribution.entry(round.attempts()).or_insert(0) += 1;
            }
            RoundState::Lost => self.rounds_lost += 1,
            RoundState::Aborted => self.rounds_aborted += 1,
        }
        self.rounds_played += 1;
    }

    /// Percentage of played rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }

    /// Mean attempts over won rounds
    #[must_use]
    pub fn average_winning_attempts(&self) -> Option<f64> {
        if self.rounds_won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .map(|(attempts, count)| attempts * count)
            .sum();
        Some(total as f64 / self.rounds_won as f64)
    }
}

/// Active round plus everything that outlives it
pub struct Session {
    generator: CodeGenerator,
    round: Round,
    stats: Statistics,
}

impl Session {
    /// Start a session; the first round begins immediately
    #[must_use]
    pub fn new(mut generator: CodeGenerator) -> Self {
        let round = Round::new(generator.generate());
        info!("session started");
        Self {
            generator,
            round,
            stats: Statistics::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Replace the current round with a fresh one
    ///
    /// Always draws a new secret. A round abandoned while still in progress is
    /// counted as aborted.
    pub fn new_round(&mut self) {
        if !self.round.is_finished() && self.round.abort().is_ok() {
            self.stats.record(&self.round);
        }
        self.round = Round::new(self.generator.generate());
        info!(round = self.stats.rounds_played + 1, "new round");
    }

    /// Submit a guess to the active round
    ///
    /// # Errors
    /// Returns `RoundError::Finished` if the active round has ended.
    pub fn submit_guess(&mut self, guess: Code) -> Result<Score, RoundError> {
        let score = self.round.submit_guess(guess)?;
        if self.round.is_finished() {
            self.stats.record(&self.round);
            info!(state = %self.round.state(), attempts = self.round.attempts(), "round over");
        }
        Ok(score)
    }

    /// Abort the active round
    ///
    /// # Errors
    /// Returns `RoundError::Finished` if the active round has ended.
    pub fn abort(&mut self) -> Result<(), RoundError> {
        self.round.abort()?;
        self.stats.record(&self.round);
        Ok(())
    }
}
