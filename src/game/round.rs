//! Round state machine
//!
//! A round owns one secret and the append-only history of scored guesses.
//! It starts `InProgress` and ends exactly once, in `Won`, `Lost`, or
//! `Aborted`. Terminal rounds reject every further mutation.

use crate::core::{Code, Score};
use std::fmt;
use thiserror::Error;
use tracing::{debug, instrument};

/// Attempts allowed per round
pub const MAX_ATTEMPTS: usize = 10;

/// Lifecycle state of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
    Aborted,
}

impl RoundState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Aborted => "aborted",
        })
    }
}

/// Misuse of a round by its caller
///
/// Never produced by player input; seeing one means the front end drove a
/// finished round.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundError {
    #[error("round is already {state}; no further moves are accepted")]
    Finished { state: RoundState },
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub score: Score,
}

/// A single play-through from fresh secret to win, loss, or abort
#[derive(Debug, Clone)]
pub struct Round {
    secret: Code,
    history: Vec<Turn>,
    state: RoundState,
}

impl Round {
    /// Start a round with the given secret and an empty history
    #[must_use]
    pub fn new(secret: Code) -> Self {
        Self {
            secret,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            state: RoundState::InProgress,
        }
    }

    /// Score a guess, record it, and advance the state
    ///
    /// # Errors
    /// Returns `RoundError::Finished` if the round has already ended. History
    /// is left untouched in that case.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    /// use mastermind::game::{Round, RoundState};
    ///
    /// let mut round = Round::new(Code::parse("1234").unwrap());
    /// let score = round.submit_guess(Code::parse("1325").unwrap()).unwrap();
    /// assert_eq!(score, Score::new(1, 2));
    ///
    /// round.submit_guess(Code::parse("1234").unwrap()).unwrap();
    /// assert_eq!(round.state(), RoundState::Won);
    /// assert!(round.submit_guess(Code::parse("5678").unwrap()).is_err());
    /// ```
    #[instrument(skip(self), fields(attempt = self.history.len() + 1))]
    pub fn submit_guess(&mut self, guess: Code) -> Result<Score, RoundError> {
        self.ensure_in_progress()?;

        let score = Score::calculate(&self.secret, &guess);
        self.history.push(Turn { guess, score });

        if score.is_perfect() {
            self.state = RoundState::Won;
        } else if self.history.len() == MAX_ATTEMPTS {
            self.state = RoundState::Lost;
        }

        debug!(
            exact = score.exact,
            color_only = score.color_only,
            state = %self.state,
            "guess recorded"
        );
        Ok(score)
    }

    /// End the round at the player's request
    ///
    /// # Errors
    /// Returns `RoundError::Finished` if the round has already ended.
    pub fn abort(&mut self) -> Result<(), RoundError> {
        self.ensure_in_progress()?;
        self.state = RoundState::Aborted;
        debug!(attempts = self.history.len(), "round aborted");
        Ok(())
    }

    fn ensure_in_progress(&self) -> Result<(), RoundError> {
        if self.state.is_terminal() {
            return Err(RoundError::Finished { state: self.state });
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Scored guesses so far, in attempt order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Number of accepted guesses
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// The secret, once the round has ended
    #[must_use]
    pub fn secret(&self) -> Option<&Code> {
        self.is_finished().then_some(&self.secret)
    }

    /// The secret regardless of state (diagnostics and tests)
    #[must_use]
    pub const fn reveal_secret(&self) -> &Code {
        &self.secret
    }
}
