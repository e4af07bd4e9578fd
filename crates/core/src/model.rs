//! Game model module - the attempt state machine
//!
//! A [`GameModel`] owns the state of one round: the secret and the number of
//! attempts left. It is either [`RoundState::Playing`] (attempts left) or
//! [`RoundState::Exhausted`] (none left) until [`GameModel::reset`] starts a
//! new round.

use crate::config::Configuration;
use crate::error::{ConfigurationError, OutOfRangeError};
use crate::rng::SimpleRng;
use crate::types::DrawResult;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Playing,
    Exhausted,
}

/// Round state derived from a [`Configuration`].
#[derive(Debug, Clone)]
pub struct GameModel {
    config: Configuration,
    secret: i32,
    remaining_attempts: i32,
    rng: SimpleRng,
}

impl GameModel {
    /// Create a model with a secret seeded from the clock.
    pub fn new(config: Configuration) -> Result<Self, ConfigurationError> {
        Self::with_rng(config, SimpleRng::from_entropy())
    }

    /// Create a model whose secrets are fully determined by `seed`.
    pub fn with_seed(config: Configuration, seed: u32) -> Result<Self, ConfigurationError> {
        Self::with_rng(config, SimpleRng::new(seed))
    }

    fn with_rng(config: Configuration, mut rng: SimpleRng) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let secret = rng.next_in_range(config.minimum(), config.maximum());
        Ok(Self {
            config,
            secret,
            remaining_attempts: config.attempts(),
            rng,
        })
    }

    /// Evaluate a guess against the secret.
    ///
    /// Out-of-range guesses are rejected before the round state is looked at,
    /// and never consume an attempt. An exhausted round answers
    /// [`DrawResult::NoMoreAttempts`] without evaluating the guess.
    pub fn attempt(&mut self, guess: i32) -> Result<DrawResult, OutOfRangeError> {
        if !self.config.contains(guess) {
            return Err(OutOfRangeError {
                guess,
                minimum: self.config.minimum(),
                maximum: self.config.maximum(),
            });
        }
        if self.state() == RoundState::Exhausted {
            return Ok(DrawResult::NoMoreAttempts);
        }

        self.remaining_attempts -= 1;
        Ok(match guess.cmp(&self.secret) {
            std::cmp::Ordering::Equal => DrawResult::Correct,
            std::cmp::Ordering::Less => DrawResult::TooLow,
            std::cmp::Ordering::Greater => DrawResult::TooHigh,
        })
    }

    /// Draw a new secret and restore the attempt budget.
    pub fn reset(&mut self) {
        self.secret = self
            .rng
            .next_in_range(self.config.minimum(), self.config.maximum());
        self.remaining_attempts = self.config.attempts();
    }

    pub fn remaining_attempts(&self) -> i32 {
        self.remaining_attempts
    }

    pub fn state(&self) -> RoundState {
        if self.remaining_attempts > 0 {
            RoundState::Playing
        } else {
            RoundState::Exhausted
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }
}
