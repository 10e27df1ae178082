//! Game state: the guess-evaluation state machine.
//!
//! ## Phases
//!
//! - `Active`: attempts remain and the secret has not been found
//! - `Finished`: the secret was found, or the attempts ran out
//!
//! `Finished` is terminal until `reset`, which draws a fresh secret and
//! restores the attempt budget.
//!
//! ## Attempts
//!
//! Only scored guesses consume an attempt. A guess outside the bounds and a
//! guess submitted after the session finished leave the state untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::config::{Bounds, Configuration};
use super::outcome::Outcome;
use super::rng::GameRng;
use crate::error::GuessError;

/// Session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Guesses are being scored.
    Active,
    /// No further guesses are scored until `reset`.
    Finished,
}

/// One guessing session.
///
/// Owns the secret, the bounds, and the remaining-attempts counter.
#[derive(Clone, Debug)]
pub struct DrawNumber {
    bounds: Bounds,
    attempts: u32,
    secret: i64,
    remaining_attempts: u32,
    phase: Phase,
    rng: GameRng,
}

impl DrawNumber {
    /// Start a session from a validated configuration.
    #[must_use]
    pub fn new(config: &Configuration, mut rng: GameRng) -> Self {
        let bounds = config.bounds();
        let secret = draw_secret(&mut rng, bounds);
        Self {
            bounds,
            attempts: config.attempts(),
            secret,
            remaining_attempts: config.attempts(),
            phase: Phase::Active,
            rng,
        }
    }

    /// Score a guess.
    ///
    /// Checks, in order: phase, bounds, correctness, exhaustion.
    #[instrument(level = "debug", skip(self), fields(remaining = self.remaining_attempts))]
    pub fn evaluate_guess(&mut self, n: i64) -> Result<Outcome, GuessError> {
        if self.phase == Phase::Finished {
            return Err(GuessError::InvalidState);
        }
        if !self.bounds.contains(n) {
            return Err(GuessError::OutOfRange {
                guess: n,
                minimum: self.bounds.minimum(),
                maximum: self.bounds.maximum(),
            });
        }

        self.remaining_attempts -= 1;

        let outcome = if n == self.secret {
            Outcome::Correct
        } else if self.remaining_attempts == 0 {
            if n < self.secret {
                Outcome::LastAttemptTooLow
            } else {
                Outcome::LastAttemptTooHigh
            }
        } else if n < self.secret {
            Outcome::TooLow
        } else {
            Outcome::TooHigh
        };

        if outcome.is_final() {
            self.phase = Phase::Finished;
        }
        debug!(?outcome, remaining = self.remaining_attempts, "guess scored");
        Ok(outcome)
    }

    /// Start a new session with a freshly drawn secret.
    pub fn reset(&mut self) {
        self.secret = draw_secret(&mut self.rng, self.bounds);
        self.remaining_attempts = self.attempts;
        self.phase = Phase::Active;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Attempts left in the current session.
    #[must_use]
    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    /// Configured attempts per session.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Seed of the generator that draws secrets.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The current secret. Test helper; surfaces never see it.
    #[cfg(test)]
    pub(crate) fn secret(&self) -> i64 {
        self.secret
    }
}

fn draw_secret(rng: &mut GameRng, bounds: Bounds) -> i64 {
    rng.gen_range_inclusive(bounds.minimum()..=bounds.maximum())
}
