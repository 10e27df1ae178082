//! Game configuration types.
//!
//! - `Bounds`: the inclusive range secrets and guesses live in
//! - `ConfigurationBuilder`: accumulates directives, last write wins
//! - `Configuration`: a validated, immutable configuration
//!
//! A `Configuration` only exists once `minimum < maximum` and
//! `attempts >= 1` hold, so a game can never be built from bad values.

use serde::Serialize;

use crate::error::ConfigError;

/// Inclusive `[minimum, maximum]` range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Bounds {
    minimum: i64,
    maximum: i64,
}

impl Bounds {
    /// Lower bound (inclusive).
    #[must_use]
    pub const fn minimum(self) -> i64 {
        self.minimum
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn maximum(self) -> i64 {
        self.maximum
    }

    /// Check whether `n` lies within the bounds.
    #[must_use]
    pub const fn contains(self, n: i64) -> bool {
        self.minimum <= n && n <= self.maximum
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.minimum, self.maximum)
    }
}

/// Validated game configuration.
///
/// Serialize only; values are obtained through `new` or
/// `ConfigurationBuilder::build`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Configuration {
    bounds: Bounds,
    attempts: u32,
}

impl Configuration {
    /// Create a configuration, validating the invariant.
    pub fn new(minimum: i64, maximum: i64, attempts: u32) -> Result<Self, ConfigError> {
        ConfigurationBuilder::new()
            .minimum(minimum)
            .maximum(maximum)
            .attempts(i64::from(attempts))
            .build()
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn minimum(&self) -> i64 {
        self.bounds.minimum
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn maximum(&self) -> i64 {
        self.bounds.maximum
    }

    /// Attempts per session.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Accumulates configuration values before validation.
///
/// Values are optional until `build`; setting a value twice keeps the last.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfigurationBuilder {
    minimum: Option<i64>,
    maximum: Option<i64>,
    attempts: Option<i64>,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower bound.
    #[must_use]
    pub fn minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the upper bound.
    #[must_use]
    pub fn maximum(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Set the attempt budget.
    ///
    /// Kept signed so that `attempts:0` or a negative value is reported as
    /// an inconsistent configuration rather than a parse failure.
    #[must_use]
    pub fn attempts(mut self, attempts: i64) -> Self {
        self.attempts = Some(attempts);
        self
    }

    /// Check the invariant without consuming the builder.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.validated().is_some()
    }

    /// Validate and produce a `Configuration`.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        self.validated()
            .ok_or(ConfigError::InconsistentConfiguration {
                minimum: self.minimum,
                maximum: self.maximum,
                attempts: self.attempts,
            })
    }

    fn validated(&self) -> Option<Configuration> {
        let (minimum, maximum) = (self.minimum?, self.maximum?);
        let attempts = u32::try_from(self.attempts?).ok()?;
        (minimum < maximum && attempts >= 1).then_some(Configuration {
            bounds: Bounds { minimum, maximum },
            attempts,
        })
    }
}
