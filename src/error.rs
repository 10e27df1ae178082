//! Error types.
//!
//! Every failure mode has a named variant:
//! - Configuration failures abort startup (except a recovered missing resource)
//! - Guess failures are local to one guess and never end the session
//! - Surface failures are I/O on a presentation endpoint; the controller
//!   detaches that surface and plays on

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading or validating the game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("line {line}: unrecognized directive `{key}`")]
    InvalidDirective { line: usize, key: String },

    #[error("line {line}: value `{value}` for `{key}` is not an integer")]
    MalformedValue {
        line: usize,
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("configuration resource {} is unavailable", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "inconsistent configuration: minimum={minimum:?}, maximum={maximum:?}, attempts={attempts:?} \
         (need minimum < maximum and attempts >= 1)"
    )]
    InconsistentConfiguration {
        minimum: Option<i64>,
        maximum: Option<i64>,
        attempts: Option<i64>,
    },
}

/// A guess that could not be scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess {guess} is outside [{minimum}, {maximum}]")]
    OutOfRange { guess: i64, minimum: i64, maximum: i64 },

    #[error("the session is finished; reset to play again")]
    InvalidState,
}

/// Failure on a presentation surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("surface `{surface}` I/O failed")]
    Io {
        surface: String,
        #[source]
        source: std::io::Error,
    },
}

impl SurfaceError {
    /// Wrap an I/O failure on the named surface.
    pub fn io(surface: &str, source: std::io::Error) -> Self {
        Self::Io {
            surface: surface.to_string(),
            source,
        }
    }
}

/// Top-level error for the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;
