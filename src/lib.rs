//! # draw-number
//!
//! A small number-guessing game: guess a secret integer within a configured
//! range before the attempts run out.
//!
//! ## Design Principles
//!
//! 1. **Validated configuration**: A `Configuration` only exists when
//!    `minimum < maximum` and `attempts >= 1`. Games cannot be built from
//!    anything else.
//!
//! 2. **Pure core**: `DrawNumber` does no I/O. It scores guesses and tracks
//!    the remaining attempts; everything else is wiring.
//!
//! 3. **Many surfaces**: Any number of surfaces can be attached. Every
//!    surface sees every outcome, whichever surface made the guess.
//!
//! ## Example
//!
//! ```
//! use draw_number::{Configuration, DrawNumber, GameRng, GuessError, Outcome};
//!
//! let config = Configuration::new(1, 10, 3).unwrap();
//! let mut game = DrawNumber::new(&config, GameRng::new(42));
//!
//! // Out-of-range guesses are rejected and cost nothing
//! assert!(matches!(game.evaluate_guess(11), Err(GuessError::OutOfRange { .. })));
//! assert_eq!(game.remaining_attempts(), 3);
//!
//! let outcome = game.evaluate_guess(5).unwrap();
//! assert!(matches!(outcome, Outcome::Correct | Outcome::TooLow | Outcome::TooHigh));
//! assert_eq!(game.remaining_attempts(), 2);
//! ```
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, outcomes, and the session state machine
//! - `loader`: `key:value` configuration resources
//! - `surfaces`: Interactive and stream presentation surfaces
//! - `app`: The controller tying surfaces to the game
//! - `error`: Error types

pub mod app;
pub mod core;
pub mod error;
pub mod loader;
pub mod surfaces;

// Re-export commonly used types
pub use crate::core::{
    Bounds, Configuration, ConfigurationBuilder,
    DrawNumber, Phase, Outcome,
    GameRng, GameRngState,
};

pub use crate::error::{ConfigError, Error, GuessError, Result, SurfaceError};

pub use crate::loader::{ConfigLoader, MissingResourcePolicy};

pub use crate::surfaces::{Command, SessionInfo, StreamSurface, Surface, TerminalSurface};

pub use crate::app::{Controller, Flow};
