//! Core game types: configuration, RNG, outcomes, and the session state machine.
//!
//! Nothing in this module performs I/O. Loading configuration and rendering
//! outcomes live in `loader` and `surfaces`.

pub mod config;
pub mod outcome;
pub mod rng;
pub mod state;

pub use config::{Bounds, Configuration, ConfigurationBuilder};
pub use outcome::Outcome;
pub use rng::{GameRng, GameRngState};
pub use state::{DrawNumber, Phase};
