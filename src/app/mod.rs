//! Application wiring.
//!
//! The `Controller` owns the single `DrawNumber` and the attached surfaces:
//! - Surfaces are attached before the configuration is loaded
//! - Every guess is scored by the controller, one at a time
//! - Every outcome is sent to every surface, in attachment order
//! - A quit request stops `run`; nothing calls `process::exit`

mod controller;

pub use controller::{Controller, Flow};
