//! Presentation surfaces.
//!
//! A surface is an endpoint attached to the controller. The controller
//! pushes notifications into every surface through the `Surface` trait;
//! surfaces that take operator input hand back `Command`s when polled.
//!
//! - `TerminalSurface`: interactive prompt over any `BufRead`/`Write` pair
//! - `StreamSurface`: observational, one line per notification
//!
//! ## Example Usage
//!
//! ```
//! use draw_number::core::{Configuration, Outcome};
//! use draw_number::surfaces::{SessionInfo, StreamSurface, Surface};
//!
//! let config = Configuration::new(1, 10, 3).unwrap();
//! let mut log = StreamSurface::new("log", Vec::new());
//!
//! log.start_session(&SessionInfo::from(&config)).unwrap();
//! log.report_outcome(Outcome::TooLow).unwrap();
//!
//! let text = String::from_utf8(log.into_inner()).unwrap();
//! assert!(text.ends_with("Your guess is too small\n"));
//! ```

mod stream;
mod terminal;

pub use stream::StreamSurface;
pub use terminal::TerminalSurface;

use crate::core::{Bounds, Configuration, Outcome};
use crate::error::SurfaceError;

/// Request from a surface to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Score this number.
    Guess(i64),
    /// Start a new session.
    Reset,
    /// End the program.
    Quit,
}

impl Command {
    /// Parse operator input: an integer, `reset`/`r`, or `quit`/`q`.
    ///
    /// Surrounding whitespace is ignored. Returns `None` for anything else.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "reset" | "r" => Some(Command::Reset),
            "quit" | "q" => Some(Command::Quit),
            other => other.parse().ok().map(Command::Guess),
        }
    }
}

/// What a surface is told when a session starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionInfo {
    pub bounds: Bounds,
    pub attempts: u32,
}

impl From<&Configuration> for SessionInfo {
    fn from(config: &Configuration) -> Self {
        Self {
            bounds: config.bounds(),
            attempts: config.attempts(),
        }
    }
}

/// A presentation endpoint attached to the controller.
///
/// ## Implementation Notes
///
/// - Notifications arrive in the order the controller produces them
/// - `next_command` may block waiting for input
/// - `next_command` returning `None` means the surface will never produce
///   another command; the controller stops polling it
pub trait Surface {
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    /// The surface was attached to a controller. Called before the
    /// configuration is loaded, so no game exists yet.
    fn attach(&mut self) -> Result<(), SurfaceError> {
        Ok(())
    }

    /// A session is starting: once the game is created, and after every reset.
    fn start_session(&mut self, session: &SessionInfo) -> Result<(), SurfaceError>;

    /// A guess was scored.
    fn report_outcome(&mut self, outcome: Outcome) -> Result<(), SurfaceError>;

    /// A guess fell outside the bounds and was not scored.
    fn report_invalid_input(&mut self, guess: i64, bounds: Bounds) -> Result<(), SurfaceError>;

    /// A guess arrived after the session finished.
    fn report_session_over(&mut self) -> Result<(), SurfaceError>;

    /// Produce the next command.
    ///
    /// Default: the surface is purely observational.
    fn next_command(&mut self) -> Result<Option<Command>, SurfaceError> {
        Ok(None)
    }
}
