//! Interactive prompt surface.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::debug;

use super::{Command, SessionInfo, Surface};
use crate::core::{Bounds, Outcome};
use crate::error::SurfaceError;

const PROMPT: &str = "> ";
const HINT: &str = "Type 'reset' for a new game or 'quit' to exit.";

/// Reads commands from an operator one line at a time and renders
/// notifications as text.
///
/// End of input is treated as a quit request.
pub struct TerminalSurface<R: BufRead, W: Write> {
    name: String,
    input: R,
    output: W,
}

impl TerminalSurface<StdinLock<'static>, Stdout> {
    /// Prompt on the process's standard streams.
    ///
    /// Holds the stdin lock for its lifetime, so create at most one.
    pub fn stdio() -> Self {
        Self::new("terminal", io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalSurface<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consume the surface, returning the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) -> Result<(), SurfaceError> {
        writeln!(self.output, "{}", text)
            .and_then(|()| self.output.flush())
            .map_err(|e| SurfaceError::io(&self.name, e))
    }

    fn prompt(&mut self) -> Result<(), SurfaceError> {
        write!(self.output, "{}", PROMPT)
            .and_then(|()| self.output.flush())
            .map_err(|e| SurfaceError::io(&self.name, e))
    }
}

impl<R: BufRead, W: Write> Surface for TerminalSurface<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn attach(&mut self) -> Result<(), SurfaceError> {
        self.say("Welcome to draw-number!")
    }

    fn start_session(&mut self, session: &SessionInfo) -> Result<(), SurfaceError> {
        let intro = format!(
            "Guess a number in {}. You have {} attempts. {}",
            session.bounds, session.attempts, HINT
        );
        self.say(&intro)
    }

    fn report_outcome(&mut self, outcome: Outcome) -> Result<(), SurfaceError> {
        self.say(outcome.description())?;
        if outcome.is_final() {
            self.say(HINT)?;
        }
        Ok(())
    }

    fn report_invalid_input(&mut self, guess: i64, bounds: Bounds) -> Result<(), SurfaceError> {
        let text = format!("Incorrect input: {} is outside {}. Try again.", guess, bounds);
        self.say(&text)
    }

    fn report_session_over(&mut self) -> Result<(), SurfaceError> {
        self.say(&format!("This game is over. {}", HINT))
    }

    fn next_command(&mut self) -> Result<Option<Command>, SurfaceError> {
        let mut line = String::new();
        loop {
            self.prompt()?;
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| SurfaceError::io(&self.name, e))?;
            if read == 0 {
                debug!(surface = %self.name, "end of input");
                return Ok(Some(Command::Quit));
            }

            let entered = line.trim();
            if entered.is_empty() {
                continue;
            }
            match Command::parse(entered) {
                Some(command) => return Ok(Some(command)),
                None => {
                    let text = format!("'{}' is not a number. {}", entered, HINT);
                    self.say(&text)?;
                }
            }
        }
    }
}
