//! Observational surface writing one line per notification.

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;

use tracing::instrument;

use super::{SessionInfo, Surface};
use crate::core::{Bounds, Outcome};
use crate::error::SurfaceError;

/// Writes every notification to a character stream.
///
/// Never produces commands. Each line is flushed as it is written; a file
/// destination is closed when the surface is dropped.
pub struct StreamSurface<W: Write> {
    name: String,
    out: W,
}

impl StreamSurface<Stdout> {
    /// Log to standard output.
    pub fn stdout() -> Self {
        Self::new("stdout", io::stdout())
    }
}

impl StreamSurface<BufWriter<File>> {
    /// Log to a file, truncating it or creating it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SurfaceError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::create(path).map_err(|e| SurfaceError::io(&name, e))?;
        Ok(Self::new(name, BufWriter::new(file)))
    }
}

impl<W: Write> StreamSurface<W> {
    pub fn new(name: impl Into<String>, out: W) -> Self {
        Self {
            name: name.into(),
            out,
        }
    }

    /// Get the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the surface, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) -> Result<(), SurfaceError> {
        writeln!(self.out, "{}", args)
            .and_then(|()| self.out.flush())
            .map_err(|e| SurfaceError::io(&self.name, e))
    }
}

impl<W: Write> Surface for StreamSurface<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn start_session(&mut self, session: &SessionInfo) -> Result<(), SurfaceError> {
        self.line(format_args!(
            "New game: guess a number in {} within {} attempts",
            session.bounds, session.attempts
        ))
    }

    fn report_outcome(&mut self, outcome: Outcome) -> Result<(), SurfaceError> {
        self.line(format_args!("{}", outcome))
    }

    fn report_invalid_input(&mut self, guess: i64, bounds: Bounds) -> Result<(), SurfaceError> {
        self.line(format_args!("Incorrect input: {} is outside {}", guess, bounds))
    }

    fn report_session_over(&mut self) -> Result<(), SurfaceError> {
        self.line(format_args!("Guess ignored: the game is over"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Configuration;

    fn text(surface: StreamSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn test_one_line_per_notification() {
        let config = Configuration::new(1, 10, 3).unwrap();
        let mut surface = StreamSurface::new("log", Vec::new());

        surface.start_session(&SessionInfo::from(&config)).unwrap();
        surface.report_invalid_input(11, config.bounds()).unwrap();
        surface.report_outcome(Outcome::TooHigh).unwrap();
        surface.report_outcome(Outcome::Correct).unwrap();
        surface.report_session_over().unwrap();

        let text = text(surface);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "New game: guess a number in [1, 10] within 3 attempts",
                "Incorrect input: 11 is outside [1, 10]",
                "Your guess is too big",
                "You won!",
                "Guess ignored: the game is over",
            ]
        );
    }

    #[test]
    fn test_never_produces_commands() {
        let mut surface = StreamSurface::new("log", Vec::new());
        assert_eq!(surface.next_command().unwrap(), None);
        assert_eq!(surface.name(), "log");
    }

    #[test]
    fn test_write_failure_names_surface() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut surface = StreamSurface::new("broken", Broken);
        let err = surface.report_outcome(Outcome::TooLow).unwrap_err();
        assert_eq!(err.to_string(), "surface `broken` I/O failed");
    }
}
