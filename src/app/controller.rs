//! Controller wiring surfaces to the game.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::core::{Configuration, DrawNumber, GameRng};
use crate::error::{GuessError, Result, SurfaceError};
use crate::loader::ConfigLoader;
use crate::surfaces::{Command, SessionInfo, Surface};

/// Whether the controller should keep running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the game and every attached surface.
///
/// All commands go through `&mut self`, so guesses from different surfaces
/// are scored one at a time.
///
/// A surface whose I/O fails is logged and detached; the others keep
/// receiving every notification and the game goes on.
pub struct Controller {
    game: DrawNumber,
    /// Attachment order; `None` once a surface has been detached.
    surfaces: Vec<Option<Box<dyn Surface>>>,
}

impl Controller {
    /// Attach the surfaces, then load the configuration and start a game.
    ///
    /// If loading fails the surfaces are dropped, closing their
    /// destinations, and the error is returned.
    #[instrument(skip_all, fields(config = %config_path.as_ref().display()))]
    pub fn new(
        surfaces: Vec<Box<dyn Surface>>,
        loader: &ConfigLoader,
        config_path: impl AsRef<Path>,
        rng: GameRng,
    ) -> Result<Self> {
        let surfaces = attach(surfaces);
        let config = loader.load(config_path)?;
        Ok(Self::start(surfaces, &config, rng))
    }

    /// Attach the surfaces and start a game from a validated configuration.
    pub fn with_configuration(
        surfaces: Vec<Box<dyn Surface>>,
        config: &Configuration,
        rng: GameRng,
    ) -> Self {
        Self::start(attach(surfaces), config, rng)
    }

    fn start(surfaces: Vec<Option<Box<dyn Surface>>>, config: &Configuration, rng: GameRng) -> Self {
        let game = DrawNumber::new(config, rng);
        info!(
            seed = game.seed(),
            bounds = %game.bounds(),
            attempts = game.attempts(),
            surfaces = surfaces.iter().flatten().count(),
            "game created"
        );

        let mut controller = Self { game, surfaces };
        let session = session_info(&controller.game);
        controller.fan_out(|s| s.start_session(&session));
        controller
    }

    /// The game being played.
    #[must_use]
    pub fn game(&self) -> &DrawNumber {
        &self.game
    }

    /// Number of surfaces still attached.
    #[must_use]
    pub fn surface_count(&self) -> usize {
        self.surfaces.iter().flatten().count()
    }

    /// Score a guess and tell every surface the result.
    #[instrument(level = "debug", skip(self))]
    pub fn submit_guess(&mut self, guess: i64) {
        if self.game.is_finished() {
            debug!(guess, "guess after the game finished");
            self.fan_out(|s| s.report_session_over());
            return;
        }

        match self.game.evaluate_guess(guess) {
            Ok(outcome) => {
                debug!(?outcome, "fanning out outcome");
                self.fan_out(|s| s.report_outcome(outcome));
            }
            Err(GuessError::OutOfRange { minimum, maximum, .. }) => {
                debug!(guess, minimum, maximum, "guess out of range");
                let bounds = self.game.bounds();
                self.fan_out(|s| s.report_invalid_input(guess, bounds));
            }
            Err(GuessError::InvalidState) => self.fan_out(|s| s.report_session_over()),
        }
    }

    /// Start a new session and tell every surface.
    #[instrument(skip(self))]
    pub fn request_reset(&mut self) {
        self.game.reset();
        info!("game reset");
        let session = session_info(&self.game);
        self.fan_out(|s| s.start_session(&session));
    }

    /// Ask the controller to stop.
    ///
    /// Nothing exits here; the caller unwinds normally so every surface is
    /// dropped and flushed.
    pub fn request_quit(&self) -> Flow {
        info!("quit requested");
        Flow::Quit
    }

    /// Handle one command from a surface.
    pub fn dispatch(&mut self, command: Command) -> Flow {
        match command {
            Command::Guess(n) => {
                self.submit_guess(n);
                Flow::Continue
            }
            Command::Reset => {
                self.request_reset();
                Flow::Continue
            }
            Command::Quit => self.request_quit(),
        }
    }

    /// Poll surfaces in attachment order until one asks to quit or none can
    /// produce commands any more.
    ///
    /// A surface that fails to read is detached like one that fails to write.
    #[instrument(skip(self))]
    pub fn run(&mut self) {
        let mut live: Vec<bool> = self.surfaces.iter().map(Option::is_some).collect();

        while live.iter().any(|&l| l) {
            for index in 0..self.surfaces.len() {
                if !live[index] {
                    continue;
                }
                let Some(surface) = self.surfaces[index].as_mut() else {
                    live[index] = false;
                    continue;
                };
                match surface.next_command() {
                    Ok(Some(command)) => {
                        debug!(surface = surface.name(), ?command, "command");
                        if self.dispatch(command) == Flow::Quit {
                            return;
                        }
                    }
                    Ok(None) => live[index] = false,
                    Err(err) => {
                        live[index] = false;
                        self.detach(index, &err);
                    }
                }
            }
        }

        info!("no surface can produce commands, stopping");
    }

    /// Notify every attached surface in order. A failure detaches that
    /// surface only.
    fn fan_out<F>(&mut self, mut notify: F)
    where
        F: FnMut(&mut Box<dyn Surface>) -> std::result::Result<(), SurfaceError>,
    {
        for index in 0..self.surfaces.len() {
            let Some(surface) = self.surfaces[index].as_mut() else {
                continue;
            };
            if let Err(err) = notify(surface) {
                self.detach(index, &err);
            }
        }
    }

    fn detach(&mut self, index: usize, err: &SurfaceError) {
        if let Some(surface) = self.surfaces[index].take() {
            warn!(surface = surface.name(), error = ?err, "surface failed, detaching it");
        }
    }
}

fn attach(surfaces: Vec<Box<dyn Surface>>) -> Vec<Option<Box<dyn Surface>>> {
    surfaces
        .into_iter()
        .map(|mut surface| match surface.attach() {
            Ok(()) => {
                debug!(surface = surface.name(), "surface attached");
                Some(surface)
            }
            Err(err) => {
                warn!(surface = surface.name(), error = ?err, "surface failed to attach, dropping it");
                None
            }
        })
        .collect()
}

fn session_info(game: &DrawNumber) -> SessionInfo {
    SessionInfo {
        bounds: game.bounds(),
        attempts: game.attempts(),
    }
}
