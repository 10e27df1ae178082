//! Configuration loading from flat `key:value` resources.
//!
//! ```text
//! minimum:1
//! maximum:100
//! attempts:10
//! ```
//!
//! ## Failure policy
//!
//! - Unknown keys and non-integer values abort the load
//! - A missing or unreadable resource is logged and loading continues with
//!   whatever was read so far (`MissingResourcePolicy::Continue`), unless
//!   the strict policy is selected
//! - The accumulated values are validated last; an inconsistent result
//!   always aborts

mod directive;

pub use directive::{Directive, DirectiveKey};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::core::{Configuration, ConfigurationBuilder};
use crate::error::ConfigError;

/// What to do when the resource cannot be opened or read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingResourcePolicy {
    /// Log and continue with the partial configuration.
    #[default]
    Continue,
    /// Return `ResourceUnavailable` to the caller.
    Fail,
}

/// Loads a `Configuration` from a resource.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConfigLoader {
    policy: MissingResourcePolicy,
}

impl ConfigLoader {
    pub fn new(policy: MissingResourcePolicy) -> Self {
        Self { policy }
    }

    /// Loader that treats an unavailable resource as fatal.
    pub fn strict() -> Self {
        Self::new(MissingResourcePolicy::Fail)
    }

    #[must_use]
    pub fn policy(&self) -> MissingResourcePolicy {
        self.policy
    }

    /// Load and validate the configuration stored at `path`.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Configuration, ConfigError> {
        let path = path.as_ref();
        let mut builder = ConfigurationBuilder::new();

        match File::open(path) {
            Ok(file) => {
                let read = apply_directives(&mut builder, BufReader::new(file));
                self.recover(path, read)?;
            }
            Err(source) => self.recover(path, Err(ReadFailure::Io(source)))?,
        }

        let config = builder.build()?;
        info!(
            minimum = config.minimum(),
            maximum = config.maximum(),
            attempts = config.attempts(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load from an in-memory or already-open reader.
    ///
    /// `name` identifies the resource in errors and logs.
    pub fn load_reader(
        &self,
        name: impl Into<PathBuf>,
        reader: impl BufRead,
    ) -> Result<Configuration, ConfigError> {
        let mut builder = ConfigurationBuilder::new();
        let read = apply_directives(&mut builder, reader);
        self.recover(&name.into(), read)?;
        builder.build()
    }

    fn recover(&self, path: &Path, read: Result<(), ReadFailure>) -> Result<(), ConfigError> {
        match read {
            Ok(()) => Ok(()),
            Err(ReadFailure::Config(err)) => Err(err),
            Err(ReadFailure::Io(source)) => match self.policy {
                MissingResourcePolicy::Continue => {
                    warn!(
                        path = %path.display(),
                        error = %source,
                        "configuration resource unavailable, continuing with partial configuration"
                    );
                    Ok(())
                }
                MissingResourcePolicy::Fail => Err(ConfigError::ResourceUnavailable {
                    path: path.to_path_buf(),
                    source,
                }),
            },
        }
    }
}

/// Why reading directives stopped early.
#[derive(Debug)]
pub enum ReadFailure {
    /// The underlying reader failed; directives read before it are applied.
    Io(std::io::Error),
    /// A line was not a valid directive.
    Config(ConfigError),
}

/// Apply every directive from `reader` to `builder`, in order.
///
/// Blank lines are skipped. On failure, directives before the failing line
/// have already been applied.
pub fn apply_directives(
    builder: &mut ConfigurationBuilder,
    reader: impl BufRead,
) -> Result<(), ReadFailure> {
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(ReadFailure::Io)?;
        if line.trim().is_empty() {
            continue;
        }
        let directive = Directive::parse(index + 1, &line).map_err(ReadFailure::Config)?;
        *builder = directive.apply(*builder);
    }
    Ok(())
}
