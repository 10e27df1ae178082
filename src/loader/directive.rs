//! Parsing of single `key:value` directive lines.

use crate::core::ConfigurationBuilder;
use crate::error::ConfigError;

/// Keys recognised in a configuration resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectiveKey {
    Minimum,
    Maximum,
    Attempts,
}

impl DirectiveKey {
    /// Match a key exactly (case-sensitive, no trimming).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "minimum" => Some(DirectiveKey::Minimum),
            "maximum" => Some(DirectiveKey::Maximum),
            "attempts" => Some(DirectiveKey::Attempts),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DirectiveKey::Minimum => "minimum",
            DirectiveKey::Maximum => "maximum",
            DirectiveKey::Attempts => "attempts",
        }
    }
}

/// One parsed directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Directive {
    pub key: DirectiveKey,
    pub value: i64,
}

impl Directive {
    /// Parse a line. `line_no` is 1-based and only used for error reporting.
    ///
    /// The line is split on the first `:`. A line without `:` is treated as
    /// a key with an empty value.
    pub fn parse(line_no: usize, line: &str) -> Result<Self, ConfigError> {
        let (raw_key, raw_value) = line.split_once(':').unwrap_or((line, ""));

        let key = DirectiveKey::from_key(raw_key).ok_or_else(|| ConfigError::InvalidDirective {
            line: line_no,
            key: raw_key.to_string(),
        })?;

        let trimmed = raw_value.trim();
        let value = trimmed.parse::<i64>().map_err(|source| ConfigError::MalformedValue {
            line: line_no,
            key: key.as_str().to_string(),
            value: trimmed.to_string(),
            source,
        })?;

        Ok(Self { key, value })
    }

    /// Apply to a builder; a later directive for the same key overwrites.
    #[must_use]
    pub fn apply(self, builder: ConfigurationBuilder) -> ConfigurationBuilder {
        match self.key {
            DirectiveKey::Minimum => builder.minimum(self.value),
            DirectiveKey::Maximum => builder.maximum(self.value),
            DirectiveKey::Attempts => builder.attempts(self.value),
        }
    }
}
