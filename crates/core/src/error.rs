//! Error types raised by the model and the configuration layer.

use derive_more::{Display, Error};

use crate::types::ConfigKey;

/// A guess fell outside the configured `[minimum, maximum]` range.
///
/// This signals misuse by the caller, not a game event: no attempt is
/// consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{guess} is outside the range [{minimum}, {maximum}]")]
pub struct OutOfRangeError {
    pub guess: i32,
    pub minimum: i32,
    pub maximum: i32,
}

/// The configuration cannot host a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigurationError {
    #[display("minimum ({minimum}) must be lower than maximum ({maximum})")]
    EmptyRange { minimum: i32, maximum: i32 },
    #[display("attempts must be positive, got {attempts}")]
    NoAttempts { attempts: i32 },
}

/// Recoverable problem found while reading a configuration source.
///
/// Each issue is reported to the views; loading continues with the remaining
/// lines and defaults for anything not set.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigIssue {
    #[display("Invalid syntax in config file (line {line}): {key} does not exist.")]
    UnknownKey { line: usize, key: String },
    #[display("Invalid value in config file (line {line}): {key} expects an integer, got {value:?}.")]
    MalformedValue {
        line: usize,
        key: ConfigKey,
        value: String,
    },
    #[display("Invalid syntax in config file (line {line}): expected `key: value`, got {text:?}.")]
    MissingSeparator { line: usize, text: String },
    #[display("Could not read config file: {message}")]
    Io { message: String },
}

impl ConfigIssue {
    /// 1-based line the issue was found on, if it concerns a single line.
    pub fn line(&self) -> Option<usize> {
        match self {
            ConfigIssue::UnknownKey { line, .. }
            | ConfigIssue::MalformedValue { line, .. }
            | ConfigIssue::MissingSeparator { line, .. } => Some(*line),
            ConfigIssue::Io { .. } => None,
        }
    }
}
