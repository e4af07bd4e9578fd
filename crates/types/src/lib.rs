//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by every layer of the game: the
//! outcome of an attempt, the recognized configuration keys, and the actions a
//! view can ask the controller to perform. All types are plain data with no
//! external dependencies, so they are usable from the model, the controller
//! and any view alike.
//!
//! # Defaults
//!
//! Values used when the configuration file does not mention a key:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_MINIMUM` | 0 | Lowest number the secret can be |
//! | `DEFAULT_MAXIMUM` | 100 | Highest number the secret can be |
//! | `DEFAULT_ATTEMPTS` | 10 | Guesses allowed per round |
//!
//! # Examples
//!
//! ```
//! use draw_number_types::{ConfigKey, DrawResult, ViewAction};
//!
//! // Config keys are matched exactly (case-sensitive)
//! assert_eq!(ConfigKey::from_str("attempts"), Some(ConfigKey::Attempts));
//! assert_eq!(ConfigKey::from_str("Attempts"), None);
//!
//! // Only a win or a loss closes the round
//! assert!(DrawResult::Correct.ends_round());
//! assert!(!DrawResult::TooLow.ends_round());
//!
//! let action = ViewAction::NewAttempt(42);
//! assert_eq!(action.as_str(), "newAttempt");
//! ```

use std::fmt;

/// Lowest secret value when `minimum` is not configured.
pub const DEFAULT_MINIMUM: i32 = 0;

/// Highest secret value when `maximum` is not configured.
pub const DEFAULT_MAXIMUM: i32 = 100;

/// Attempts per round when `attempts` is not configured.
pub const DEFAULT_ATTEMPTS: i32 = 10;

/// Configuration file read by the default binary.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Plain-text log written by the default binary.
pub const DEFAULT_LOG_PATH: &str = "output.log";

/// JSON journal written by the default binary.
pub const DEFAULT_JOURNAL_PATH: &str = "output.jsonl";

/// Outcome of a single in-range attempt.
///
/// - **Correct**: the guess equals the secret
/// - **TooLow**: the guess is below the secret
/// - **TooHigh**: the guess is above the secret
/// - **NoMoreAttempts**: the round is exhausted; the guess was not evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawResult {
    Correct,
    TooLow,
    TooHigh,
    NoMoreAttempts,
}

impl DrawResult {
    /// Convert to camelCase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawResult::Correct => "correct",
            DrawResult::TooLow => "tooLow",
            DrawResult::TooHigh => "tooHigh",
            DrawResult::NoMoreAttempts => "noMoreAttempts",
        }
    }

    /// Human-readable sentence shown by log views.
    pub fn description(&self) -> &'static str {
        match self {
            DrawResult::Correct => "You won",
            DrawResult::TooLow => "Your number is too small",
            DrawResult::TooHigh => "Your number is too big",
            DrawResult::NoMoreAttempts => "You lost",
        }
    }

    /// Whether this outcome closes the current round (win or loss).
    pub fn ends_round(&self) -> bool {
        matches!(self, DrawResult::Correct | DrawResult::NoMoreAttempts)
    }
}

impl fmt::Display for DrawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Keys recognized in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Minimum,
    Maximum,
    Attempts,
}

impl ConfigKey {
    /// Parse a configuration key.
    ///
    /// Matching is exact: surrounding whitespace must already be trimmed and
    /// case matters.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "minimum" => Some(ConfigKey::Minimum),
            "maximum" => Some(ConfigKey::Maximum),
            "attempts" => Some(ConfigKey::Attempts),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::Minimum => "minimum",
            ConfigKey::Maximum => "maximum",
            ConfigKey::Attempts => "attempts",
        }
    }

    /// Value used when the key is absent from the source.
    pub fn default_value(&self) -> i32 {
        match self {
            ConfigKey::Minimum => DEFAULT_MINIMUM,
            ConfigKey::Maximum => DEFAULT_MAXIMUM,
            ConfigKey::Attempts => DEFAULT_ATTEMPTS,
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions a view can ask the controller to perform.
///
/// These are produced by interactive views (console input) and consumed by
/// the controller's command loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    /// Submit a guess
    NewAttempt(i32),
    /// Start a new round with a fresh secret
    ResetGame,
    /// End the session
    Quit,
}

impl ViewAction {
    /// Convert to camelCase string (used in logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewAction::NewAttempt(_) => "newAttempt",
            ViewAction::ResetGame => "resetGame",
            ViewAction::Quit => "quit",
        }
    }
}

/// What the hosting run loop should do after an observer callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionIntent {
    #[default]
    Continue,
    Terminate,
}

impl SessionIntent {
    pub fn is_terminate(&self) -> bool {
        matches!(self, SessionIntent::Terminate)
    }
}
