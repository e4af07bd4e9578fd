//! Core game logic module - pure and testable
//!
//! This crate contains the rules of the guessing game and nothing else. It has
//! **no dependencies** on views, threads or the file system: configuration is
//! parsed from any [`std::io::BufRead`], and the model is a plain value owned
//! by whoever drives it.
//!
//! # Module Structure
//!
//! - [`config`]: `key: value` parsing into an immutable [`Configuration`]
//! - [`model`]: the [`GameModel`] attempt state machine
//! - [`rng`]: seeded secret generation
//! - [`error`]: out-of-range, inconsistent-configuration and parse-issue types
//!
//! # Example
//!
//! ```
//! use draw_number_core::{parse_config, GameModel, RoundState};
//! use draw_number_core::types::DrawResult;
//!
//! let load = parse_config("minimum: 1\nmaximum: 10\nattempts: 3\n".as_bytes());
//! assert!(load.issues.is_empty());
//!
//! let mut game = GameModel::with_seed(load.configuration, 12345).unwrap();
//!
//! // Out-of-range guesses are errors, not game events
//! assert!(game.attempt(11).is_err());
//! assert_eq!(game.remaining_attempts(), 3);
//!
//! let outcome = game.attempt(5).unwrap();
//! assert_ne!(outcome, DrawResult::NoMoreAttempts);
//! assert_eq!(game.remaining_attempts(), 2);
//! assert_eq!(game.state(), RoundState::Playing);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod rng;

pub use draw_number_types as types;

// Re-export commonly used types for convenience
pub use config::{apply_line, parse_config, ConfigLoad, Configuration, ConfigurationBuilder};
pub use error::{ConfigIssue, ConfigurationError, OutOfRangeError};
pub use model::{GameModel, RoundState};
pub use rng::{seed_from_time, SimpleRng};
