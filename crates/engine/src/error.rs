//! Controller construction errors.

use std::path::PathBuf;

use derive_more::{Display, Error};

use crate::core::ConfigurationError;

/// Failure to bring up a playable game.
///
/// Recoverable problems (unknown keys, malformed values, read errors) are not
/// errors here: they are reported to the views and loading carries on.
#[derive(Debug, Display, Error)]
pub enum ControllerError {
    /// The configuration source does not exist.
    #[display("Config file {path:?} does not exist")]
    ConfigNotFound { path: PathBuf },
    /// The loaded bounds cannot host a game.
    #[display("Invalid configuration: {_0}")]
    InvalidConfiguration(ConfigurationError),
}
