//! Journal module - persistent log of a game session
//!
//! [`FileLogView`] is a passive view: every notification the controller sends
//! (results, out-of-range guesses, errors) becomes a line-delimited JSON
//! record written to a journal file. The file is written by a background
//! tokio task so a slow disk never stalls the controller's broadcast loop.
//!
//! # Environment Variables
//!
//! - `DRAW_NUMBER_LOG_PATH`: Journal path (default: "output.jsonl")
//! - `DRAW_NUMBER_LOG_APPEND`: Set to "1" or "true" to keep earlier runs'
//!   records; by default each run starts a fresh journal
//! - `DRAW_NUMBER_LOG_DISABLED`: Set to "1" or "true" to disable the journal
//!
//! # Record Format
//!
//! See [`record`] for the record structure. The journal is write-only: it is
//! never read back by the game.
//!
//! # Testing
//!
//! Follow a running game's journal with:
//!
//! ```bash
//! tail -f output.jsonl
//! ```

pub mod record;
pub mod runtime;
pub mod view;

pub use draw_number_engine as engine;
pub use draw_number_types as types;

pub use record::{LogEvent, LogRecord, OutcomeTag};
pub use runtime::{run_writer, LogConfig, LogRuntime};
pub use view::FileLogView;
