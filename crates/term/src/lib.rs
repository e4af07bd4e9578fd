//! Terminal views module.
//!
//! Concrete [`DrawNumberView`](crate::engine::DrawNumberView) implementations
//! for a terminal session:
//!
//! - [`ConsoleView`]: interactive; reads guesses from its input on a
//!   background thread and renders outcomes in colour
//! - [`PrintStreamView`]: passive; logs every notification as plain text to
//!   any writer, usually a log file
//!
//! Rendering is encoded into byte buffers first (see [`renderer`]) so each
//! notification reaches the terminal in a single write.

pub mod console;
pub mod print_stream;
pub mod renderer;
pub mod style;

pub use draw_number_engine as engine;
pub use draw_number_input as input;
pub use draw_number_types as types;

pub use console::ConsoleView;
pub use print_stream::PrintStreamView;
pub use renderer::{encode_line_into, encode_outcome_into, encode_prompt_into, outcome_line};
pub use style::{Rgb, Tone};
