//! Console input module (controller-facing).
//!
//! Maps lines typed by a player into [`crate::types::ViewAction`]s. It is
//! independent of any terminal library so interactive views can feed it from
//! stdin, a pipe or a test buffer alike.

pub mod map;

pub use draw_number_types as types;

pub use map::{handle_line, InputCommand};
