//! Draw Number (workspace facade crate).
//!
//! This package exposes `draw_number::{core,engine,input,logfile,term,types}`
//! as one API while the implementation lives in dedicated crates under
//! `crates/`.

pub use draw_number_core as core;
pub use draw_number_engine as engine;
pub use draw_number_input as input;
pub use draw_number_logfile as logfile;
pub use draw_number_term as term;
pub use draw_number_types as types;
