//! Engine module - the controller and the view contracts
//!
//! This crate wires a [`GameModel`](crate::core::GameModel) to any number of
//! views:
//!
//! 1. **Attach**: views receive an [`ObserverHandle`] and are started, in the
//!    order they were given
//! 2. **Configure**: the configuration file is read; every recoverable issue is
//!    shown on every view
//! 3. **Play**: views enqueue actions through their handle, the controller
//!    applies them to the model and fans the outcome out to every view
//!
//! # Example
//!
//! ```no_run
//! use draw_number_engine::{Controller, DrawNumberView};
//!
//! fn play(views: Vec<Box<dyn DrawNumberView>>) -> anyhow::Result<()> {
//!     let mut controller = Controller::new("config.yml", views)?;
//!     controller.run();
//!     Ok(())
//! }
//! ```

pub mod controller;
pub mod error;
pub mod view;

pub use draw_number_core as core;
pub use draw_number_types as types;

pub use controller::{Controller, DrawNumberObserver};
pub use error::ControllerError;
pub use view::{DrawNumberView, ObserverCommand, ObserverHandle, ViewId};
