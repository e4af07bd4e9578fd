//! View contracts.
//!
//! Views never hold a reference to the controller. When attached they receive
//! an [`ObserverHandle`]: their [`ViewId`] plus the sending side of the
//! controller's command inbox. The controller owns the views themselves and
//! calls back into them through [`DrawNumberView`].

use std::fmt;
use std::sync::mpsc;

use anyhow::Result;

use crate::types::{DrawResult, ViewAction};

/// Position of a view in the controller's registry (registration order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub usize);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// Command delivered to the controller's run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverCommand {
    pub view: ViewId,
    pub action: ViewAction,
}

/// A view's way of signalling user actions to the controller.
///
/// Cheap to clone and safe to move to another thread. Sending never blocks;
/// the methods return `false` once the controller is gone.
#[derive(Debug, Clone)]
pub struct ObserverHandle {
    view: ViewId,
    tx: mpsc::Sender<ObserverCommand>,
}

impl ObserverHandle {
    pub fn new(view: ViewId, tx: mpsc::Sender<ObserverCommand>) -> Self {
        Self { view, tx }
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn new_attempt(&self, guess: i32) -> bool {
        self.send(ViewAction::NewAttempt(guess))
    }

    pub fn reset_game(&self) -> bool {
        self.send(ViewAction::ResetGame)
    }

    pub fn quit(&self) -> bool {
        self.send(ViewAction::Quit)
    }

    pub fn send(&self, action: ViewAction) -> bool {
        self.tx
            .send(ObserverCommand {
                view: self.view,
                action,
            })
            .is_ok()
    }
}

/// Callbacks the controller pushes to every attached view.
///
/// Render callbacks may fail; the controller logs the failure and keeps
/// notifying the remaining views.
pub trait DrawNumberView: Send {
    /// Called once, before [`start`](DrawNumberView::start).
    fn set_observer(&mut self, observer: ObserverHandle);

    /// Called once after the observer is set, before configuration loads.
    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn result(&mut self, outcome: DrawResult) -> Result<()>;

    /// The last guess was outside the configured range.
    fn number_incorrect(&mut self) -> Result<()>;

    fn display_error(&mut self, message: &str) -> Result<()>;
}
