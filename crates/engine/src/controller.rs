//! Controller - mediator between the game model and its views
//!
//! The controller owns every attached view and the [`GameModel`]. Views talk
//! back to it through [`ObserverHandle`]s that enqueue commands on a single
//! inbox; [`Controller::run`] applies them one at a time, so the model is only
//! ever touched from the thread driving the controller.
//!
//! Every broadcast is best-effort per view: a view whose callback fails is
//! logged and counted, and the remaining views are still notified.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::mpsc;

use anyhow::Result;
use tracing::{debug, info, instrument, warn};

use crate::core::{parse_config, ConfigIssue, ConfigLoad, Configuration, GameModel};
use crate::error::ControllerError;
use crate::types::{DrawResult, SessionIntent, ViewAction};
use crate::view::{DrawNumberView, ObserverCommand, ObserverHandle, ViewId};

/// Operations a view can trigger on the controller.
pub trait DrawNumberObserver {
    fn new_attempt(&mut self, guess: i32);

    fn reset_game(&mut self);

    /// Ask for the session to end; the caller decides how to terminate.
    fn quit(&mut self) -> SessionIntent;

    /// Apply one view action.
    fn dispatch(&mut self, action: ViewAction) -> SessionIntent {
        match action {
            ViewAction::NewAttempt(guess) => {
                self.new_attempt(guess);
                SessionIntent::Continue
            }
            ViewAction::ResetGame => {
                self.reset_game();
                SessionIntent::Continue
            }
            ViewAction::Quit => self.quit(),
        }
    }
}

/// Ordered set of attached views.
struct ViewRegistry {
    views: Vec<Box<dyn DrawNumberView>>,
    failed_deliveries: usize,
}

impl ViewRegistry {
    /// Hand each view its observer handle and start it, in argument order.
    fn attach(
        views: Vec<Box<dyn DrawNumberView>>,
        tx: &mpsc::Sender<ObserverCommand>,
    ) -> Self {
        let mut registry = Self {
            views,
            failed_deliveries: 0,
        };
        for (idx, view) in registry.views.iter_mut().enumerate() {
            let id = ViewId(idx);
            view.set_observer(ObserverHandle::new(id, tx.clone()));
            if let Err(err) = view.start() {
                registry.failed_deliveries += 1;
                warn!(view = %id, error = %err, "view failed to start");
            }
        }
        registry
    }

    fn broadcast(
        &mut self,
        what: &'static str,
        mut notify: impl FnMut(&mut Box<dyn DrawNumberView>) -> Result<()>,
    ) {
        for (idx, view) in self.views.iter_mut().enumerate() {
            if let Err(err) = notify(view) {
                self.failed_deliveries += 1;
                warn!(view = %ViewId(idx), callback = what, error = %err, "view notification failed");
            }
        }
    }

    fn display_error(&mut self, message: &str) {
        self.broadcast("display_error", |view| view.display_error(message));
    }

    /// Read and parse the configuration at `path`, reporting every issue.
    ///
    /// The file is closed before this returns, whatever happened.
    fn load_configuration(&mut self, path: &Path) -> Configuration {
        let load = match File::open(path) {
            Ok(file) => parse_config(BufReader::new(file)),
            Err(e) => ConfigLoad {
                configuration: Configuration::default(),
                issues: vec![ConfigIssue::Io {
                    message: e.to_string(),
                }],
            },
        };

        for issue in &load.issues {
            warn!(%issue, "config issue");
            self.display_error(&issue.to_string());
        }
        load.configuration
    }
}

/// Owns the model and the views; see the module docs.
pub struct Controller {
    model: GameModel,
    registry: ViewRegistry,
    inbox: mpsc::Receiver<ObserverCommand>,
}

impl Controller {
    /// Attach `views`, then load the configuration at `config_path`.
    ///
    /// Views are started before the configuration is read so they can show
    /// configuration problems. A missing file fails construction with
    /// [`ControllerError::ConfigNotFound`]; the views are dropped with the
    /// half-built controller.
    #[instrument(skip_all, fields(path = %config_path.as_ref().display()))]
    pub fn new(
        config_path: impl AsRef<Path>,
        views: Vec<Box<dyn DrawNumberView>>,
    ) -> Result<Self, ControllerError> {
        let path = config_path.as_ref();
        let (tx, inbox) = mpsc::channel();
        let mut registry = ViewRegistry::attach(views, &tx);
        // Only the views keep senders, so the inbox closes when they are gone.
        drop(tx);

        if !path.exists() {
            warn!("config file not found");
            return Err(ControllerError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let configuration = registry.load_configuration(path);
        let model = match GameModel::new(configuration) {
            Ok(model) => model,
            Err(err) => {
                registry.display_error(&err.to_string());
                return Err(ControllerError::InvalidConfiguration(err));
            }
        };

        info!(
            minimum = configuration.minimum(),
            maximum = configuration.maximum(),
            attempts = configuration.attempts(),
            views = registry.views.len(),
            "game ready"
        );

        Ok(Self {
            model,
            registry,
            inbox,
        })
    }

    /// Notify every view of an error, in registration order.
    pub fn display_error_to_all_views(&mut self, message: &str) {
        self.registry.display_error(message);
    }

    /// Process commands until a view quits or every view is gone.
    pub fn run(&mut self) {
        info!("session started");
        while let Ok(command) = self.inbox.recv() {
            if self.handle_command(command).is_terminate() {
                info!(view = %command.view, "session terminated");
                return;
            }
        }
        info!("all views detached, session over");
    }

    /// Apply every command already queued, without blocking.
    ///
    /// Returns [`SessionIntent::Terminate`] as soon as one command asks for it;
    /// commands queued after it stay in the inbox.
    pub fn process_pending(&mut self) -> SessionIntent {
        while let Ok(command) = self.inbox.try_recv() {
            if self.handle_command(command).is_terminate() {
                return SessionIntent::Terminate;
            }
        }
        SessionIntent::Continue
    }

    fn handle_command(&mut self, command: ObserverCommand) -> SessionIntent {
        debug!(view = %command.view, action = command.action.as_str(), "observer command");
        self.dispatch(command.action)
    }

    pub fn model(&self) -> &GameModel {
        &self.model
    }

    pub fn view_count(&self) -> usize {
        self.registry.views.len()
    }

    /// Number of view callbacks that returned an error so far.
    pub fn failed_deliveries(&self) -> usize {
        self.registry.failed_deliveries
    }

    fn broadcast_result(&mut self, outcome: DrawResult) {
        self.registry
            .broadcast("result", |view| view.result(outcome));
    }
}

impl DrawNumberObserver for Controller {
    #[instrument(skip(self))]
    fn new_attempt(&mut self, guess: i32) {
        match self.model.attempt(guess) {
            Ok(outcome) => {
                debug!(
                    outcome = outcome.as_str(),
                    remaining = self.model.remaining_attempts(),
                    "attempt evaluated"
                );
                self.broadcast_result(outcome);
            }
            Err(err) => {
                debug!(error = %err, "attempt rejected");
                self.registry
                    .broadcast("number_incorrect", |view| view.number_incorrect());
            }
        }
    }

    #[instrument(skip(self))]
    fn reset_game(&mut self) {
        self.model.reset();
        debug!("new round");
    }

    fn quit(&mut self) -> SessionIntent {
        SessionIntent::Terminate
    }
}
