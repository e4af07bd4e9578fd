//! FileLogView: persistent journal of everything the controller broadcasts.

use anyhow::{bail, Result};
use tracing::debug;

use crate::engine::{DrawNumberView, ObserverHandle, ViewId};
use crate::record::{LogEvent, LogRecord};
use crate::runtime::{LogConfig, LogRuntime};
use crate::types::DrawResult;

/// View that appends one JSON record per notification to a journal file.
///
/// Writing happens on the journal's own runtime; callbacks only enqueue.
pub struct FileLogView {
    runtime: LogRuntime,
    seq: u64,
    view: Option<ViewId>,
}

impl FileLogView {
    /// Open the journal described by `config` and start its writer.
    pub fn open(config: &LogConfig) -> Result<Self> {
        let runtime = LogRuntime::start(config)?;
        debug!(path = %config.path.display(), "journal opened");
        Ok(Self {
            runtime,
            seq: 0,
            view: None,
        })
    }

    /// Flush every queued record and stop the writer.
    ///
    /// Returns the number of records written.
    pub fn shutdown(mut self) -> Result<u64> {
        self.runtime.shutdown()
    }

    fn record(&mut self, event: LogEvent) -> Result<()> {
        self.seq += 1;
        if !self.runtime.send(LogRecord::new(self.seq, event)) {
            bail!("journal writer has stopped");
        }
        Ok(())
    }
}

impl DrawNumberView for FileLogView {
    fn set_observer(&mut self, observer: ObserverHandle) {
        self.view = Some(observer.view());
    }

    fn start(&mut self) -> Result<()> {
        let view = self.view.map(|v| v.0).unwrap_or_default();
        self.record(LogEvent::Started { view })
    }

    fn result(&mut self, outcome: DrawResult) -> Result<()> {
        self.record(LogEvent::result(outcome))
    }

    fn number_incorrect(&mut self) -> Result<()> {
        self.record(LogEvent::NumberIncorrect)
    }

    fn display_error(&mut self, message: &str) -> Result<()> {
        self.record(LogEvent::Error {
            message: message.to_string(),
        })
    }
}
