//! ConsoleView: interactive line-based view.
//!
//! Reads player input on a dedicated thread and forwards it through the
//! view's [`ObserverHandle`]; renders controller notifications as coloured
//! lines. Both sides share the output stream behind a mutex.
//!
//! Input is lock-step: after sending a guess the reader waits until this view
//! has been told the outcome (`result` or `number_incorrect`) before reading
//! the next line. A round-ending outcome queues its `reset_game` before the
//! reader is released, so piped input never reaches a finished round.

use std::io::{self, BufRead, BufReader, Write};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use anyhow::{anyhow, bail, Context, Result};
use tracing::{debug, warn};

use crate::engine::{DrawNumberView, ObserverHandle};
use crate::input::{handle_line, InputCommand};
use crate::renderer::{
    encode_line_into, encode_outcome_into, encode_prompt_into, BANNER, NEW_ROUND,
};
use crate::style::Tone;
use crate::types::{DrawResult, ViewAction};

pub struct ConsoleView<W: Write + Send + 'static> {
    out: Arc<Mutex<W>>,
    input: Option<Box<dyn BufRead + Send>>,
    observer: Option<ObserverHandle>,
    reader: Option<JoinHandle<()>>,
    /// Releases the reader once the current guess has been answered.
    answered: Option<SyncSender<()>>,
    /// Ask for a new round after a win or a loss.
    auto_reset: bool,
    buf: Vec<u8>,
}

impl ConsoleView<io::Stdout> {
    /// Console view over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<W: Write + Send + 'static> ConsoleView<W> {
    pub fn new(input: impl BufRead + Send + 'static, out: W) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
            input: Some(Box::new(input)),
            observer: None,
            reader: None,
            answered: None,
            auto_reset: true,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn with_auto_reset(mut self, auto_reset: bool) -> Self {
        self.auto_reset = auto_reset;
        self
    }

    /// Shared output stream (the reader thread writes to it too).
    pub fn output(&self) -> Arc<Mutex<W>> {
        Arc::clone(&self.out)
    }

    /// Wait for the input thread to finish (end of input or quit).
    ///
    /// Returns `false` if the thread was never started or panicked.
    pub fn join_reader(&mut self) -> bool {
        match self.reader.take() {
            Some(handle) => handle.join().is_ok(),
            None => false,
        }
    }

    fn write_with(&mut self, f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Result<()> {
        self.buf.clear();
        f(&mut self.buf)?;
        flush_into(&self.out, &self.buf)
    }

    fn release_reader(&self) {
        if let Some(answered) = &self.answered {
            // Full means the reader has an answer pending already.
            let _ = answered.try_send(());
        }
    }
}

fn flush_into<W: Write>(out: &Mutex<W>, bytes: &[u8]) -> Result<()> {
    let mut out = out
        .lock()
        .map_err(|_| anyhow!("console output lock poisoned"))?;
    out.write_all(bytes)?;
    out.flush()?;
    Ok(())
}

fn read_loop<W: Write>(
    input: Box<dyn BufRead + Send>,
    observer: ObserverHandle,
    answered: Receiver<()>,
    out: Arc<Mutex<W>>,
) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!(view = %observer.view(), error = %err, "console read failed");
                break;
            }
        };

        match handle_line(&line) {
            InputCommand::Action(action) => {
                debug!(view = %observer.view(), action = action.as_str(), "console input");
                // Outcomes of guesses made elsewhere must not release this one.
                while answered.try_recv().is_ok() {}
                if !observer.send(action) || action == ViewAction::Quit {
                    return;
                }
                if matches!(action, ViewAction::NewAttempt(_)) && answered.recv().is_err() {
                    // The view is gone, so is the controller.
                    return;
                }
            }
            InputCommand::Blank => {
                let mut buf = Vec::new();
                if encode_prompt_into(&mut buf).is_ok() {
                    let _ = flush_into(&out, &buf);
                }
            }
            InputCommand::Invalid(text) => {
                let mut buf = Vec::new();
                let encoded = encode_line_into(&mut buf, Tone::Warning, &format!("{text:?} is not a number"))
                    .and_then(|_| encode_prompt_into(&mut buf));
                if encoded.is_ok() {
                    let _ = flush_into(&out, &buf);
                }
            }
        }
    }

    // End of input ends the session.
    observer.quit();
}

impl<W: Write + Send + 'static> DrawNumberView for ConsoleView<W> {
    fn set_observer(&mut self, observer: ObserverHandle) {
        self.observer = Some(observer);
    }

    fn start(&mut self) -> Result<()> {
        let observer = self
            .observer
            .clone()
            .ok_or_else(|| anyhow!("console view started without an observer"))?;
        let Some(input) = self.input.take() else {
            bail!("console view already started");
        };

        self.write_with(|buf| {
            encode_line_into(buf, Tone::Info, BANNER)?;
            encode_prompt_into(buf)
        })?;

        let out = Arc::clone(&self.out);
        let (answered_tx, answered_rx) = mpsc::sync_channel(1);
        let handle = thread::Builder::new()
            .name(format!("console-input-{}", observer.view().0))
            .spawn(move || read_loop(input, observer, answered_rx, out))
            .context("failed to spawn console input thread")?;
        self.answered = Some(answered_tx);
        self.reader = Some(handle);
        Ok(())
    }

    fn result(&mut self, outcome: DrawResult) -> Result<()> {
        let new_round = self.auto_reset && outcome.ends_round();
        let written = self.write_with(|buf| {
            encode_outcome_into(buf, outcome)?;
            if new_round {
                encode_line_into(buf, Tone::Info, NEW_ROUND)?;
            }
            encode_prompt_into(buf)
        });

        if new_round {
            if let Some(observer) = &self.observer {
                observer.reset_game();
            }
        }
        self.release_reader();
        written
    }

    fn number_incorrect(&mut self) -> Result<()> {
        let written = self.write_with(|buf| {
            encode_line_into(
                buf,
                Tone::Warning,
                "Incorrect number: it is outside the allowed range.",
            )?;
            encode_prompt_into(buf)
        });
        self.release_reader();
        written
    }

    fn display_error(&mut self, message: &str) -> Result<()> {
        self.write_with(|buf| {
            encode_line_into(buf, Tone::Error, &format!("Error: {message}"))?;
            encode_prompt_into(buf)
        })
    }
}
