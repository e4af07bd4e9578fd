//! Journal runtime.
//!
//! Bridges the synchronous controller with an async file writer: records are
//! pushed onto an unbounded channel and appended to the journal by a task on a
//! dedicated tokio runtime.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::record::LogRecord;
use crate::types::DEFAULT_JOURNAL_PATH;

/// Journal configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub path: PathBuf,
    /// Keep existing contents instead of starting a fresh journal.
    pub append: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_JOURNAL_PATH),
            append: false,
        }
    }
}

impl LogConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any variable source; unset or blank values use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = lookup("DRAW_NUMBER_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_JOURNAL_PATH));

        let append = lookup("DRAW_NUMBER_LOG_APPEND")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        Self { path, append }
    }

    /// Check if the journal is disabled via environment
    pub fn is_disabled() -> bool {
        Self::disabled_in(|key| std::env::var(key).ok())
    }

    pub fn disabled_in(lookup: impl Fn(&str) -> Option<String>) -> bool {
        lookup("DRAW_NUMBER_LOG_DISABLED")
            .map(|v| is_truthy(&v))
            .unwrap_or(false)
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

pub async fn open_log_file(config: &LogConfig) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.append)
        .truncate(!config.append)
        .open(&config.path)
        .await
        .with_context(|| format!("failed to open journal {}", config.path.display()))
}

/// Append every record received on `rx` to `file`, one JSON object per line.
///
/// Returns the number of records written once every sender is gone.
pub async fn run_writer(mut file: File, mut rx: mpsc::UnboundedReceiver<LogRecord>) -> Result<u64> {
    let mut buf: Vec<u8> = Vec::with_capacity(256);
    let mut written = 0u64;

    while let Some(rec) = rx.recv().await {
        buf.clear();
        if let Err(err) = serde_json::to_writer(&mut buf, &rec) {
            warn!(seq = rec.seq, error = %err, "skipping unserializable journal record");
            continue;
        }
        buf.push(b'\n');
        file.write_all(&buf).await.context("journal write failed")?;
        file.flush().await.context("journal flush failed")?;
        written += 1;
    }

    file.flush().await?;
    debug!(written, "journal writer finished");
    Ok(written)
}

/// Running journal writer.
///
/// Dropping it drains the queue and waits for the writer. It must therefore be
/// dropped outside of any tokio runtime.
pub struct LogRuntime {
    rt: Runtime,
    tx: Option<mpsc::UnboundedSender<LogRecord>>,
    writer: Option<JoinHandle<Result<u64>>>,
}

impl LogRuntime {
    /// Open the journal and start the writer task.
    pub fn start(config: &LogConfig) -> Result<Self> {
        let rt = Runtime::new().context("failed to create tokio runtime")?;
        let file = rt.block_on(open_log_file(config))?;
        let (tx, rx) = mpsc::unbounded_channel::<LogRecord>();
        let writer = rt.spawn(run_writer(file, rx));

        Ok(Self {
            rt,
            tx: Some(tx),
            writer: Some(writer),
        })
    }

    /// Queue a record; `false` once the writer has stopped.
    pub fn send(&self, record: LogRecord) -> bool {
        self.tx
            .as_ref()
            .map(|tx| tx.send(record).is_ok())
            .unwrap_or(false)
    }

    /// Close the queue and wait for every queued record to be written.
    ///
    /// Returns the number of records written; later calls return 0.
    pub fn shutdown(&mut self) -> Result<u64> {
        self.tx.take();
        match self.writer.take() {
            Some(writer) => self
                .rt
                .block_on(writer)
                .context("journal writer task panicked")?,
            None => Ok(0),
        }
    }
}

impl Drop for LogRuntime {
    fn drop(&mut self) {
        if let Err(err) = self.shutdown() {
            warn!(error = %err, "journal did not shut down cleanly");
        }
    }
}
