//! Guess-the-number runner (default binary).
//!
//! Wires one controller to three views: an interactive console on
//! stdin/stdout, a plain-text log file, and the JSON journal file. Tracing
//! goes to stderr.
//!
//! # Environment Variables
//!
//! - `DRAW_NUMBER_CONFIG`: Configuration file (default: "config.yml")
//! - `DRAW_NUMBER_TEXT_LOG_PATH`: Plain-text log (default: "output.log")
//! - `DRAW_NUMBER_LOG_PATH`: JSON journal (default: "output.jsonl")
//! - `DRAW_NUMBER_LOG_APPEND`: Set to "1" or "true" to keep earlier journal records
//! - `DRAW_NUMBER_LOG_DISABLED`: Set to "1" or "true" to disable the journal

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use draw_number::engine::{Controller, DrawNumberView};
use draw_number::logfile::{FileLogView, LogConfig};
use draw_number::term::{ConsoleView, PrintStreamView};
use draw_number::types::{DEFAULT_CONFIG_PATH, DEFAULT_LOG_PATH};

/// Process configuration
#[derive(Debug, Clone, PartialEq, Eq)]
struct AppConfig {
    config_path: PathBuf,
    text_log_path: PathBuf,
    /// `None` when the journal is disabled.
    journal: Option<LogConfig>,
}

impl AppConfig {
    /// Create from environment variables
    fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path_var = |key: &str, default: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        let journal = if LogConfig::disabled_in(&lookup) {
            None
        } else {
            Some(LogConfig::from_lookup(&lookup))
        };

        Self {
            config_path: path_var("DRAW_NUMBER_CONFIG", DEFAULT_CONFIG_PATH),
            text_log_path: path_var("DRAW_NUMBER_TEXT_LOG_PATH", DEFAULT_LOG_PATH),
            journal,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let app = AppConfig::from_env();

    let mut views: Vec<Box<dyn DrawNumberView>> = vec![Box::new(ConsoleView::stdio())];
    // The game is still playable without either log.
    match PrintStreamView::create(&app.text_log_path) {
        Ok(view) => views.push(Box::new(view)),
        Err(err) => warn!(error = %err, "plain-text log unavailable"),
    }
    match &app.journal {
        None => info!("journal disabled via DRAW_NUMBER_LOG_DISABLED"),
        Some(journal) => match FileLogView::open(journal) {
            Ok(view) => views.push(Box::new(view)),
            Err(err) => warn!(error = %err, "journal unavailable"),
        },
    }

    let mut controller = Controller::new(&app.config_path, views)
        .with_context(|| format!("cannot start a game from {}", app.config_path.display()))?;
    controller.run();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use draw_number::types::DEFAULT_JOURNAL_PATH;

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_app_config_defaults() {
        let app = AppConfig::from_lookup(vars(&[]));
        assert_eq!(app.config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(app.text_log_path, PathBuf::from(DEFAULT_LOG_PATH));
        assert_eq!(app.journal, Some(LogConfig::default()));
        assert_eq!(
            app.journal.map(|j| j.path),
            Some(PathBuf::from(DEFAULT_JOURNAL_PATH))
        );
    }

    #[test]
    fn test_app_config_reads_every_variable() {
        let app = AppConfig::from_lookup(vars(&[
            ("DRAW_NUMBER_CONFIG", " game.yml "),
            ("DRAW_NUMBER_TEXT_LOG_PATH", "plain.log"),
            ("DRAW_NUMBER_LOG_PATH", "events.jsonl"),
            ("DRAW_NUMBER_LOG_APPEND", "1"),
        ]));
        assert_eq!(app.config_path, PathBuf::from("game.yml"));
        assert_eq!(app.text_log_path, PathBuf::from("plain.log"));
        assert_eq!(
            app.journal,
            Some(LogConfig {
                path: PathBuf::from("events.jsonl"),
                append: true,
            })
        );
    }

    #[test]
    fn test_app_config_blank_values_fall_back() {
        let app = AppConfig::from_lookup(vars(&[("DRAW_NUMBER_CONFIG", "  ")]));
        assert_eq!(app.config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_app_config_journal_can_be_disabled() {
        let app = AppConfig::from_lookup(vars(&[
            ("DRAW_NUMBER_LOG_DISABLED", "true"),
            ("DRAW_NUMBER_LOG_PATH", "ignored.jsonl"),
        ]));
        assert_eq!(app.journal, None);
    }

    #[test]
    fn test_text_log_and_journal_use_different_files() {
        let app = AppConfig::from_lookup(vars(&[]));
        let journal = app.journal.unwrap();
        assert_ne!(app.text_log_path, journal.path);
    }
}
