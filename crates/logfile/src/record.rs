//! Journal record types - one JSON object per line
//!
//! Every record has: type, seq (per-view sequence number), ts (timestamp in ms)
//!
//! ```text
//! {"seq":1,"ts":1700000000000,"type":"started","view":2}
//! {"seq":2,"ts":1700000004210,"type":"result","outcome":"tooLow","description":"Your number is too small"}
//! {"seq":3,"ts":1700000006001,"type":"number_incorrect"}
//! {"seq":4,"ts":1700000007530,"type":"error","message":"..."}
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::types::DrawResult;

/// Wire form of [`DrawResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutcomeTag {
    Correct,
    TooLow,
    TooHigh,
    NoMoreAttempts,
}

impl From<DrawResult> for OutcomeTag {
    fn from(value: DrawResult) -> Self {
        match value {
            DrawResult::Correct => OutcomeTag::Correct,
            DrawResult::TooLow => OutcomeTag::TooLow,
            DrawResult::TooHigh => OutcomeTag::TooHigh,
            DrawResult::NoMoreAttempts => OutcomeTag::NoMoreAttempts,
        }
    }
}

impl From<OutcomeTag> for DrawResult {
    fn from(value: OutcomeTag) -> Self {
        match value {
            OutcomeTag::Correct => DrawResult::Correct,
            OutcomeTag::TooLow => DrawResult::TooLow,
            OutcomeTag::TooHigh => DrawResult::TooHigh,
            OutcomeTag::NoMoreAttempts => DrawResult::NoMoreAttempts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogEvent {
    Started { view: usize },
    Result {
        outcome: OutcomeTag,
        description: String,
    },
    NumberIncorrect,
    Error { message: String },
}

impl LogEvent {
    pub fn result(outcome: DrawResult) -> Self {
        LogEvent::Result {
            outcome: outcome.into(),
            description: outcome.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub seq: u64,
    pub ts: u64,
    #[serde(flatten)]
    pub event: LogEvent,
}

impl LogRecord {
    pub fn new(seq: u64, event: LogEvent) -> Self {
        Self {
            seq,
            ts: current_timestamp_ms(),
            event,
        }
    }
}

pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
