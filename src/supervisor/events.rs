//! Append-only JSONL log of lifecycle transitions.
//!
//! Each successful start and stop appends one self-describing JSON line
//! (tagged with `event`) to `events.jsonl` in the log directory. Writes are
//! best effort: a failure is reported via tracing and never fails the
//! lifecycle operation itself.
//!
//! Uses synchronous `std::fs` since writes are small, append-only, and
//! flushed per line.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

/// Returns the current UTC time as an ISO 8601 string with milliseconds.
fn now_iso() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// A lifecycle transition, serialized as a single JSON line.
#[derive(Debug, Serialize)]
#[serde(tag = "event")]
pub enum LifecycleEvent {
    /// A worker was spawned and its pid recorded.
    #[serde(rename = "started")]
    Started {
        timestamp: String,
        pid: i32,
        port: u16,
        log_file: String,
    },

    /// A worker was signalled and its record cleared.
    #[serde(rename = "stopped")]
    Stopped { timestamp: String, pid: i32 },
}

impl LifecycleEvent {
    pub fn started(pid: i32, port: u16, log_file: &Path) -> Self {
        LifecycleEvent::Started {
            timestamp: now_iso(),
            pid,
            port,
            log_file: log_file.display().to_string(),
        }
    }

    pub fn stopped(pid: i32) -> Self {
        LifecycleEvent::Stopped {
            timestamp: now_iso(),
            pid,
        }
    }
}

/// Append one event to the JSONL log at `path`.
pub fn record(path: &Path, event: &LifecycleEvent) {
    let line = match serde_json::to_string(event) {
        Ok(line) => line,
        Err(e) => {
            tracing::warn!("Failed to serialize lifecycle event: {e}");
            return;
        }
    };

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(mut file) => {
            if let Err(e) = writeln!(file, "{line}") {
                tracing::warn!("Failed to write event log at {}: {e}", path.display());
            }
        }
        Err(e) => {
            tracing::warn!("Failed to open event log at {}: {e}", path.display());
        }
    }
}
