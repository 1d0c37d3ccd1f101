//! Append-only log book backing the on-page activity panel.
//!
//! Every step of a search appends one [`LogEntry`] here. Entries are never
//! mutated or removed; the sequence lives as long as the bridge session.
//! Rendering (page panel, terminal, `tracing`) is the caller's concern; the
//! book itself only owns the ordered history.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Severity of a log entry, mirrored into the panel's styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timestamped entry in the activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Local wall-clock time of day, `HH:MM:SS`.
    pub timestamp: String,
    pub category: String,
    pub message: String,
    pub severity: Severity,
}

/// Ordered, unbounded sequence of log entries. No eviction.
#[derive(Debug, Default)]
pub struct LogBook {
    entries: Vec<LogEntry>,
}

impl LogBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new entry stamped with the current local time and returns a
    /// reference to it so callers can mirror it elsewhere.
    pub fn append(
        &mut self,
        category: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> &LogEntry {
        self.entries.push(LogEntry {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            category: category.into(),
            message: message.into(),
            severity,
        });
        &self.entries[self.entries.len() - 1]
    }

    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
