//! Agent-facing structured execution log

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Severity/category of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single entry in the execution log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Position in the log, usable as a handle for later updates
    pub no: usize,
    pub kind: LogKind,
    pub heading: String,
    pub content: String,
    /// Key/value pairs attached to the entry (tool arguments, ids)
    pub kvps: BTreeMap<String, serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

/// Shared, append-only execution log
///
/// Cloning yields another handle to the same log. Every entry is mirrored to
/// `tracing` at a level matching its kind.
#[derive(Debug, Clone, Default)]
pub struct ExecutionLog {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl ExecutionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its number
    pub fn log(
        &self,
        kind: LogKind,
        heading: impl Into<String>,
        content: impl Into<String>,
    ) -> usize {
        self.log_with_kvps(kind, heading, content, BTreeMap::new())
    }

    /// Append an entry with key/value pairs and return its number
    pub fn log_with_kvps(
        &self,
        kind: LogKind,
        heading: impl Into<String>,
        content: impl Into<String>,
        kvps: BTreeMap<String, serde_json::Value>,
    ) -> usize {
        let heading = heading.into();
        let content = content.into();

        match kind {
            LogKind::Error => tracing::error!(heading = %heading, "{}", content),
            LogKind::Warning => tracing::warn!(heading = %heading, "{}", content),
            LogKind::Info => tracing::debug!(heading = %heading, "{}", content),
        }

        let mut entries = self.entries.lock();
        let no = entries.len();
        entries.push(LogEntry {
            no,
            kind,
            heading,
            content,
            kvps,
            timestamp: Utc::now(),
        });
        no
    }

    /// Replace the content of an existing entry
    pub fn update_content(&self, no: usize, content: impl Into<String>) -> bool {
        match self.entries.lock().get_mut(no) {
            Some(entry) => {
                entry.content = content.into();
                true
            }
            None => false,
        }
    }

    /// Snapshot of all entries
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Snapshot of entries of one kind
    pub fn entries_of(&self, kind: LogKind) -> Vec<LogEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.kind == kind)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_numbers_entries() {
        let log = ExecutionLog::new();
        assert!(log.is_empty());

        assert_eq!(log.log(LogKind::Info, "first", ""), 0);
        assert_eq!(log.log(LogKind::Error, "second", "boom"), 1);
        assert_eq!(log.len(), 2);

        let errors = log.entries_of(LogKind::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].heading, "second");
        assert_eq!(errors[0].content, "boom");
    }

    #[test]
    fn test_clones_share_entries() {
        let log = ExecutionLog::new();
        let handle = log.clone();
        handle.log(LogKind::Info, "from clone", "");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_update_content() {
        let log = ExecutionLog::new();
        let no = log.log(LogKind::Warning, "heading", "");
        assert!(log.update_content(no, "done"));
        assert!(!log.update_content(42, "missing"));
        assert_eq!(log.entries()[0].content, "done");
    }

    #[test]
    fn test_kvps_are_kept() {
        let log = ExecutionLog::new();
        let mut kvps = BTreeMap::new();
        kvps.insert("filename".to_string(), serde_json::json!("a.txt"));
        log.log_with_kvps(LogKind::Info, "args", "", kvps);
        assert_eq!(log.entries()[0].kvps["filename"], "a.txt");
    }

    #[test]
    fn test_log_kind_display() {
        assert_eq!(LogKind::Error.to_string(), "error");
        assert_eq!(LogKind::Info.to_string(), "info");
    }
}
