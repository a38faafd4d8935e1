// Status log shown in the UI's log panel. Append-only between navigations,
// cleared wholesale when a new navigation is accepted. This is the
// user-facing log; diagnostic logging goes through the `log` facade.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp: String,
    pub message: String,
    pub kind: LogKind,
}

#[derive(Debug, Default)]
pub struct StatusLog {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_info(&mut self, message: impl Into<String>) {
        self.push(LogKind::Info, message.into());
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(LogKind::Error, message.into());
    }

    fn push(&mut self, kind: LogKind, message: String) {
        let entry = LogEntry {
            id: self.next_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
            message,
            kind,
        };
        self.next_id += 1;
        self.entries.push(entry);
    }

    /// Drop all entries. Ids keep counting up so entries stay unique across
    /// the whole session.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
