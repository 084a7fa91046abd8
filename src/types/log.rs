//! Operator message log entries

use serde::{Deserialize, Serialize};

/// Kind of a message log entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    /// System notice (welcome message)
    Info,
    /// Indicator change summary after a control update
    Alert,
    /// Operator question
    Query,
    /// Answer to the preceding query
    Response,
}

impl std::fmt::Display for LogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogKind::Info => write!(f, "info"),
            LogKind::Alert => write!(f, "alert"),
            LogKind::Query => write!(f, "query"),
            LogKind::Response => write!(f, "response"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub kind: LogKind,
    pub text: String,
}

impl LogEntry {
    pub fn new(kind: LogKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
