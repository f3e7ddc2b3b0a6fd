//! Diagnostic log records kept by the request client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a diagnostic record.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum LogLevel {
    /// Normal progress
    Info,
    /// Recoverable problem
    Warn,
    /// Terminal failure
    Error,
}

/// One diagnostic record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct LogEntry {
    /// When the record was made
    timestamp: DateTime<Utc>,
    /// Severity
    level: LogLevel,
    /// Operation name, e.g. "attempt"
    operation: String,
    /// Token shared by all records of one request
    correlation: String,
    /// Free-form technical detail
    details: String,
}

impl LogEntry {
    /// Creates a record stamped with the current time.
    pub fn new(
        level: LogLevel,
        operation: impl Into<String>,
        correlation: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            operation: operation.into(),
            correlation: correlation.into(),
            details: details.into(),
        }
    }
}
