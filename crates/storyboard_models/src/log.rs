//! Bounded in-memory diagnostic log.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use storyboard_core::LogEntry;

/// Ring buffer of recent diagnostic records.
///
/// Holds at most `capacity` entries; recording into a full log evicts the oldest.
/// Nothing is persisted.
///
/// # Examples
///
/// ```
/// use storyboard_core::{LogEntry, LogLevel};
/// use storyboard_models::DiagnosticLog;
///
/// let log = DiagnosticLog::new(2);
/// for n in 0..3 {
///     log.record(LogEntry::new(LogLevel::Info, "attempt", "abcd1234", format!("#{n}")));
/// }
///
/// let details: Vec<_> = log.snapshot().iter().map(|e| e.details().clone()).collect();
/// assert_eq!(details, ["#1", "#2"]);
/// ```
#[derive(Debug)]
pub struct DiagnosticLog {
    capacity: usize,
    entries: Mutex<VecDeque<LogEntry>>,
}

impl DiagnosticLog {
    /// Creates an empty log holding up to `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends an entry, evicting the oldest when full.
    pub fn record(&self, entry: LogEntry) {
        let mut entries = self.lock();
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Copies the retained entries, oldest first.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    /// Entries sharing one correlation token, oldest first.
    pub fn for_correlation(&self, correlation: &str) -> Vec<LogEntry> {
        self.lock()
            .iter()
            .filter(|entry| entry.correlation() == correlation)
            .cloned()
            .collect()
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a VecDeque half-updated.
    fn lock(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new(100)
    }
}
