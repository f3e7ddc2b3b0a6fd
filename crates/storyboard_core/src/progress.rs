//! Batch progress reporting.

use serde::{Deserialize, Serialize};

/// Snapshot of a running batch.
///
/// `current_shot` is set while a shot is being generated and cleared in the final
/// report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchProgress {
    /// Number of shots in the batch
    pub total: usize,
    /// Shots that produced a valid frame
    pub completed: usize,
    /// Shots that fell back to a placeholder
    pub failed: usize,
    /// Shot being generated, if any
    pub current_shot: Option<String>,
}

impl BatchProgress {
    /// Shots processed so far.
    pub fn processed(&self) -> usize {
        self.completed + self.failed
    }
}
