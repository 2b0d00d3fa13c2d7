//! Execution history for promptflow.
//!
//! Every completed run (direct text or multi-step workflow) is recorded as
//! an [`ExecutionRecord`]: what was typed, what came out, and when. The
//! history is append-only and capped; once the cap is reached the oldest
//! record is evicted first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of execution records retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// A record of one completed execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Unique record id, assigned on append.
    pub id: u64,

    /// When the execution completed.
    pub timestamp: DateTime<Utc>,

    /// Display name for the run (e.g. the workflow name or a caller label).
    pub name: String,

    /// The original input text, before expansion.
    pub input: String,

    /// The final resolved text.
    pub output: String,
}

/// Append-only, FIFO-capped log of executions.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ExecutionHistory {
    records: Vec<ExecutionRecord>,
    next_id: u64,
}

impl ExecutionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, evicting the oldest entries beyond `limit`.
    pub fn append(&mut self, name: &str, input: &str, output: &str, limit: usize) {
        let id = self.next_id;
        self.next_id += 1;

        self.records.push(ExecutionRecord {
            id,
            timestamp: Utc::now(),
            name: name.to_string(),
            input: input.to_string(),
            output: output.to_string(),
        });

        while self.records.len() > limit {
            self.records.remove(0);
        }
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[ExecutionRecord] {
        &self.records
    }

    /// The most recent `n` records, newest first.
    pub fn recent(&self, n: usize) -> Vec<&ExecutionRecord> {
        self.records.iter().rev().take(n).collect()
    }
}
