//! Outbox data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use insight_contracts::submission::Submission;

/// One accepted submission, stamped on arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Zero-based, gap-free arrival order.
    pub sequence: u64,
    pub submitted_at: DateTime<Utc>,
    pub submission: Submission,
}

/// A snapshot of everything the outbox has accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboxLog {
    pub records: Vec<SubmissionRecord>,
    pub exported_at: DateTime<Utc>,
}

impl OutboxLog {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records of one kind, e.g. `"prescription"`.
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a SubmissionRecord> + 'a {
        self.records.iter().filter(move |r| r.submission.kind() == kind)
    }
}
