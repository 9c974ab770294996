//! In-memory implementation of `SubmissionSink`.
//!
//! `InMemoryOutbox` keeps every accepted submission in a `Vec` behind a
//! `Mutex`, so the terminal UI's event loop and its worker threads can share
//! one instance. Nothing leaves the process: each submission is logged and
//! kept until `export()` is called.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::info;

use insight_contracts::{
    error::{InsightError, InsightResult},
    submission::Submission,
};
use insight_core::SubmissionSink;

use crate::record::{OutboxLog, SubmissionRecord};

// ── Internal mutable state ────────────────────────────────────────────────────

#[derive(Default)]
pub(crate) struct OutboxState {
    pub(crate) records: Vec<SubmissionRecord>,
    /// The next sequence number to assign (starts at 0).
    pub(crate) sequence: u64,
}

// ── Public outbox ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryOutbox {
    pub(crate) state: Arc<Mutex<OutboxState>>,
}

impl InMemoryOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot every record accepted so far, in arrival order.
    pub fn export(&self) -> OutboxLog {
        OutboxLog {
            records: self.lock_or_recover().records.clone(),
            exported_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.lock_or_recover().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads tolerate a poisoned lock: the records are append-only, so a
    /// panicked writer cannot leave them half-updated.
    fn lock_or_recover(&self) -> MutexGuard<'_, OutboxState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// ── SubmissionSink impl ───────────────────────────────────────────────────────

impl SubmissionSink for InMemoryOutbox {
    /// Append one submission and return its sequence number.
    fn submit(&self, submission: Submission) -> InsightResult<u64> {
        let mut state = self.state.lock().map_err(|e| InsightError::SubmissionFailed {
            reason: format!("outbox lock poisoned: {}", e),
        })?;

        let sequence = state.sequence;
        let kind = submission.kind();

        match &submission {
            Submission::Prescription(draft) => info!(
                sequence,
                kind,
                patient = draft.patient_id.as_ref().map(|id| id.as_str()).unwrap_or("<none>"),
                text = %draft.text,
                "submission accepted"
            ),
            Submission::Registration(registration) => info!(
                sequence,
                kind,
                name = %registration.name,
                age = registration.age,
                smoker = %registration.is_smoker,
                "submission accepted"
            ),
        }

        state.records.push(SubmissionRecord {
            sequence,
            submitted_at: Utc::now(),
            submission,
        });
        state.sequence += 1;

        Ok(sequence)
    }
}
