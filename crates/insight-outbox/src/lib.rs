//! # insight-outbox
//!
//! Where submitted prescriptions and registrations go.
//!
//! There is no prescribing or registration backend. The outbox accepts
//! validated submissions, logs them, assigns each a sequence number, and
//! keeps them in memory for inspection:
//!
//! ```rust,ignore
//! use insight_core::SubmissionSink;
//! use insight_outbox::InMemoryOutbox;
//!
//! let outbox = InMemoryOutbox::new();
//! let seq = outbox.submit(submission)?;
//! let log = outbox.export();
//! ```

pub mod memory;
pub mod record;

pub use memory::InMemoryOutbox;
pub use record::{OutboxLog, SubmissionRecord};

// ── Tests ─────────────────────────────────────────────────────────────────────
