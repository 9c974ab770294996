//! Collaborator traits for the dashboard.
//!
//! Two boundaries leave this system:
//!
//! - `ExplanationGenerator`: the external text-generation service that
//!   narrates a risk prediction
//! - `SubmissionSink`: wherever a submitted prescription or
//!   registration would go
//!
//! Both are treated as untrusted and fallible. Callers decide what the
//! clinician sees when they fail.

use insight_contracts::{
    error::InsightResult,
    explain::{ExplainRequest, ExplainResponse},
    submission::Submission,
};

/// A text-generation service that turns a prediction and its factor weights
/// into a clinician-facing narrative.
///
/// Implementations may block on network I/O. They are not required to be
/// deterministic: two calls with the same request may return different
/// prose, so callers must treat the text as opaque.
pub trait ExplanationGenerator: Send + Sync {
    /// Produce an explanation for `request`.
    ///
    /// Returns `Err` for transport failures, non-success answers, and bodies
    /// that do not match the response contract. Errors carry diagnostic
    /// detail for logs only.
    fn generate(&self, request: &ExplainRequest) -> InsightResult<ExplainResponse>;

    /// Short backend name for logs, e.g. "http".
    fn name(&self) -> &'static str;
}

/// The receiving end of the prescription and registration forms.
pub trait SubmissionSink: Send + Sync {
    /// Accept one submission.
    ///
    /// Called only after the form has validated its input. Returns the
    /// sequence number assigned to the submission.
    fn submit(&self, submission: Submission) -> InsightResult<u64>;
}
