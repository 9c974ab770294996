//! Runtime error types for the Health Insights dashboard.
//!
//! Fallible operations across the workspace return `InsightResult<T>`.
//! Explanation failures never reach the clinician as text: the requester
//! converts every variant below into the fixed fallback sentence.

use thiserror::Error;

/// The unified error type for the dashboard crates.
#[derive(Debug, Error)]
pub enum InsightError {
    /// The text-generation collaborator could not be reached or refused the request.
    #[error("explanation service unavailable: {reason}")]
    ExplanationUnavailable { reason: String },

    /// The collaborator answered, but the body did not match `{ "explanation": string }`.
    #[error("malformed explanation response: {reason}")]
    MalformedResponse { reason: String },

    /// No answer arrived within the configured bound.
    #[error("explanation timed out after {after_secs}s")]
    Timeout { after_secs: u64 },

    /// A patient id was not found in the record store.
    #[error("unknown patient '{id}'")]
    UnknownPatient { id: String },

    /// Sample records failed to deserialize into `Patient`s.
    #[error("invalid patient records: {reason}")]
    InvalidRecords { reason: String },

    /// The submission sink rejected a prescription or registration.
    #[error("submission failed: {reason}")]
    SubmissionFailed { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the dashboard crates.
pub type InsightResult<T> = Result<T, InsightError>;
