//! # insight-core
//!
//! The collaborator seams of the Health Insights dashboard.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use insight_core::traits::{ExplanationGenerator, SubmissionSink};
//! ```

pub mod traits;

pub use traits::{ExplanationGenerator, SubmissionSink};
