//! The risk-explanation request/response contract.
//!
//! This is the only external-service contract in the system:
//! request `{ prediction, factors }`, response `{ explanation }`.

use serde::{Deserialize, Serialize};

use crate::risk::{AssessmentKind, FactorMap, RiskAssessment};

/// The sentence shown whenever an explanation cannot be produced.
pub const FALLBACK_EXPLANATION: &str = "Sorry, we could not generate an explanation at this time.";

/// Input to the explanation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainRequest {
    /// Which assessment is being explained, e.g. "Cardiovascular Disease".
    pub prediction: String,
    /// Contributing factors. May be empty.
    pub factors: FactorMap,
}

impl ExplainRequest {
    pub fn new(prediction: impl Into<String>, factors: FactorMap) -> Self {
        Self {
            prediction: prediction.into(),
            factors,
        }
    }

    /// Build the request for one of a patient's assessments.
    pub fn for_assessment(kind: AssessmentKind, assessment: &RiskAssessment) -> Self {
        Self::new(kind.prediction_label(), assessment.factors.clone())
    }
}

/// Output of the explanation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// What the clinician sees once a request settles.
///
/// The failure case carries no error detail on purpose: the raw error is
/// logged where it happens and never rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Explanation {
    Generated(String),
    Fallback,
}

impl Explanation {
    pub fn text(&self) -> &str {
        match self {
            Explanation::Generated(text) => text,
            Explanation::Fallback => FALLBACK_EXPLANATION,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Explanation::Fallback)
    }
}

/// Identifies one in-flight explain action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub uuid::Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}
