//! The explanation dialog.
//!
//! Opening the dialog issues a new `RequestId` and enters the loading state.
//! A result is applied only if its id matches the request the dialog is
//! still waiting on; anything else arrived after the dialog was closed or
//! re-opened and is dropped.

use tracing::debug;

use insight_contracts::{
    explain::{ExplainRequest, Explanation, RequestId},
    risk::{AssessmentKind, RiskAssessment},
};

use crate::detail::{factor_rows, FactorRow};

pub const DIALOG_TITLE: &str = "AI-Powered Explanation";
pub const FACTORS_HEADING: &str = "Key Contributing Factors";
pub const NARRATIVE_HEADING: &str = "AI Narrative";
pub const LOADING_TEXT: &str = "Generating insights...";

/// Subtitle naming the prediction being explained.
pub fn dialog_description(prediction: &str) -> String {
    format!("Understanding the 'why' behind the {prediction} risk prediction.")
}

/// A request the caller must now run, tagged with the id to resolve it by.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingExplanation {
    pub id: RequestId,
    pub request: ExplainRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogState {
    Closed,
    Loading {
        id: RequestId,
        kind: AssessmentKind,
        request: ExplainRequest,
    },
    Ready {
        kind: AssessmentKind,
        request: ExplainRequest,
        explanation: Explanation,
    },
}

#[derive(Debug, Clone)]
pub struct ExplanationDialog {
    state: DialogState,
}

impl Default for ExplanationDialog {
    fn default() -> Self {
        Self {
            state: DialogState::Closed,
        }
    }
}

impl ExplanationDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DialogState::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DialogState::Loading { .. })
    }

    /// Open for one assessment, superseding any request still in flight.
    pub fn open(&mut self, kind: AssessmentKind, assessment: &RiskAssessment) -> PendingExplanation {
        let id = RequestId::new();
        let request = ExplainRequest::for_assessment(kind, assessment);
        debug!(request_id = %id.0, prediction = %request.prediction, "explanation dialog opened");
        self.state = DialogState::Loading {
            id,
            kind,
            request: request.clone(),
        };
        PendingExplanation { id, request }
    }

    pub fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    /// Apply a finished request. Returns `false` when the result was stale.
    pub fn resolve(&mut self, id: RequestId, explanation: Explanation) -> bool {
        let (kind, request) = match &self.state {
            DialogState::Loading {
                id: waiting,
                kind,
                request,
            } if *waiting == id => (*kind, request.clone()),
            _ => {
                debug!(request_id = %id.0, "discarding stale explanation result");
                return false;
            }
        };
        self.state = DialogState::Ready {
            kind,
            request,
            explanation,
        };
        true
    }

    /// The prediction label of the open dialog.
    pub fn prediction(&self) -> Option<&str> {
        match &self.state {
            DialogState::Closed => None,
            DialogState::Loading { request, .. } | DialogState::Ready { request, .. } => {
                Some(&request.prediction)
            }
        }
    }

    /// Factor rows for the open dialog, heaviest first.
    pub fn factors(&self) -> Vec<FactorRow> {
        match &self.state {
            DialogState::Closed => Vec::new(),
            DialogState::Loading { request, .. } | DialogState::Ready { request, .. } => {
                factor_rows(&request.factors)
            }
        }
    }

    /// Narrative text, or `None` while loading or closed.
    pub fn narrative(&self) -> Option<&str> {
        match &self.state {
            DialogState::Ready { explanation, .. } => Some(explanation.text()),
            _ => None,
        }
    }
}
