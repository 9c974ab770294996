//! Structural validation of explanation-service responses.
//!
//! A response body is checked in two phases:
//!
//! 1. **Structural**: the JSON body is validated against
//!    `response_schema()` using the `jsonschema` crate. All violations are
//!    collected so the log line shows the full picture.
//! 2. **Semantic**: the explanation must contain more than whitespace.
//!
//! Either failure is a `MalformedResponse`, which the requester turns into
//! the fallback sentence.

use serde_json::{json, Value};
use tracing::warn;

use insight_contracts::{
    error::{InsightError, InsightResult},
    explain::ExplainResponse,
};

/// JSON Schema for `{ "explanation": string }`.
pub fn response_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "ExplainPredictionOutput",
        "type": "object",
        "required": ["explanation"],
        "properties": {
            "explanation": {
                "type": "string",
                "description": "A human-readable explanation of why the prediction was made, based on the contributing factors."
            }
        }
    })
}

/// Validate `body` and extract the explanation.
pub fn parse_response(body: &Value) -> InsightResult<ExplainResponse> {
    // ── Phase 1: JSON Schema structural validation ────────────────────────
    let validator = jsonschema::validator_for(&response_schema()).map_err(|e| {
        InsightError::MalformedResponse {
            reason: format!("invalid response schema document: {e}"),
        }
    })?;

    let violations: Vec<String> = validator
        .iter_errors(body)
        .map(|error| format!("JSON Schema violation at {}: {}", error.instance_path, error))
        .collect();

    if !violations.is_empty() {
        let reason = violations.join("; ");
        warn!(%reason, "explanation response failed structural validation");
        return Err(InsightError::MalformedResponse { reason });
    }

    let response: ExplainResponse =
        serde_json::from_value(body.clone()).map_err(|e| InsightError::MalformedResponse {
            reason: e.to_string(),
        })?;

    // ── Phase 2: semantic checks ──────────────────────────────────────────
    ensure_not_blank(response)
}

/// Reject explanations that are empty once trimmed.
pub fn ensure_not_blank(response: ExplainResponse) -> InsightResult<ExplainResponse> {
    if response.explanation.trim().is_empty() {
        return Err(InsightError::MalformedResponse {
            reason: "explanation is empty".to_string(),
        });
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed_reason(body: Value) -> String {
        match parse_response(&body) {
            Err(InsightError::MalformedResponse { reason }) => reason,
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn well_formed_response_passes() {
        let response = parse_response(&json!({ "explanation": "Blood pressure dominates." })).unwrap();
        assert!(!response.explanation.is_empty());
    }

    #[test]
    fn extra_fields_are_tolerated() {
        let body = json!({ "explanation": "ok", "model": "medgemma", "latency_ms": 812 });
        assert!(parse_response(&body).is_ok());
    }

    #[test]
    fn missing_explanation_is_malformed() {
        let reason = malformed_reason(json!({ "text": "wrong key" }));
        assert!(reason.contains("explanation"), "unexpected reason: {reason}");
    }

    #[test]
    fn non_string_explanation_is_malformed() {
        let reason = malformed_reason(json!({ "explanation": 42 }));
        assert!(reason.contains("JSON Schema violation"), "unexpected reason: {reason}");
    }

    #[test]
    fn non_object_body_is_malformed() {
        malformed_reason(json!(["explanation"]));
    }

    #[test]
    fn whitespace_explanation_is_malformed() {
        let reason = malformed_reason(json!({ "explanation": "  \n " }));
        assert_eq!(reason, "explanation is empty");
    }
}
