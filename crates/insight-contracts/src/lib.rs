//! # insight-contracts
//!
//! Shared types for the Health Insights dashboard: patient records, risk
//! assessments and their presentation mapping, the explanation contract,
//! submission payloads, and the workspace error type.
//!
//! No I/O lives in this crate, only data definitions and pure mappings.

pub mod error;
pub mod explain;
pub mod patient;
pub mod risk;
pub mod submission;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use error::InsightError;
    use explain::{ExplainRequest, Explanation, RequestId, FALLBACK_EXPLANATION};
    use risk::{
        weight_percent, AssessmentKind, BadgeVariant, FactorMap, RiskAssessment, RiskColor,
        RiskLevel, Score,
    };
    use submission::{Registration, SmokerChoice, Submission};

    fn assessment(score: u8, level: RiskLevel, factors: &[(&str, f64)]) -> RiskAssessment {
        RiskAssessment {
            score: Score::new(score).unwrap(),
            level,
            factors: factors.iter().map(|(k, v)| (*k, *v)).collect(),
        }
    }

    // ── Risk presentation mapping ────────────────────────────────────────────

    #[test]
    fn every_level_has_a_distinct_colour() {
        let colours: HashSet<RiskColor> =
            RiskLevel::ALL.iter().map(|l| l.treatment().color).collect();
        assert_eq!(colours.len(), 4, "each level must be bound to its own colour");
    }

    #[test]
    fn low_and_medium_are_not_destructive() {
        assert_eq!(RiskLevel::Low.treatment().color, RiskColor::Green);
        assert_eq!(RiskLevel::Low.treatment().badge, BadgeVariant::Default);
        assert_eq!(RiskLevel::Medium.treatment().color, RiskColor::Yellow);
        assert!(!RiskLevel::Medium.treatment().is_destructive());
    }

    #[test]
    fn high_and_critical_are_destructive() {
        assert_eq!(RiskLevel::High.treatment().color, RiskColor::Orange);
        assert!(RiskLevel::High.treatment().is_destructive());
        assert_eq!(RiskLevel::Critical.treatment().color, RiskColor::Red);
        assert!(RiskLevel::Critical.treatment().is_destructive());
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn badge_label_appends_risk() {
        assert_eq!(RiskLevel::High.badge_label(), "High Risk");
        assert_eq!(RiskLevel::Critical.badge_label(), "Critical Risk");
    }

    // ── Score ────────────────────────────────────────────────────────────────

    #[test]
    fn score_renders_out_of_100() {
        assert_eq!(Score::new(78).unwrap().to_string(), "78/100");
        assert_eq!(Score::new(0).unwrap().to_string(), "0/100");
        assert_eq!(Score::new(100).unwrap().to_string(), "100/100");
    }

    #[test]
    fn score_above_100_is_rejected() {
        assert!(matches!(Score::new(101), Err(InsightError::InvalidRecords { .. })));
        assert!(serde_json::from_str::<Score>("180").is_err());
        assert_eq!(serde_json::from_str::<Score>("100").unwrap().value(), 100);
    }

    // ── FactorMap ────────────────────────────────────────────────────────────

    #[test]
    fn by_weight_sorts_heaviest_first() {
        let factors: FactorMap = [("Age", 0.1), ("Blood Pressure", 0.4), ("Smoker", 0.2)]
            .into_iter()
            .collect();
        let names: Vec<&str> = factors.by_weight().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["Blood Pressure", "Smoker", "Age"]);
    }

    #[test]
    fn by_weight_breaks_ties_by_name() {
        let factors: FactorMap = [("Comorbidities", 0.5), ("Age", 0.5)].into_iter().collect();
        let names: Vec<&str> = factors.by_weight().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["Age", "Comorbidities"]);
    }

    #[test]
    fn factor_map_serializes_as_plain_object() {
        let factors: FactorMap = [("Glucose", 0.5)].into_iter().collect();
        let json = serde_json::to_value(&factors).unwrap();
        assert_eq!(json, serde_json::json!({ "Glucose": 0.5 }));
    }

    #[test]
    fn weight_percent_rounds_to_whole_numbers() {
        assert_eq!(weight_percent(0.4), "40%");
        assert_eq!(weight_percent(0.333), "33%");
        assert_eq!(weight_percent(1.0), "100%");
    }

    // ── Explanation contract ────────────────────────────────────────────────

    #[test]
    fn readmission_uses_hospital_readmission_label() {
        let a = assessment(40, RiskLevel::Low, &[("Previous Admits", 0.6)]);
        let req = ExplainRequest::for_assessment(AssessmentKind::Readmission, &a);
        assert_eq!(req.prediction, "Hospital Readmission");
        assert_eq!(req.factors.get("Previous Admits"), Some(0.6));
    }

    #[test]
    fn explain_request_wire_shape() {
        let req = ExplainRequest::new("Diabetes", [("BMI", 0.2)].into_iter().collect());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "prediction": "Diabetes", "factors": { "BMI": 0.2 } })
        );
    }

    #[test]
    fn empty_factor_map_is_a_valid_request() {
        let req = ExplainRequest::new("Diabetes", FactorMap::new());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["factors"], serde_json::json!({}));
    }

    #[test]
    fn fallback_explanation_text_is_fixed() {
        assert_eq!(
            Explanation::Fallback.text(),
            "Sorry, we could not generate an explanation at this time."
        );
        assert_eq!(Explanation::Fallback.text(), FALLBACK_EXPLANATION);
        assert!(!Explanation::Generated("x".into()).is_fallback());
    }

    #[test]
    fn request_ids_are_unique() {
        let ids: HashSet<RequestId> = (0..100).map(|_| RequestId::new()).collect();
        assert_eq!(ids.len(), 100);
    }

    // ── Submissions ─────────────────────────────────────────────────────────

    #[test]
    fn registration_submission_is_tagged() {
        let sub = Submission::Registration(Registration {
            name: "Ada".into(),
            age: 36.0,
            is_smoker: SmokerChoice::No,
        });
        let json = serde_json::to_value(&sub).unwrap();
        assert_eq!(json["kind"], "registration");
        assert_eq!(json["isSmoker"], "no");
        assert_eq!(sub.kind(), "registration");
    }

    // ── InsightError display messages ───────────────────────────────────────

    #[test]
    fn error_timeout_display() {
        let msg = InsightError::Timeout { after_secs: 30 }.to_string();
        assert!(msg.contains("timed out"));
        assert!(msg.contains("30s"));
    }

    #[test]
    fn error_unknown_patient_display() {
        let msg = InsightError::UnknownPatient { id: "pat9".into() }.to_string();
        assert!(msg.contains("pat9"));
    }

    #[test]
    fn error_malformed_response_display() {
        let err = InsightError::MalformedResponse {
            reason: "missing field `explanation`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("malformed explanation response"));
        assert!(msg.contains("explanation"));
    }

    #[test]
    fn error_config_error_display() {
        let err = InsightError::ConfigError {
            reason: "unknown backend".into(),
        };
        assert!(err.to_string().contains("configuration error"));
    }
}
