//! # insight-records
//!
//! Static, in-memory patient records for the Health Insights dashboard.
//!
//! The roster is fixed for the lifetime of the process: there is no
//! mutation API and no persistence. All data is hardcoded and fictional.

pub mod mock_data;
pub mod store;

pub use store::PatientStore;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;
    use serde_json::json;

    use insight_contracts::{
        error::InsightError,
        patient::{Gender, PatientId},
        risk::{AssessmentKind, RiskLevel},
    };

    use crate::PatientStore;

    fn store() -> PatientStore {
        PatientStore::sample().expect("sample records must deserialize")
    }

    #[test]
    fn sample_roster_has_three_patients_in_order() {
        let store = store();
        let names: Vec<&str> = store.all().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Jane Smith", "Robert Johnson"]);
    }

    #[test]
    fn patient_ids_are_unique() {
        let store = store();
        let ids: HashSet<&PatientId> = store.all().iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn john_doe_record_matches_source_data() {
        let store = store();
        let john = store.get(&PatientId::new("pat1")).unwrap();

        assert_eq!(john.age, 45);
        assert_eq!(john.gender, Gender::Male);
        assert_eq!(john.profile.dob, NaiveDate::from_ymd_opt(1979, 5, 20).unwrap());
        assert_eq!(john.profile.blood_type, "O+");
        assert!(john.profile.lifestyle.smoker);
        assert_eq!(john.vitals.blood_pressure, "140/90");
        assert_eq!(john.lab_results.len(), 3);
        assert_eq!(john.lab_results[2].test, "Hemoglobin A1c");
        assert_eq!(john.prescriptions[1].medication, "Metformin");

        let cvd = john.risk_scores.get(AssessmentKind::CardiovascularDisease);
        assert_eq!(cvd.score.value(), 78);
        assert_eq!(cvd.level, RiskLevel::High);
        assert_eq!(cvd.factors.get("Blood Pressure"), Some(0.4));
        assert_eq!(cvd.factors.len(), 4);
    }

    #[test]
    fn robert_johnson_has_critical_cardiovascular_risk() {
        let store = store();
        let robert = store.get(&PatientId::new("pat3")).unwrap();
        let cvd = robert.risk_scores.get(AssessmentKind::CardiovascularDisease);
        assert_eq!(cvd.level, RiskLevel::Critical);
        assert_eq!(cvd.score.to_string(), "85/100");
    }

    #[test]
    fn every_score_renders_as_integer_out_of_100() {
        for patient in store().all() {
            for (kind, assessment) in patient.risk_scores.iter() {
                let rendered = assessment.score.to_string();
                let (value, scale) = rendered
                    .split_once('/')
                    .unwrap_or_else(|| panic!("{} {:?} rendered as {rendered}", patient.name, kind));
                let value: u8 = value.parse().expect("score must be an integer");
                assert!(value <= 100, "{} {:?} out of range", patient.name, kind);
                assert_eq!(scale, "100");
            }
        }
    }

    #[test]
    fn every_patient_has_three_assessments() {
        for patient in store().all() {
            assert_eq!(patient.risk_scores.iter().count(), 3);
        }
    }

    #[test]
    fn first_patient_is_john_doe() {
        assert_eq!(store().first().unwrap().name, "John Doe");
    }

    #[test]
    fn require_unknown_patient_is_an_error() {
        let store = store();
        match store.require(&PatientId::new("pat404")) {
            Err(InsightError::UnknownPatient { id }) => assert_eq!(id, "pat404"),
            other => panic!("expected UnknownPatient, got {:?}", other.map(|p| &p.name)),
        }
    }

    #[test]
    fn malformed_records_are_rejected() {
        let bad = json!([{ "id": "pat1", "name": "No Vitals" }]);
        match PatientStore::from_value(bad) {
            Err(InsightError::InvalidRecords { reason }) => {
                assert!(!reason.is_empty());
            }
            other => panic!("expected InvalidRecords, got {:?}", other.map(|s| s.len())),
        }
    }

    #[test]
    fn unknown_risk_level_is_rejected() {
        let mut records = crate::mock_data::sample_records();
        records[0]["riskScores"]["diabetes"]["level"] = json!("Severe");
        assert!(PatientStore::from_value(records).is_err());
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let mut records = crate::mock_data::sample_records();
        records[0]["riskScores"]["diabetes"]["score"] = json!(180);
        match PatientStore::from_value(records) {
            Err(InsightError::InvalidRecords { reason }) => {
                assert!(reason.contains("180"), "reason should name the score: {reason}");
            }
            other => panic!("expected InvalidRecords, got {:?}", other.map(|s| s.len())),
        }
    }
}
