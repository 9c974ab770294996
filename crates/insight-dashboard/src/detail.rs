//! Patient detail view model.
//!
//! Everything the detail pane renders, already formatted. The terminal UI
//! lays these strings out; it does no formatting of its own.

use insight_contracts::{
    explain::ExplainRequest,
    patient::{LabResult, Patient, Prescription},
    risk::{weight_percent, AssessmentKind, FactorMap, RiskLevel, RiskTreatment, Score},
};

pub const EMPTY_STATE: &str = "Select a patient to view details";
pub const RISK_CARD_TITLE: &str = "Patient Risk Analysis";
pub const RISK_CARD_DESCRIPTION: &str = "AI-powered predictions for key health risks.";

/// One factor row, heaviest first.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorRow {
    pub name: String,
    pub weight: f64,
    /// `weight` as a whole percentage, e.g. `"40%"`.
    pub percent: String,
}

/// Factor rows ordered by weight, heaviest first.
pub fn factor_rows(factors: &FactorMap) -> Vec<FactorRow> {
    factors
        .by_weight()
        .into_iter()
        .map(|(name, weight)| FactorRow {
            name: name.to_string(),
            weight,
            percent: weight_percent(weight),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskCard {
    pub kind: AssessmentKind,
    pub title: &'static str,
    pub score: Score,
    /// `"{score}/100"`.
    pub score_text: String,
    pub level: RiskLevel,
    /// `"{level} Risk"`.
    pub badge_text: String,
    pub treatment: RiskTreatment,
    pub factors: Vec<FactorRow>,
}

impl RiskCard {
    /// The request sent when this card's explain action is triggered.
    pub fn explain_request(&self, patient: &Patient) -> ExplainRequest {
        ExplainRequest::for_assessment(self.kind, patient.risk_scores.get(self.kind))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VitalReading {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy)]
pub struct PatientDetail<'a> {
    patient: &'a Patient,
}

impl<'a> PatientDetail<'a> {
    pub fn new(patient: &'a Patient) -> Self {
        Self { patient }
    }

    pub fn patient(&self) -> &'a Patient {
        self.patient
    }

    pub fn heading(&self) -> String {
        format!("Patient Dashboard: {}", self.patient.name)
    }

    /// e.g. `"45 years old, Male"`.
    pub fn summary(&self) -> String {
        format!("{} years old, {}", self.patient.age, self.patient.gender.as_str())
    }

    /// Label/value pairs for the profile card.
    pub fn profile_rows(&self) -> Vec<(&'static str, String)> {
        let profile = &self.patient.profile;
        let allergies = if profile.allergies.is_empty() {
            "None".to_string()
        } else {
            profile.allergies.join(", ")
        };
        vec![
            ("Date of Birth", profile.dob.format("%Y-%m-%d").to_string()),
            ("Blood Type", profile.blood_type.clone()),
            ("Allergies", allergies),
            ("Smoker", if profile.lifestyle.smoker { "Yes" } else { "No" }.to_string()),
            ("Alcohol", profile.lifestyle.alcohol.clone()),
            ("Exercise", profile.lifestyle.exercise.clone()),
        ]
    }

    pub fn vitals(&self) -> Vec<VitalReading> {
        let vitals = &self.patient.vitals;
        vec![
            VitalReading {
                name: "Heart Rate",
                value: format!("{} bpm", vitals.heart_rate),
            },
            VitalReading {
                name: "Blood Pressure",
                value: vitals.blood_pressure.clone(),
            },
            VitalReading {
                name: "Temperature",
                value: format!("{:.1} °C", vitals.temperature),
            },
            VitalReading {
                name: "Respiratory Rate",
                value: format!("{} bpm", vitals.respiratory_rate),
            },
        ]
    }

    pub fn lab_results(&self) -> &'a [LabResult] {
        &self.patient.lab_results
    }

    pub fn prescriptions(&self) -> &'a [Prescription] {
        &self.patient.prescriptions
    }

    /// The three risk cards in display order.
    pub fn risk_cards(&self) -> Vec<RiskCard> {
        self.patient
            .risk_scores
            .iter()
            .map(|(kind, assessment)| RiskCard {
                kind,
                title: kind.title(),
                score: assessment.score,
                score_text: assessment.score.to_string(),
                level: assessment.level,
                badge_text: assessment.level.badge_label(),
                treatment: assessment.level.treatment(),
                factors: factor_rows(&assessment.factors),
            })
            .collect()
    }

    pub fn risk_card(&self, kind: AssessmentKind) -> Option<RiskCard> {
        self.risk_cards().into_iter().find(|card| card.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use insight_contracts::{patient::PatientId, risk::BadgeVariant};
    use insight_records::PatientStore;

    use super::*;

    fn with_patient<F: FnOnce(PatientDetail<'_>)>(id: &str, f: F) {
        let store = PatientStore::sample().unwrap();
        let patient = store.get(&PatientId::new(id)).unwrap();
        f(PatientDetail::new(patient));
    }

    #[test]
    fn john_doe_cardiovascular_card_is_high_and_destructive() {
        with_patient("pat1", |detail| {
            let card = detail.risk_card(AssessmentKind::CardiovascularDisease).unwrap();
            assert_eq!(card.score_text, "78/100");
            assert_eq!(card.badge_text, "High Risk");
            assert_eq!(card.treatment.badge, BadgeVariant::Destructive);
            assert!(card.treatment.is_destructive());
        });
    }

    #[test]
    fn factor_rows_are_heaviest_first_with_percentages() {
        with_patient("pat1", |detail| {
            let card = detail.risk_card(AssessmentKind::CardiovascularDisease).unwrap();
            let rows: Vec<(&str, &str)> = card
                .factors
                .iter()
                .map(|r| (r.name.as_str(), r.percent.as_str()))
                .collect();
            assert_eq!(
                rows,
                vec![("Blood Pressure", "40%"), ("Cholesterol", "30%"), ("Smoker", "20%"), ("Age", "10%")]
            );
        });
    }

    #[test]
    fn readmission_card_requests_hospital_readmission() {
        with_patient("pat2", |detail| {
            let card = detail.risk_card(AssessmentKind::Readmission).unwrap();
            assert_eq!(card.title, "Readmission");
            let request = card.explain_request(detail.patient());
            assert_eq!(request.prediction, "Hospital Readmission");
            assert_eq!(request.factors, detail.patient().risk_scores.readmission.factors);
        });
    }

    #[test]
    fn vitals_are_formatted_with_units() {
        with_patient("pat1", |detail| {
            let values: Vec<String> = detail.vitals().into_iter().map(|v| v.value).collect();
            assert_eq!(values[0], "85 bpm");
            assert_eq!(values[1], "140/90");
            assert_eq!(values[2], "37.0 °C");
        });
    }

    #[test]
    fn heading_and_summary() {
        with_patient("pat1", |detail| {
            assert_eq!(detail.heading(), "Patient Dashboard: John Doe");
            assert_eq!(detail.summary(), "45 years old, Male");
        });
    }

    #[test]
    fn profile_rows_render_lifestyle_and_dob() {
        with_patient("pat1", |detail| {
            let rows = detail.profile_rows();
            assert_eq!(rows[0], ("Date of Birth", "1979-05-20".to_string()));
            assert_eq!(rows[3], ("Smoker", "Yes".to_string()));
        });
    }

    #[test]
    fn every_card_has_distinct_colour_per_level() {
        let store = PatientStore::sample().unwrap();
        for patient in store.all() {
            for card in PatientDetail::new(patient).risk_cards() {
                assert_eq!(card.treatment, card.level.treatment());
                assert!(card.score_text.ends_with("/100"));
            }
        }
    }
}
