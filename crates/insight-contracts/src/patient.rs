//! Patient record types.
//!
//! Records are static sample data: nothing in the workspace creates,
//! mutates, or deletes a `Patient` at runtime.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::risk::RiskScores;

/// Stable identifier of a patient record, e.g. `PatientId("pat1")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub String);

impl PatientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifestyle {
    pub smoker: bool,
    pub alcohol: String,
    pub exercise: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub dob: NaiveDate,
    pub blood_type: String,
    pub allergies: Vec<String>,
    pub lifestyle: Lifestyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    /// Beats per minute.
    pub heart_rate: u32,
    /// Systolic/diastolic, e.g. "140/90".
    pub blood_pressure: String,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Breaths per minute.
    pub respiratory_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabResult {
    pub test: String,
    pub value: String,
    pub range: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: NaiveDate,
}

/// A complete, read-only patient record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    /// Avatar image reference (URL).
    pub avatar: String,
    pub age: u32,
    pub gender: Gender,
    pub profile: Profile,
    pub vitals: Vitals,
    /// Ordered as recorded.
    pub lab_results: Vec<LabResult>,
    /// Ordered as recorded.
    pub prescriptions: Vec<Prescription>,
    pub risk_scores: RiskScores,
}

impl Patient {
    /// First character of the name, used where no avatar image can be shown.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}
