//! Payloads handed to the submission boundary.
//!
//! Neither form writes anywhere in this system. A submission is the value
//! that would cross into an external prescribing or registration service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::patient::PatientId;

/// The required yes/no smoker choice on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokerChoice {
    Yes,
    No,
}

impl SmokerChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            SmokerChoice::Yes => "yes",
            SmokerChoice::No => "no",
        }
    }
}

impl fmt::Display for SmokerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated new-patient registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    /// Coerced from the form input; never negative.
    pub age: f64,
    pub is_smoker: SmokerChoice,
}

/// A free-text prescription written for the patient currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDraft {
    /// `None` when composed with no patient selected.
    pub patient_id: Option<PatientId>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Submission {
    Prescription(PrescriptionDraft),
    Registration(Registration),
}

impl Submission {
    pub fn kind(&self) -> &'static str {
        match self {
            Submission::Prescription(_) => "prescription",
            Submission::Registration(_) => "registration",
        }
    }
}
