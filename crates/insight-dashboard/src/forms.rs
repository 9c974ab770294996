//! The prescription composer and the registration form.
//!
//! Both validate locally and then hand a `Submission` to a `SubmissionSink`.
//! On failure the entered values are kept so the clinician can correct
//! them; on success the form resets.

use tracing::{debug, warn};

use insight_contracts::{
    patient::PatientId,
    submission::{PrescriptionDraft, Registration, SmokerChoice, Submission},
};
use insight_core::SubmissionSink;

use crate::error::{FormError, RegistrationErrors};

pub const PRESCRIPTION_TITLE: &str = "Write Prescription";
pub const PRESCRIPTION_PLACEHOLDER: &str =
    "e.g., Amoxicillin 500mg, take one tablet every 8 hours for 7 days.";
pub const REGISTRATION_TITLE: &str = "Patient Registration";
pub const REGISTRATION_DESCRIPTION: &str = "Please fill out the form to register a new patient.";

/// Minimum name length, counted in characters.
pub const MIN_NAME_CHARS: usize = 2;

// ── Prescription composer ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrescriptionComposer {
    text: String,
}

impl PrescriptionComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn pop_char(&mut self) {
        self.text.pop();
    }

    /// Send the draft for `patient`.
    ///
    /// Whitespace-only text is rejected and left in place. Accepted text is
    /// submitted as typed and the field is cleared.
    pub fn submit(&mut self, patient: Option<&PatientId>, sink: &dyn SubmissionSink) -> Result<u64, FormError> {
        if self.text.trim().is_empty() {
            debug!("empty prescription rejected");
            return Err(FormError::EmptyPrescription);
        }

        let draft = PrescriptionDraft {
            patient_id: patient.cloned(),
            text: self.text.clone(),
        };
        let sequence = sink.submit(Submission::Prescription(draft)).map_err(|e| {
            warn!(error = %e, "prescription submission failed");
            FormError::Rejected { reason: e.to_string() }
        })?;

        self.text.clear();
        Ok(sequence)
    }
}

// ── Registration form ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Name,
    Age,
    Smoker,
}

impl RegistrationField {
    pub const ALL: [RegistrationField; 3] = [
        RegistrationField::Name,
        RegistrationField::Age,
        RegistrationField::Smoker,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RegistrationField::Name => "Name",
            RegistrationField::Age => "Age",
            RegistrationField::Smoker => "Is the patient a smoker?",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            RegistrationField::Name => "This is the patient's full name.",
            RegistrationField::Age => "The patient's age in years.",
            RegistrationField::Smoker => "Yes or no.",
        }
    }

    pub fn next(self) -> Self {
        match self {
            RegistrationField::Name => RegistrationField::Age,
            RegistrationField::Age => RegistrationField::Smoker,
            RegistrationField::Smoker => RegistrationField::Name,
        }
    }
}

/// Coerce the age input to a number.
///
/// Blank input is `0`. Anything that does not parse as a finite number is
/// `AgeNotANumber`; a negative value is `NegativeAge`.
pub fn coerce_age(input: &str) -> Result<f64, FormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let age: f64 = trimmed.parse().map_err(|_| FormError::AgeNotANumber)?;
    if !age.is_finite() {
        return Err(FormError::AgeNotANumber);
    }
    if age < 0.0 {
        return Err(FormError::NegativeAge);
    }
    Ok(age)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    name: String,
    age: String,
    smoker: Option<SmokerChoice>,
    errors: RegistrationErrors,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: "0".to_string(),
            smoker: None,
            errors: RegistrationErrors::default(),
        }
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The age field as typed.
    pub fn age_input(&self) -> &str {
        &self.age
    }

    pub fn smoker(&self) -> Option<SmokerChoice> {
        self.smoker
    }

    /// Errors from the last failed submit.
    pub fn errors(&self) -> &RegistrationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: RegistrationField) -> Option<&FormError> {
        match field {
            RegistrationField::Name => self.errors.name.as_ref(),
            RegistrationField::Age => self.errors.age.as_ref(),
            RegistrationField::Smoker => self.errors.smoker.as_ref(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.age = age.into();
    }

    pub fn set_smoker(&mut self, choice: Option<SmokerChoice>) {
        self.smoker = choice;
    }

    /// Type into a text field. The smoker field takes `y`/`n`.
    pub fn input_char(&mut self, field: RegistrationField, c: char) {
        match field {
            RegistrationField::Name => self.name.push(c),
            RegistrationField::Age => self.age.push(c),
            RegistrationField::Smoker => match c.to_ascii_lowercase() {
                'y' => self.smoker = Some(SmokerChoice::Yes),
                'n' => self.smoker = Some(SmokerChoice::No),
                _ => {}
            },
        }
    }

    pub fn backspace(&mut self, field: RegistrationField) {
        match field {
            RegistrationField::Name => {
                self.name.pop();
            }
            RegistrationField::Age => {
                self.age.pop();
            }
            RegistrationField::Smoker => self.smoker = None,
        }
    }

    /// Check every field, reporting all failures together.
    pub fn validate(&self) -> Result<Registration, RegistrationErrors> {
        let mut errors = RegistrationErrors::default();

        if self.name.chars().count() < MIN_NAME_CHARS {
            errors.name = Some(FormError::NameTooShort);
        }
        let age = match coerce_age(&self.age) {
            Ok(age) => Some(age),
            Err(e) => {
                errors.age = Some(e);
                None
            }
        };
        if self.smoker.is_none() {
            errors.smoker = Some(FormError::SmokerRequired);
        }

        match (age, self.smoker) {
            (Some(age), Some(is_smoker)) if errors.is_empty() => Ok(Registration {
                name: self.name.clone(),
                age,
                is_smoker,
            }),
            _ => Err(errors),
        }
    }

    /// Validate and submit. Resets the form on success.
    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> Result<u64, FormError> {
        let registration = match self.validate() {
            Ok(registration) => registration,
            Err(errors) => {
                debug!(invalid_fields = errors.count(), "registration rejected");
                self.errors = errors;
                return Err(FormError::InvalidRegistration);
            }
        };
        self.errors = RegistrationErrors::default();

        let sequence = sink.submit(Submission::Registration(registration)).map_err(|e| {
            warn!(error = %e, "registration submission failed");
            FormError::Rejected { reason: e.to_string() }
        })?;

        self.reset();
        Ok(sequence)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
