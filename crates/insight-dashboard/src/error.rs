//! Form validation errors.
//!
//! Every message here is shown to the clinician verbatim, so the `Display`
//! text is the user-facing wording.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Prescription cannot be empty.")]
    EmptyPrescription,

    #[error("Name must be at least 2 characters.")]
    NameTooShort,

    #[error("Age must be a number.")]
    AgeNotANumber,

    #[error("Age must be a positive number.")]
    NegativeAge,

    #[error("You need to select an option.")]
    SmokerRequired,

    /// One or more registration fields failed; see `RegistrationErrors`.
    #[error("Please correct the highlighted fields.")]
    InvalidRegistration,

    /// The submission sink refused the payload.
    #[error("The submission could not be delivered.")]
    Rejected { reason: String },
}

/// Per-field registration errors. A `None` field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationErrors {
    pub name: Option<FormError>,
    pub age: Option<FormError>,
    pub smoker: Option<FormError>,
}

impl RegistrationErrors {
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn count(&self) -> usize {
        [&self.name, &self.age, &self.smoker]
            .into_iter()
            .filter(|e| e.is_some())
            .count()
    }
}
