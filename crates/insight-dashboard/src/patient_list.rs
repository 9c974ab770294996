//! Sidebar patient list and its name filter.

use insight_contracts::patient::Patient;

pub const SIDEBAR_TITLE: &str = "Health Insights";
pub const SEARCH_PLACEHOLDER: &str = "Search patients...";
pub const NO_PATIENTS_FOUND: &str = "No patients found.";
pub const NEW_PATIENT_LABEL: &str = "New Patient";

/// Patients whose name contains `query`, ignoring case, in roster order.
///
/// The query is used as typed: no trimming, no minimum length. An empty
/// query matches everyone.
pub fn filter_patients<'a>(patients: &'a [Patient], query: &str) -> Vec<&'a Patient> {
    let needle = query.to_lowercase();
    patients
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// What the sidebar shows below the search box.
#[derive(Debug, Clone, PartialEq)]
pub enum PatientListing<'a> {
    Matches(Vec<&'a Patient>),
    NoPatientsFound,
}

impl<'a> PatientListing<'a> {
    pub fn from_matches(matches: Vec<&'a Patient>) -> Self {
        if matches.is_empty() {
            PatientListing::NoPatientsFound
        } else {
            PatientListing::Matches(matches)
        }
    }

    pub fn patients(&self) -> &[&'a Patient] {
        match self {
            PatientListing::Matches(patients) => patients,
            PatientListing::NoPatientsFound => &[],
        }
    }
}

/// Search box state. Recomputed on every keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientFilter {
    query: String,
}

impl PatientFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn apply<'a>(&self, patients: &'a [Patient]) -> PatientListing<'a> {
        PatientListing::from_matches(filter_patients(patients, &self.query))
    }
}
