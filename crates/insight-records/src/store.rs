//! The read-only patient record store.
//!
//! `PatientStore` is built once at startup and never mutated. Consumers hold
//! it by reference (or behind an `Arc`) and only ever read.

use serde_json::Value;
use tracing::debug;

use insight_contracts::{
    error::{InsightError, InsightResult},
    patient::{Patient, PatientId},
};

use crate::mock_data::sample_records;

#[derive(Debug, Clone)]
pub struct PatientStore {
    patients: Vec<Patient>,
}

impl PatientStore {
    /// Build a store over `patients`, keeping their order.
    pub fn new(patients: Vec<Patient>) -> Self {
        Self { patients }
    }

    /// Deserialize a JSON array of patient records.
    ///
    /// Returns `InsightError::InvalidRecords` when the value is not an array
    /// of well-formed records.
    pub fn from_value(value: Value) -> InsightResult<Self> {
        let patients: Vec<Patient> =
            serde_json::from_value(value).map_err(|e| InsightError::InvalidRecords {
                reason: e.to_string(),
            })?;
        debug!(count = patients.len(), "patient store loaded");
        Ok(Self::new(patients))
    }

    /// The built-in sample roster.
    pub fn sample() -> InsightResult<Self> {
        Self::from_value(sample_records())
    }

    /// All patients, in load order.
    pub fn all(&self) -> &[Patient] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn get(&self, id: &PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| &p.id == id)
    }

    /// Like `get`, but a missing id is an `UnknownPatient` error.
    pub fn require(&self, id: &PatientId) -> InsightResult<&Patient> {
        self.get(id).ok_or_else(|| InsightError::UnknownPatient {
            id: id.to_string(),
        })
    }

    /// The patient shown when the dashboard first opens.
    pub fn first(&self) -> Option<&Patient> {
        self.patients.first()
    }
}
