//! Top-level dashboard state.
//!
//! `AppState` owns everything the terminal UI renders: which view is on
//! screen, the sidebar filter, both forms, the explanation dialog, and the
//! notification queue. It holds no terminal handles, so every transition is
//! testable without a screen.

use std::sync::Arc;

use tracing::info;

use insight_contracts::{
    error::InsightResult,
    explain::{Explanation, RequestId},
    patient::{Patient, PatientId},
    risk::AssessmentKind,
};
use insight_core::SubmissionSink;
use insight_records::PatientStore;

use crate::{
    detail::PatientDetail,
    dialog::{ExplanationDialog, PendingExplanation},
    error::FormError,
    forms::{PrescriptionComposer, RegistrationForm},
    notify::{Notification, Notifications},
    patient_list::{PatientFilter, PatientListing},
};

/// What the main pane shows. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// No patient selected and no registration in progress.
    Empty,
    Detail(PatientId),
    Registration,
}

pub struct AppState {
    store: PatientStore,
    sink: Arc<dyn SubmissionSink>,
    view: View,
    filter: PatientFilter,
    sidebar_collapsed: bool,
    composer: PrescriptionComposer,
    registration: RegistrationForm,
    dialog: ExplanationDialog,
    notifications: Notifications,
}

impl AppState {
    /// Start on the first patient in the roster, or the empty state.
    pub fn new(store: PatientStore, sink: Arc<dyn SubmissionSink>) -> Self {
        let view = store
            .first()
            .map(|p| View::Detail(p.id.clone()))
            .unwrap_or(View::Empty);
        Self {
            store,
            sink,
            view,
            filter: PatientFilter::new(),
            sidebar_collapsed: false,
            composer: PrescriptionComposer::new(),
            registration: RegistrationForm::new(),
            dialog: ExplanationDialog::new(),
            notifications: Notifications::new(),
        }
    }

    pub fn store(&self) -> &PatientStore {
        &self.store
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    // ── Navigation ────────────────────────────────────────────────────────────

    /// The patient on screen, if the detail view is showing.
    pub fn selected_patient(&self) -> Option<&Patient> {
        match &self.view {
            View::Detail(id) => self.store.get(id),
            View::Empty | View::Registration => None,
        }
    }

    pub fn detail(&self) -> Option<PatientDetail<'_>> {
        self.selected_patient().map(PatientDetail::new)
    }

    /// Show `id` in the detail view, leaving registration if it was open.
    pub fn select_patient(&mut self, id: &PatientId) -> InsightResult<()> {
        let patient = self.store.require(id)?;
        info!(patient = %patient.id, "patient selected");
        self.view = View::Detail(patient.id.clone());
        self.dialog.close();
        Ok(())
    }

    pub fn open_registration(&mut self) {
        self.view = View::Registration;
        self.dialog.close();
    }

    pub fn clear_selection(&mut self) {
        self.view = View::Empty;
        self.dialog.close();
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    // ── Sidebar filter ────────────────────────────────────────────────────────

    pub fn filter(&self) -> &PatientFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut PatientFilter {
        &mut self.filter
    }

    pub fn listing(&self) -> PatientListing<'_> {
        self.filter.apply(self.store.all())
    }

    // ── Forms ─────────────────────────────────────────────────────────────────

    pub fn composer(&self) -> &PrescriptionComposer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut PrescriptionComposer {
        &mut self.composer
    }

    pub fn registration(&self) -> &RegistrationForm {
        &self.registration
    }

    pub fn registration_mut(&mut self) -> &mut RegistrationForm {
        &mut self.registration
    }

    /// Send the composed prescription for the patient on screen.
    ///
    /// Raises exactly one notification either way.
    pub fn send_prescription(&mut self) -> bool {
        let patient = self.selected_patient().map(|p| p.id.clone());
        match self.composer.submit(patient.as_ref(), self.sink.as_ref()) {
            Ok(_) => {
                self.notifications.push(Notification::success(
                    "Prescription Sent",
                    "The new prescription has been sent to the patient.",
                ));
                true
            }
            Err(error) => {
                self.notifications.push(Notification::error("Error", error_description(&error)));
                false
            }
        }
    }

    /// Submit the registration form.
    ///
    /// Field errors stay on the form and raise no notification.
    pub fn submit_registration(&mut self) -> bool {
        match self.registration.submit(self.sink.as_ref()) {
            Ok(_) => {
                self.notifications.push(Notification::success(
                    "Form Submitted",
                    "Patient data has been logged.",
                ));
                true
            }
            Err(FormError::InvalidRegistration) => false,
            Err(error) => {
                self.notifications.push(Notification::error("Error", error_description(&error)));
                false
            }
        }
    }

    // ── Explanation dialog ────────────────────────────────────────────────────

    pub fn dialog(&self) -> &ExplanationDialog {
        &self.dialog
    }

    /// Open the dialog for one of the selected patient's assessments.
    ///
    /// Returns the request the caller must run, or `None` when no patient
    /// is on screen.
    pub fn open_explanation(&mut self, kind: AssessmentKind) -> Option<PendingExplanation> {
        let assessment = match &self.view {
            View::Detail(id) => self.store.get(id)?.risk_scores.get(kind).clone(),
            View::Empty | View::Registration => return None,
        };
        Some(self.dialog.open(kind, &assessment))
    }

    /// Apply a finished request. Returns `false` for stale results.
    pub fn resolve_explanation(&mut self, id: RequestId, explanation: Explanation) -> bool {
        self.dialog.resolve(id, explanation)
    }

    pub fn close_explanation(&mut self) {
        self.dialog.close();
    }

    // ── Notifications ─────────────────────────────────────────────────────────

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }
}

fn error_description(error: &FormError) -> String {
    match error {
        FormError::Rejected { .. } => "The submission could not be delivered. Please try again.".to_string(),
        other => other.to_string(),
    }
}
