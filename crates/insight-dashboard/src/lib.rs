//! # insight-dashboard
//!
//! Screen-independent state for the Health Insights dashboard.
//!
//! The terminal UI renders from `AppState` and feeds key presses back into
//! it. Explanation requests leave the state as `PendingExplanation`s; the
//! caller runs them (off the UI thread) and hands the `Explanation` back
//! through `AppState::resolve_explanation`, which drops stale results.

pub mod app;
pub mod detail;
pub mod dialog;
pub mod error;
pub mod forms;
pub mod notify;
pub mod patient_list;

pub use app::{AppState, View};
pub use detail::{PatientDetail, RiskCard};
pub use dialog::{DialogState, ExplanationDialog, PendingExplanation};
pub use error::{FormError, RegistrationErrors};
pub use forms::{PrescriptionComposer, RegistrationField, RegistrationForm};
pub use notify::{Notification, NotificationKind, Notifications};
pub use patient_list::{PatientFilter, PatientListing};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::{
        sync::{mpsc, Arc},
        thread,
        time::Duration,
    };

    use insight_contracts::{
        explain::{Explanation, RequestId, FALLBACK_EXPLANATION},
        patient::PatientId,
        risk::{AssessmentKind, BadgeVariant},
        submission::{SmokerChoice, Submission},
    };
    use insight_explain::{ExplanationRequester, MockGenerator};
    use insight_outbox::InMemoryOutbox;
    use insight_records::PatientStore;

    use super::*;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn app_with_outbox() -> (AppState, InMemoryOutbox) {
        let outbox = InMemoryOutbox::new();
        let app = AppState::new(PatientStore::sample().unwrap(), Arc::new(outbox.clone()));
        (app, outbox)
    }

    fn app() -> AppState {
        app_with_outbox().0
    }

    /// Run a pending request on a worker thread, as the terminal UI does.
    fn run_on_worker(requester: ExplanationRequester, pending: PendingExplanation) -> mpsc::Receiver<(RequestId, Explanation)> {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let explanation = requester.explain(&pending.request);
            let _ = tx.send((pending.id, explanation));
        });
        rx
    }

    // ── Navigation ────────────────────────────────────────────────────────────

    #[test]
    fn starts_on_first_patient() {
        let app = app();
        assert_eq!(app.view(), &View::Detail(PatientId::new("pat1")));
        assert_eq!(app.selected_patient().unwrap().name, "John Doe");
    }

    #[test]
    fn empty_store_starts_in_empty_state() {
        let app = AppState::new(PatientStore::new(Vec::new()), Arc::new(InMemoryOutbox::new()));
        assert_eq!(app.view(), &View::Empty);
        assert!(app.detail().is_none());
        assert_eq!(app.listing(), PatientListing::NoPatientsFound);
    }

    #[test]
    fn selecting_a_patient_leaves_registration() {
        let mut app = app();
        app.open_registration();
        assert_eq!(app.view(), &View::Registration);
        assert!(app.selected_patient().is_none());

        app.select_patient(&PatientId::new("pat2")).unwrap();
        assert_eq!(app.view(), &View::Detail(PatientId::new("pat2")));
    }

    #[test]
    fn selecting_unknown_patient_keeps_current_view() {
        let mut app = app();
        assert!(app.select_patient(&PatientId::new("nobody")).is_err());
        assert_eq!(app.view(), &View::Detail(PatientId::new("pat1")));
    }

    #[test]
    fn sidebar_collapses_and_expands() {
        let mut app = app();
        assert!(!app.sidebar_collapsed());
        app.toggle_sidebar();
        assert!(app.sidebar_collapsed());
        app.toggle_sidebar();
        assert!(!app.sidebar_collapsed());
    }

    #[test]
    fn clearing_selection_shows_empty_state() {
        let mut app = app();
        app.clear_selection();
        assert_eq!(app.view(), &View::Empty);
        assert!(app.open_explanation(AssessmentKind::Diabetes).is_none());
    }

    // ── John Doe scenario ─────────────────────────────────────────────────────

    #[test]
    fn john_doe_cardiovascular_card_scenario() {
        let mut app = app();
        app.select_patient(&PatientId::new("pat1")).unwrap();

        let card = app
            .detail()
            .and_then(|d| d.risk_card(AssessmentKind::CardiovascularDisease))
            .unwrap();
        assert_eq!(card.score_text, "78/100");
        assert_eq!(card.badge_text, "High Risk");
        assert_eq!(card.treatment.badge, BadgeVariant::Destructive);
    }

    // ── Forms through the app ─────────────────────────────────────────────────

    #[test]
    fn blank_prescription_raises_one_error_and_keeps_text() {
        let (mut app, outbox) = app_with_outbox();
        app.composer_mut().set_text("  ");

        assert!(!app.send_prescription());
        assert_eq!(app.composer().text(), "  ");
        assert_eq!(app.notifications().len(), 1);
        let toast = app.notifications().latest().unwrap();
        assert!(toast.is_error());
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.description, "Prescription cannot be empty.");
        assert!(outbox.is_empty());
    }

    #[test]
    fn prescription_send_clears_and_raises_exactly_one_success() {
        let (mut app, outbox) = app_with_outbox();
        app.composer_mut().set_text("Amlodipine 5mg daily");

        assert!(app.send_prescription());
        assert_eq!(app.composer().text(), "");
        assert_eq!(app.notifications().len(), 1);
        let toast = app.notifications().latest().unwrap();
        assert_eq!(toast.kind, NotificationKind::Success);
        assert_eq!(toast.title, "Prescription Sent");
        assert_eq!(outbox.len(), 1);
    }

    #[test]
    fn prescription_is_addressed_to_the_selected_patient() {
        let (mut app, outbox) = app_with_outbox();
        app.select_patient(&PatientId::new("pat3")).unwrap();
        app.composer_mut().set_text("Warfarin 5mg");
        app.send_prescription();

        match &outbox.export().records[0].submission {
            Submission::Prescription(draft) => {
                assert_eq!(draft.patient_id, Some(PatientId::new("pat3")));
            }
            other => panic!("expected prescription, got {:?}", other),
        }
    }

    #[test]
    fn invalid_registration_raises_no_notification() {
        let mut app = app();
        app.open_registration();
        app.registration_mut().set_name("A");

        assert!(!app.submit_registration());
        assert!(app.notifications().is_empty());
        assert_eq!(app.registration().errors().name, Some(FormError::NameTooShort));
    }

    #[test]
    fn valid_registration_resets_and_notifies() {
        let (mut app, outbox) = app_with_outbox();
        app.open_registration();
        app.registration_mut().set_name("Maria Garcia");
        app.registration_mut().set_age("61");
        app.registration_mut().set_smoker(Some(SmokerChoice::No));

        assert!(app.submit_registration());
        assert_eq!(app.registration(), &RegistrationForm::default());
        assert_eq!(app.notifications().latest().unwrap().title, "Form Submitted");
        assert_eq!(outbox.export().of_kind("registration").count(), 1);
    }

    // ── Explanation flow ──────────────────────────────────────────────────────

    #[test]
    fn explanation_failure_shows_fallback_sentence() {
        let mut app = app();
        let pending = app.open_explanation(AssessmentKind::CardiovascularDisease).unwrap();
        assert!(app.dialog().is_loading());

        let requester = ExplanationRequester::new(
            Arc::new(MockGenerator::failing("connection reset")),
            Duration::from_secs(2),
        );
        let (id, explanation) = run_on_worker(requester, pending).recv().unwrap();

        assert!(app.resolve_explanation(id, explanation));
        assert_eq!(app.dialog().narrative(), Some(FALLBACK_EXPLANATION));
    }

    #[test]
    fn explanation_success_shows_non_empty_text() {
        let mut app = app();
        let pending = app.open_explanation(AssessmentKind::Diabetes).unwrap();
        assert_eq!(pending.request.prediction, "Diabetes");

        let requester = ExplanationRequester::new(
            Arc::new(MockGenerator::responding("Family history and BMI dominate.")),
            Duration::from_secs(2),
        );
        let (id, explanation) = run_on_worker(requester, pending).recv().unwrap();

        assert!(app.resolve_explanation(id, explanation));
        let narrative = app.dialog().narrative().unwrap();
        assert!(!narrative.trim().is_empty());
        assert_ne!(narrative, FALLBACK_EXPLANATION);
    }

    #[test]
    fn result_arriving_after_close_is_dropped() {
        let mut app = app();
        let pending = app.open_explanation(AssessmentKind::Readmission).unwrap();
        let requester = ExplanationRequester::new(
            Arc::new(MockGenerator::delayed(Duration::from_millis(20), "late")),
            Duration::from_secs(2),
        );
        let rx = run_on_worker(requester, pending);
        app.close_explanation();

        let (id, explanation) = rx.recv().unwrap();
        assert!(!app.resolve_explanation(id, explanation));
        assert!(!app.dialog().is_open());
    }

    #[test]
    fn switching_patient_closes_the_dialog() {
        let mut app = app();
        let pending = app.open_explanation(AssessmentKind::Diabetes).unwrap();
        app.select_patient(&PatientId::new("pat2")).unwrap();

        assert!(!app.dialog().is_open());
        assert!(!app.resolve_explanation(pending.id, Explanation::Fallback));
    }
}
