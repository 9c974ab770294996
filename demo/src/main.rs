//! Health Insights demo CLI
//!
//! Drives the same dashboard components as the terminal UI, one action per
//! invocation, against the bundled mock patients.
//!
//! Usage:
//!   cargo run -p demo -- list --query jane
//!   cargo run -p demo -- show pat1
//!   cargo run -p demo -- explain pat1 cardiovascular --backend template
//!   cargo run -p demo -- prescribe pat1 "Lisinopril 10mg once daily"
//!   cargo run -p demo -- register --name "Ada Lovelace" --age 36 --smoker no

use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use insight_config::{Backend, DashboardConfig};
use insight_contracts::{patient::PatientId, risk::AssessmentKind, submission::SmokerChoice};
use insight_dashboard::{
    detail::RISK_CARD_TITLE,
    dialog::{dialog_description, FACTORS_HEADING, NARRATIVE_HEADING},
    patient_list::NO_PATIENTS_FOUND,
    PatientDetail, PatientFilter, PatientListing, PrescriptionComposer, RegistrationField,
    RegistrationForm,
};
use insight_explain::ExplanationRequester;
use insight_outbox::InMemoryOutbox;
use insight_records::PatientStore;

type DemoResult = Result<(), Box<dyn Error>>;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Health Insights: clinical risk dashboard demo.
///
/// Each subcommand performs one dashboard action against the mock patient
/// records and prints what a clinician would see.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Health Insights clinical dashboard demo",
    long_about = "Lists and inspects mock patients, requests AI explanations of their\n\
                  risk scores, and exercises the prescription and registration forms."
)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List patients, optionally filtered by a case-insensitive name search.
    List {
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Show the full detail view for one patient.
    Show { id: String },
    /// Request an explanation of one risk assessment.
    Explain {
        id: String,
        assessment: AssessmentArg,
        /// Override the configured explanation backend.
        #[arg(long)]
        backend: Option<BackendArg>,
    },
    /// Send a prescription for a patient.
    Prescribe { id: String, text: String },
    /// Submit the new-patient registration form.
    Register {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "0")]
        age: String,
        #[arg(long)]
        smoker: Option<SmokerArg>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AssessmentArg {
    Cardiovascular,
    Diabetes,
    Readmission,
}

impl From<AssessmentArg> for AssessmentKind {
    fn from(arg: AssessmentArg) -> Self {
        match arg {
            AssessmentArg::Cardiovascular => AssessmentKind::CardiovascularDisease,
            AssessmentArg::Diabetes => AssessmentKind::Diabetes,
            AssessmentArg::Readmission => AssessmentKind::Readmission,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BackendArg {
    Http,
    Ollama,
    Template,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Http => Backend::Http,
            BackendArg::Ollama => Backend::Ollama,
            BackendArg::Template => Backend::Template,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SmokerArg {
    Yes,
    No,
}

impl From<SmokerArg> for SmokerChoice {
    fn from(arg: SmokerArg) -> Self {
        match arg {
            SmokerArg::Yes => SmokerChoice::Yes,
            SmokerArg::No => SmokerChoice::No,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = DashboardConfig::load(cli.config.as_deref())
        .map_err(Box::<dyn Error>::from)
        .and_then(|config| dispatch(cli.command, config));

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(command: Command, config: DashboardConfig) -> DemoResult {
    let store = PatientStore::sample()?;
    debug!(patients = store.len(), "mock records loaded");

    match command {
        Command::List { query } => run_list(&store, query.as_deref().unwrap_or("")),
        Command::Show { id } => run_show(&store, &PatientId::new(id)),
        Command::Explain {
            id,
            assessment,
            backend,
        } => {
            let mut config = config;
            if let Some(backend) = backend {
                config.explanation.backend = backend.into();
            }
            run_explain(&store, &config, &PatientId::new(id), assessment.into())
        }
        Command::Prescribe { id, text } => run_prescribe(&store, &PatientId::new(id), &text),
        Command::Register { name, age, smoker } => run_register(&name, &age, smoker.map(Into::into)),
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_list(store: &PatientStore, query: &str) -> DemoResult {
    let mut filter = PatientFilter::default();
    filter.set_query(query);

    match filter.apply(store.all()) {
        PatientListing::NoPatientsFound => println!("{}", NO_PATIENTS_FOUND),
        PatientListing::Matches(patients) => {
            for patient in patients {
                println!(
                    "  {:<4} {:<20} {:>3}  {}",
                    patient.id.as_str(),
                    patient.name,
                    patient.age,
                    patient.gender.as_str()
                );
            }
        }
    }
    Ok(())
}

fn run_show(store: &PatientStore, id: &PatientId) -> DemoResult {
    let detail = PatientDetail::new(store.require(id)?);

    println!();
    println!("{}", detail.heading());
    println!("{}", detail.summary());
    println!();
    for (label, value) in detail.profile_rows() {
        println!("  {:<15} {}", label, value);
    }

    println!();
    println!("Vitals");
    for vital in detail.vitals() {
        println!("  {:<18} {}", vital.name, vital.value);
    }

    println!();
    println!("{}", RISK_CARD_TITLE);
    for card in detail.risk_cards() {
        println!("  {:<24} {:>7}  [{}]", card.title, card.score_text, card.badge_text);
    }

    println!();
    println!("Recent Lab Results");
    for lab in detail.lab_results() {
        println!(
            "  {:<20} {:<10} {:<12} {}",
            lab.test,
            lab.value,
            lab.range,
            lab.date.format("%Y-%m-%d")
        );
    }

    println!();
    println!("Current Prescriptions");
    for rx in detail.prescriptions() {
        println!("  {:<16} {:<8} {}", rx.medication, rx.dosage, rx.frequency);
    }
    println!();
    Ok(())
}

fn run_explain(
    store: &PatientStore,
    config: &DashboardConfig,
    id: &PatientId,
    kind: AssessmentKind,
) -> DemoResult {
    let patient = store.require(id)?;
    let detail = PatientDetail::new(patient);
    let card = detail
        .risk_card(kind)
        .ok_or_else(|| format!("no {} assessment for patient {}", kind.title(), id))?;
    let requester = ExplanationRequester::from_settings(&config.explanation)?;
    let request = card.explain_request(patient);

    println!();
    println!("{}", dialog_description(&request.prediction));
    println!();
    println!("{}", FACTORS_HEADING);
    for row in &card.factors {
        println!("  {:<24} {:>5}", row.name, row.percent);
    }

    let explanation = requester.explain(&request);
    println!();
    println!("{} ({})", NARRATIVE_HEADING, requester.backend());
    println!("  {}", explanation.text());
    println!();
    Ok(())
}

fn run_prescribe(store: &PatientStore, id: &PatientId, text: &str) -> DemoResult {
    let patient = store.require(id)?;
    let outbox = InMemoryOutbox::new();

    let mut composer = PrescriptionComposer::new();
    composer.set_text(text);
    composer.submit(Some(&patient.id), &outbox)?;

    println!("Prescription Sent: The new prescription has been sent to the patient.");
    println!("{}", serde_json::to_string_pretty(&outbox.export())?);
    Ok(())
}

fn run_register(name: &str, age: &str, smoker: Option<SmokerChoice>) -> DemoResult {
    let outbox = InMemoryOutbox::new();

    let mut form = RegistrationForm::new();
    form.set_name(name);
    form.set_age(age);
    form.set_smoker(smoker);

    if let Err(e) = form.submit(&outbox) {
        for field in RegistrationField::ALL {
            if let Some(error) = form.error_for(field) {
                eprintln!("  {}: {}", field.label(), error);
            }
        }
        return Err(e.into());
    }

    println!("Form Submitted: Patient data has been logged.");
    println!("{}", serde_json::to_string_pretty(&outbox.export())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_arguments_parse() {
        let cli = Cli::try_parse_from(["demo", "explain", "pat2", "readmission", "--backend", "template"]).unwrap();
        match cli.command {
            Command::Explain {
                id,
                assessment,
                backend,
            } => {
                assert_eq!(id, "pat2");
                assert_eq!(AssessmentKind::from(assessment), AssessmentKind::Readmission);
                assert_eq!(backend.map(Backend::from), Some(Backend::Template));
            }
            _ => panic!("expected explain"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["demo", "list", "--config", "dash.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("dash.toml")));
    }

    #[test]
    fn register_defaults_match_empty_form() {
        let cli = Cli::try_parse_from(["demo", "register"]).unwrap();
        match cli.command {
            Command::Register { name, age, smoker } => {
                assert_eq!(name, "");
                assert_eq!(age, "0");
                assert_eq!(smoker, None);
            }
            _ => panic!("expected register"),
        }
    }

    #[test]
    fn unknown_patient_is_an_error() {
        let store = PatientStore::sample().unwrap();
        assert!(run_show(&store, &PatientId::new("999")).is_err());
    }

    #[test]
    fn blank_prescription_is_rejected() {
        let store = PatientStore::sample().unwrap();
        assert!(run_prescribe(&store, &PatientId::new("pat1"), "   ").is_err());
    }

    #[test]
    fn invalid_registration_is_rejected() {
        assert!(run_register("A", "-3", None).is_err());
        assert!(run_register("Ada", "36", Some(SmokerChoice::No)).is_ok());
    }
}
