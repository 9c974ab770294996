//! Health Insights: interactive Ratatui clinical dashboard
//!
//! Layout:
//!   ┌─ sidebar ───────┬─── main pane ─────────────────────────────────────┐
//!   │ Health Insights │  Patient Dashboard: <name>                        │
//!   │ Search...       │  profile │ vitals                                 │
//!   │ > John Doe      │  risk analysis (3 cards)                          │
//!   │   Jane Smith    │  labs │ prescriptions                             │
//!   │ + New Patient   │  write prescription                               │
//!   ├─────────────────┴───────────────────────────────────────────────────┤
//!   │  footer (key bindings)                                              │
//!   └─────────────────────────────────────────────────────────────────────┘
//!
//! The explanation dialog is drawn over the main pane; notifications stack
//! in the top-right corner.

mod ui;

use std::{
    fs::File,
    io,
    path::PathBuf,
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc, Mutex,
    },
    thread,
    time::{Duration, Instant},
};

use chrono::Utc;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use insight_config::{DashboardConfig, LoggingSettings};
use insight_contracts::{
    error::InsightError,
    explain::{Explanation, RequestId},
    risk::AssessmentKind,
};
use insight_dashboard::{
    AppState, PatientListing, PendingExplanation, RegistrationField, View,
};
use insight_explain::ExplanationRequester;
use insight_outbox::InMemoryOutbox;
use insight_records::PatientStore;

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Health Insights clinical dashboard.
#[derive(Parser)]
#[command(name = "insight-tui", about = "Health Insights clinical dashboard (terminal UI)")]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// ── App state ─────────────────────────────────────────────────────────────────

/// Where typed keys go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    /// Search box and patient list.
    Sidebar,
    /// Risk cards of the selected patient.
    Detail,
    /// The prescription text field.
    Composer,
    Registration(RegistrationField),
}

struct App {
    state: AppState,
    requester: ExplanationRequester,
    focus: Focus,

    /// Highlighted row in the filtered patient list.
    list_cursor: usize,
    /// Highlighted risk card, indexes `AssessmentKind::ALL`.
    risk_cursor: usize,

    results_tx: Sender<(RequestId, Explanation)>,
    results_rx: Receiver<(RequestId, Explanation)>,

    // Spinner frame for the dialog's loading state.
    spinner: usize,
    last_tick: Instant,
    quit: bool,
}

impl App {
    fn new(state: AppState, requester: ExplanationRequester) -> Self {
        let (results_tx, results_rx) = mpsc::channel();
        Self {
            state,
            requester,
            focus: Focus::Sidebar,
            list_cursor: 0,
            risk_cursor: 0,
            results_tx,
            results_rx,
            spinner: 0,
            last_tick: Instant::now(),
            quit: false,
        }
    }

    fn selected_kind(&self) -> AssessmentKind {
        AssessmentKind::ALL[self.risk_cursor.min(AssessmentKind::ALL.len() - 1)]
    }

    /// Number of rows in the filtered list.
    fn listing_len(&self) -> usize {
        match self.state.listing() {
            PatientListing::Matches(patients) => patients.len(),
            PatientListing::NoPatientsFound => 0,
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.listing_len();
        self.list_cursor = if len == 0 { 0 } else { self.list_cursor.min(len - 1) };
    }

    /// Open the dialog on the highlighted card and run the request off-thread.
    fn explain_selected(&mut self) {
        let Some(pending) = self.state.open_explanation(self.selected_kind()) else {
            return;
        };
        self.spawn_request(pending);
    }

    fn spawn_request(&self, pending: PendingExplanation) {
        let requester = self.requester.clone();
        let tx = self.results_tx.clone();
        let spawned = thread::Builder::new()
            .name("explain-worker".to_string())
            .spawn(move || {
                let explanation = requester.explain(&pending.request);
                // The UI may already have exited.
                let _ = tx.send((pending.id, explanation));
            });
        if let Err(e) = spawned {
            warn!(error = %e, "failed to spawn explain worker");
        }
    }

    /// Apply every finished request; stale ones are dropped by the dialog.
    fn drain_results(&mut self) {
        while let Ok((id, explanation)) = self.results_rx.try_recv() {
            if !self.state.resolve_explanation(id, explanation) {
                debug!(request_id = %id.0, "explanation arrived after dialog moved on");
            }
        }
    }

    fn tick(&mut self) {
        self.spinner = self.spinner.wrapping_add(1);
        self.state.notifications_mut().expire(Utc::now());
        self.last_tick = Instant::now();
    }

    // ── Key handling ──────────────────────────────────────────────────────────

    fn on_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global bindings.
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                return;
            }
            KeyCode::Char('b') if ctrl => {
                self.state.toggle_sidebar();
                if self.state.sidebar_collapsed() && self.focus == Focus::Sidebar {
                    self.focus = Focus::Detail;
                }
                return;
            }
            KeyCode::Char('n') if ctrl => {
                self.open_registration();
                return;
            }
            _ => {}
        }

        // The dialog is modal.
        if self.state.dialog().is_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.state.close_explanation();
            }
            return;
        }

        match self.focus {
            Focus::Sidebar => self.on_sidebar_key(key),
            Focus::Detail => self.on_detail_key(key),
            Focus::Composer => self.on_composer_key(key),
            Focus::Registration(field) => self.on_registration_key(field, key),
        }
    }

    fn on_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.list_cursor = self.list_cursor.saturating_sub(1),
            KeyCode::Down => {
                self.list_cursor += 1;
                self.clamp_cursor();
            }
            KeyCode::Enter => {
                let id = self
                    .state
                    .listing()
                    .patients()
                    .get(self.list_cursor)
                    .map(|p| p.id.clone());
                if let Some(id) = id {
                    if self.state.select_patient(&id).is_ok() {
                        self.risk_cursor = 0;
                        self.focus = Focus::Detail;
                    }
                }
            }
            KeyCode::Tab => self.focus_main(),
            KeyCode::Esc => {
                if self.state.filter().query().is_empty() {
                    self.quit = true;
                } else {
                    self.state.filter_mut().clear();
                    self.clamp_cursor();
                }
            }
            KeyCode::Backspace => {
                self.state.filter_mut().pop_char();
                self.clamp_cursor();
            }
            KeyCode::Char(c) => {
                self.state.filter_mut().push_char(c);
                self.list_cursor = 0;
            }
            _ => {}
        }
    }

    fn on_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.risk_cursor = self.risk_cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.risk_cursor = (self.risk_cursor + 1).min(AssessmentKind::ALL.len() - 1);
            }
            KeyCode::Char(c @ '1'..='3') => self.risk_cursor = (c as usize) - ('1' as usize),
            KeyCode::Enter | KeyCode::Char('e') => self.explain_selected(),
            KeyCode::Char('p') if self.state.selected_patient().is_some() => self.focus = Focus::Composer,
            KeyCode::Char('n') => self.open_registration(),
            KeyCode::Tab | KeyCode::Esc => self.focus_sidebar(),
            _ => {}
        }
    }

    fn on_composer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.state.send_prescription();
            }
            KeyCode::Esc | KeyCode::Tab => self.focus = Focus::Detail,
            KeyCode::Backspace => self.state.composer_mut().pop_char(),
            KeyCode::Char(c) => self.state.composer_mut().push_char(c),
            _ => {}
        }
    }

    fn on_registration_key(&mut self, field: RegistrationField, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if self.state.submit_registration() {
                    self.focus = Focus::Registration(RegistrationField::Name);
                }
            }
            KeyCode::Tab | KeyCode::Down => self.focus = Focus::Registration(field.next()),
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = Focus::Registration(field.next().next());
            }
            KeyCode::Esc => self.focus_sidebar(),
            KeyCode::Backspace => self.state.registration_mut().backspace(field),
            KeyCode::Char(c) => self.state.registration_mut().input_char(field, c),
            _ => {}
        }
    }

    fn open_registration(&mut self) {
        self.state.open_registration();
        self.focus = Focus::Registration(RegistrationField::Name);
    }

    fn focus_sidebar(&mut self) {
        if self.state.sidebar_collapsed() {
            self.state.toggle_sidebar();
        }
        self.focus = Focus::Sidebar;
    }

    fn focus_main(&mut self) {
        self.focus = match self.state.view() {
            View::Registration => Focus::Registration(RegistrationField::Name),
            View::Detail(_) | View::Empty => Focus::Detail,
        };
    }
}

// ── Startup ───────────────────────────────────────────────────────────────────

/// Log to the configured file, if any. The terminal itself belongs to the UI.
fn init_logging(settings: &LoggingSettings) -> io::Result<()> {
    let Some(path) = &settings.file else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn build_app(config: &DashboardConfig) -> Result<App, InsightError> {
    let store = PatientStore::sample()?;
    let requester = ExplanationRequester::from_settings(&config.explanation)?;
    let state = AppState::new(store, Arc::new(InMemoryOutbox::new()));
    info!(patients = state.store().len(), backend = requester.backend(), "dashboard starting");
    Ok(App::new(state, requester))
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

/// Spinner and notification-expiry tick.
const TICK_MS: u64 = 150;

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let tick = Duration::from_millis(TICK_MS);
    while !app.quit {
        app.drain_results();
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick.saturating_sub(app.last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if app.last_tick.elapsed() >= tick {
            app.tick();
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let config = DashboardConfig::load(args.config.as_deref()).map_err(|e| io::Error::other(e.to_string()))?;
    init_logging(&config.logging)?;
    let mut app = build_app(&config).map_err(|e| io::Error::other(e.to_string()))?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Best-effort terminal restore on panic.
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    info!("dashboard closed");
    result
}
