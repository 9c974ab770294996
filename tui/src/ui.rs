//! Rendering. Every function here reads `App` and draws; none mutate.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Gauge, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame,
};

use insight_contracts::{
    risk::{BadgeVariant, RiskColor},
    submission::SmokerChoice,
};
use insight_dashboard::{
    detail::{PatientDetail, RiskCard, EMPTY_STATE, RISK_CARD_DESCRIPTION, RISK_CARD_TITLE},
    dialog::{dialog_description, DIALOG_TITLE, FACTORS_HEADING, LOADING_TEXT, NARRATIVE_HEADING},
    forms::{PRESCRIPTION_PLACEHOLDER, PRESCRIPTION_TITLE, REGISTRATION_DESCRIPTION, REGISTRATION_TITLE},
    patient_list::{NEW_PATIENT_LABEL, NO_PATIENTS_FOUND, SEARCH_PLACEHOLDER, SIDEBAR_TITLE},
    DialogState, NotificationKind, PatientListing, RegistrationField, View,
};

use crate::{App, Focus};

const SIDEBAR_WIDTH: u16 = 30;
const SIDEBAR_COLLAPSED_WIDTH: u16 = 5;
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

// ── Layout ────────────────────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, app: &App) {
    let full = f.area();

    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // sidebar + main pane
            Constraint::Length(3), // footer
        ])
        .split(full);

    let sidebar_width = if app.state.sidebar_collapsed() {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_WIDTH
    };
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(20)])
        .split(outer_chunks[0]);

    if app.state.sidebar_collapsed() {
        render_sidebar_collapsed(f, body_chunks[0], app);
    } else {
        render_sidebar(f, body_chunks[0], app);
    }

    match app.state.view() {
        View::Empty => render_empty(f, body_chunks[1]),
        View::Detail(_) => match app.state.detail() {
            Some(detail) => render_detail(f, body_chunks[1], app, &detail),
            None => render_empty(f, body_chunks[1]),
        },
        View::Registration => render_registration(f, body_chunks[1], app),
    }

    render_footer(f, outer_chunks[1], app);

    if app.state.dialog().is_open() {
        render_dialog(f, body_chunks[1], app);
    }
    render_notifications(f, full, app);
}

fn panel(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn label_style() -> Style {
    Style::default().fg(Color::Gray)
}

fn muted_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn risk_color(color: RiskColor) -> Color {
    match color {
        RiskColor::Green => Color::Green,
        RiskColor::Yellow => Color::Yellow,
        RiskColor::Orange => Color::Rgb(249, 115, 22),
        RiskColor::Red => Color::Red,
    }
}

// ── Sidebar ───────────────────────────────────────────────────────────────────

fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Sidebar;
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", SIDEBAR_TITLE),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // search
            Constraint::Min(1),    // patients
            Constraint::Length(1), // new patient
        ])
        .split(inner);

    let query = app.state.filter().query();
    let search = if query.is_empty() {
        Line::from(vec![
            Span::styled(" / ", Style::default().fg(Color::Cyan)),
            Span::styled(SEARCH_PLACEHOLDER, muted_style()),
        ])
    } else {
        Line::from(vec![
            Span::styled(" / ", Style::default().fg(Color::Cyan)),
            Span::raw(query),
            Span::styled(if focused { "▏" } else { "" }, Style::default().fg(Color::Cyan)),
        ])
    };
    f.render_widget(Paragraph::new(search), chunks[0]);

    let selected_id = app.state.selected_patient().map(|p| &p.id);
    let items: Vec<ListItem> = match app.state.listing() {
        PatientListing::NoPatientsFound => vec![ListItem::new(Span::styled(
            format!(" {}", NO_PATIENTS_FOUND),
            muted_style(),
        ))],
        PatientListing::Matches(patients) => patients
            .iter()
            .enumerate()
            .map(|(i, patient)| {
                let is_selected = selected_id == Some(&patient.id);
                let is_cursor = focused && i == app.list_cursor;
                let marker = if is_cursor { "▸" } else { " " };
                let name_style = if is_selected {
                    Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("{} ", marker), Style::default().fg(Color::Cyan)),
                        Span::styled(format!("{} ", patient.initial()), Style::default().fg(Color::Cyan)),
                        Span::styled(truncate(&patient.name, 20), name_style),
                    ]),
                    Line::from(Span::styled(
                        format!("    {}, {}", patient.age, patient.gender.as_str()),
                        muted_style(),
                    )),
                ])
            })
            .collect(),
    };
    f.render_widget(List::new(items), chunks[1]);

    let registering = matches!(app.state.view(), View::Registration);
    let new_patient_style = if registering {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Cyan)
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" [Ctrl-N] ", Style::default().fg(Color::Cyan)),
            Span::styled(format!("+ {}", NEW_PATIENT_LABEL), new_patient_style),
        ])),
        chunks[2],
    );
}

/// Collapsed sidebar: one initial per patient.
fn render_sidebar_collapsed(f: &mut Frame, area: Rect, app: &App) {
    let selected_id = app.state.selected_patient().map(|p| &p.id);
    let items: Vec<ListItem> = app
        .state
        .store()
        .all()
        .iter()
        .map(|patient| {
            let style = if selected_id == Some(&patient.id) {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Cyan)
            };
            ListItem::new(Line::from(Span::styled(format!(" {} ", patient.initial()), style)))
        })
        .collect();
    f.render_widget(List::new(items).block(panel("HI", false)), area);
}

// ── Main pane ─────────────────────────────────────────────────────────────────

fn render_empty(f: &mut Frame, area: Rect) {
    let block = panel("Dashboard", false);
    let inner = block.inner(area);
    f.render_widget(block, area);
    let middle = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    f.render_widget(
        Paragraph::new(Span::styled(EMPTY_STATE, muted_style())).alignment(Alignment::Center),
        middle[1],
    );
}

fn render_detail(f: &mut Frame, area: Rect, app: &App, detail: &PatientDetail<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // heading
            Constraint::Length(10), // profile + vitals
            Constraint::Length(12), // risk analysis
            Constraint::Min(6),     // labs + prescriptions
            Constraint::Length(4),  // composer
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", detail.heading()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_profile(f, top[0], detail);
    render_vitals(f, top[1], detail);

    render_risk_scores(f, chunks[2], app, detail);

    let tables = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[3]);
    render_lab_results(f, tables[0], detail);
    render_prescriptions(f, tables[1], detail);

    render_composer(f, chunks[4], app);
}

fn render_profile(f: &mut Frame, area: Rect, detail: &PatientDetail<'_>) {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", detail.patient().name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(detail.summary(), muted_style()),
    ])];
    for (label, value) in detail.profile_rows() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<15}", label), label_style()),
            Span::raw(value),
        ]));
    }
    f.render_widget(
        Paragraph::new(lines).block(panel("Profile", false)).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_vitals(f: &mut Frame, area: Rect, detail: &PatientDetail<'_>) {
    let items: Vec<ListItem> = detail
        .vitals()
        .into_iter()
        .map(|vital| {
            ListItem::new(vec![
                Line::from(Span::styled(vital.name, label_style())),
                Line::from(Span::styled(
                    format!("  {}", vital.value),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
            ])
        })
        .collect();
    f.render_widget(List::new(items).block(panel("Vitals", false)), area);
}

fn render_risk_scores(f: &mut Frame, area: Rect, app: &App, detail: &PatientDetail<'_>) {
    let focused = app.focus == Focus::Detail;
    let block = panel(RISK_CARD_TITLE, focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // description
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);
    f.render_widget(
        Paragraph::new(Span::styled(RISK_CARD_DESCRIPTION, muted_style())),
        rows[0],
    );

    for (i, card) in detail.risk_cards().iter().enumerate() {
        render_risk_card(f, rows[i + 1], card, focused && i == app.risk_cursor);
    }
}

fn render_risk_card(f: &mut Frame, area: Rect, card: &RiskCard, highlighted: bool) {
    let color = risk_color(card.treatment.color);
    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let badge_style = match card.treatment.badge {
        BadgeVariant::Destructive => Style::default()
            .fg(Color::White)
            .bg(color)
            .add_modifier(Modifier::BOLD),
        BadgeVariant::Default => Style::default().fg(Color::Black).bg(color),
    };
    let marker = if highlighted { "▸ " } else { "  " };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(
                card.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!(" {} ", card.badge_text), badge_style),
            Span::styled(
                if highlighted { "   [Enter] Explain" } else { "" },
                muted_style(),
            ),
        ])),
        lines[0],
    );

    let gauge_area = Rect {
        x: lines[1].x + 2,
        width: lines[1].width.saturating_sub(2),
        ..lines[1]
    };
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::Black))
            .ratio(card.score.ratio())
            .label(card.score_text.clone()),
        gauge_area,
    );

    let factors: Vec<String> = card
        .factors
        .iter()
        .map(|row| format!("{} {}", row.name, row.percent))
        .collect();
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("  {}", truncate(&factors.join(" · "), lines[2].width.saturating_sub(2) as usize)),
            muted_style(),
        )),
        lines[2],
    );
}

fn render_lab_results(f: &mut Frame, area: Rect, detail: &PatientDetail<'_>) {
    let header = Row::new(["Test", "Value", "Range", "Date"])
        .style(label_style().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = detail
        .lab_results()
        .iter()
        .map(|lab| {
            Row::new(vec![
                Cell::from(lab.test.clone()).style(Style::default().fg(Color::White)),
                Cell::from(lab.value.clone()),
                Cell::from(lab.range.clone()).style(muted_style()),
                Cell::from(lab.date.format("%Y-%m-%d").to_string()).style(muted_style()),
            ])
        })
        .collect();
    let widths = [
        Constraint::Percentage(34),
        Constraint::Percentage(20),
        Constraint::Percentage(22),
        Constraint::Percentage(24),
    ];
    f.render_widget(
        Table::new(rows, widths)
            .header(header)
            .block(panel("Recent Lab Results", false)),
        area,
    );
}

fn render_prescriptions(f: &mut Frame, area: Rect, detail: &PatientDetail<'_>) {
    let header = Row::new(["Medication", "Dosage", "Frequency"])
        .style(label_style().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = detail
        .prescriptions()
        .iter()
        .map(|rx| {
            Row::new(vec![
                Cell::from(rx.medication.clone()).style(Style::default().fg(Color::White)),
                Cell::from(rx.dosage.clone()),
                Cell::from(rx.frequency.clone()).style(muted_style()),
            ])
        })
        .collect();
    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(25),
        Constraint::Percentage(35),
    ];
    f.render_widget(
        Table::new(rows, widths)
            .header(header)
            .block(panel("Current Prescriptions", false)),
        area,
    );
}

fn render_composer(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Composer;
    let text = app.state.composer().text();
    let line = if text.is_empty() && !focused {
        Line::from(Span::styled(PRESCRIPTION_PLACEHOLDER, muted_style()))
    } else {
        Line::from(vec![
            Span::raw(text),
            Span::styled(if focused { "▏" } else { "" }, Style::default().fg(Color::Cyan)),
        ])
    };
    f.render_widget(
        Paragraph::new(line)
            .block(panel(PRESCRIPTION_TITLE, focused))
            .wrap(Wrap { trim: false }),
        area,
    );
}

// ── Registration ──────────────────────────────────────────────────────────────

fn render_registration(f: &mut Frame, area: Rect, app: &App) {
    let form = app.state.registration();
    let focused_field = match app.focus {
        Focus::Registration(field) => Some(field),
        _ => None,
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(REGISTRATION_DESCRIPTION, muted_style())),
        Line::from(""),
    ];

    for field in RegistrationField::ALL {
        let focused = focused_field == Some(field);
        let label_color = if focused { Color::Cyan } else { Color::White };
        lines.push(Line::from(Span::styled(
            field.label(),
            Style::default().fg(label_color).add_modifier(Modifier::BOLD),
        )));

        let cursor = if focused { "▏" } else { "" };
        let value_line = match field {
            RegistrationField::Name => Line::from(vec![
                Span::raw(format!("  {}", form.name())),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ]),
            RegistrationField::Age => Line::from(vec![
                Span::raw(format!("  {}", form.age_input())),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ]),
            RegistrationField::Smoker => {
                let radio = |choice: SmokerChoice, label: &'static str| {
                    let mark = if form.smoker() == Some(choice) { "(•)" } else { "( )" };
                    Span::raw(format!("  {} {}", mark, label))
                };
                Line::from(vec![radio(SmokerChoice::Yes, "Yes"), radio(SmokerChoice::No, "No")])
            }
        };
        lines.push(value_line);

        match form.error_for(field) {
            Some(error) => lines.push(Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::Red),
            ))),
            None => lines.push(Line::from(Span::styled(format!("  {}", field.hint()), muted_style()))),
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("[Enter] ", Style::default().fg(Color::Cyan)),
        Span::raw("Submit"),
    ]));

    f.render_widget(
        Paragraph::new(lines)
            .block(panel(REGISTRATION_TITLE, focused_field.is_some()))
            .wrap(Wrap { trim: false }),
        area,
    );
}

// ── Explanation dialog ────────────────────────────────────────────────────────

fn render_dialog(f: &mut Frame, area: Rect, app: &App) {
    let dialog = app.state.dialog();
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", DIALOG_TITLE),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let factors = dialog.factors();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // description
            Constraint::Length(factors.len().max(1) as u16 + 2),
            Constraint::Min(3),    // narrative
            Constraint::Length(1), // close hint
        ])
        .split(inner);

    let prediction = dialog.prediction().unwrap_or_default();
    f.render_widget(
        Paragraph::new(Span::styled(dialog_description(prediction), muted_style()))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let factor_items: Vec<ListItem> = if factors.is_empty() {
        vec![ListItem::new(Span::styled("No contributing factors recorded.", muted_style()))]
    } else {
        factors
            .iter()
            .map(|row| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<24}", truncate(&row.name, 24))),
                    Span::styled(
                        format!("{:>5}", row.percent),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                ]))
            })
            .collect()
    };
    f.render_widget(List::new(factor_items).block(panel(FACTORS_HEADING, false)), chunks[1]);

    let narrative = match dialog.state() {
        DialogState::Loading { .. } => Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} ", SPINNER[app.spinner % SPINNER.len()]),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(LOADING_TEXT, muted_style()),
        ])),
        DialogState::Ready { explanation, .. } => {
            let style = if explanation.is_fallback() {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            Paragraph::new(Span::styled(explanation.text(), style)).wrap(Wrap { trim: true })
        }
        DialogState::Closed => Paragraph::new(""),
    };
    f.render_widget(narrative.block(panel(NARRATIVE_HEADING, false)), chunks[2]);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[Esc] ", Style::default().fg(Color::Cyan)),
            Span::raw("Close"),
        ])),
        chunks[3],
    );
}

// ── Notifications ─────────────────────────────────────────────────────────────

fn render_notifications(f: &mut Frame, area: Rect, app: &App) {
    const WIDTH: u16 = 44;
    const HEIGHT: u16 = 4;

    if area.width < WIDTH + 2 {
        return;
    }
    let x = area.x + area.width - WIDTH - 1;
    let mut y = area.y + 1;

    // Newest on top.
    let newest_first: Vec<_> = app.state.notifications().iter().collect();
    for notification in newest_first.into_iter().rev() {
        if y + HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect {
            x,
            y,
            width: WIDTH,
            height: HEIGHT,
        };
        let color = match notification.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        };
        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(Span::raw(notification.description.as_str()))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(Span::styled(
                            format!(" {} ", notification.title),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                ),
            rect,
        );
        y += HEIGHT;
    }
}

// ── Footer ────────────────────────────────────────────────────────────────────

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    let mut spans: Vec<Span> = Vec::new();

    if app.state.dialog().is_open() {
        spans.extend([key("[Esc] "), Span::raw("Close explanation  ")]);
    } else {
        match app.focus {
            Focus::Sidebar => spans.extend([
                Span::raw("type to search  "),
                key("[↑↓] "),
                Span::raw("Move  "),
                key("[Enter] "),
                Span::raw("Open  "),
                key("[Tab] "),
                Span::raw("Main pane  "),
                key("[Esc] "),
                Span::raw("Clear/Quit  "),
            ]),
            Focus::Detail => spans.extend([
                key("[↑↓/1-3] "),
                Span::raw("Risk card  "),
                key("[Enter] "),
                Span::raw("Explain  "),
                key("[p] "),
                Span::raw("Prescribe  "),
                key("[Tab] "),
                Span::raw("Sidebar  "),
                key("[q] "),
                Span::raw("Quit  "),
            ]),
            Focus::Composer => spans.extend([
                key("[Enter] "),
                Span::raw("Send Prescription  "),
                key("[Esc] "),
                Span::raw("Back  "),
            ]),
            Focus::Registration(_) => spans.extend([
                key("[Tab] "),
                Span::raw("Next field  "),
                key("[y/n] "),
                Span::raw("Smoker  "),
                key("[Enter] "),
                Span::raw("Submit  "),
                key("[Esc] "),
                Span::raw("Sidebar  "),
            ]),
        }
    }
    spans.extend([key("[Ctrl-B] "), Span::raw("Sidebar  "), key("[Ctrl-C] "), Span::raw("Quit")]);

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

// ── Utility helpers ───────────────────────────────────────────────────────────

/// Truncate a string to at most `max` chars, appending "…" if truncated.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// A rect of `percent_x` × `percent_y` centred in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
