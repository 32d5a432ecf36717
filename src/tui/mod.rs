//! Ratatui-based terminal UI.
//!
//! The TUI walks one screen per estimation stage (kitchen, toilet flush,
//! shower, bathroom sink) and ends on a summary screen. Each stage screen
//! shows editable numeric fields and live result cards; edits recompute the
//! stage immediately, and invalid text silently keeps the last computed
//! values. Advancing a screen merges the stage record into the pipeline
//! state, mirroring how the original forms forwarded their values.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{BarChart, Block, Borders, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline;
use crate::domain::{EstimateConfig, Fixture, PipelineState, StageRecord, StageResult};
use crate::error::AppError;
use crate::report::{compute_totals, fmt_brl, fmt_liters, format_stage_table};
use crate::session::{EnvSession, Session};
use crate::stages;

/// Start the TUI.
pub fn run(config: &EstimateConfig) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::internal(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(config);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::internal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::internal(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// One stage screen's editable form.
struct StageForm {
    fixture: Fixture,
    /// Raw text fields in `field_labels` order.
    fields: Vec<String>,
    /// Last computed result (kept across invalid edits).
    result: StageResult,
}

impl StageForm {
    fn new(fixture: Fixture, fields: Vec<String>) -> Self {
        let result = stages::recompute(fixture, &fields, StageResult::default());
        Self {
            fixture,
            fields,
            result,
        }
    }

    /// Recompute after an edit; invalid input keeps the previous result.
    fn refresh(&mut self) {
        self.result = stages::recompute(self.fixture, &self.fields, self.result);
    }

    fn record(&self) -> StageRecord {
        StageRecord {
            fixture: self.fixture,
            inputs: self.fields.clone(),
            result: self.result,
        }
    }
}

struct App {
    forms: Vec<StageForm>,
    /// Current screen: an index into `forms`, or `forms.len()` for summary.
    screen: usize,
    field: usize,
    state: PipelineState,
    session: EnvSession,
    /// Export target from `--export-report`; auto-named when absent.
    export_path: Option<PathBuf>,
    status: String,
}

impl App {
    fn new(config: &EstimateConfig) -> Self {
        let run = pipeline::run_estimate(config);
        let forms = run
            .state
            .records()
            .iter()
            .map(|r| StageForm::new(r.fixture, r.inputs.clone()))
            .collect();

        Self {
            forms,
            screen: 0,
            field: 0,
            state: PipelineState::new(),
            session: EnvSession::from_env(),
            export_path: config.export_report.clone(),
            status: "Edit fields, Tab to advance.".to_string(),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::internal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::internal(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::internal(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Tab | KeyCode::Enter => self.advance(),
            KeyCode::BackTab => self.go_back(),
            KeyCode::Up => {
                if self.field > 0 {
                    self.field -= 1;
                }
            }
            KeyCode::Down => {
                if let Some(form) = self.forms.get(self.screen) {
                    if self.field + 1 < form.fields.len() {
                        self.field += 1;
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = self.forms.get_mut(self.screen) {
                    form.fields[self.field].pop();
                    form.refresh();
                }
            }
            KeyCode::Char('s') => {
                self.session.sign_out();
                self.status = "Signed out.".to_string();
            }
            KeyCode::Char('e') => {
                if self.on_summary() {
                    self.export_report();
                } else {
                    self.status = "Export is available on the summary screen.".to_string();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(form) = self.forms.get_mut(self.screen) {
                    form.fields[self.field].push(c);
                    form.refresh();
                }
            }
            _ => {}
        }

        Ok(false)
    }

    fn on_summary(&self) -> bool {
        self.screen == self.forms.len()
    }

    /// Commit the current stage into the pipeline state and move forward.
    fn advance(&mut self) {
        if let Some(form) = self.forms.get(self.screen) {
            self.state.merge(form.record());
            self.screen += 1;
            self.field = 0;
            self.status = if self.on_summary() {
                "Summary. e export, Shift-Tab back, q quit.".to_string()
            } else {
                format!("{} stage.", self.forms[self.screen].fixture.display_name())
            };
        }
    }

    fn go_back(&mut self) {
        if self.screen > 0 {
            self.screen -= 1;
            self.field = 0;
            self.status = format!("{} stage.", self.forms[self.screen].fixture.display_name());
        }
    }

    fn export_report(&mut self) {
        let totals = compute_totals(&self.state);
        let user = self.session.current_user().map(str::to_string);
        let report = crate::io::build_report(&self.state, totals, user);
        let path = report_destination(self.export_path.as_deref(), report.generated_on);

        match crate::io::write_report_json(&path, &report) {
            Ok(()) => {
                self.status = format!("Wrote report: {}", path.display());
            }
            Err(err) => {
                self.status = format!("Report write failed: {err}");
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        if self.on_summary() {
            self.draw_summary(frame, chunks[1]);
        } else {
            self.draw_stage(frame, chunks[1]);
        }
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let greeting = match self.session.current_user() {
            Some(user) => format!("Olá, {user}!"),
            None => "Olá, Visitante!".to_string(),
        };

        let position = if self.on_summary() {
            "summary".to_string()
        } else {
            format!(
                "{} ({}/{})",
                self.forms[self.screen].fixture.display_name(),
                self.screen + 1,
                self.forms.len()
            )
        };

        let totals = compute_totals(&self.state);
        let lines = vec![
            Line::from(vec![
                Span::styled("aqua", Style::default().fg(Color::Cyan)),
                Span::raw(" — household water budget | "),
                Span::raw(greeting),
            ]),
            Line::from(Span::styled(
                format!(
                    "screen: {position} | accumulated: {:.2} L/month | {}",
                    totals.monthly_liters,
                    fmt_brl(totals.cost)
                ),
                Style::default().fg(Color::Gray),
            )),
        ];

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_stage(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let form = &self.forms[self.screen];
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2 + form.fields.len() as u16), Constraint::Min(0)])
            .split(area);

        self.draw_fields(frame, chunks[0], form);
        self.draw_cards(frame, chunks[1], form);
    }

    fn draw_fields(&self, frame: &mut ratatui::Frame<'_>, area: Rect, form: &StageForm) {
        let labels = form.fixture.field_labels();
        let items: Vec<ListItem> = form
            .fields
            .iter()
            .zip(labels)
            .map(|(value, label)| ListItem::new(format!("{label}: {value}")))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(form.fixture.display_name())
                    .borders(Borders::ALL),
            )
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_cards(&self, frame: &mut ratatui::Frame<'_>, area: Rect, form: &StageForm) {
        let r = &form.result;
        let lines = vec![
            Line::from(fmt_liters(r.daily_liters, "day")),
            Line::from(fmt_liters(r.weekly_liters, "week")),
            Line::from(fmt_liters(r.monthly_liters, "month")),
            Line::from(Span::styled(
                format!("Estimated cost: {}", fmt_brl(r.cost)),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        let p = Paragraph::new(Text::from(lines))
            .block(Block::default().title("Consumption").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_summary(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(8)])
            .split(area);

        let totals = compute_totals(&self.state);
        let text = format!(
            "{}\nTotal: {:.2} L/month | estimated cost {}",
            format_stage_table(&self.state),
            totals.monthly_liters,
            fmt_brl(totals.cost)
        );
        let table = Paragraph::new(text)
            .block(Block::default().title("Summary").borders(Borders::ALL));
        frame.render_widget(table, chunks[0]);

        let data: Vec<(&str, u64)> = self
            .state
            .records()
            .iter()
            .map(|r| {
                (
                    r.fixture.display_name(),
                    r.result.monthly_liters.round() as u64,
                )
            })
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .title("Monthly liters by stage")
                    .borders(Borders::ALL),
            )
            .bar_width(9)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
            .data(&data);
        frame.render_widget(chart, chunks[1]);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ field  0-9/⌫ edit  Tab next  Shift-Tab back  e export  s sign out  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Where the summary-screen export lands: the `--export-report` path when one
/// was given, otherwise an auto-named file in the working directory.
fn report_destination(configured: Option<&Path>, generated_on: NaiveDate) -> PathBuf {
    match configured {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(format!("aqua-report-{generated_on}.json")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn configured_export_path_wins_over_auto_name() {
        assert_eq!(
            report_destination(Some(Path::new("weekly/budget.json")), date()),
            PathBuf::from("weekly/budget.json")
        );
        assert_eq!(
            report_destination(None, date()),
            PathBuf::from("aqua-report-2026-08-30.json")
        );
    }

    #[test]
    fn app_carries_the_export_path_from_config() {
        let config = EstimateConfig {
            washes_per_day: 1,
            faucet_minutes_per_use: 10,
            flushes_per_day: 0,
            showers_per_day: 1,
            minutes_per_shower: 10,
            sink_uses_per_day: 0,
            plot: false,
            plot_width: 40,
            export_results: None,
            export_report: Some(PathBuf::from("budget.json")),
        };
        let app = App::new(&config);
        assert_eq!(app.export_path, Some(PathBuf::from("budget.json")));
    }
}
