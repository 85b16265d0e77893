//! Application state and TUI event loop for the jobmon dashboard.
//!
//! [`App`] owns the analysis result, theme and table filters, and drives
//! the synchronous terminal event loop.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use jobmon_core::error::Result;
use jobmon_core::models::Job;
use jobmon_data::analysis::{analyze_log, Analysis};

use crate::dashboard;
use crate::table_view::{self, AlertFilter, StatusFilter};
use crate::themes::Theme;

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the jobmon dashboard.
pub struct App {
    /// Path of the log file being monitored.
    pub path: PathBuf,
    /// Warning threshold in minutes.
    pub warning_threshold: f64,
    /// Error threshold in minutes.
    pub error_threshold: f64,
    /// Active colour theme.
    pub theme: Theme,
    /// Most recent analysis of the log file.
    pub analysis: Analysis,
    /// Completion filter applied to the job table.
    pub status_filter: StatusFilter,
    /// Alert filter applied to the job table.
    pub alert_filter: AlertFilter,
    /// Transient message shown in the footer after a reload.
    pub status: Option<String>,
}

impl App {
    /// Analyse `path` and construct the application state.
    pub fn new(
        path: &Path,
        warning_threshold: f64,
        error_threshold: f64,
        theme_name: &str,
    ) -> Result<Self> {
        let analysis = analyze_log(path, warning_threshold, error_threshold)?;
        Ok(Self {
            path: path.to_path_buf(),
            warning_threshold,
            error_threshold,
            theme: Theme::from_name(theme_name),
            analysis,
            status_filter: StatusFilter::All,
            alert_filter: AlertFilter::All,
            status: None,
        })
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the dashboard until the user quits.
    ///
    /// Uses `crossterm::event::poll` with a 250 ms timeout.  The loop exits
    /// on `q`, `Q` or `Ctrl+C`; `s` and `a` cycle the table filters and `r`
    /// re-reads the log file from disk.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard events with a short timeout so we don't block.
            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break Ok(());
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => break Ok(()),
                        KeyCode::Char('s') => self.status_filter = self.status_filter.next(),
                        KeyCode::Char('a') => self.alert_filter = self.alert_filter.next(),
                        KeyCode::Char('r') => self.reload(),
                        _ => {}
                    }
                }
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    // ── State updates ─────────────────────────────────────────────────────────

    /// Re-read the log file and replace the analysis.
    ///
    /// On failure the previous analysis is kept and the error is surfaced in
    /// the footer instead of aborting the dashboard.
    pub fn reload(&mut self) {
        match analyze_log(&self.path, self.warning_threshold, self.error_threshold) {
            Ok(analysis) => {
                self.status = Some(format!("Reloaded {} jobs", analysis.jobs.len()));
                self.analysis = analysis;
            }
            Err(e) => self.status = Some(format!("Reload failed: {e}")),
        }
    }

    /// Jobs that pass both active filters, in display order.
    pub fn filtered_jobs(&self) -> Vec<&Job> {
        self.analysis
            .jobs
            .iter()
            .filter(|j| self.status_filter.matches(j))
            .filter(|j| self.alert_filter.matches(j))
            .collect()
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the current application state into `frame`.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        if self.analysis.jobs.is_empty() {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(5), Constraint::Length(1)])
                .split(area);
            table_view::render_no_jobs(frame, chunks[0], &self.theme);
            dashboard::render_footer(
                frame,
                chunks[1],
                self.status_filter,
                self.alert_filter,
                self.status.as_deref(),
                &self.theme,
            );
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(11),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        dashboard::render_summary(frame, top[0], &self.analysis.stats, &self.theme);
        dashboard::render_alert_distribution(frame, top[1], &self.analysis.stats, &self.theme);

        let jobs = self.filtered_jobs();
        let title = format!(
            " Jobs ({} / {}) [status: {} | alert: {}] ",
            jobs.len(),
            self.analysis.jobs.len(),
            self.status_filter.label(),
            self.alert_filter.label()
        );
        table_view::render_job_table(frame, chunks[1], &title, &jobs, &self.theme);

        dashboard::render_footer(
            frame,
            chunks[2],
            self.status_filter,
            self.alert_filter,
            self.status.as_deref(),
            &self.theme,
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
