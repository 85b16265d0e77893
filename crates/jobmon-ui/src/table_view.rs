//! Filterable job table for the jobmon dashboard.
//!
//! Renders a bordered [`ratatui::widgets::Table`] with one row per job,
//! plus the cycling status/alert filters applied to it by the app.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use jobmon_core::formatting::{format_duration, seconds_to_time_str};
use jobmon_core::models::{AlertLevel, Job};

use crate::themes::Theme;

// ── Filters ───────────────────────────────────────────────────────────────────

/// Completion filter for the job table, cycled with the `s` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Complete,
    Incomplete,
}

impl StatusFilter {
    /// Advance to the next filter state.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Complete,
            Self::Complete => Self::Incomplete,
            Self::Incomplete => Self::All,
        }
    }

    /// Display label for the footer and table title.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Complete => "Complete",
            Self::Incomplete => "Incomplete",
        }
    }

    /// Whether `job` passes this filter.
    pub fn matches(self, job: &Job) -> bool {
        match self {
            Self::All => true,
            Self::Complete => job.complete,
            Self::Incomplete => !job.complete,
        }
    }
}

/// Alert-level filter for the job table, cycled with the `a` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertFilter {
    #[default]
    All,
    Ok,
    Warning,
    Error,
}

impl AlertFilter {
    /// Advance to the next filter state.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Ok,
            Self::Ok => Self::Warning,
            Self::Warning => Self::Error,
            Self::Error => Self::All,
        }
    }

    /// Display label for the footer and table title.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Whether `job` passes this filter.
    pub fn matches(self, job: &Job) -> bool {
        match self {
            Self::All => true,
            Self::Ok => job.alert == AlertLevel::Ok,
            Self::Warning => job.alert == AlertLevel::Warning,
            Self::Error => job.alert == AlertLevel::Error,
        }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Truncate `text` to at most `max_width` terminal columns, appending an
/// ellipsis when anything was cut.  Width is measured in display columns so
/// wide (e.g. CJK) characters do not break the table alignment.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut width = 0usize;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        result.push(ch);
    }
    result.push('…');
    result
}

/// Render the job table into `area`.
///
/// One row per job with alternating row styles; the alert and status cells
/// carry their own level colours on top of the row style.
pub fn render_job_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    jobs: &[&Job],
    theme: &Theme,
) {
    let header_cells = [
        "PID",
        "Description",
        "Start",
        "End",
        "Duration",
        "Status",
        "Alert",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let data_rows: Vec<Row> = jobs
        .iter()
        .enumerate()
        .map(|(i, job)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            let duration = match job.duration_minutes() {
                Some(minutes) => format_duration(minutes),
                None => "N/A".to_string(),
            };
            let end = match job.end_time {
                Some(end) => seconds_to_time_str(end),
                None => "-".to_string(),
            };
            let status = if job.complete { "Complete" } else { "Incomplete" };
            let alert = match job.alert {
                AlertLevel::Ok => "-",
                level => level.as_str(),
            };

            Row::new(vec![
                Cell::from(truncate_to_width(&job.process_id, 10)),
                Cell::from(truncate_to_width(&job.description, 28)),
                Cell::from(seconds_to_time_str(job.start_time)),
                Cell::from(end),
                Cell::from(duration),
                Cell::from(status).style(theme.status_style(job.complete)),
                Cell::from(alert).style(match job.alert {
                    AlertLevel::Ok => theme.dim,
                    level => theme.alert_style(level),
                }),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(28),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(8),
    ];

    let table = Table::new(data_rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(title.to_string()),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Render the placeholder shown when the log file contains no jobs at all.
pub fn render_no_jobs(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No jobs found in the log file.", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'r' to reload or 'q' to quit",
            theme.dim,
        )),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Jobs "),
        ),
        area,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────
