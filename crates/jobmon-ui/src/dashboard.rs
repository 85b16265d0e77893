//! Summary panels for the jobmon dashboard.
//!
//! Builds the metric, duration and alert-distribution content shown above
//! the job table.  Line builders are separated from the render functions so
//! their output can be asserted on directly in tests.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use jobmon_core::formatting::{format_duration, percentage};
use jobmon_core::models::{AlertLevel, Statistics};

use crate::table_view::{AlertFilter, StatusFilter};
use crate::themes::Theme;

const BAR_WIDTH: usize = 20;

// ── Line builders ─────────────────────────────────────────────────────────────

/// Build a proportional bar for `count` out of `max`, split into filled and
/// empty halves ready for styling.  A zero `max` yields an all-empty bar.
fn build_bar(count: usize, max: usize, width: usize) -> (String, String) {
    if max == 0 {
        return (String::new(), "░".repeat(width));
    }
    let filled = ((count as f64 / max as f64) * width as f64).round() as usize;
    let filled = filled.min(width);
    ("█".repeat(filled), "░".repeat(width - filled))
}

fn metric_row<'a>(label: &str, value: String, style: Style, theme: &'a Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<18}", label), theme.label),
        Span::styled(value, style),
    ])
}

/// Build the summary metric lines: the six counters plus the duration block
/// (or a placeholder when no job completed).
pub fn build_summary_lines<'a>(stats: &Statistics, theme: &'a Theme) -> Vec<Line<'a>> {
    let mut lines = vec![
        metric_row("Total Jobs:", stats.total_jobs.to_string(), theme.value, theme),
        metric_row(
            "Completed:",
            format!(
                "{} ({:.1}%)",
                stats.completed_jobs,
                percentage(stats.completed_jobs as f64, stats.total_jobs as f64, 1)
            ),
            theme.success,
            theme,
        ),
        metric_row(
            "Incomplete:",
            stats.incomplete_jobs.to_string(),
            theme.dim,
            theme,
        ),
        metric_row(
            "Warnings:",
            stats.jobs_with_warnings.to_string(),
            theme.warning,
            theme,
        ),
        metric_row(
            "Errors:",
            stats.jobs_with_errors.to_string(),
            theme.error,
            theme,
        ),
        metric_row(
            "Orphaned:",
            stats.orphaned_entries.to_string(),
            theme.dim,
            theme,
        ),
    ];

    match stats.durations {
        Some(ref durations) => {
            lines.push(metric_row(
                "Avg Duration:",
                format_duration(durations.avg_minutes),
                theme.value,
                theme,
            ));
            lines.push(metric_row(
                "Min Duration:",
                format_duration(durations.min_minutes),
                theme.value,
                theme,
            ));
            lines.push(metric_row(
                "Max Duration:",
                format_duration(durations.max_minutes),
                theme.value,
                theme,
            ));
        }
        None => {
            lines.push(Line::from(Span::styled("No completed jobs", theme.dim)));
        }
    }

    lines
}

fn alert_row<'a>(
    label: &str,
    count: usize,
    max: usize,
    level: AlertLevel,
    theme: &'a Theme,
) -> Line<'a> {
    let (filled, empty) = build_bar(count, max, BAR_WIDTH);
    Line::from(vec![
        Span::styled(format!("{:<9}", label), theme.label),
        Span::styled("[", theme.dim),
        Span::styled(filled, theme.bar_style(level)),
        Span::styled(empty, theme.bar_empty),
        Span::styled("] ", theme.dim),
        Span::styled(format!("{:>4}", count), theme.value),
    ])
}

/// Build the alert distribution lines over completed jobs.
///
/// The OK count is derived as completed minus warnings minus errors; bars
/// are scaled against the largest of the three counts.
pub fn build_alert_lines<'a>(stats: &Statistics, theme: &'a Theme) -> Vec<Line<'a>> {
    let ok = stats
        .completed_jobs
        .saturating_sub(stats.jobs_with_warnings)
        .saturating_sub(stats.jobs_with_errors);
    let max = ok.max(stats.jobs_with_warnings).max(stats.jobs_with_errors);

    vec![
        alert_row("OK", ok, max, AlertLevel::Ok, theme),
        alert_row(
            "WARNING",
            stats.jobs_with_warnings,
            max,
            AlertLevel::Warning,
            theme,
        ),
        alert_row("ERROR", stats.jobs_with_errors, max, AlertLevel::Error, theme),
    ]
}

// ── Render ────────────────────────────────────────────────────────────────────

/// Render the summary metrics panel into `area`.
pub fn render_summary(frame: &mut Frame, area: Rect, stats: &Statistics, theme: &Theme) {
    let paragraph = Paragraph::new(Text::from(build_summary_lines(stats, theme))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.table_border)
            .title(" Summary "),
    );
    frame.render_widget(paragraph, area);
}

/// Render the alert distribution panel into `area`.
pub fn render_alert_distribution(frame: &mut Frame, area: Rect, stats: &Statistics, theme: &Theme) {
    let paragraph = Paragraph::new(Text::from(build_alert_lines(stats, theme))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.table_border)
            .title(" Alerts "),
    );
    frame.render_widget(paragraph, area);
}

/// Render the one-line footer: key hints plus an optional status message.
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    status_filter: StatusFilter,
    alert_filter: AlertFilter,
    status: Option<&str>,
    theme: &Theme,
) {
    let mut spans = vec![
        Span::styled(" q ", theme.bold),
        Span::styled("quit  ", theme.dim),
        Span::styled("s ", theme.bold),
        Span::styled(format!("status: {}  ", status_filter.label()), theme.dim),
        Span::styled("a ", theme.bold),
        Span::styled(format!("alert: {}  ", alert_filter.label()), theme.dim),
        Span::styled("r ", theme.bold),
        Span::styled("reload", theme.dim),
    ];
    if let Some(message) = status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(message.to_string(), theme.info));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use jobmon_core::models::DurationStats;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_stats() -> Statistics {
        Statistics {
            total_jobs: 10,
            completed_jobs: 8,
            incomplete_jobs: 2,
            jobs_with_warnings: 2,
            jobs_with_errors: 1,
            orphaned_entries: 1,
            durations: Some(DurationStats {
                avg_minutes: 6.5,
                min_minutes: 0.5,
                max_minutes: 75.0,
            }),
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    // ── build_bar ────────────────────────────────────────────────────────────

    #[test]
    fn test_build_bar_zero_max_is_all_empty() {
        let (filled, empty) = build_bar(0, 0, 20);
        assert!(filled.is_empty());
        assert_eq!(empty.chars().count(), 20);
    }

    #[test]
    fn test_build_bar_full() {
        let (filled, empty) = build_bar(5, 5, 20);
        assert_eq!(filled.chars().count(), 20);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_build_bar_half() {
        let (filled, empty) = build_bar(1, 2, 20);
        assert_eq!(filled.chars().count(), 10);
        assert_eq!(empty.chars().count(), 10);
    }

    #[test]
    fn test_build_bar_zero_count_with_nonzero_max() {
        let (filled, empty) = build_bar(0, 5, 20);
        assert!(filled.is_empty());
        assert_eq!(empty.chars().count(), 20);
    }

    // ── build_summary_lines ──────────────────────────────────────────────────

    #[test]
    fn test_summary_lines_contain_counters() {
        let theme = Theme::dark();
        let stats = make_stats();
        let lines = build_summary_lines(&stats, &theme);
        let all: String = lines.iter().map(|l| line_text(l) + "\n").collect();

        assert!(all.contains("Total Jobs:"));
        assert!(all.contains("10"));
        assert!(all.contains("Completed:"));
        // 8 of 10 jobs completed.
        assert!(all.contains("8 (80.0%)"));
        assert!(all.contains("Incomplete:"));
        assert!(all.contains("Warnings:"));
        assert!(all.contains("Errors:"));
        assert!(all.contains("Orphaned:"));
    }

    #[test]
    fn test_summary_lines_contain_durations() {
        let theme = Theme::dark();
        let stats = make_stats();
        let lines = build_summary_lines(&stats, &theme);
        let all: String = lines.iter().map(|l| line_text(l) + "\n").collect();

        assert!(all.contains("Avg Duration:"));
        assert!(all.contains("6.5m"));
        assert!(all.contains("Min Duration:"));
        assert!(all.contains("30s"));
        assert!(all.contains("Max Duration:"));
        assert!(all.contains("1h 15m"));
    }

    #[test]
    fn test_summary_lines_placeholder_without_durations() {
        let theme = Theme::dark();
        let stats = Statistics::default();
        let lines = build_summary_lines(&stats, &theme);
        let all: String = lines.iter().map(|l| line_text(l) + "\n").collect();

        assert!(all.contains("No completed jobs"));
        assert!(!all.contains("Avg Duration:"));
    }

    // ── build_alert_lines ────────────────────────────────────────────────────

    #[test]
    fn test_alert_lines_ok_count_derived() {
        let theme = Theme::dark();
        let stats = make_stats();
        let lines = build_alert_lines(&stats, &theme);
        assert_eq!(lines.len(), 3);

        // 8 completed - 2 warnings - 1 error = 5 OK.
        let ok_line = line_text(&lines[0]);
        assert!(ok_line.starts_with("OK"));
        assert!(ok_line.ends_with("   5"), "ok line: {ok_line:?}");

        let warn_line = line_text(&lines[1]);
        assert!(warn_line.starts_with("WARNING"));
        assert!(warn_line.ends_with("   2"), "warn line: {warn_line:?}");

        let err_line = line_text(&lines[2]);
        assert!(err_line.starts_with("ERROR"));
        assert!(err_line.ends_with("   1"), "err line: {err_line:?}");
    }

    #[test]
    fn test_alert_lines_bars_scaled_to_largest() {
        let theme = Theme::dark();
        let stats = make_stats();
        let lines = build_alert_lines(&stats, &theme);

        // The OK count (5) is the largest, so its bar is fully filled.
        let ok_line = line_text(&lines[0]);
        assert!(ok_line.contains(&"█".repeat(20)), "ok line: {ok_line:?}");
        assert!(!ok_line.contains('░'), "ok line: {ok_line:?}");
    }

    #[test]
    fn test_alert_lines_all_empty_without_jobs() {
        let theme = Theme::dark();
        let stats = Statistics::default();
        let lines = build_alert_lines(&stats, &theme);

        for line in &lines {
            let text = line_text(line);
            assert!(!text.contains('█'), "line: {text:?}");
            assert!(text.contains(&"░".repeat(20)), "line: {text:?}");
        }
    }

    // ── Render (does not panic) ──────────────────────────────────────────────

    #[test]
    fn test_render_summary_does_not_panic() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let stats = make_stats();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_summary(frame, area, &stats, &theme);
            })
            .unwrap();
    }

    #[test]
    fn test_render_alert_distribution_does_not_panic() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::light();
        let stats = make_stats();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_alert_distribution(frame, area, &stats, &theme);
            })
            .unwrap();
    }

    #[test]
    fn test_render_footer_with_status_message_does_not_panic() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(
                    frame,
                    area,
                    StatusFilter::Complete,
                    AlertFilter::Warning,
                    Some("Reloaded 3 jobs"),
                    &theme,
                );
            })
            .unwrap();
    }
}
