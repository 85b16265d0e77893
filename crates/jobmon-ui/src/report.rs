//! Plain-text monitoring report.
//!
//! Renders the fixed-width report printed by the CLI's default view: a
//! header, a summary statistics section and a per-job detail table, all
//! laid out on 60-column rules.

use jobmon_core::formatting::format_duration;
use jobmon_core::models::{AlertLevel, Job, Statistics};

const REPORT_WIDTH: usize = 60;

/// Render the complete text report.
///
/// The summary section is always present; the detailed job table only when
/// `jobs` is non-empty.  The returned string ends with a newline so it can
/// be passed to `print!` as-is.
pub fn generate_report(jobs: &[Job], stats: &Statistics) -> String {
    let mut out = String::new();

    push_header(&mut out, " LOG MONITORING REPORT ");
    push_separator(&mut out);
    push_statistics(&mut out, stats);
    push_separator(&mut out);
    push_jobs(&mut out, jobs);

    out
}

// ── Section writers ───────────────────────────────────────────────────────────

fn push_line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn push_header(out: &mut String, title: &str) {
    push_line(out, "");
    push_line(out, &"=".repeat(REPORT_WIDTH));
    push_line(out, &format!("{:^width$}", title, width = REPORT_WIDTH));
    push_line(out, &"=".repeat(REPORT_WIDTH));
}

fn push_separator(out: &mut String) {
    push_line(out, &"-".repeat(REPORT_WIDTH));
}

fn push_statistics(out: &mut String, stats: &Statistics) {
    push_line(out, " SUMMARY STATISTICS");
    push_line(out, "");

    push_line(out, &format!("Total Jobs Processed: {}", stats.total_jobs));
    push_line(out, &format!("Completed Jobs: {}", stats.completed_jobs));
    push_line(out, &format!("Incomplete Jobs: {}", stats.incomplete_jobs));
    push_line(
        out,
        &format!("Jobs with Warnings: {}", stats.jobs_with_warnings),
    );
    push_line(out, &format!("Jobs with Errors: {}", stats.jobs_with_errors));
    push_line(
        out,
        &format!("Orphaned Entries: {}", stats.orphaned_entries),
    );

    if let Some(ref durations) = stats.durations {
        push_line(
            out,
            &format!(" Duration (Average): {}", format_duration(durations.avg_minutes)),
        );
        push_line(
            out,
            &format!(" Duration (Minimum): {}", format_duration(durations.min_minutes)),
        );
        push_line(
            out,
            &format!(" Duration (Maximum): {}", format_duration(durations.max_minutes)),
        );
    }
}

fn push_jobs(out: &mut String, jobs: &[Job]) {
    if jobs.is_empty() {
        return;
    }

    push_line(out, "DETAILED JOBS");
    push_line(out, "");

    push_line(
        out,
        &format!(
            "{:<8} {:<30} {:<12} {:<10} {:<8}",
            "PID", "Description", "Duration", "Status", "Alert"
        ),
    );
    push_line(
        out,
        &format!(
            "{} {} {} {} {}",
            "-".repeat(8),
            "-".repeat(30),
            "-".repeat(12),
            "-".repeat(10),
            "-".repeat(8)
        ),
    );

    for job in jobs {
        let pid: String = job.process_id.chars().take(7).collect();
        let description: String = job.description.chars().take(29).collect();
        let duration = match job.duration_minutes() {
            Some(minutes) => format_duration(minutes),
            None => "N/A".to_string(),
        };
        let status = if job.complete { "Complete" } else { "Incomplete" };
        let alert = match job.alert {
            AlertLevel::Ok => "-",
            level => level.as_str(),
        };

        push_line(
            out,
            &format!(
                "{:<8} {:<30} {:<12} {:<10} {:<8}",
                pid, description, duration, status, alert
            ),
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
