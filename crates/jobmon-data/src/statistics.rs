//! Summary statistics over tracked jobs.

use jobmon_core::models::{AlertLevel, DurationStats, Job, Statistics};

// ── StatsAggregator ───────────────────────────────────────────────────────────

/// Stateless helper that derives summary counters from a job collection.
pub struct StatsAggregator;

impl StatsAggregator {
    /// Compute [`Statistics`] for `jobs` plus the orphaned-entry count from
    /// the same tracking run.
    ///
    /// Duration stats are present only when at least one job completed; with
    /// zero completed jobs the field is omitted rather than zero-filled.
    pub fn compute(jobs: &[Job], orphaned_entries: usize) -> Statistics {
        let total_jobs = jobs.len();
        let completed_jobs = jobs.iter().filter(|j| j.complete).count();
        let jobs_with_warnings = jobs
            .iter()
            .filter(|j| j.complete && j.alert == AlertLevel::Warning)
            .count();
        let jobs_with_errors = jobs
            .iter()
            .filter(|j| j.complete && j.alert == AlertLevel::Error)
            .count();

        let durations: Vec<f64> = jobs.iter().filter_map(|j| j.duration_minutes()).collect();
        let duration_stats = if durations.is_empty() {
            None
        } else {
            let sum: f64 = durations.iter().sum();
            let min = durations.iter().copied().fold(f64::INFINITY, f64::min);
            let max = durations.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            Some(DurationStats {
                avg_minutes: sum / durations.len() as f64,
                min_minutes: min,
                max_minutes: max,
            })
        };

        Statistics {
            total_jobs,
            completed_jobs,
            incomplete_jobs: total_jobs - completed_jobs,
            jobs_with_warnings,
            jobs_with_errors,
            orphaned_entries,
            durations: duration_stats,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
