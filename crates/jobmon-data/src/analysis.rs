//! Main analysis pipeline for jobmon.
//!
//! Orchestrates log decoding, job tracking and statistics derivation,
//! returning an [`Analysis`] ready for the report or dashboard layer.

use std::path::Path;

use chrono::Utc;
use jobmon_core::error::Result;
use jobmon_core::models::{Event, Job, Statistics};
use tracing::debug;

use crate::reader::read_log;
use crate::statistics::StatsAggregator;
use crate::tracker::JobTracker;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the analysis result.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp when this result was generated.
    pub generated_at: String,
    /// Number of events decoded from the log file.
    pub events_decoded: usize,
    /// Wall-clock seconds spent reading and decoding the file.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent pairing events into jobs.
    pub track_time_seconds: f64,
}

/// The complete output of [`analyze_log`].
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Completed and incomplete jobs, sorted ascending by start time.
    pub jobs: Vec<Job>,
    /// END events that matched no pending START.
    pub orphans: Vec<Event>,
    /// Summary counters over the jobs.
    pub stats: Statistics,
    /// Metadata about this analysis run.
    pub metadata: AnalysisMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full analysis pipeline.
///
/// 1. Read and decode the log file (malformed rows are skipped with a
///    warning inside the reader).
/// 2. Pair START/END events into jobs via [`JobTracker`].
/// 3. Derive summary statistics.
///
/// The only failure mode is the file read; tracking and statistics are total.
pub fn analyze_log(path: &Path, warning_threshold: f64, error_threshold: f64) -> Result<Analysis> {
    // ── Step 1: Decode events ─────────────────────────────────────────────────
    let load_start = std::time::Instant::now();
    let events = read_log(path)?;
    let load_time = load_start.elapsed().as_secs_f64();

    // ── Step 2: Track jobs ────────────────────────────────────────────────────
    let track_start = std::time::Instant::now();
    let tracker = JobTracker::new(warning_threshold, error_threshold);
    let outcome = tracker.track(&events);
    let track_time = track_start.elapsed().as_secs_f64();

    // ── Step 3: Statistics ────────────────────────────────────────────────────
    let stats = StatsAggregator::compute(&outcome.jobs, outcome.orphans.len());

    debug!(
        "Analysis: {} events, {} jobs, {} orphaned entries",
        events.len(),
        outcome.jobs.len(),
        outcome.orphans.len()
    );

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        events_decoded: events.len(),
        load_time_seconds: load_time,
        track_time_seconds: track_time,
    };

    Ok(Analysis {
        jobs: outcome.jobs,
        orphans: outcome.orphans,
        stats,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use jobmon_core::models::AlertLevel;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    fn analyze_default(path: &Path) -> Analysis {
        analyze_log(
            path,
            JobTracker::DEFAULT_WARNING_MINUTES,
            JobTracker::DEFAULT_ERROR_MINUTES,
        )
        .unwrap()
    }

    // ── analyze_log ───────────────────────────────────────────────────────────

    #[test]
    fn test_analyze_log_end_to_end() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            dir.path(),
            "jobs.log",
            &[
                "10:00:00,A,START,1",
                "10:01:30,A,END,1",
                "10:02:00,B,START,2",
                "10:08:00,B,END,2",
                "10:10:00,C,START,3",
                "10:22:00,C,END,3",
            ],
        );

        let analysis = analyze_default(&path);

        assert_eq!(analysis.jobs.len(), 3);
        assert_eq!(analysis.jobs[0].duration_minutes(), Some(1.5));
        assert_eq!(analysis.jobs[0].alert, AlertLevel::Ok);
        assert_eq!(analysis.jobs[1].duration_minutes(), Some(6.0));
        assert_eq!(analysis.jobs[1].alert, AlertLevel::Warning);
        assert_eq!(analysis.jobs[2].duration_minutes(), Some(12.0));
        assert_eq!(analysis.jobs[2].alert, AlertLevel::Error);

        assert_eq!(analysis.stats.total_jobs, 3);
        assert_eq!(analysis.stats.completed_jobs, 3);
        assert_eq!(analysis.stats.incomplete_jobs, 0);
        assert_eq!(analysis.stats.jobs_with_warnings, 1);
        assert_eq!(analysis.stats.jobs_with_errors, 1);
        assert_eq!(analysis.stats.orphaned_entries, 0);
        assert!(analysis.orphans.is_empty());
    }

    #[test]
    fn test_analyze_log_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_log(dir.path(), "jobs.log", &[]);

        let analysis = analyze_default(&path);

        assert!(analysis.jobs.is_empty());
        assert_eq!(analysis.stats.total_jobs, 0);
        assert!(analysis.stats.durations.is_none());
    }

    #[test]
    fn test_analyze_log_missing_file() {
        let err = analyze_log(Path::new("/tmp/missing-jobmon-analysis.log"), 5.0, 10.0)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_analyze_log_skips_malformed_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            dir.path(),
            "jobs.log",
            &[
                "not,a,valid",
                "10:00:00,A,START,1",
                "garbage line",
                "10:01:00,A,END,1",
            ],
        );

        let analysis = analyze_default(&path);

        assert_eq!(analysis.metadata.events_decoded, 2);
        assert_eq!(analysis.jobs.len(), 1);
        assert!(analysis.jobs[0].complete);
    }

    #[test]
    fn test_analyze_log_orphans_counted() {
        let dir = TempDir::new().unwrap();
        let path = write_log(dir.path(), "jobs.log", &["10:00:00,A,END,1"]);

        let analysis = analyze_default(&path);

        assert!(analysis.jobs.is_empty());
        assert_eq!(analysis.orphans.len(), 1);
        assert_eq!(analysis.stats.orphaned_entries, 1);
    }

    #[test]
    fn test_analyze_log_custom_thresholds() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            dir.path(),
            "jobs.log",
            &["10:00:00,A,START,1", "10:01:30,A,END,1"],
        );

        // 1.5 minutes against 1 / 2 minute thresholds.
        let analysis = analyze_log(&path, 1.0, 2.0).unwrap();
        assert_eq!(analysis.jobs[0].alert, AlertLevel::Warning);
    }

    #[test]
    fn test_analyze_log_metadata_populated() {
        let dir = TempDir::new().unwrap();
        let path = write_log(dir.path(), "jobs.log", &["10:00:00,A,START,1"]);

        let analysis = analyze_default(&path);

        assert!(!analysis.metadata.generated_at.is_empty());
        assert_eq!(analysis.metadata.events_decoded, 1);
        assert!(analysis.metadata.load_time_seconds >= 0.0);
        assert!(analysis.metadata.track_time_seconds >= 0.0);
    }
}
