use serde::{Deserialize, Serialize};

/// Lifecycle marker carried by a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventKind {
    /// The job began at the entry's timestamp.
    Start,
    /// The job finished at the entry's timestamp.
    End,
}

impl EventKind {
    /// Canonical uppercase form, as written in the log.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Start => "START",
            EventKind::End => "END",
        }
    }
}

/// A single decoded log line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Seconds since midnight (`0..=86399`).
    pub timestamp: u32,
    /// Free-text job description, trimmed (may be empty).
    pub description: String,
    /// Whether this entry starts or ends a job.
    pub kind: EventKind,
    /// Identifier pairing START and END entries, trimmed, never empty.
    pub process_id: String,
    /// The original line as read, with fields comma-joined.
    #[serde(default)]
    pub raw_text: String,
}

impl Event {
    /// Re-encode `timestamp` as zero-padded `HH:MM:SS`.
    pub fn time_str(&self) -> String {
        crate::formatting::seconds_to_time_str(self.timestamp)
    }
}

/// Severity classification of a completed job's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertLevel {
    /// Duration within the warning threshold.
    Ok,
    /// Duration exceeded the warning threshold.
    Warning,
    /// Duration exceeded the error threshold.
    Error,
}

impl AlertLevel {
    /// Canonical uppercase form used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Ok => "OK",
            AlertLevel::Warning => "WARNING",
            AlertLevel::Error => "ERROR",
        }
    }
}

/// One tracked unit of work, assembled from a START entry and (when seen)
/// its matching END entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Identifier shared by the job's START and END entries.
    pub process_id: String,
    /// Description taken from the START entry.
    pub description: String,
    /// Start timestamp, seconds since midnight.
    pub start_time: u32,
    /// End timestamp, seconds since midnight; `None` while incomplete.
    #[serde(default)]
    pub end_time: Option<u32>,
    /// Elapsed seconds, rollover-corrected; `None` while incomplete.
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    /// Severity classification; incomplete jobs are always `Ok`.
    pub alert: AlertLevel,
    /// Whether a matching END entry was seen.
    pub complete: bool,
}

impl Job {
    /// Duration in fractional minutes, when the job completed.
    pub fn duration_minutes(&self) -> Option<f64> {
        self.duration_seconds.map(|s| s as f64 / 60.0)
    }
}

/// Average / minimum / maximum duration over completed jobs, in minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationStats {
    /// Mean duration in minutes.
    pub avg_minutes: f64,
    /// Shortest duration in minutes.
    pub min_minutes: f64,
    /// Longest duration in minutes.
    pub max_minutes: f64,
}

/// Aggregate counters over one tracking run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Statistics {
    /// Completed plus incomplete jobs (orphaned entries excluded).
    pub total_jobs: usize,
    /// Jobs with both a START and a matching END.
    pub completed_jobs: usize,
    /// Jobs whose END was never seen.
    pub incomplete_jobs: usize,
    /// Completed jobs classified `Warning`.
    pub jobs_with_warnings: usize,
    /// Completed jobs classified `Error`.
    pub jobs_with_errors: usize,
    /// END entries that matched no pending START.
    pub orphaned_entries: usize,
    /// Duration summary; present only when at least one job completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durations: Option<DurationStats>,
}
