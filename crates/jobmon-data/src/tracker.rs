//! START/END pairing for jobmon.
//!
//! Walks decoded [`Event`] records, pairs START and END entries per process
//! id, measures durations with midnight-rollover correction, and classifies
//! each completed job against the configured thresholds.

use std::collections::HashMap;

use jobmon_core::models::{AlertLevel, Event, EventKind, Job};
use tracing::debug;

/// Seconds in one day, added when an END's time-of-day is numerically
/// smaller than its START's.
const DAY_SECONDS: i64 = 86_400;

// ── TrackOutcome ──────────────────────────────────────────────────────────────

/// The result of one tracking pass over a slice of events.
#[derive(Debug, Clone, Default)]
pub struct TrackOutcome {
    /// Completed and incomplete jobs, sorted ascending by start time.
    pub jobs: Vec<Job>,
    /// END events that matched no pending START, in timestamp order.
    pub orphans: Vec<Event>,
}

// ── JobTracker ────────────────────────────────────────────────────────────────

/// Pairs START/END events into jobs and classifies their durations.
///
/// The tracker owns its pairing state per run, performs no I/O, and is total
/// over any event slice: empty input, all-START input, and all-END input all
/// produce well-formed outcomes.
pub struct JobTracker {
    /// Durations above this many minutes are flagged `Warning`.
    warning_threshold: f64,
    /// Durations above this many minutes are flagged `Error`.
    error_threshold: f64,
}

impl JobTracker {
    /// Default warning threshold in minutes.
    pub const DEFAULT_WARNING_MINUTES: f64 = 5.0;
    /// Default error threshold in minutes.
    pub const DEFAULT_ERROR_MINUTES: f64 = 10.0;

    /// Create a tracker with explicit thresholds (in minutes).
    pub fn new(warning_threshold: f64, error_threshold: f64) -> Self {
        Self {
            warning_threshold,
            error_threshold,
        }
    }

    /// Create a tracker with the 5 / 10 minute defaults.
    pub fn with_default_thresholds() -> Self {
        Self::new(Self::DEFAULT_WARNING_MINUTES, Self::DEFAULT_ERROR_MINUTES)
    }

    // ── Public methods ────────────────────────────────────────────────────────

    /// Pair START and END events into jobs.
    ///
    /// The algorithm:
    /// 1. Events are stable-sorted by timestamp (ties keep input order).
    /// 2. Every START is recorded in a pairing map per process id; a later
    ///    START for the same id overwrites the earlier one, which is dropped
    ///    for good ("last START wins").
    /// 3. Every END pops its id's pending START and emits a completed job.
    ///    An END with no pending START is collected as an orphan.
    /// 4. STARTs still pending afterwards become incomplete jobs.
    /// 5. Jobs are sorted ascending by start time.
    pub fn track(&self, events: &[Event]) -> TrackOutcome {
        let mut sorted: Vec<&Event> = events.iter().collect();
        sorted.sort_by_key(|e| e.timestamp);

        // Phase A: record STARTs; the last START for an id wins.
        let mut pending: HashMap<&str, &Event> = HashMap::new();
        for event in &sorted {
            if event.kind == EventKind::Start {
                pending.insert(event.process_id.as_str(), event);
            }
        }

        // Phase B: match ENDs against pending STARTs.
        let mut jobs: Vec<Job> = Vec::new();
        let mut orphans: Vec<Event> = Vec::new();
        for event in &sorted {
            if event.kind != EventKind::End {
                continue;
            }
            match pending.remove(event.process_id.as_str()) {
                Some(start) => jobs.push(self.complete_job(start, event)),
                None => orphans.push((*event).clone()),
            }
        }

        // STARTs that never saw an END. Re-scanning the sorted events keeps
        // the emission order deterministic; `pending` holds the winning START
        // per id.
        for event in &sorted {
            if event.kind == EventKind::Start {
                if let Some(start) = pending.remove(event.process_id.as_str()) {
                    jobs.push(Self::incomplete_job(start));
                }
            }
        }

        jobs.sort_by_key(|j| j.start_time);

        debug!(
            "JobTracker: {} jobs ({} orphaned entries) from {} events",
            jobs.len(),
            orphans.len(),
            events.len()
        );

        TrackOutcome { jobs, orphans }
    }

    // ── Job-building helpers ──────────────────────────────────────────────────

    /// Build a completed job from a matched START/END pair.
    fn complete_job(&self, start: &Event, end: &Event) -> Job {
        let raw = end.timestamp as i64 - start.timestamp as i64;
        // A negative difference means the job ran across midnight.
        let adjusted = if raw < 0 { raw + DAY_SECONDS } else { raw };
        let duration = adjusted as u32;

        Job {
            process_id: start.process_id.clone(),
            description: start.description.clone(),
            start_time: start.timestamp,
            end_time: Some(end.timestamp),
            duration_seconds: Some(duration),
            alert: self.classify(duration),
            complete: true,
        }
    }

    /// Build an incomplete job from a START that was never matched.
    fn incomplete_job(start: &Event) -> Job {
        Job {
            process_id: start.process_id.clone(),
            description: start.description.clone(),
            start_time: start.timestamp,
            end_time: None,
            duration_seconds: None,
            alert: AlertLevel::Ok,
            complete: false,
        }
    }

    /// Classify a duration against the thresholds.
    ///
    /// Comparisons are strictly greater-than: a duration of exactly the
    /// threshold does not trigger the alert.
    fn classify(&self, duration_seconds: u32) -> AlertLevel {
        let minutes = duration_seconds as f64 / 60.0;
        if minutes > self.error_threshold {
            AlertLevel::Error
        } else if minutes > self.warning_threshold {
            AlertLevel::Warning
        } else {
            AlertLevel::Ok
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
