//! CSV log file decoding for jobmon.
//!
//! Reads job event logs in `HH:MM:SS,description,START|END,process_id`
//! format (no header row) and converts them into [`Event`] structs for
//! downstream processing.

use std::collections::HashSet;
use std::path::Path;

use jobmon_core::error::{DecodeError, MonitorError};
use jobmon_core::models::{Event, EventKind};
use tracing::{debug, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Read and decode a job event log.
///
/// Rows that fail validation are skipped with a warning and decoding
/// continues; a missing or unreadable file is an error. Events are returned
/// in file order.
pub fn read_log(path: &Path) -> Result<Vec<Event>, MonitorError> {
    let file = std::fs::File::open(path).map_err(|e| MonitorError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    // flexible() lets wrong-arity rows through so our own validator can
    // report the field count instead of csv erroring first.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut events: Vec<Event> = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                warn!("Skipping malformed entry on line {}: {}", line, e);
                skipped += 1;
                continue;
            }
        };

        match decode_record(&record) {
            Ok(event) => events.push(event),
            Err(e) => {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                warn!("Skipping malformed entry on line {}: {}", line, e);
                skipped += 1;
            }
        }
    }

    debug!(
        "Decoded {} events from {} ({} skipped)",
        events.len(),
        path.display(),
        skipped
    );

    Ok(events)
}

/// All events carrying `process_id`, in file order.
pub fn entries_by_pid<'a>(events: &'a [Event], process_id: &str) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| e.process_id == process_id)
        .collect()
}

/// Distinct process ids in first-seen order.
pub fn unique_pids(events: &[Event]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut pids = Vec::new();
    for event in events {
        if seen.insert(&event.process_id) {
            pids.push(event.process_id.clone());
        }
    }
    pids
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Validate one CSV record and build an [`Event`] from it.
///
/// Checks run in order: field count, timestamp syntax, timestamp range,
/// event kind, process id. Leading/trailing whitespace on any field is
/// tolerated; an empty description is not an error.
fn decode_record(record: &csv::StringRecord) -> Result<Event, DecodeError> {
    if record.len() != 4 {
        return Err(DecodeError::FieldCount {
            expected: 4,
            actual: record.len(),
            row: record.iter().collect::<Vec<_>>().join(","),
        });
    }

    let timestamp = parse_timestamp(&record[0])?;
    let description = record[1].trim().to_string();
    let kind = parse_kind(&record[2])?;

    let process_id = record[3].trim();
    if process_id.is_empty() {
        return Err(DecodeError::EmptyProcessId);
    }

    Ok(Event {
        timestamp,
        description,
        kind,
        process_id: process_id.to_string(),
        raw_text: record.iter().collect::<Vec<_>>().join(","),
    })
}

/// Parse `HH:MM:SS` into seconds since midnight (`0..=86399`).
fn parse_timestamp(field: &str) -> Result<u32, DecodeError> {
    let trimmed = field.trim();

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() != 3 {
        return Err(DecodeError::TimeSyntax(trimmed.to_string()));
    }

    let mut components = [0u32; 3];
    for (slot, part) in components.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| DecodeError::TimeSyntax(trimmed.to_string()))?;
    }

    let [hours, minutes, seconds] = components;
    if hours > 23 || minutes > 59 || seconds > 59 {
        return Err(DecodeError::TimeRange(trimmed.to_string()));
    }

    Ok(hours * 3600 + minutes * 60 + seconds)
}

/// Normalise and parse the kind field (case-insensitive).
fn parse_kind(field: &str) -> Result<EventKind, DecodeError> {
    let normalized = field.trim().to_uppercase();
    match normalized.as_str() {
        "START" => Ok(EventKind::Start),
        "END" => Ok(EventKind::End),
        _ => Err(DecodeError::UnknownKind(normalized)),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
