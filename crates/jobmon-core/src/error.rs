use std::path::PathBuf;
use thiserror::Error;

/// A single log row failed validation.
///
/// Variants are ordered the way the decoder checks them: field count first,
/// then timestamp syntax and range, then the event kind, then the process id.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The row did not have exactly the expected number of fields.
    #[error("Expected {expected} fields, got {actual}: {row}")]
    FieldCount {
        expected: usize,
        actual: usize,
        row: String,
    },

    /// The timestamp was not three colon-separated integers.
    #[error("Invalid timestamp format: {0}")]
    TimeSyntax(String),

    /// Timestamp components were outside 0-23 / 0-59 / 0-59.
    #[error("Time values out of range: {0}")]
    TimeRange(String),

    /// The kind field was neither START nor END after normalisation.
    #[error("Invalid event kind '{0}', expected START or END")]
    UnknownKind(String),

    /// The process id field was empty after trimming.
    #[error("Process id cannot be empty")]
    EmptyProcessId,
}

/// All errors produced by the job monitor.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the jobmon crates.
pub type Result<T> = std::result::Result<T, MonitorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display_field_count() {
        let err = DecodeError::FieldCount {
            expected: 4,
            actual: 2,
            row: "10:00:00,oops".to_string(),
        };
        let msg = err.to_string();
        assert_eq!(msg, "Expected 4 fields, got 2: 10:00:00,oops");
    }

    #[test]
    fn test_decode_error_display_time_syntax() {
        let err = DecodeError::TimeSyntax("10-00-00".to_string());
        let msg = err.to_string();
        assert_eq!(msg, "Invalid timestamp format: 10-00-00");
    }

    #[test]
    fn test_decode_error_display_time_range() {
        let err = DecodeError::TimeRange("25:99:99".to_string());
        let msg = err.to_string();
        assert_eq!(msg, "Time values out of range: 25:99:99");
    }

    #[test]
    fn test_decode_error_display_unknown_kind() {
        let err = DecodeError::UnknownKind("PAUSE".to_string());
        let msg = err.to_string();
        assert_eq!(msg, "Invalid event kind 'PAUSE', expected START or END");
    }

    #[test]
    fn test_decode_error_display_empty_process_id() {
        let err = DecodeError::EmptyProcessId;
        assert_eq!(err.to_string(), "Process id cannot be empty");
    }

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = MonitorError::FileRead {
            path: PathBuf::from("/some/jobs.log"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/jobs.log"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_terminal() {
        let err = MonitorError::Terminal("crossterm failure".to_string());
        let msg = err.to_string();
        assert_eq!(msg, "Terminal error: crossterm failure");
    }

    #[test]
    fn test_error_display_config() {
        let err = MonitorError::Config("warning threshold above error threshold".to_string());
        let msg = err.to_string();
        assert_eq!(
            msg,
            "Configuration error: warning threshold above error threshold"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: MonitorError = io_err.into();
        let msg = err.to_string();
        assert!(msg.contains("denied"));
    }
}
