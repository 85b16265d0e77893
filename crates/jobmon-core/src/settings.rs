use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::error::MonitorError;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Job duration monitoring from CSV event logs
#[derive(Parser, Debug, Clone)]
#[command(
    name = "jobmon",
    about = "Job duration monitoring from CSV event logs",
    version
)]
pub struct Settings {
    /// Path to the job event log file
    #[arg(value_name = "LOG_FILE")]
    pub log_file: PathBuf,

    /// View mode
    #[arg(long, default_value = "report", value_parser = ["report", "dashboard"])]
    pub view: String,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Warning threshold in minutes
    #[arg(long, default_value = "5.0", value_name = "MINUTES")]
    pub warning_threshold: f64,

    /// Error threshold in minutes
    #[arg(long, default_value = "10.0", value_name = "MINUTES")]
    pub error_threshold: f64,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Clear saved configuration
    #[arg(long)]
    pub clear: bool,
}

// ── LastUsedParams ─────────────────────────────────────────────────────────────

/// Persisted last-used parameters saved to `~/.jobmon/last_used.json`.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct LastUsedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_threshold: Option<f64>,
}

impl LastUsedParams {
    /// Return the default path to the persisted config file.
    /// Uses `~/.jobmon/last_used.json`.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Return the config path rooted at `base_dir` (used for testing).
    pub fn config_path_in(base_dir: &std::path::Path) -> PathBuf {
        base_dir.join(".jobmon").join("last_used.json")
    }

    /// Load persisted params from the default path.
    /// Returns `Default` when the file is absent or cannot be parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load persisted params from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Atomically write params to the default path, creating parent directories
    /// if needed.
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(&Self::config_path())
    }

    /// Atomically write params to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;

        // Write to a temp file then rename for atomicity.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }

    /// Delete the default config file if it exists.
    pub fn clear() -> Result<(), std::io::Error> {
        Self::clear_at(&Self::config_path())
    }

    /// Delete the config file at an explicit path if it exists.
    pub fn clear_at(path: &std::path::Path) -> Result<(), std::io::Error> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments, merge with last-used params where no explicit CLI
    /// value was provided, and persist the result.
    ///
    /// Parse failures (including `--help` / `--version` displays) are returned
    /// to the caller so the binary can map them to its exit codes.
    pub fn load_with_last_used() -> Result<Self, clap::Error> {
        Self::load_with_last_used_impl(
            std::env::args_os().collect(),
            &LastUsedParams::config_path(),
        )
    }

    /// Full implementation – accepts args and an explicit config path so that
    /// tests can redirect to a temporary directory.
    pub fn load_with_last_used_impl(
        args: Vec<std::ffi::OsString>,
        config_path: &std::path::Path,
    ) -> Result<Self, clap::Error> {
        // Build raw ArgMatches so we can query ValueSource.
        let matches = Settings::command().try_get_matches_from(args.clone())?;

        // Parse into the typed struct using the same args.
        let mut settings = Settings::try_parse_from(args)?;

        if settings.clear {
            let _ = LastUsedParams::clear_at(config_path);
            // Return without merging or re-persisting.
            return Ok(Self::apply_debug_override(settings));
        }

        let last = LastUsedParams::load_from(config_path);

        // Merge last-used values for fields that were NOT explicitly set on the
        // command line (CLI always wins).  The log file is never loaded from
        // last-used.
        if !is_arg_explicitly_set(&matches, "view") {
            if let Some(v) = last.view {
                settings.view = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "theme") {
            if let Some(v) = last.theme {
                settings.theme = v;
            }
        }
        // NOTE: clap stores the arg id using the *field name* (underscores),
        // not the long-flag spelling (hyphens).
        if !is_arg_explicitly_set(&matches, "warning_threshold") {
            if let Some(v) = last.warning_threshold {
                settings.warning_threshold = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "error_threshold") {
            if let Some(v) = last.error_threshold {
                settings.error_threshold = v;
            }
        }

        settings = Self::apply_debug_override(settings);

        // Persist current settings for next run.
        let params = LastUsedParams::from(&settings);
        if let Err(e) = params.save_to(config_path) {
            debug!("Could not persist last-used parameters: {}", e);
        }

        Ok(settings)
    }

    /// Check cross-field constraints that clap cannot express.
    pub fn validate(&self) -> Result<(), MonitorError> {
        if self.warning_threshold >= self.error_threshold {
            return Err(MonitorError::Config(format!(
                "warning threshold ({}) must be below error threshold ({})",
                self.warning_threshold, self.error_threshold
            )));
        }
        Ok(())
    }

    /// `--debug` overrides the log level.
    fn apply_debug_override(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Conversion ─────────────────────────────────────────────────────────────────

impl From<&Settings> for LastUsedParams {
    fn from(s: &Settings) -> Self {
        LastUsedParams {
            view: Some(s.view.clone()),
            theme: Some(s.theme.clone()),
            warning_threshold: Some(s.warning_threshold),
            error_threshold: Some(s.error_threshold),
        }
    }
}

// ── Helper: check if an arg was explicitly set on the command line ─────────────

/// Returns `true` when `name` was supplied explicitly on the command line
/// (not via default value or environment variable).
fn is_arg_explicitly_set(matches: &clap::ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(clap::parser::ValueSource::CommandLine)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
