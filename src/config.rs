//! Runtime settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Settings for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// File the TUI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is unset (e.g. `"info"`).
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// How long the TUI waits for input before redrawing, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Input poll interval as a [`Duration`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.log_file(), &PathBuf::from("tictactoe.log"));
        assert_eq!(settings.log_filter(), "info");
        assert_eq!(settings.poll_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.log_filter(), "debug");
        assert_eq!(*settings.poll_interval_ms(), 100);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 4").unwrap();

        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
