//! User settings loaded from a JSON file.
//!
//! A missing file yields the defaults. Command-line flags are applied on top
//! by the caller.

use std::path::Path;
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chat::scheduler::DEFAULT_REPLY_DELAY;
use crate::chat::DEFAULT_TIMESTAMP_FORMAT;

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid setting value: {0}")]
    Invalid(String),
}

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay before the canned answer appears (ms)
    pub response_delay_ms: u64,
    /// UI tick interval, drives the typing animation (ms)
    pub tick_rate_ms: u64,
    /// `strftime` pattern for message timestamps
    pub timestamp_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            response_delay_ms: DEFAULT_REPLY_DELAY.as_millis() as u64,
            tick_rate_ms: 100,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if it doesn't exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&raw)?;
        settings.validate()?;
        tracing::info!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_rate_ms == 0 {
            return Err(SettingsError::Invalid(
                "tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        if self.timestamp_format.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "timestamp_format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(SettingsError::Invalid(format!(
                "timestamp_format is not a valid strftime pattern: {}",
                self.timestamp_format
            )));
        }
        Ok(())
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.response_delay(), Duration::from_millis(1500));
        assert_eq!(settings.tick_rate_ms, 100);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"response_delay_ms": 250, "extra": true}}"#).unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.response_delay_ms, 250);
        assert_eq!(settings.tick_rate_ms, 100);
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            Settings::load(file.path()),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_strftime_specifier_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"timestamp_format": "%Q"}}"#).unwrap();
        assert!(matches!(
            Settings::load(file.path()),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn test_custom_strftime_accepted() {
        let settings = Settings {
            timestamp_format: "%H:%M".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"tick_rate_ms": 0}}"#).unwrap();
        assert!(matches!(
            Settings::load(file.path()),
            Err(SettingsError::Invalid(_))
        ));
    }
}
