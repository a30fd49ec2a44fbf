//! Detector configuration.
//!
//! Thresholds for the time-overlap scan. Every field is optional in the
//! TOML source and falls back to the dock board defaults:
//!
//! ```toml
//! overlap_window_minutes = 15
//! high_severity_minutes = 5
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// Default overlap window: adjacent loads closer than this are flagged.
pub const DEFAULT_OVERLAP_WINDOW_MINUTES: u32 = 15;
/// Default high-severity threshold: flagged pairs closer than this are `High`.
pub const DEFAULT_HIGH_SEVERITY_MINUTES: u32 = 5;

/// Time-overlap thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    /// Pairs with `0 < diff < overlap_window_minutes` are reported.
    pub overlap_window_minutes: u32,
    /// Reported pairs with `diff < high_severity_minutes` are `High`, others `Low`.
    pub high_severity_minutes: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            overlap_window_minutes: DEFAULT_OVERLAP_WINDOW_MINUTES,
            high_severity_minutes: DEFAULT_HIGH_SEVERITY_MINUTES,
        }
    }
}

impl DetectorConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(?path, ?config, "loaded detector config");
        Ok(config)
    }

    /// Sets the overlap window.
    pub fn with_overlap_window(mut self, minutes: u32) -> Self {
        self.overlap_window_minutes = minutes;
        self
    }

    /// Sets the high-severity threshold.
    pub fn with_high_severity(mut self, minutes: u32) -> Self {
        self.high_severity_minutes = minutes;
        self
    }

    /// Checks threshold consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.overlap_window_minutes == 0 {
            return Err(ConfigError::Invalid(
                "overlap_window_minutes must be positive".into(),
            ));
        }
        if self.high_severity_minutes > self.overlap_window_minutes {
            return Err(ConfigError::Invalid(format!(
                "high_severity_minutes ({}) exceeds overlap_window_minutes ({})",
                self.high_severity_minutes, self.overlap_window_minutes
            )));
        }
        Ok(())
    }
}
