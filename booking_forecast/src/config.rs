//! Forecast configuration
//!
//! Settings are plain JSON. Every field is optional and falls back to its
//! default, so `{}` is a valid configuration file.
//!
//! ```json
//! {
//!   "max_horizon": 12,
//!   "error_attachment": "first_period",
//!   "persist": true
//! }
//! ```

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest horizon offered to users, one year of months.
pub const DEFAULT_MAX_HORIZON: usize = 12;

/// Which persisted forecast rows carry the back-test error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorAttachment {
    /// Only the first forecasted month carries the error; the rest store none
    #[default]
    FirstPeriod,
    /// Every forecasted month carries the same back-test error
    EveryPeriod,
}

/// Forecast run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Largest accepted horizon, in months
    pub max_horizon: usize,
    /// Where the back-test error is attached when persisting
    pub error_attachment: ErrorAttachment,
    /// Whether forecast records are written to the store at all
    pub persist: bool,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            max_horizon: DEFAULT_MAX_HORIZON,
            error_attachment: ErrorAttachment::default(),
            persist: true,
        }
    }
}

impl ForecastConfig {
    /// Parse and validate a JSON configuration string
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: ForecastConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Load from `path` if one is given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.max_horizon == 0 {
            return Err(ForecastError::ConfigError(
                "max_horizon must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_error_attachment(mut self, error_attachment: ErrorAttachment) -> Self {
        self.error_attachment = error_attachment;
        self
    }

    pub fn with_max_horizon(mut self, max_horizon: usize) -> Self {
        self.max_horizon = max_horizon;
        self
    }

    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }
}
