// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the standard setup: accelerometer at normal delay, sampled every
//! 5000 ms, short toasts.

use crate::sensor::{SensorDelay, SensorType};
use sensorcontrol_core::SensorControlError;
use sensorcontrol_exec::ToastDuration;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: sample_period_ms must be greater than zero")]
    ZeroSamplePeriod,
}

impl From<ConfigError> for SensorControlError {
    fn from(error: ConfigError) -> Self {
        Self::invalid_config(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SensorControlConfig {
    pub sensor_type: SensorType,
    pub sensor_delay: SensorDelay,
    pub sample_period_ms: u64,
    pub toast_duration: ToastDuration,
}

impl Default for SensorControlConfig {
    fn default() -> Self {
        Self {
            sensor_type: SensorType::Accelerometer,
            sensor_delay: SensorDelay::Normal,
            sample_period_ms: 5000,
            toast_duration: ToastDuration::Short,
        }
    }
}

impl SensorControlConfig {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON or unknown fields, and
    /// `ConfigError::ZeroSamplePeriod` when the period is zero.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the JSON file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` when the file cannot be read, otherwise the
    /// errors of [`from_json_str`](Self::from_json_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::ZeroSamplePeriod` when the period is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_period_ms == 0 {
            return Err(ConfigError::ZeroSamplePeriod);
        }
        Ok(())
    }

    pub const fn sample_period(&self) -> Duration {
        Duration::from_millis(self.sample_period_ms)
    }
}
