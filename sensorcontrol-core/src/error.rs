// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the sensorcontrol pipeline.
//!
//! [`SensorControlError`] is the root error. Absent values are not errors at
//! all (they surface as `Option::None`). Render errors are raised by
//! consumers, logged, and never end a subscription. Setup errors (no sensor
//! of the requested type, an unusable configuration) are reported by the
//! lifecycle controller when it is created.
//!
//! # Examples
//!
//! ```
//! use sensorcontrol_core::{Result, SensorControlError};
//!
//! fn render() -> Result<()> {
//!     Err(SensorControlError::render_error("text view detached"))
//! }
//!
//! assert!(render().unwrap_err().is_recoverable());
//! ```

use crate::RelayError;

/// Root error type for all sensorcontrol operations
#[derive(Debug, thiserror::Error)]
pub enum SensorControlError {
    /// Formatting or rendering a value failed
    ///
    /// The subscription that produced it keeps running.
    #[error("Render error: {context}")]
    RenderError {
        /// Description of what went wrong
        context: String,
    },

    /// The platform has no sensor of the requested type
    #[error("Sensor unavailable: {sensor_type}")]
    SensorUnavailable {
        /// Name of the requested sensor type
        sensor_type: String,
    },

    /// The relay rejected the operation
    #[error("Relay error: {0}")]
    Relay(#[from] RelayError),

    /// A lifecycle transition was requested after permanent shutdown
    #[error("Lifecycle error: component already terminated")]
    Terminated,

    /// The configuration cannot drive the pipeline
    #[error("Invalid configuration: {context}")]
    InvalidConfig {
        /// Description of the offending setting
        context: String,
    },
}

impl SensorControlError {
    /// Create a render error with the given context
    pub fn render_error(context: impl Into<String>) -> Self {
        Self::RenderError {
            context: context.into(),
        }
    }

    /// Create a sensor-unavailable error for the given sensor type name
    pub fn sensor_unavailable(sensor_type: impl Into<String>) -> Self {
        Self::SensorUnavailable {
            sensor_type: sensor_type.into(),
        }
    }

    /// Create an invalid-configuration error with the given context
    pub fn invalid_config(context: impl Into<String>) -> Self {
        Self::InvalidConfig {
            context: context.into(),
        }
    }

    /// Errors after which the pipeline simply waits for the next value.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::RenderError { .. })
    }
}

/// Specialized Result type for sensorcontrol operations
pub type Result<T> = std::result::Result<T, SensorControlError>;

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(SensorControlError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| SensorControlError::RenderError {
            context: format!("{}: {e}", context.into()),
        })
    }
}
