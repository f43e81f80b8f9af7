// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sensor platform model.
//!
//! A [`SensorManager`] hands out [`Sensor`] descriptors and delivers
//! [`SensorEvent`]s to registered [`SensorEventListener`]s at the cadence of
//! the requested [`SensorDelay`]. Listeners are identified by `Arc` pointer
//! identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Kinds of three-axis motion and position sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    #[default]
    Accelerometer,
    Gyroscope,
    MagneticField,
    Gravity,
    LinearAcceleration,
}

impl SensorType {
    pub const ALL: [Self; 5] = [
        Self::Accelerometer,
        Self::Gyroscope,
        Self::MagneticField,
        Self::Gravity,
        Self::LinearAcceleration,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Accelerometer => "accelerometer",
            Self::Gyroscope => "gyroscope",
            Self::MagneticField => "magnetic_field",
            Self::Gravity => "gravity",
            Self::LinearAcceleration => "linear_acceleration",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Requested delivery rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SensorDelay {
    Fastest,
    Game,
    Ui,
    #[default]
    Normal,
}

impl SensorDelay {
    /// Nominal delay between events in microseconds.
    #[must_use]
    pub const fn period_us(self) -> u64 {
        match self {
            Self::Fastest => 0,
            Self::Game => 20_000,
            Self::Ui => 66_667,
            Self::Normal => 200_000,
        }
    }

    #[must_use]
    pub const fn period(self) -> Duration {
        Duration::from_micros(self.period_us())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorAccuracy {
    Unreliable,
    Low,
    Medium,
    High,
}

/// Descriptor of one hardware sensor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sensor {
    name: String,
    vendor: String,
    sensor_type: SensorType,
}

impl Sensor {
    pub fn new(name: impl Into<String>, vendor: impl Into<String>, sensor_type: SensorType) -> Self {
        Self {
            name: name.into(),
            vendor: vendor.into(),
            sensor_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub const fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }
}

/// One sample delivered by the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorEvent {
    pub sensor: Sensor,
    pub values: Vec<f32>,
    pub accuracy: SensorAccuracy,
    /// Nanoseconds since the manager started producing.
    pub timestamp_ns: u64,
}

/// Receives events from a [`SensorManager`].
///
/// Callbacks run on the background context and must not block.
pub trait SensorEventListener: Send + Sync {
    fn on_sensor_changed(&self, event: &SensorEvent);

    fn on_accuracy_changed(&self, _sensor: &Sensor, _accuracy: SensorAccuracy) {}
}

/// Source of sensor events.
pub trait SensorManager: Send + Sync {
    /// The platform's default sensor of `sensor_type`, if there is one.
    fn default_sensor(&self, sensor_type: SensorType) -> Option<Sensor>;

    /// Starts delivering events from `sensor` to `listener`.
    ///
    /// Registering a listener that is already registered replaces its previous
    /// registration. Returns `false` if the sensor cannot be registered.
    fn register_listener(&self, listener: Arc<dyn SensorEventListener>, sensor: &Sensor, delay: SensorDelay) -> bool;

    /// Stops delivering events to `listener`. Unknown listeners are ignored.
    fn unregister_listener(&self, listener: &Arc<dyn SensorEventListener>);
}

/// Pointer identity of two listener handles.
pub(crate) fn same_listener(a: &Arc<dyn SensorEventListener>, b: &Arc<dyn SensorEventListener>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
