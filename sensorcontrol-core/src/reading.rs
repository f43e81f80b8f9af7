// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of axes carried by every reading.
pub const AXES: usize = 3;

/// One three-axis sensor sample.
///
/// Readings are plain values: two readings are the same reading when every
/// field is equal. The timestamp is carried along for the consumers but is
/// never used to order readings.
///
/// # Examples
///
/// ```
/// use sensorcontrol_core::Reading;
///
/// let reading = Reading::new("accel", [1.0, 2.0, 3.0]);
/// assert_eq!(reading.to_string(), "accel 1.0 2.0 3.0");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    source: String,
    values: [f32; AXES],
    #[serde(default)]
    timestamp_ns: u64,
}

impl Reading {
    /// Creates a reading with a zero timestamp.
    pub fn new(source: impl Into<String>, values: [f32; AXES]) -> Self {
        Self {
            source: source.into(),
            values,
            timestamp_ns: 0,
        }
    }

    /// Builds a reading from the leading three values of a raw sample.
    ///
    /// Returns `None` when fewer than three values are available.
    pub fn from_slice(source: impl Into<String>, values: &[f32], timestamp_ns: u64) -> Option<Self> {
        let values: [f32; AXES] = values.get(..AXES)?.try_into().ok()?;
        Some(Self {
            source: source.into(),
            values,
            timestamp_ns,
        })
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp_ns: u64) -> Self {
        self.timestamp_ns = timestamp_ns;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn values(&self) -> [f32; AXES] {
        self.values
    }

    pub fn timestamp_ns(&self) -> u64 {
        self.timestamp_ns
    }

    /// The three values joined by single spaces, e.g. `"1.0 -9.81 0.5"`.
    ///
    /// Each value is printed in its shortest round-trip form and always keeps
    /// a fractional part.
    pub fn format_values(&self) -> String {
        let [x, y, z] = self.values;
        format!("{x:?} {y:?} {z:?}")
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source, self.format_values())
    }
}
