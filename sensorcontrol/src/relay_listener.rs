// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::sensor::{Sensor, SensorAccuracy, SensorEvent, SensorEventListener};
use sensorcontrol_core::{LatestValueRelay, Reading, RelayHandle};
use tracing::{debug, warn};

/// Sensor listener that writes every event into a [`LatestValueRelay`].
///
/// It is the relay's only writer; consumers read through [`RelayListener::handle`].
pub struct RelayListener {
    relay: LatestValueRelay<Reading>,
}

impl RelayListener {
    pub fn new() -> Self {
        Self {
            relay: LatestValueRelay::new(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> RelayHandle<Reading> {
        self.relay.handle()
    }

    pub fn snapshot(&self) -> Option<Reading> {
        self.relay.snapshot()
    }

    /// Closes the relay. Later events are dropped.
    pub fn close(&self) {
        self.relay.close();
    }
}

impl Default for RelayListener {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorEventListener for RelayListener {
    fn on_sensor_changed(&self, event: &SensorEvent) {
        match Reading::from_slice(event.sensor.name(), &event.values, event.timestamp_ns) {
            Some(reading) => self.relay.push(reading),
            None => warn!(
                sensor = event.sensor.name(),
                len = event.values.len(),
                "dropping event with fewer than three values"
            ),
        }
    }

    fn on_accuracy_changed(&self, sensor: &Sensor, accuracy: SensorAccuracy) {
        debug!(sensor = sensor.name(), ?accuracy, "accuracy changed");
    }
}
