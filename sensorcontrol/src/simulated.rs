// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! In-process [`SensorManager`] that synthesizes events.
//!
//! Every registration gets its own producer task, started on the current
//! tokio runtime and stopped through its cancellation token when the listener
//! is unregistered or the manager is dropped.

use crate::sensor::{
    same_listener, Sensor, SensorAccuracy, SensorDelay, SensorEvent, SensorEventListener, SensorManager, SensorType,
};
use futures::StreamExt;
use parking_lot::Mutex;
use sensorcontrol_core::CancellationToken;
use sensorcontrol_time::{interval, TokioTimer};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Shortest cadence the simulator produces at, used for [`SensorDelay::Fastest`].
pub const MIN_PERIOD: Duration = Duration::from_millis(5);

const STANDARD_GRAVITY: f32 = 9.806_65;

struct Registration {
    listener: Arc<dyn SensorEventListener>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl Registration {
    fn stop(self) {
        self.cancel.cancel();
        self.task.abort();
    }
}

pub struct SimulatedSensorManager {
    sensors: Vec<Sensor>,
    registrations: Mutex<Vec<Registration>>,
}

impl SimulatedSensorManager {
    /// A manager exposing one simulated sensor of every [`SensorType`].
    pub fn new() -> Self {
        let sensors = SensorType::ALL
            .into_iter()
            .map(|sensor_type| Sensor::new(format!("Simulated {sensor_type}"), "sensorcontrol", sensor_type))
            .collect();
        Self::with_sensors(sensors)
    }

    pub fn with_sensors(sensors: Vec<Sensor>) -> Self {
        Self {
            sensors,
            registrations: Mutex::new(Vec::new()),
        }
    }

    pub fn registration_count(&self) -> usize {
        self.registrations.lock().len()
    }

    pub fn is_registered(&self, listener: &Arc<dyn SensorEventListener>) -> bool {
        self.registrations
            .lock()
            .iter()
            .any(|registration| same_listener(&registration.listener, listener))
    }

    fn take_registration(&self, listener: &Arc<dyn SensorEventListener>) -> Option<Registration> {
        let mut registrations = self.registrations.lock();
        let index = registrations
            .iter()
            .position(|registration| same_listener(&registration.listener, listener))?;
        Some(registrations.swap_remove(index))
    }
}

impl Default for SimulatedSensorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorManager for SimulatedSensorManager {
    fn default_sensor(&self, sensor_type: SensorType) -> Option<Sensor> {
        self.sensors
            .iter()
            .find(|sensor| sensor.sensor_type() == sensor_type)
            .cloned()
    }

    fn register_listener(&self, listener: Arc<dyn SensorEventListener>, sensor: &Sensor, delay: SensorDelay) -> bool {
        if !self.sensors.contains(sensor) {
            warn!(sensor = sensor.name(), "register rejected: unknown sensor");
            return false;
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!(sensor = sensor.name(), "register rejected: no tokio runtime");
            return false;
        };

        // Held across the swap so at most one producer runs per listener.
        let mut registrations = self.registrations.lock();
        if let Some(index) = registrations
            .iter()
            .position(|registration| same_listener(&registration.listener, &listener))
        {
            debug!(sensor = sensor.name(), "replacing existing registration");
            registrations.swap_remove(index).stop();
        }

        let period = delay.period().max(MIN_PERIOD);
        let cancel = CancellationToken::new();
        let task = runtime.spawn(produce(listener.clone(), sensor.clone(), period, cancel.clone()));

        debug!(sensor = sensor.name(), ?period, "listener registered");
        registrations.push(Registration { listener, cancel, task });
        true
    }

    fn unregister_listener(&self, listener: &Arc<dyn SensorEventListener>) {
        if let Some(registration) = self.take_registration(listener) {
            registration.stop();
            debug!("listener unregistered");
        }
    }
}

impl Drop for SimulatedSensorManager {
    fn drop(&mut self) {
        for registration in self.registrations.get_mut().drain(..) {
            registration.stop();
        }
    }
}

async fn produce(listener: Arc<dyn SensorEventListener>, sensor: Sensor, period: Duration, cancel: CancellationToken) {
    let started = Instant::now();
    let mut ticks = interval(TokioTimer, period);

    listener.on_accuracy_changed(&sensor, SensorAccuracy::High);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            tick = ticks.next() => {
                if tick.is_none() {
                    break;
                }
                let event = SensorEvent {
                    sensor: sensor.clone(),
                    values: synthesize(sensor.sensor_type()),
                    accuracy: SensorAccuracy::High,
                    timestamp_ns: u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX),
                };
                listener.on_sensor_changed(&event);
            }
        }
    }
}

fn noise(amplitude: f32) -> f32 {
    (fastrand::f32() * 2.0 - 1.0) * amplitude
}

fn synthesize(sensor_type: SensorType) -> Vec<f32> {
    match sensor_type {
        SensorType::Accelerometer => vec![noise(0.5), noise(0.5), STANDARD_GRAVITY + noise(0.2)],
        SensorType::Gravity => vec![noise(0.05), noise(0.05), STANDARD_GRAVITY],
        SensorType::LinearAcceleration => vec![noise(0.5), noise(0.5), noise(0.5)],
        SensorType::Gyroscope => vec![noise(0.1), noise(0.1), noise(0.1)],
        SensorType::MagneticField => vec![22.0 + noise(2.0), 5.0 + noise(2.0), -42.0 + noise(2.0)],
    }
}
