// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lifecycle controller of the sensor screen.
//!
//! ```text
//! create ──> Inactive ⇄ Active
//!               │          │
//!               └─ destroy ┴──> Terminated
//! ```
//!
//! Both consumers are subscribed at creation time and stay subscribed while
//! the screen is inactive: the sampler keeps announcing the last reading even
//! though no new readings arrive. Only `destroy` tears them down.

use crate::config::SensorControlConfig;
use crate::live_display::LiveDisplay;
use crate::relay_listener::RelayListener;
use crate::sampling::SamplingNotifier;
use crate::sensor::{Sensor, SensorEventListener, SensorManager};
use sensorcontrol_core::{CompositeSubscription, Reading, RelayHandle, Result, SensorControlError};
use sensorcontrol_exec::{TextView, Toaster, UiContext};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityState {
    Inactive,
    Active,
    Terminated,
}

/// The widgets the screen renders into.
#[derive(Clone)]
pub struct SensorWidgets {
    pub source_view: Arc<dyn TextView>,
    pub values_view: Arc<dyn TextView>,
    pub toaster: Arc<dyn Toaster>,
}

pub struct SensorActivity {
    manager: Arc<dyn SensorManager>,
    config: SensorControlConfig,
    sensor: Sensor,
    listener: Arc<RelayListener>,
    subscriptions: CompositeSubscription,
    state: ActivityState,
}

impl SensorActivity {
    /// Looks up the configured sensor and subscribes both consumers.
    ///
    /// Must be called from within a tokio runtime. The returned activity is
    /// [`ActivityState::Inactive`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `config` does not validate, and
    /// `SensorUnavailable` if the platform has no sensor of the configured
    /// type.
    pub fn create(
        manager: Arc<dyn SensorManager>,
        ui: &UiContext,
        widgets: SensorWidgets,
        config: SensorControlConfig,
    ) -> Result<Self> {
        config.validate()?;

        let sensor = manager
            .default_sensor(config.sensor_type)
            .ok_or_else(|| SensorControlError::sensor_unavailable(config.sensor_type.name()))?;

        let listener = Arc::new(RelayListener::new());
        let relay = listener.handle();
        let subscriptions = CompositeSubscription::new();

        subscriptions.add(LiveDisplay::new(widgets.source_view, widgets.values_view).subscribe(&relay, ui)?);
        subscriptions.add(
            SamplingNotifier::new(widgets.toaster)
                .with_period(config.sample_period())
                .with_toast_duration(config.toast_duration)
                .subscribe(relay, ui),
        );

        info!(sensor = sensor.name(), "sensor screen created");
        Ok(Self {
            manager,
            config,
            sensor,
            listener,
            subscriptions,
            state: ActivityState::Inactive,
        })
    }

    /// Starts receiving sensor events. No-op while already active.
    ///
    /// # Errors
    ///
    /// Returns `Terminated` after [`destroy`](Self::destroy), or
    /// `SensorUnavailable` if the platform refuses the registration.
    pub fn resume(&mut self) -> Result<()> {
        match self.state {
            ActivityState::Terminated => Err(SensorControlError::Terminated),
            ActivityState::Active => Ok(()),
            ActivityState::Inactive => {
                if !self
                    .manager
                    .register_listener(self.listener_handle(), &self.sensor, self.config.sensor_delay)
                {
                    return Err(SensorControlError::sensor_unavailable(self.sensor.name()));
                }
                self.state = ActivityState::Active;
                debug!(delay = ?self.config.sensor_delay, "sensor screen active");
                Ok(())
            }
        }
    }

    /// Stops receiving sensor events. The relay keeps its last reading.
    ///
    /// # Errors
    ///
    /// Returns `Terminated` after [`destroy`](Self::destroy).
    pub fn pause(&mut self) -> Result<()> {
        match self.state {
            ActivityState::Terminated => Err(SensorControlError::Terminated),
            ActivityState::Inactive => Ok(()),
            ActivityState::Active => {
                self.manager.unregister_listener(&self.listener_handle());
                self.state = ActivityState::Inactive;
                debug!("sensor screen inactive");
                Ok(())
            }
        }
    }

    /// Disposes both consumers, unregisters from the sensor and closes the
    /// relay. Idempotent.
    pub fn destroy(&mut self) {
        if self.state == ActivityState::Terminated {
            return;
        }
        if self.state == ActivityState::Active {
            self.manager.unregister_listener(&self.listener_handle());
        }
        self.subscriptions.dispose();
        self.listener.close();
        self.state = ActivityState::Terminated;
        info!(sensor = self.sensor.name(), "sensor screen destroyed");
    }

    pub const fn state(&self) -> ActivityState {
        self.state
    }

    pub fn sensor(&self) -> &Sensor {
        &self.sensor
    }

    pub fn relay(&self) -> RelayHandle<Reading> {
        self.listener.handle()
    }

    /// Current reading, `None` before the first event.
    pub fn snapshot(&self) -> Option<Reading> {
        self.listener.snapshot()
    }

    fn listener_handle(&self) -> Arc<dyn SensorEventListener> {
        self.listener.clone()
    }
}

impl Drop for SensorActivity {
    fn drop(&mut self) {
        self.destroy();
    }
}
