// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sensor screen: live readings relayed to two consumers.
//!
//! A [`SensorManager`] feeds a [`RelayListener`], the only writer of a
//! latest-value relay. Two consumers read from it:
//!
//! - [`LiveDisplay`] renders every reading as it is pushed;
//! - [`SamplingNotifier`] toasts the latest reading's source every period.
//!
//! [`SensorActivity`] binds them to the create / resume / pause / destroy
//! lifecycle.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod activity;
pub mod config;
pub mod console;
pub mod live_display;
pub mod relay_listener;
pub mod sampling;
pub mod sensor;
pub mod simulated;

pub use activity::{ActivityState, SensorActivity, SensorWidgets};
pub use config::{ConfigError, SensorControlConfig};
pub use console::{ConsoleTextView, ConsoleToaster};
pub use live_display::LiveDisplay;
pub use relay_listener::RelayListener;
pub use sampling::SamplingNotifier;
pub use sensor::{
    Sensor, SensorAccuracy, SensorDelay, SensorEvent, SensorEventListener, SensorManager, SensorType,
};
pub use simulated::SimulatedSensorManager;
