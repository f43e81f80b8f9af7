// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Consumer that periodically announces the latest reading's source.
//!
//! The relay is sampled on the background context; only the toast itself is
//! posted to the UI context. A tick before the first reading shows an empty
//! toast.

use sensorcontrol_core::{Reading, RelayHandle, Result, SensorControlError, Subscription};
use sensorcontrol_exec::{SubscribeOnUiExt, ToastDuration, Toaster, UiContext};
use sensorcontrol_time::{sample_latest, TokioTimer, DEFAULT_SAMPLE_PERIOD};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

#[derive(Clone)]
pub struct SamplingNotifier {
    toaster: Arc<dyn Toaster>,
    period: Duration,
    toast_duration: ToastDuration,
}

impl SamplingNotifier {
    /// A notifier firing every [`DEFAULT_SAMPLE_PERIOD`] with short toasts.
    pub fn new(toaster: Arc<dyn Toaster>) -> Self {
        Self {
            toaster,
            period: DEFAULT_SAMPLE_PERIOD,
            toast_duration: ToastDuration::Short,
        }
    }

    /// # Panics
    ///
    /// [`subscribe`](Self::subscribe) panics if `period` is zero.
    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    #[must_use]
    pub fn with_toast_duration(mut self, toast_duration: ToastDuration) -> Self {
        self.toast_duration = toast_duration;
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Shows the sampled reading's source, or an empty toast for `None`.
    ///
    /// # Errors
    ///
    /// Propagates the toaster's error.
    pub fn notify(&self, sample: Option<&Reading>) -> Result<()> {
        if sample.is_none() {
            debug!("sampled before first reading");
        }
        self.toaster.show(sample.map(Reading::source), self.toast_duration)
    }

    /// Samples `relay` every period, the first time one period from now.
    pub fn subscribe(self, relay: RelayHandle<Reading>, ui: &UiContext) -> Subscription {
        sample_latest(relay, TokioTimer, self.period).subscribe_on_ui(
            ui,
            move |sample| self.notify(sample.as_ref()),
            |failure: SensorControlError| {
                if failure.is_recoverable() {
                    warn!(error = %failure, "sampling toast failed");
                } else {
                    error!(error = %failure, "sampling toast cannot be shown");
                }
            },
        )
    }
}
