// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Headless widgets that render into the log.

use sensorcontrol_core::Result;
use sensorcontrol_exec::{TextView, ToastDuration, Toaster};
use tracing::info;

pub struct ConsoleTextView {
    label: &'static str,
}

impl ConsoleTextView {
    pub const fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl TextView for ConsoleTextView {
    fn set_text(&self, text: &str) -> Result<()> {
        info!(target: "sensorcontrol::ui", view = self.label, "{text}");
        Ok(())
    }
}

pub struct ConsoleToaster;

impl Toaster for ConsoleToaster {
    fn show(&self, text: Option<&str>, duration: ToastDuration) -> Result<()> {
        info!(
            target: "sensorcontrol::ui",
            duration_ms = duration.as_duration().as_millis() as u64,
            "toast: {}",
            text.unwrap_or_default()
        );
        Ok(())
    }
}
