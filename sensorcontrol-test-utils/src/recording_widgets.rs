// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Widget doubles that record every call.
//!
//! Both doubles also count calls made outside the UI context, so tests can
//! assert that rendering always went through the UI queue.

use parking_lot::Mutex;
use sensorcontrol_core::{Result, SensorControlError};
use sensorcontrol_exec::{TextView, ToastDuration, Toaster, UiContext};
use std::sync::Arc;

type FailWhen = Box<dyn Fn(&str) -> bool + Send + Sync>;

#[derive(Default)]
struct TextViewState {
    texts: Vec<String>,
    off_ui_calls: usize,
    fail_when: Option<FailWhen>,
}

/// A `TextView` that keeps every text it was given.
#[derive(Clone, Default)]
pub struct RecordingTextView {
    state: Arc<Mutex<TextViewState>>,
}

impl RecordingTextView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `set_text` fail (without recording) for texts matching `predicate`.
    pub fn fail_when(&self, predicate: impl Fn(&str) -> bool + Send + Sync + 'static) {
        self.state.lock().fail_when = Some(Box::new(predicate));
    }

    pub fn texts(&self) -> Vec<String> {
        self.state.lock().texts.clone()
    }

    pub fn last(&self) -> Option<String> {
        self.state.lock().texts.last().cloned()
    }

    pub fn off_ui_calls(&self) -> usize {
        self.state.lock().off_ui_calls
    }
}

impl TextView for RecordingTextView {
    fn set_text(&self, text: &str) -> Result<()> {
        let mut state = self.state.lock();
        if !UiContext::is_current() {
            state.off_ui_calls += 1;
        }
        if state.fail_when.as_ref().is_some_and(|fail| fail(text)) {
            return Err(SensorControlError::render_error(format!(
                "refusing to show {text:?}"
            )));
        }
        state.texts.push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct ToasterState {
    toasts: Vec<(Option<String>, ToastDuration)>,
    off_ui_calls: usize,
    fail_when: Option<FailWhen>,
}

/// A `Toaster` that keeps every toast it was asked to show.
#[derive(Clone, Default)]
pub struct RecordingToaster {
    state: Arc<Mutex<ToasterState>>,
}

impl RecordingToaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `show` fail for toasts whose text (empty for `None`) matches `predicate`.
    pub fn fail_when(&self, predicate: impl Fn(&str) -> bool + Send + Sync + 'static) {
        self.state.lock().fail_when = Some(Box::new(predicate));
    }

    /// The texts shown so far, `None` for empty toasts.
    pub fn texts(&self) -> Vec<Option<String>> {
        self.state
            .lock()
            .toasts
            .iter()
            .map(|(text, _)| text.clone())
            .collect()
    }

    pub fn durations(&self) -> Vec<ToastDuration> {
        self.state
            .lock()
            .toasts
            .iter()
            .map(|(_, duration)| *duration)
            .collect()
    }

    pub fn off_ui_calls(&self) -> usize {
        self.state.lock().off_ui_calls
    }
}

impl Toaster for RecordingToaster {
    fn show(&self, text: Option<&str>, duration: ToastDuration) -> Result<()> {
        let mut state = self.state.lock();
        if !UiContext::is_current() {
            state.off_ui_calls += 1;
        }
        if state
            .fail_when
            .as_ref()
            .is_some_and(|fail| fail(text.unwrap_or_default()))
        {
            return Err(SensorControlError::render_error("toast rejected"));
        }
        state.toasts.push((text.map(str::to_string), duration));
        Ok(())
    }
}
