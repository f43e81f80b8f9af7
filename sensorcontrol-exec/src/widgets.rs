// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Widget surfaces owned by the UI context.
//!
//! Implementations are only ever called from UI jobs; they may assume
//! [`UiContext::is_current`](crate::UiContext::is_current) holds.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A label whose text can be replaced.
pub trait TextView: Send + Sync {
    /// # Errors
    ///
    /// Returns a render error when the view can no longer be updated.
    fn set_text(&self, text: &str) -> sensorcontrol_core::Result<()>;
}

/// How long a toast stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastDuration {
    #[default]
    Short,
    Long,
}

impl ToastDuration {
    pub const fn as_duration(self) -> Duration {
        match self {
            Self::Short => Duration::from_millis(2000),
            Self::Long => Duration::from_millis(3500),
        }
    }
}

/// Short-lived, non-blocking notifications.
pub trait Toaster: Send + Sync {
    /// Show `text`; `None` shows an empty toast.
    ///
    /// # Errors
    ///
    /// Returns a render error when the toast cannot be shown.
    fn show(&self, text: Option<&str>, duration: ToastDuration) -> sensorcontrol_core::Result<()>;
}
