// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Consumer that renders every pushed reading.

use sensorcontrol_core::{Reading, RelayHandle, Result, ResultExt, SensorControlError, Subscription};
use sensorcontrol_exec::{SubscribeOnUiExt, TextView, UiContext};
use std::sync::Arc;
use tracing::{error, warn};

/// Shows the source name and the three values of each reading in two text views.
#[derive(Clone)]
pub struct LiveDisplay {
    source_view: Arc<dyn TextView>,
    values_view: Arc<dyn TextView>,
}

impl LiveDisplay {
    pub fn new(source_view: Arc<dyn TextView>, values_view: Arc<dyn TextView>) -> Self {
        Self {
            source_view,
            values_view,
        }
    }

    /// Renders one reading. Must run on the UI context.
    ///
    /// Both texts are formatted before either view is touched. When only the
    /// values view fails, the error names the source that is now shown next
    /// to stale values.
    ///
    /// # Errors
    ///
    /// Returns a render error for the first view that fails to update.
    pub fn render(&self, reading: &Reading) -> Result<()> {
        let source = reading.source();
        let values = reading.format_values();

        self.source_view.set_text(source)?;
        self.values_view
            .set_text(&values)
            .context(format!("values view left behind source '{source}'"))
    }

    /// Renders every reading pushed into the relay from now on, one UI job per push.
    ///
    /// A failed render is logged and the next reading is rendered normally.
    ///
    /// # Errors
    ///
    /// Returns a relay error if the relay is already closed.
    pub fn subscribe(self, relay: &RelayHandle<Reading>, ui: &UiContext) -> Result<Subscription> {
        let readings = relay.subscribe()?;

        Ok(readings.subscribe_on_ui(
            ui,
            move |reading| self.render(&reading),
            |failure: SensorControlError| {
                if failure.is_recoverable() {
                    warn!(error = %failure, "live display render failed");
                } else {
                    error!(error = %failure, "live display cannot render");
                }
            },
        ))
    }
}
