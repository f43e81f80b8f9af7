// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sensor screen demo
//!
//! Runs the sensor screen against the simulated sensor manager with widgets
//! that render into the log:
//! - the live display logs every reading (`RUST_LOG=sensorcontrol::ui=info`)
//! - the sampler logs a toast every sample period
//!
//! Stops after `--run-for-secs` or on Ctrl+C, then tears the screen down.

use anyhow::{Context, Result};
use clap::Parser;
use sensorcontrol::{
    ConsoleTextView, ConsoleToaster, SensorActivity, SensorControlConfig, SensorDelay, SensorManager, SensorType,
    SensorWidgets, SimulatedSensorManager,
};
use sensorcontrol_core::CancellationToken;
use sensorcontrol_exec::{SubscribeExt, UiContext};
use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "sensorcontrol")]
#[command(version)]
#[command(about = "Relays simulated sensor readings to a live display and a periodic toast", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the configured sensor type
    #[arg(long, value_enum)]
    sensor_type: Option<SensorType>,

    /// Overrides the configured sensor delay
    #[arg(long, value_enum)]
    sensor_delay: Option<SensorDelay>,

    /// Stop after this many seconds instead of waiting for Ctrl+C
    #[arg(long)]
    run_for_secs: Option<u64>,
}

impl Cli {
    fn resolve_config(&self) -> Result<SensorControlConfig> {
        let mut config = match &self.config {
            Some(path) => SensorControlConfig::load(path)?,
            None => SensorControlConfig::default(),
        };
        if let Some(sensor_type) = self.sensor_type {
            config.sensor_type = sensor_type;
        }
        if let Some(sensor_delay) = self.sensor_delay {
            config.sensor_delay = sensor_delay;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config().context("loading configuration")?;
    info!(?config, "starting sensor screen");

    let manager: Arc<dyn SensorManager> = Arc::new(SimulatedSensorManager::new());
    let (ui, ui_task) = UiContext::spawn();
    let widgets = SensorWidgets {
        source_view: Arc::new(ConsoleTextView::new("source")),
        values_view: Arc::new(ConsoleTextView::new("values")),
        toaster: Arc::new(ConsoleToaster),
    };

    let mut activity = match SensorActivity::create(manager, &ui, widgets, config) {
        Ok(activity) => activity,
        Err(err) => {
            error!(%err, "cannot create sensor screen");
            ui.shutdown();
            return Err(err.into());
        }
    };

    // Background counter of every delivered reading, reported at shutdown.
    let received = Arc::new(AtomicU64::new(0));
    let counter_cancel = CancellationToken::new();
    let counter = {
        let received = received.clone();
        let readings = activity.relay().subscribe()?;
        tokio::spawn(readings.subscribe(
            move |_reading, _| {
                let received = received.clone();
                async move {
                    received.fetch_add(1, Ordering::Relaxed);
                    Ok::<(), Infallible>(())
                }
            },
            |never: Infallible| match never {},
            Some(counter_cancel.clone()),
        ))
    };

    activity.resume()?;

    tokio::select! {
        () = run_for(cli.run_for_secs) => info!("run time elapsed"),
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => info!("Ctrl+C received, shutting down"),
            Err(err) => warn!(%err, "cannot listen for Ctrl+C, shutting down"),
        },
    }

    activity.pause()?;
    if let Some(reading) = activity.snapshot() {
        info!(%reading, "last reading");
    }
    activity.destroy();

    counter_cancel.cancel();
    if let Err(err) = counter.await {
        warn!(%err, "reading counter did not finish cleanly");
    }
    info!(readings = received.load(Ordering::Relaxed), "sensor screen closed");

    ui.flush().await?;
    ui.shutdown();
    ui_task.await?;
    Ok(())
}

async fn run_for(secs: Option<u64>) {
    match secs {
        Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
        None => std::future::pending().await,
    }
}
