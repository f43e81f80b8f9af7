// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensorcontrol::SamplingNotifier;
use sensorcontrol_core::LatestValueRelay;
use sensorcontrol_exec::{ToastDuration, UiContext};
use sensorcontrol_test_utils::test_data::{push, reading};
use sensorcontrol_test_utils::RecordingToaster;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

const SETTLE: Duration = Duration::from_millis(10);

fn at(start: Instant, millis: u64) -> Instant {
    start + Duration::from_millis(millis)
}

#[tokio::test(start_paused = true)]
async fn tick_before_first_reading_shows_empty_toast() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let (ui, _task) = UiContext::spawn();
    let relay = LatestValueRelay::new();
    let toaster = RecordingToaster::new();
    let _subscription = SamplingNotifier::new(Arc::new(toaster.clone())).subscribe(relay.handle(), &ui);

    // Act & Assert
    sleep_until(at(start, 4990)).await;
    ui.flush().await?;
    assert!(toaster.texts().is_empty());

    sleep_until(at(start, 5000) + SETTLE).await;
    ui.flush().await?;
    assert_eq!(toaster.texts(), vec![None]);
    assert_eq!(toaster.off_ui_calls(), 0);
    drop(relay);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn tick_announces_only_the_latest_reading() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let (ui, _task) = UiContext::spawn();
    let relay = LatestValueRelay::new();
    let toaster = RecordingToaster::new();
    let _subscription = SamplingNotifier::new(Arc::new(toaster.clone())).subscribe(relay.handle(), &ui);

    // Act
    sleep_until(at(start, 100)).await;
    push(reading("first", [1.0, 1.0, 1.0]), &relay);
    sleep_until(at(start, 200)).await;
    push(reading("second", [2.0, 2.0, 2.0]), &relay);
    sleep_until(at(start, 5000) + SETTLE).await;
    ui.flush().await?;

    // Assert
    assert_eq!(toaster.texts(), vec![Some("second".to_string())]);
    assert_eq!(toaster.durations(), vec![ToastDuration::Short]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn ticks_repeat_every_period_with_the_current_value() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let (ui, _task) = UiContext::spawn();
    let relay = LatestValueRelay::new();
    let toaster = RecordingToaster::new();
    let _subscription = SamplingNotifier::new(Arc::new(toaster.clone()))
        .with_toast_duration(ToastDuration::Long)
        .subscribe(relay.handle(), &ui);

    // Act
    sleep_until(at(start, 100)).await;
    push(reading("first", [1.0, 1.0, 1.0]), &relay);
    sleep_until(at(start, 6000)).await;
    push(reading("second", [2.0, 2.0, 2.0]), &relay);
    sleep_until(at(start, 15000) + SETTLE).await;
    ui.flush().await?;

    // Assert
    assert_eq!(
        toaster.texts(),
        vec![
            Some("first".to_string()),
            Some("second".to_string()),
            Some("second".to_string()),
        ]
    );
    assert!(toaster.durations().iter().all(|d| *d == ToastDuration::Long));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn failed_toast_does_not_stop_sampling() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let (ui, _task) = UiContext::spawn();
    let relay = LatestValueRelay::new();
    let toaster = RecordingToaster::new();
    toaster.fail_when(str::is_empty);
    let _subscription = SamplingNotifier::new(Arc::new(toaster.clone()))
        .with_period(Duration::from_millis(1000))
        .subscribe(relay.handle(), &ui);

    // Act
    sleep_until(at(start, 1500)).await;
    push(reading("first", [1.0, 1.0, 1.0]), &relay);
    sleep_until(at(start, 2000) + SETTLE).await;
    ui.flush().await?;

    // Assert
    assert_eq!(toaster.texts(), vec![Some("first".to_string())]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn disposed_sampler_shows_nothing_more() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let (ui, _task) = UiContext::spawn();
    let relay = LatestValueRelay::new();
    push(reading("first", [1.0, 1.0, 1.0]), &relay);
    let toaster = RecordingToaster::new();
    let subscription = SamplingNotifier::new(Arc::new(toaster.clone())).subscribe(relay.handle(), &ui);
    sleep_until(at(start, 5000) + SETTLE).await;
    ui.flush().await?;

    // Act
    subscription.dispose();
    sleep_until(at(start, 20000)).await;
    ui.flush().await?;

    // Assert
    assert_eq!(toaster.texts().len(), 1);
    Ok(())
}
