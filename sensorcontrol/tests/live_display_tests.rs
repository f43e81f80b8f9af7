// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensorcontrol::LiveDisplay;
use sensorcontrol_core::{LatestValueRelay, Reading, RelayError, SensorControlError};
use sensorcontrol_exec::UiContext;
use sensorcontrol_test_utils::test_data::{
    accel_series, push, reading_accel, reading_accel_second, reading_accel_third,
};
use sensorcontrol_test_utils::RecordingTextView;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn display(source_view: &RecordingTextView, values_view: &RecordingTextView) -> LiveDisplay {
    LiveDisplay::new(Arc::new(source_view.clone()), Arc::new(values_view.clone()))
}

#[tokio::test(start_paused = true)]
async fn pushed_reading_is_shown_as_source_and_values() -> anyhow::Result<()> {
    // Arrange
    let (ui, _task) = UiContext::spawn();
    let relay = LatestValueRelay::new();
    let (source_view, values_view) = (RecordingTextView::new(), RecordingTextView::new());
    let _subscription = display(&source_view, &values_view).subscribe(&relay.handle(), &ui)?;

    // Act
    push(reading_accel(), &relay);
    sleep(Duration::from_millis(10)).await;
    ui.flush().await?;

    // Assert
    assert_eq!(source_view.texts(), vec!["accel"]);
    assert_eq!(values_view.texts(), vec!["1.0 2.0 3.0"]);
    assert_eq!(source_view.off_ui_calls() + values_view.off_ui_calls(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn every_push_is_rendered_once_in_push_order() -> anyhow::Result<()> {
    // Arrange
    let (ui, _task) = UiContext::spawn();
    let relay = LatestValueRelay::new();
    let (source_view, values_view) = (RecordingTextView::new(), RecordingTextView::new());
    let _subscription = display(&source_view, &values_view).subscribe(&relay.handle(), &ui)?;
    let readings = accel_series(50);

    // Act
    for reading in &readings {
        push(reading.clone(), &relay);
    }
    sleep(Duration::from_millis(10)).await;
    ui.flush().await?;

    // Assert
    let expected: Vec<String> = readings.iter().map(Reading::format_values).collect();
    assert_eq!(values_view.texts(), expected);
    assert_eq!(source_view.texts().len(), readings.len());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn failed_render_does_not_stop_later_readings() -> anyhow::Result<()> {
    // Arrange
    let (ui, _task) = UiContext::spawn();
    let relay = LatestValueRelay::new();
    let (source_view, values_view) = (RecordingTextView::new(), RecordingTextView::new());
    values_view.fail_when(|text| text.contains("-9.81"));
    let _subscription = display(&source_view, &values_view).subscribe(&relay.handle(), &ui)?;

    // Act
    push(reading_accel(), &relay);
    push(reading_accel_second(), &relay);
    push(reading_accel_third(), &relay);
    sleep(Duration::from_millis(10)).await;
    ui.flush().await?;

    // Assert
    assert_eq!(
        values_view.texts(),
        vec![reading_accel().format_values(), reading_accel_third().format_values()]
    );
    assert_eq!(source_view.texts().len(), 3);
    Ok(())
}

#[test]
fn values_view_failure_names_the_source_already_shown() {
    // Arrange
    let (source_view, values_view) = (RecordingTextView::new(), RecordingTextView::new());
    values_view.fail_when(|_| true);
    let display = display(&source_view, &values_view);

    // Act
    let result = display.render(&reading_accel());

    // Assert
    let error = result.expect_err("values view refuses every text");
    assert!(error.is_recoverable());
    assert!(error.to_string().contains("values view left behind source 'accel'"));
    assert_eq!(source_view.texts(), vec!["accel"]);
    assert!(values_view.texts().is_empty());
}

#[test]
fn source_view_failure_leaves_both_views_untouched() {
    // Arrange
    let (source_view, values_view) = (RecordingTextView::new(), RecordingTextView::new());
    source_view.fail_when(|_| true);
    let display = display(&source_view, &values_view);

    // Act
    let result = display.render(&reading_accel());

    // Assert
    assert!(matches!(result, Err(SensorControlError::RenderError { .. })));
    assert!(source_view.texts().is_empty());
    assert!(values_view.texts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn late_display_does_not_see_earlier_pushes() -> anyhow::Result<()> {
    // Arrange
    let (ui, _task) = UiContext::spawn();
    let relay = LatestValueRelay::new();
    push(reading_accel(), &relay);
    let (source_view, values_view) = (RecordingTextView::new(), RecordingTextView::new());

    // Act
    let _subscription = display(&source_view, &values_view).subscribe(&relay.handle(), &ui)?;
    push(reading_accel_third(), &relay);
    sleep(Duration::from_millis(10)).await;
    ui.flush().await?;

    // Assert
    assert_eq!(values_view.texts(), vec![reading_accel_third().format_values()]);
    Ok(())
}

#[tokio::test]
async fn subscribing_to_a_closed_relay_fails() -> anyhow::Result<()> {
    // Arrange
    let (ui, _task) = UiContext::spawn();
    let relay = LatestValueRelay::<Reading>::new();
    let handle = relay.handle();
    relay.close();

    // Act
    let result = display(&RecordingTextView::new(), &RecordingTextView::new()).subscribe(&handle, &ui);

    // Assert
    assert!(matches!(
        result,
        Err(SensorControlError::Relay(RelayError::Closed))
    ));
    Ok(())
}
