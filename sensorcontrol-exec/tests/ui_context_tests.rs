// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensorcontrol_core::CancellationToken;
use sensorcontrol_exec::{ExecError, UiContext};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn jobs_run_in_posting_order() -> anyhow::Result<()> {
    // Arrange
    let (ui, _task) = UiContext::spawn();
    let order = Arc::new(Mutex::new(Vec::new()));

    // Act
    for i in 0..50 {
        let order = order.clone();
        ui.post(move || order.lock().unwrap().push(i))?;
    }
    ui.flush().await?;

    // Assert
    assert_eq!(*order.lock().unwrap(), (0..50).collect::<Vec<_>>());
    Ok(())
}

#[tokio::test]
async fn jobs_observe_the_ui_context() -> anyhow::Result<()> {
    let (ui, _task) = UiContext::spawn();
    let on_ui = Arc::new(AtomicBool::new(false));

    let flag = on_ui.clone();
    ui.post(move || flag.store(UiContext::is_current(), Ordering::SeqCst))?;
    ui.flush().await?;

    assert!(on_ui.load(Ordering::SeqCst));
    assert!(!UiContext::is_current());
    Ok(())
}

#[tokio::test]
async fn guarded_job_is_skipped_once_cancelled() -> anyhow::Result<()> {
    // Arrange
    let (ui, _task) = UiContext::spawn();
    let guard = CancellationToken::new();
    let ran = Arc::new(AtomicBool::new(false));

    // Act
    let flag = ran.clone();
    ui.post_guarded(&guard, move || flag.store(true, Ordering::SeqCst))?;
    guard.cancel();
    ui.flush().await?;

    // Assert
    assert!(!ran.load(Ordering::SeqCst));
    Ok(())
}

#[tokio::test]
async fn panicking_job_does_not_stop_the_loop() -> anyhow::Result<()> {
    let (ui, _task) = UiContext::spawn();
    let ran = Arc::new(AtomicBool::new(false));

    ui.post(|| panic!("widget exploded"))?;
    let flag = ran.clone();
    ui.post(move || flag.store(true, Ordering::SeqCst))?;
    ui.flush().await?;

    assert!(ran.load(Ordering::SeqCst));
    Ok(())
}

#[tokio::test]
async fn post_after_shutdown_is_rejected() -> anyhow::Result<()> {
    let (ui, task) = UiContext::spawn();

    ui.shutdown();
    ui.shutdown();
    task.await?;

    assert!(ui.is_closed());
    assert_eq!(ui.post(|| {}), Err(ExecError::UiClosed));
    assert_eq!(ui.flush().await, Err(ExecError::UiClosed));
    Ok(())
}

#[tokio::test]
async fn loop_stops_when_every_handle_is_dropped() -> anyhow::Result<()> {
    let (ui, task) = UiContext::spawn();
    let clone = ui.clone();

    drop(ui);
    drop(clone);

    task.await?;
    Ok(())
}
