// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use sensorcontrol::{
    Sensor, SensorAccuracy, SensorDelay, SensorEvent, SensorEventListener, SensorManager, SensorType,
    SimulatedSensorManager,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

#[derive(Default)]
struct RecordingListener {
    events: Mutex<Vec<SensorEvent>>,
    accuracy_changes: Mutex<Vec<SensorAccuracy>>,
}

impl RecordingListener {
    fn count(&self) -> usize {
        self.events.lock().len()
    }
}

impl SensorEventListener for RecordingListener {
    fn on_sensor_changed(&self, event: &SensorEvent) {
        self.events.lock().push(event.clone());
    }

    fn on_accuracy_changed(&self, _sensor: &Sensor, accuracy: SensorAccuracy) {
        self.accuracy_changes.lock().push(accuracy);
    }
}

fn accelerometer(manager: &SimulatedSensorManager) -> Sensor {
    manager
        .default_sensor(SensorType::Accelerometer)
        .expect("simulated accelerometer")
}

#[tokio::test(start_paused = true)]
async fn events_arrive_at_the_requested_cadence() -> anyhow::Result<()> {
    // Arrange
    let manager = SimulatedSensorManager::new();
    let sensor = accelerometer(&manager);
    let listener = Arc::new(RecordingListener::default());

    // Act
    assert!(manager.register_listener(listener.clone(), &sensor, SensorDelay::Game));
    sleep(Duration::from_millis(110)).await;

    // Assert
    let events = listener.events.lock().clone();
    assert_eq!(events.len(), 5);
    assert!(events.iter().all(|event| event.sensor == sensor && event.values.len() == 3));
    assert!(events.windows(2).all(|pair| pair[0].timestamp_ns < pair[1].timestamp_ns));
    assert_eq!(*listener.accuracy_changes.lock(), vec![SensorAccuracy::High]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn fastest_delay_is_clamped_to_the_minimum_period() -> anyhow::Result<()> {
    // Arrange
    let manager = SimulatedSensorManager::new();
    let sensor = accelerometer(&manager);
    let listener = Arc::new(RecordingListener::default());

    // Act
    manager.register_listener(listener.clone(), &sensor, SensorDelay::Fastest);
    sleep(Duration::from_millis(52)).await;

    // Assert
    assert_eq!(listener.count(), 10);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn unregistered_listener_receives_nothing_more() -> anyhow::Result<()> {
    // Arrange
    let manager = SimulatedSensorManager::new();
    let sensor = accelerometer(&manager);
    let recorder = Arc::new(RecordingListener::default());
    let listener: Arc<dyn SensorEventListener> = recorder.clone();
    manager.register_listener(listener.clone(), &sensor, SensorDelay::Normal);
    sleep(Duration::from_millis(450)).await;

    // Act
    manager.unregister_listener(&listener);
    sleep(Duration::from_millis(2000)).await;

    // Assert
    assert_eq!(recorder.count(), 2);
    assert!(!manager.is_registered(&listener));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn registering_twice_replaces_the_registration() -> anyhow::Result<()> {
    // Arrange
    let manager = SimulatedSensorManager::new();
    let sensor = accelerometer(&manager);
    let recorder = Arc::new(RecordingListener::default());
    let listener: Arc<dyn SensorEventListener> = recorder.clone();

    // Act
    manager.register_listener(listener.clone(), &sensor, SensorDelay::Normal);
    manager.register_listener(listener.clone(), &sensor, SensorDelay::Normal);
    sleep(Duration::from_millis(450)).await;

    // Assert
    assert_eq!(manager.registration_count(), 1);
    assert_eq!(recorder.count(), 2);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_registrations_of_one_listener_keep_a_single_producer() -> anyhow::Result<()> {
    // Arrange
    let manager = SimulatedSensorManager::new();
    let sensor = accelerometer(&manager);
    let listener: Arc<dyn SensorEventListener> = Arc::new(RecordingListener::default());
    let runtime = tokio::runtime::Handle::current();

    // Act
    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let _guard = runtime.enter();
                for _ in 0..50 {
                    assert!(manager.register_listener(listener.clone(), &sensor, SensorDelay::Game));
                }
            });
        }
    });

    // Assert
    assert_eq!(manager.registration_count(), 1);
    assert!(manager.is_registered(&listener));
    manager.unregister_listener(&listener);
    assert_eq!(manager.registration_count(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn unknown_sensor_is_rejected() -> anyhow::Result<()> {
    // Arrange
    let manager = SimulatedSensorManager::with_sensors(vec![Sensor::new("only", "test", SensorType::Gyroscope)]);
    let stranger = Sensor::new("stranger", "test", SensorType::Accelerometer);

    // Act
    let registered = manager.register_listener(Arc::new(RecordingListener::default()), &stranger, SensorDelay::Ui);

    // Assert
    assert!(!registered);
    assert_eq!(manager.registration_count(), 0);
    assert_eq!(manager.default_sensor(SensorType::Accelerometer), None);
    Ok(())
}

#[test]
fn registration_outside_a_runtime_is_rejected() {
    let manager = SimulatedSensorManager::new();
    let sensor = accelerometer(&manager);

    let registered = manager.register_listener(Arc::new(RecordingListener::default()), &sensor, SensorDelay::Normal);

    assert!(!registered);
}
