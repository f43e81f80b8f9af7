// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensorcontrol_core::{CompositeSubscription, Subscription};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn counting_subscription(counter: Arc<AtomicUsize>) -> Subscription {
    Subscription::spawn(|cancel| async move {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = sleep(Duration::from_millis(10)) => {
                    counter.fetch_add(1, Ordering::SeqCst);
                }
            }
        }
    })
}

#[tokio::test]
async fn dispose_stops_the_task() {
    // Arrange
    let counter = Arc::new(AtomicUsize::new(0));
    let subscription = counting_subscription(counter.clone());
    sleep(Duration::from_millis(55)).await;

    // Act
    subscription.dispose();
    sleep(Duration::from_millis(20)).await;
    let stopped_at = counter.load(Ordering::SeqCst);
    sleep(Duration::from_millis(50)).await;

    // Assert
    assert!(stopped_at > 0);
    assert_eq!(counter.load(Ordering::SeqCst), stopped_at);
    assert!(subscription.is_disposed());
    assert!(subscription.is_finished());
}

#[tokio::test]
async fn dispose_is_idempotent() {
    let subscription = Subscription::spawn(|cancel| async move { cancel.cancelled().await });

    subscription.dispose();
    subscription.dispose();

    assert!(subscription.is_disposed());
}

#[tokio::test]
async fn token_observes_dispose() {
    let subscription = Subscription::spawn(|cancel| async move { cancel.cancelled().await });
    let token = subscription.token();

    assert!(!token.is_cancelled());
    drop(subscription);
    assert!(token.is_cancelled());
}

#[tokio::test]
async fn composite_dispose_cancels_every_member() {
    // Arrange
    let mut composite = CompositeSubscription::new();
    let first = Subscription::spawn(|cancel| async move { cancel.cancelled().await });
    let second = Subscription::spawn(|cancel| async move { cancel.cancelled().await });
    let tokens = [first.token(), second.token()];
    composite += first;
    composite += second;
    assert_eq!(composite.len(), 2);

    // Act
    let performed = composite.dispose();

    // Assert
    assert!(performed);
    assert!(composite.is_disposed());
    assert!(composite.is_empty());
    assert!(tokens.iter().all(|token| token.is_cancelled()));
}

#[tokio::test]
async fn composite_dispose_twice_is_harmless() {
    let composite = CompositeSubscription::new();
    composite.add(Subscription::spawn(|cancel| async move { cancel.cancelled().await }));

    assert!(composite.dispose());
    assert!(!composite.dispose());
    assert!(composite.is_disposed());
}

#[tokio::test]
async fn add_after_dispose_disposes_immediately() {
    let composite = CompositeSubscription::new();
    composite.dispose();

    let late = Subscription::spawn(|cancel| async move { cancel.cancelled().await });
    let token = late.token();
    composite.add(late);

    assert!(token.is_cancelled());
    assert!(composite.is_empty());
}
