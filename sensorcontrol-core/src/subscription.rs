// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellable background subscriptions and their aggregate disposal set.

use core::future::Future;
use parking_lot::Mutex;
use std::ops::AddAssign;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle to a spawned subscription task, cancelled on dispose or drop.
///
/// The spawned future receives a [`CancellationToken`]. Work that leaves the
/// task (for instance a job posted to another execution context) should carry
/// a clone of that token and check it before running, so that nothing executes
/// after the subscription has been disposed.
///
/// # Example
///
/// ```rust
/// use sensorcontrol_core::Subscription;
///
/// # #[tokio::main]
/// # async fn main() {
/// let subscription = Subscription::spawn(|cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// assert!(!subscription.is_disposed());
/// subscription.dispose();
/// subscription.dispose();
/// assert!(subscription.is_disposed());
/// # }
/// ```
#[derive(Debug)]
pub struct Subscription {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl Subscription {
    /// Spawn `f` on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(f(cancel.clone()));
        Self { cancel, handle }
    }

    /// A clone of the token this subscription cancels on dispose.
    pub fn token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Cancel the token and abort the task. Idempotent.
    pub fn dispose(&self) {
        self.cancel.cancel();
        self.handle.abort();
    }

    pub fn is_disposed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// `true` once the task has stopped, whether it completed or was aborted.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[derive(Default)]
struct CompositeState {
    disposed: bool,
    subscriptions: Vec<Subscription>,
}

/// Aggregate set of subscriptions torn down together.
///
/// Once disposed, the set stays disposed: any subscription added afterwards
/// is disposed immediately.
///
/// ```rust
/// use sensorcontrol_core::{CompositeSubscription, Subscription};
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut subscriptions = CompositeSubscription::new();
/// subscriptions += Subscription::spawn(|cancel| async move { cancel.cancelled().await });
/// assert_eq!(subscriptions.len(), 1);
///
/// assert!(subscriptions.dispose());
/// assert!(!subscriptions.dispose());
/// assert!(subscriptions.is_empty());
/// # }
/// ```
#[derive(Default)]
pub struct CompositeSubscription {
    state: Mutex<CompositeState>,
}

impl CompositeSubscription {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `subscription` to the set, or disposes it right away if the set
    /// was already disposed.
    pub fn add(&self, subscription: Subscription) {
        let mut state = self.state.lock();
        if state.disposed {
            warn!("subscription added to a disposed set; disposing it");
            subscription.dispose();
            return;
        }
        state.subscriptions.push(subscription);
    }

    /// Disposes every subscription in the set.
    ///
    /// Returns `true` if this call performed the disposal, `false` if the set
    /// had already been disposed.
    pub fn dispose(&self) -> bool {
        let subscriptions = {
            let mut state = self.state.lock();
            if state.disposed {
                return false;
            }
            state.disposed = true;
            std::mem::take(&mut state.subscriptions)
        };

        debug!("disposing {} subscriptions", subscriptions.len());
        for subscription in &subscriptions {
            subscription.dispose();
        }
        true
    }

    pub fn is_disposed(&self) -> bool {
        self.state.lock().disposed
    }

    pub fn len(&self) -> usize {
        self.state.lock().subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AddAssign<Subscription> for CompositeSubscription {
    fn add_assign(&mut self, subscription: Subscription) {
        self.add(subscription);
    }
}

impl Drop for CompositeSubscription {
    fn drop(&mut self) {
        self.dispose();
    }
}
