// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-slot relay holding the most recently pushed value.
//!
//! A [`LatestValueRelay`] has two delivery modes:
//!
//! - **Push-all**: every [`push`](LatestValueRelay::push) is broadcast to the
//!   streams returned by [`subscribe`](RelayHandle::subscribe), in push order.
//! - **Sample-latest**: [`snapshot`](RelayHandle::snapshot) returns whatever the
//!   slot holds right now, or `None` before the first push.
//!
//! ## Characteristics
//!
//! - **Single writer**: the relay itself is not `Clone`; only its owner can push.
//!   Readers hold cheap [`RelayHandle`] clones.
//! - **Hot**: late subscribers do not receive past values. Use `snapshot` instead.
//! - **Unbounded**: uses unbounded mpsc channels internally (no backpressure).
//! - **Atomic replace**: the slot and the subscriber list share one lock, so a
//!   reader never observes a half-written value and delivery order equals push order.
//!
//! ## Example
//!
//! ```
//! use sensorcontrol_core::{LatestValueRelay, Reading};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let relay = LatestValueRelay::new();
//! let handle = relay.handle();
//! assert_eq!(handle.snapshot(), None);
//!
//! let mut stream = handle.subscribe().unwrap();
//! relay.push(Reading::new("accel", [1.0, 2.0, 3.0]));
//!
//! assert_eq!(handle.snapshot(), Some(Reading::new("accel", [1.0, 2.0, 3.0])));
//! assert_eq!(stream.next().await, Some(Reading::new("accel", [1.0, 2.0, 3.0])));
//!
//! relay.close();
//! assert_eq!(stream.next().await, None);
//! # }
//! ```

use crate::RelayError;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::Stream;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

struct RelayState<T> {
    latest: Option<T>,
    closed: bool,
    senders: Vec<UnboundedSender<T>>,
}

/// Push-all subscription to a relay. Ends when the relay is closed.
#[derive(Debug)]
pub struct RelayStream<T> {
    inner: UnboundedReceiver<T>,
}

impl<T> Stream for RelayStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

/// The writing end of the relay.
///
/// See the [module documentation](self) for examples and more details.
pub struct LatestValueRelay<T: Clone + Send + 'static> {
    state: Arc<Mutex<RelayState<T>>>,
}

impl<T: Clone + Send + 'static> LatestValueRelay<T> {
    /// Creates an empty, open relay with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(RelayState {
                latest: None,
                closed: false,
                senders: Vec::new(),
            })),
        }
    }

    /// Returns a reading handle sharing this relay's slot.
    #[must_use]
    pub fn handle(&self) -> RelayHandle<T> {
        RelayHandle {
            state: self.state.clone(),
        }
    }

    /// Records `value` as the current value and broadcasts it to every live subscriber.
    ///
    /// Subscribers whose stream was dropped are pruned. Pushing into a closed
    /// relay is a no-op.
    pub fn push(&self, value: T) {
        let mut state = self.state.lock();
        if state.closed {
            debug!("push ignored: relay is closed");
            return;
        }

        state.senders.retain(|tx| tx.unbounded_send(value.clone()).is_ok());
        state.latest = Some(value);
    }

    /// Closes the relay, completing all subscriber streams.
    ///
    /// The last value stays readable through [`RelayHandle::snapshot`].
    /// Closing is idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    /// Same as [`RelayHandle::snapshot`].
    #[must_use]
    pub fn snapshot(&self) -> Option<T> {
        self.state.lock().latest.clone()
    }
}

impl<T: Clone + Send + 'static> Default for LatestValueRelay<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Drop for LatestValueRelay<T> {
    fn drop(&mut self) {
        self.close();
    }
}

/// Reading end of a [`LatestValueRelay`]. Cheap to clone.
pub struct RelayHandle<T: Clone + Send + 'static> {
    state: Arc<Mutex<RelayState<T>>>,
}

impl<T: Clone + Send + 'static> RelayHandle<T> {
    /// The most recently pushed value, or `None` if nothing was pushed yet.
    #[must_use]
    pub fn snapshot(&self) -> Option<T> {
        self.state.lock().latest.clone()
    }

    /// Subscribe to every value pushed from now on.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Closed` if the relay has been closed.
    pub fn subscribe(&self) -> Result<RelayStream<T>, RelayError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(RelayError::Closed);
        }

        let (tx, rx) = mpsc::unbounded();
        state.senders.push(tx);
        Ok(RelayStream { inner: rx })
    }

    /// Returns `true` if the relay has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Returns the number of currently registered subscribers.
    ///
    /// Dropped subscribers are removed on the next push, not immediately.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + 'static> Clone for RelayHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
