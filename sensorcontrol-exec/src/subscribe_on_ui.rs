// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Consume a stream in the background and handle every item on the UI context.

use crate::UiContext;
use futures::stream::{Stream, StreamExt};
use sensorcontrol_core::Subscription;
use std::sync::Arc;

/// Extension trait that subscribes a stream with a UI-side handler.
pub trait SubscribeOnUiExt<T>: Stream<Item = T> + Sized {
    /// Spawn a background task that pulls items from this stream and posts one
    /// UI job per item.
    ///
    /// # Behavior
    ///
    /// - Items are pulled on the background context and handled on `ui`, one
    ///   job per item, in stream order
    /// - A handler error is passed to `on_error` (also on the UI context);
    ///   later items are still handled
    /// - Disposing the returned [`Subscription`] stops the background task, and
    ///   jobs already queued for it are skipped
    /// - The task ends when the stream ends or `ui` shuts down
    ///
    /// # Example
    ///
    /// ```rust
    /// use futures::stream;
    /// use sensorcontrol_exec::{SubscribeOnUiExt, UiContext};
    /// use std::sync::{Arc, Mutex};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let (ui, _task) = UiContext::spawn();
    /// let rendered = Arc::new(Mutex::new(Vec::new()));
    ///
    /// let sink = rendered.clone();
    /// let subscription = stream::iter(vec!["a", "b"]).subscribe_on_ui(
    ///     &ui,
    ///     move |item| {
    ///         assert!(UiContext::is_current());
    ///         sink.lock().unwrap().push(item);
    ///         Ok::<(), String>(())
    ///     },
    ///     |_err| {},
    /// );
    ///
    /// tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    /// ui.flush().await.unwrap();
    /// assert_eq!(*rendered.lock().unwrap(), vec!["a", "b"]);
    /// drop(subscription);
    /// # }
    /// ```
    fn subscribe_on_ui<F, E, OnError>(self, ui: &UiContext, on_next: F, on_error: OnError) -> Subscription
    where
        F: Fn(T) -> Result<(), E> + Send + Sync + 'static,
        OnError: Fn(E) + Send + Sync + 'static,
        E: 'static;
}

impl<S, T> SubscribeOnUiExt<T> for S
where
    S: Stream<Item = T> + Unpin + Send + 'static,
    T: Send + 'static,
{
    fn subscribe_on_ui<F, E, OnError>(self, ui: &UiContext, on_next: F, on_error: OnError) -> Subscription
    where
        F: Fn(T) -> Result<(), E> + Send + Sync + 'static,
        OnError: Fn(E) + Send + Sync + 'static,
        E: 'static,
    {
        let ui = ui.clone();
        let on_next = Arc::new(on_next);
        let on_error = Arc::new(on_error);
        let mut stream = self;

        Subscription::spawn(move |cancel| async move {
            loop {
                let item = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => break,
                    item = stream.next() => match item {
                        Some(item) => item,
                        None => break,
                    },
                };

                let on_next = on_next.clone();
                let on_error = on_error.clone();
                let posted = ui.post_guarded(&cancel, move || {
                    if let Err(error) = on_next(item) {
                        on_error(error);
                    }
                });

                if posted.is_err() {
                    crate::warn!("UI context closed; ending subscription");
                    break;
                }
            }
        })
    }
}
