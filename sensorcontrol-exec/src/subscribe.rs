// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use core::future::Future;
use futures::stream::{Stream, StreamExt};
use sensorcontrol_core::{CancellationToken, Result};

async fn subscribe_impl<S, T, F, Fut, E, OnError>(
    mut stream: S,
    on_next_func: F,
    on_error_callback: OnError,
    cancellation_token: Option<CancellationToken>,
) -> Result<()>
where
    S: Stream<Item = T> + Unpin,
    F: Fn(T, CancellationToken) -> Fut,
    Fut: Future<Output = core::result::Result<(), E>>,
    OnError: Fn(E),
{
    let cancellation_token = cancellation_token.unwrap_or_default();

    loop {
        let item = tokio::select! {
            biased;
            _ = cancellation_token.cancelled() => break,
            item = stream.next() => match item {
                Some(item) => item,
                None => break,
            },
        };

        // Sequential: the next item waits for this handler.
        if let Err(error) = on_next_func(item, cancellation_token.clone()).await {
            on_error_callback(error);
        }
    }

    Ok(())
}

/// Extension trait providing async subscription capabilities for streams.
///
/// This trait enables processing stream items with async handlers in a sequential manner.
#[async_trait]
pub trait SubscribeExt<T>: Stream<Item = T> + Sized {
    /// Subscribes to the stream with an async handler, processing items sequentially.
    ///
    /// # Behavior
    ///
    /// - Processes each stream item with the provided async handler sequentially
    /// - Waits for handler completion before processing next item
    /// - Continues until stream ends or cancellation token is triggered
    /// - Errors from handlers are passed to the error callback and processing continues
    ///
    /// # Arguments
    ///
    /// * `on_next_func` - Async function called for each stream item
    /// * `on_error_callback` - Error handler called when handler returns an error
    /// * `cancellation_token` - Optional token to stop processing
    ///
    /// # Example
    ///
    /// ```rust
    /// use futures::stream;
    /// use sensorcontrol_exec::SubscribeExt;
    /// use std::sync::{Arc, Mutex};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let errors = Arc::new(Mutex::new(Vec::new()));
    ///
    /// let sink = seen.clone();
    /// let failures = errors.clone();
    /// stream::iter(vec![1, 2, 3])
    ///     .subscribe(
    ///         move |item, _| {
    ///             let sink = sink.clone();
    ///             async move {
    ///                 if item == 2 {
    ///                     return Err(format!("bad item {item}"));
    ///                 }
    ///                 sink.lock().unwrap().push(item);
    ///                 Ok(())
    ///             }
    ///         },
    ///         move |err| failures.lock().unwrap().push(err),
    ///         None,
    ///     )
    ///     .await
    ///     .unwrap();
    ///
    /// assert_eq!(*seen.lock().unwrap(), vec![1, 3]);
    /// assert_eq!(*errors.lock().unwrap(), vec!["bad item 2".to_string()]);
    /// # }
    /// ```
    async fn subscribe<F, Fut, E, OnError>(
        self,
        on_next_func: F,
        on_error_callback: OnError,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<()>
    where
        F: Fn(T, CancellationToken) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        OnError: Fn(E) + Send + Sync + 'static,
        T: Send + 'static,
        E: Send + 'static;
}

#[async_trait]
impl<S, T> SubscribeExt<T> for S
where
    S: Stream<Item = T> + Unpin + Send + 'static,
    T: Send + 'static,
{
    async fn subscribe<F, Fut, E, OnError>(
        self,
        on_next_func: F,
        on_error_callback: OnError,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<()>
    where
        F: Fn(T, CancellationToken) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        OnError: Fn(E) + Send + Sync + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        subscribe_impl(self, on_next_func, on_error_callback, cancellation_token).await
    }
}
