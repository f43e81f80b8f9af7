// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the sensorcontrol workspace.
//!
//! - `test_data`: reading fixtures (`reading_accel`, `reading_gyro`, ...)
//! - `helpers`: `recv_timeout` and `assert_no_element_emitted`
//! - `recording_widgets`: `TextView` / `Toaster` doubles that record what
//!   they were asked to show and can be told to fail

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod recording_widgets;
pub mod test_data;

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use helpers::{assert_no_element_emitted, recv_timeout};
pub use recording_widgets::{RecordingTextView, RecordingToaster};

/// Creates a test channel whose receiving side is a `Stream`.
///
/// # Example
///
/// ```rust
/// use sensorcontrol_test_utils::{test_channel, test_data::reading_accel};
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
/// tx.send(reading_accel()).unwrap();
/// assert_eq!(stream.next().await, Some(reading_accel()));
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = T> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
