// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Periodic sampling of a relay's current value.
//!
//! Unlike a stream-level `sample`, this reads the relay slot on every tick:
//!
//! - every tick emits, whether or not anything was pushed since the last one;
//! - before the first push, a tick emits `None`;
//! - between pushes, consecutive ticks repeat the same value.

use crate::{interval, Interval, Timer};
use futures::stream::{Map, StreamExt};
use sensorcontrol_core::RelayHandle;
use std::time::Duration;

/// Sampling period used by the sensor screen.
pub const DEFAULT_SAMPLE_PERIOD: Duration = Duration::from_millis(5000);

/// Emits `handle.snapshot()` every `period`, first one `period` from now.
///
/// # Panics
///
/// Panics if `period` is zero.
///
/// # Example
///
/// ```rust
/// use futures::StreamExt;
/// use sensorcontrol_core::{LatestValueRelay, Reading};
/// use sensorcontrol_time::{sample_latest, TokioTimer};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let relay = LatestValueRelay::new();
/// let mut samples = sample_latest(relay.handle(), TokioTimer, Duration::from_millis(5000));
///
/// assert_eq!(samples.next().await, Some(None));
///
/// relay.push(Reading::new("accel", [1.0, 2.0, 3.0]));
/// relay.push(Reading::new("accel", [4.0, 5.0, 6.0]));
/// assert_eq!(samples.next().await, Some(Some(Reading::new("accel", [4.0, 5.0, 6.0]))));
/// # }
/// ```
pub fn sample_latest<T, TM>(
    handle: RelayHandle<T>,
    timer: TM,
    period: Duration,
) -> Map<Interval<TM>, impl FnMut(u64) -> Option<T>>
where
    T: Clone + Send + 'static,
    TM: Timer,
{
    interval(timer, period).map(move |_tick| handle.snapshot())
}
