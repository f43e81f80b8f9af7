// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed-rate tick stream.
//!
//! Tick `n` (zero-based) is due `(n + 1) * period` after the stream was
//! created. Deadlines are computed from the start instant rather than from the
//! previous wake-up, so a late wake-up does not shift later ticks.

use crate::Timer;
use futures::Stream;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

/// Creates a fixed-rate tick stream whose first tick is one `period` from now.
///
/// # Panics
///
/// Panics if `period` is zero.
///
/// # Example
///
/// ```rust
/// use futures::StreamExt;
/// use sensorcontrol_time::{interval, TokioTimer};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let start = tokio::time::Instant::now();
/// let mut ticks = interval(TokioTimer, Duration::from_millis(5000));
///
/// assert_eq!(ticks.next().await, Some(0));
/// assert_eq!(start.elapsed(), Duration::from_millis(5000));
/// assert_eq!(ticks.next().await, Some(1));
/// assert_eq!(start.elapsed(), Duration::from_millis(10000));
/// # }
/// ```
pub fn interval<TM: Timer>(timer: TM, period: Duration) -> Interval<TM> {
    assert!(!period.is_zero(), "interval period must be non-zero");

    let next_deadline = timer.now() + period;
    let sleep = Box::pin(timer.sleep_future(period));
    Interval {
        timer,
        period,
        next_deadline,
        sleep,
        ticks: 0,
    }
}

/// Stream returned by [`interval`]. Never ends.
pub struct Interval<TM: Timer> {
    timer: TM,
    period: Duration,
    next_deadline: TM::Instant,
    sleep: Pin<Box<TM::Sleep>>,
    ticks: u64,
}

// No field is structurally pinned; the sleep future is boxed.
impl<TM: Timer> Unpin for Interval<TM> {}

impl<TM: Timer> Interval<TM> {
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl<TM: Timer> Stream for Interval<TM> {
    type Item = u64;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        match this.sleep.as_mut().poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(()) => {
                let tick = this.ticks;
                this.ticks += 1;

                this.next_deadline = this.next_deadline + this.period;
                let now = this.timer.now();
                let wait = if this.next_deadline > now {
                    this.next_deadline - now
                } else {
                    Duration::ZERO
                };
                this.sleep = Box::pin(this.timer.sleep_future(wait));

                Poll::Ready(Some(tick))
            }
        }
    }
}
