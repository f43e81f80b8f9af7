// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Habit strength on a given day.

use std::cmp::Ordering;
use std::fmt;

/// How a day was marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkmark {
    Unchecked,
    CheckedImplicitly,
    CheckedExplicitly,
}

/// Score reached on the day starting at `timestamp_ms` (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    timestamp_ms: i64,
    value: i32,
}

impl Score {
    pub const MAX_VALUE: i32 = 19_259_478;

    const CHECK_BONUS: i32 = 1_000_000;

    pub const fn new(timestamp_ms: i64, value: i32) -> Self {
        Self { timestamp_ms, value }
    }

    pub const fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Fraction of [`MAX_VALUE`](Self::MAX_VALUE), in `[0.0, 1.0]` for valid scores.
    pub fn percentage(&self) -> f64 {
        f64::from(self.value) / f64::from(Self::MAX_VALUE)
    }

    /// Next day's score from the habit `frequency` (repetitions per day,
    /// e.g. 3 in 8 days is 0.375), the previous score and today's mark.
    ///
    /// The previous score decays with a half-life that grows as the
    /// frequency drops; an explicit check adds a fixed bonus, capped at
    /// [`MAX_VALUE`](Self::MAX_VALUE).
    pub fn compute(frequency: f64, previous: i32, checkmark: Checkmark) -> i32 {
        let multiplier = 0.5_f64.powf(1.0 / (14.0 / frequency - 1.0));
        let mut score = (f64::from(previous) * multiplier) as i32;

        if checkmark == Checkmark::CheckedExplicitly {
            score = score.saturating_add(Self::CHECK_BONUS).min(Self::MAX_VALUE);
        }
        score
    }

    /// Orders by timestamp: `Greater` when `self` is the newer score.
    pub fn compare_newer(&self, other: &Self) -> Ordering {
        self.timestamp_ms.cmp(&other.timestamp_ms)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timestamp {} value {}", self.timestamp_ms, self.value)
    }
}
