// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Day arithmetic on UTC millisecond timestamps.

use std::time::{SystemTime, UNIX_EPOCH};

pub const MILLIS_IN_ONE_DAY: i64 = 24 * 60 * 60 * 1000;

/// Midnight (UTC) of the day containing `timestamp_ms`.
pub const fn start_of_day(timestamp_ms: i64) -> i64 {
    timestamp_ms.div_euclid(MILLIS_IN_ONE_DAY) * MILLIS_IN_ONE_DAY
}

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

pub fn start_of_today() -> i64 {
    start_of_day(now_ms())
}

/// Whole days between two timestamps, regardless of order.
pub const fn days_between(t1: i64, t2: i64) -> i64 {
    ((t2 - t1) / MILLIS_IN_ONE_DAY).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_day_truncates_to_midnight() {
        let noon = 10 * MILLIS_IN_ONE_DAY + MILLIS_IN_ONE_DAY / 2;
        assert_eq!(start_of_day(noon), 10 * MILLIS_IN_ONE_DAY);
        assert_eq!(start_of_day(10 * MILLIS_IN_ONE_DAY), 10 * MILLIS_IN_ONE_DAY);
    }

    #[test]
    fn start_of_day_before_epoch_rounds_down() {
        assert_eq!(start_of_day(-1), -MILLIS_IN_ONE_DAY);
    }

    #[test]
    fn days_between_is_symmetric() {
        let a = start_of_day(1_700_000_000_000);
        let b = a + 3 * MILLIS_IN_ONE_DAY + 5;
        assert_eq!(days_between(a, b), 3);
        assert_eq!(days_between(b, a), 3);
    }

    #[test]
    fn today_is_a_midnight() {
        assert_eq!(start_of_today() % MILLIS_IN_ONE_DAY, 0);
    }
}
