// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensorcontrol_core::{LatestValueRelay, Reading};

pub const ACCEL: &str = "accel";
pub const GYRO: &str = "gyro";

pub fn push(value: Reading, relay: &LatestValueRelay<Reading>) {
    relay.push(value);
}

pub fn reading(source: &str, values: [f32; 3]) -> Reading {
    Reading::new(source, values)
}

pub fn reading_accel() -> Reading {
    reading(ACCEL, [1.0, 2.0, 3.0])
}

pub fn reading_accel_second() -> Reading {
    reading(ACCEL, [0.5, -9.81, 0.25])
}

pub fn reading_accel_third() -> Reading {
    reading(ACCEL, [-1.5, 0.0, 9.75])
}

pub fn reading_gyro() -> Reading {
    reading(GYRO, [0.1, 0.2, 0.3])
}

/// `count` distinct accelerometer readings, `i`th one being `[i, i, i]`.
pub fn accel_series(count: usize) -> Vec<Reading> {
    (0..count)
        .map(|i| {
            let v = i as f32;
            reading(ACCEL, [v, v, v])
        })
        .collect()
}
