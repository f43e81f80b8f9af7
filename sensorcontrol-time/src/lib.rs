// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based streams for sensorcontrol.
//!
//! - [`interval`]: fixed-rate ticks, the first one a full period after creation.
//! - [`sample_latest`]: on every tick, the relay's current snapshot.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod interval;
pub mod sample_latest;
pub mod timer;

pub use interval::{interval, Interval};
pub use sample_latest::{sample_latest, DEFAULT_SAMPLE_PERIOD};
pub use timer::{Timer, TokioTimer};
