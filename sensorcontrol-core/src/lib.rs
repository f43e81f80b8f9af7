// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for the sensorcontrol pipeline.
//!
//! - [`Reading`]: one three-axis sensor sample.
//! - [`LatestValueRelay`] / [`RelayHandle`]: a single-slot holder of the most
//!   recent value that also fans every push out to its subscribers.
//! - [`Subscription`] / [`CompositeSubscription`]: cancellable background work
//!   and the aggregate set torn down on shutdown.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod error;
pub mod latest_value_relay;
pub mod reading;
pub mod relay_error;
pub mod subscription;

pub use self::error::{ResultExt, Result, SensorControlError};
pub use self::latest_value_relay::{LatestValueRelay, RelayHandle, RelayStream};
pub use self::reading::Reading;
pub use self::relay_error::RelayError;
pub use self::subscription::{CompositeSubscription, Subscription};
pub use tokio_util::sync::CancellationToken;
