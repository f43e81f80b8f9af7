// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Errors specific to relay lifecycle operations.
///
/// Pushing never fails; only subscribing to a relay that has already been
/// torn down does.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    /// The relay has been closed and accepts no new subscribers.
    #[error("Relay is closed")]
    Closed,
}
