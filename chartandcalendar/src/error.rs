// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Errors raised while configuring a chart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    #[error("Color index {index} out of range (palette has {len} colors)")]
    ColorIndex { index: usize, len: usize },

    #[error("Invalid color {0:?}: expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    #[error("Invalid scroll direction {0}: expected 1 or -1")]
    InvalidDirection(i32),
}

pub type Result<T> = std::result::Result<T, ChartError>;
