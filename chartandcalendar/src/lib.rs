// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Habit score chart model.
//!
//! [`ScoreChart`] holds a newest-first score history, a color and a
//! transparency flag, and scrolls through the history with
//! [`ScrollableChart`].

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod color;
pub mod date;
pub mod error;
pub mod score;
pub mod score_chart;
pub mod scrollable_chart;

pub use color::{android_test_color, Color, PALETTE_LEN};
pub use error::{ChartError, Result};
pub use score::{Checkmark, Score};
pub use score_chart::{ScoreChart, RANDOM_DATA_DAYS};
pub use scrollable_chart::{ScrollableChart, DEFAULT_MAX_DATA_OFFSET};
