// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Score history chart model.
//!
//! Scores are kept newest first; the data offset of the underlying
//! [`ScrollableChart`] is the number of days scrolled back from the newest
//! one.

use crate::color::Color;
use crate::date::{start_of_today, MILLIS_IN_ONE_DAY};
use crate::score::Score;
use crate::scrollable_chart::ScrollableChart;
use rand::Rng;
use tracing::debug;

/// Number of days generated by [`ScoreChart::populate_with_random_data`].
pub const RANDOM_DATA_DAYS: usize = 100;

pub struct ScoreChart {
    chart: ScrollableChart,
    color: Color,
    is_transparency_enabled: bool,
    scores: Vec<Score>,
}

impl ScoreChart {
    pub fn new() -> Self {
        Self {
            chart: ScrollableChart::new(),
            color: Color::BLACK,
            is_transparency_enabled: false,
            scores: Vec::new(),
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub fn set_is_transparency_enabled(&mut self, enabled: bool) {
        self.is_transparency_enabled = enabled;
    }

    pub const fn is_transparency_enabled(&self) -> bool {
        self.is_transparency_enabled
    }

    /// Transparent when transparency is enabled, white otherwise.
    pub const fn background_color(&self) -> Color {
        if self.is_transparency_enabled {
            Color::TRANSPARENT
        } else {
            Color::WHITE
        }
    }

    /// Called with the new data offset whenever it changes.
    pub fn set_scroll_controller(&mut self, controller: impl FnMut(usize) + Send + 'static) {
        self.chart.set_scroll_controller(controller);
    }

    /// Replaces the data with scores for the last [`RANDOM_DATA_DAYS`] days.
    pub fn populate_with_random_data(&mut self) {
        self.populate_with_rng(&mut rand::rng());
    }

    /// Same as [`populate_with_random_data`](Self::populate_with_random_data)
    /// with a caller-supplied generator.
    ///
    /// Starting from today and walking back one day at a time, each score
    /// differs from the previous one by at most a tenth of
    /// [`Score::MAX_VALUE`], and stays within `[0, MAX_VALUE]`.
    pub fn populate_with_rng<R: Rng>(&mut self, rng: &mut R) {
        let step = Score::MAX_VALUE / 10;
        let today = start_of_today();
        let mut value = rng.random_range(0..=Score::MAX_VALUE);

        let scores = (0..RANDOM_DATA_DAYS)
            .map(|day| {
                let score = Score::new(today - day as i64 * MILLIS_IN_ONE_DAY, value);
                value = (value + rng.random_range(-step..=step)).clamp(0, Score::MAX_VALUE);
                score
            })
            .collect();

        debug!(days = RANDOM_DATA_DAYS, "populated with random scores");
        self.set_scores(scores);
    }

    /// Replaces the data. `scores` must be ordered newest first.
    pub fn set_scores(&mut self, scores: Vec<Score>) {
        self.scores = scores;
        self.chart.set_max_data_offset(self.scores.len());
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// Up to `columns` scores starting at the current data offset.
    pub fn visible_scores(&self, columns: usize) -> &[Score] {
        let start = self.chart.data_offset().min(self.scores.len());
        let end = start.saturating_add(columns).min(self.scores.len());
        &self.scores[start..end]
    }

    pub fn data_offset(&self) -> usize {
        self.chart.data_offset()
    }

    pub const fn chart(&self) -> &ScrollableChart {
        &self.chart
    }

    pub fn chart_mut(&mut self) -> &mut ScrollableChart {
        &mut self.chart
    }
}

impl Default for ScoreChart {
    fn default() -> Self {
        Self::new()
    }
}
