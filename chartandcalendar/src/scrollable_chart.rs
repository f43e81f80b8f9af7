// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Horizontal scrolling in data buckets.
//!
//! A drag moves a pixel position; the data offset is that position divided
//! by the bucket width (pixels per data column), clamped to
//! `[0, max_data_offset]`. The scroll controller hears about every change of
//! the data offset.

use crate::error::{ChartError, Result};
use tracing::debug;

pub const DEFAULT_MAX_DATA_OFFSET: usize = 10_000;

type ScrollController = Box<dyn FnMut(usize) + Send>;

pub struct ScrollableChart {
    data_offset: usize,
    scroller_bucket_size: usize,
    direction: i32,
    max_data_offset: usize,
    scroll_x: i64,
    scroll_y: i64,
    scroll_controller: Option<ScrollController>,
}

impl ScrollableChart {
    pub fn new() -> Self {
        Self {
            data_offset: 0,
            scroller_bucket_size: 1,
            direction: 1,
            max_data_offset: DEFAULT_MAX_DATA_OFFSET,
            scroll_x: 0,
            scroll_y: 0,
            scroll_controller: None,
        }
    }

    pub const fn data_offset(&self) -> usize {
        self.data_offset
    }

    pub const fn max_data_offset(&self) -> usize {
        self.max_data_offset
    }

    pub const fn direction(&self) -> i32 {
        self.direction
    }

    pub const fn scroller_bucket_size(&self) -> usize {
        self.scroller_bucket_size
    }

    /// `1` scrolls into older data when dragging right, `-1` reverses it.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::InvalidDirection` for any other value.
    pub fn set_direction(&mut self, direction: i32) -> Result<()> {
        if direction != 1 && direction != -1 {
            return Err(ChartError::InvalidDirection(direction));
        }
        self.direction = direction;
        Ok(())
    }

    /// Width of one data column in pixels. Zero disables scrolling.
    pub fn set_scroller_bucket_size(&mut self, scroller_bucket_size: usize) {
        self.scroller_bucket_size = scroller_bucket_size;
    }

    pub fn set_scroll_controller(&mut self, controller: impl FnMut(usize) + Send + 'static) {
        self.scroll_controller = Some(Box::new(controller));
    }

    /// Clamps the current offset to the new maximum and always notifies the
    /// controller.
    pub fn set_max_data_offset(&mut self, max_data_offset: usize) {
        self.max_data_offset = max_data_offset;
        self.data_offset = self.data_offset.min(max_data_offset);
        self.notify();
    }

    /// Applies a drag step of `(dx, dy)` pixels, measured as previous minus
    /// current pointer position (a rightward drag has a negative `dx`).
    ///
    /// Returns `false` without moving when the bucket size is zero. The
    /// horizontal position never goes past the last bucket.
    pub fn scroll_by(&mut self, dx: f32, dy: f32) -> bool {
        if self.scroller_bucket_size == 0 {
            return false;
        }

        if dx.abs() > dy.abs() {
            debug!(dx, dy, "horizontal drag");
        }

        // Positions saturate instead of overflowing.
        let dx = (-(self.direction as f32) * dx).min(self.max_x().saturating_sub(self.scroll_x) as f32);
        self.scroll_x = self.scroll_x.saturating_add(dx as i64);
        self.scroll_y = self.scroll_y.saturating_add(dy as i64);
        self.update_data_offset();
        true
    }

    fn max_x(&self) -> i64 {
        to_i64(self.max_data_offset.saturating_mul(self.scroller_bucket_size))
    }

    fn update_data_offset(&mut self) {
        let bucket = to_i64(self.scroller_bucket_size);
        let offset = (self.scroll_x / bucket).clamp(0, to_i64(self.max_data_offset));
        let offset = usize::try_from(offset).unwrap_or(self.max_data_offset);

        if offset != self.data_offset {
            self.data_offset = offset;
            self.notify();
        }
    }

    fn notify(&mut self) {
        let offset = self.data_offset;
        if let Some(controller) = self.scroll_controller.as_mut() {
            controller(offset);
        }
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl Default for ScrollableChart {
    fn default() -> Self {
        Self::new()
    }
}
