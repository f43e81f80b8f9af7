// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! ARGB colors and the stock chart palette.

use crate::error::{ChartError, Result};
use std::fmt;

/// A packed `0xAARRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

const PALETTE: [u32; 13] = [
    0xFFD3_2F2F, // red
    0xFFE6_4A19, // deep orange
    0xFFF9_A825, // yellow
    0xFFAF_B42B, // light green
    0xFF38_8E3C, // dark green
    0xFF00_897B, // teal
    0xFF00_ACC1, // cyan
    0xFF03_9BE5, // light blue
    0xFF5E_35B1, // deep purple
    0xFF8E_24AA, // purple
    0xFFD8_1B60, // pink
    0xFF30_3030, // dark grey
    0xFFAA_AAAA, // light grey
];

/// Number of colors in the stock palette.
pub const PALETTE_LEN: usize = PALETTE.len();

/// The stock palette color at `index`.
///
/// # Errors
///
/// Returns `ChartError::ColorIndex` when `index >= PALETTE_LEN`.
pub fn android_test_color(index: usize) -> Result<Color> {
    PALETTE
        .get(index)
        .copied()
        .map(Color)
        .ok_or(ChartError::ColorIndex {
            index,
            len: PALETTE_LEN,
        })
}

impl Color {
    pub const TRANSPARENT: Self = Self(0);
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(0xFF00_0000 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Parses `#RRGGBB` (opaque) or `#AARRGGBB`.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::InvalidColor` for any other input.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || ChartError::InvalidColor(text.to_string());
        let hex = text.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(Self(0xFF00_0000 | value)),
            8 => Ok(Self(value)),
            _ => Err(invalid()),
        }
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | (alpha as u32) << 24)
    }

    /// Channel-wise blend; `ratio` 0.0 keeps `self`, 1.0 yields `other`.
    #[must_use]
    pub fn mix(self, other: Self, ratio: f32) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        let blend = |a: u8, b: u8| -> u32 {
            let mixed = f32::from(a) * (1.0 - ratio) + f32::from(b) * ratio;
            mixed.round().clamp(0.0, 255.0) as u32
        };
        Self(
            blend(self.alpha(), other.alpha()) << 24
                | blend(self.red(), other.red()) << 16
                | blend(self.green(), other.green()) << 8
                | blend(self.blue(), other.blue()),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
