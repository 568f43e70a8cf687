// File: crates/barchart-core/src/types.rs
// Summary: Shared types and constants (canvas size, margins, records).

use serde::Deserialize;

/// Default surface width in pixels.
pub const WIDTH: u32 = 960;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 500;

/// Factor applied to the population column (the file stores thousands).
pub const POPULATION_SCALE: f64 = 1000.0;

/// Plot-area insets, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    /// Margins in CSS order: top, right, bottom, left.
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Inner plot size for a canvas, or `None` when either side is not positive.
    pub fn inner_size(&self, width: u32, height: u32) -> Option<(f64, f64)> {
        let w = width as f64 - self.hsum() as f64;
        let h = height as f64 - self.vsum() as f64;
        (w > 0.0 && h > 0.0).then_some((w, h))
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(50, 40, 70, 200)
    }
}

/// One bar: a category label and its value.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub category: String,
    pub value: f64,
}

impl Record {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self { category: category.into(), value }
    }
}
