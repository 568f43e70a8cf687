// File: crates/barchart-core/src/config.rs
// Summary: Chart configuration (canvas size, margins, labels, layout knobs) with TOML loading.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::types::{Margins, HEIGHT, WIDTH};

/// Which margin the plot group uses for its vertical offset.
///
/// The source layout translates the plot group by `margin.right` vertically;
/// `MarginRight` keeps that layout, `MarginTop` uses the conventional offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalOffset {
    #[default]
    MarginRight,
    MarginTop,
}

impl VerticalOffset {
    pub fn resolve(&self, margins: &Margins) -> u32 {
        match self {
            VerticalOffset::MarginRight => margins.right,
            VerticalOffset::MarginTop => margins.top,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
    /// Fraction of each band step left empty between bars.
    pub band_padding: f64,
    /// Requested number of value-axis ticks (the actual count is rounded).
    pub tick_count: usize,
    pub title: String,
    pub axis_label: String,
    pub vertical_offset: VerticalOffset,
    /// Theme preset name, see [`crate::theme::find`].
    pub theme: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margins: Margins::default(),
            band_padding: 0.1,
            tick_count: 10,
            title: "Top 10 Most Populous Countries".to_string(),
            axis_label: "Population".to_string(),
            vertical_offset: VerticalOffset::default(),
            theme: "light".to_string(),
        }
    }
}

impl ChartConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?cfg, "loaded chart config");
        Ok(cfg)
    }
}
