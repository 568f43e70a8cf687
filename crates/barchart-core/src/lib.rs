// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; exports the public API for loading records and rendering the bar chart.

pub mod axis;
pub mod config;
pub mod error;
pub mod format;
pub mod raster;
pub mod render;
pub mod scale;
pub mod source;
pub mod surface;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use config::{ChartConfig, VerticalOffset};
pub use error::{ChartError, Result};
pub use format::{format_si, population_tick, TickFormat};
pub use raster::{render_to_png, render_to_png_bytes, render_to_rgba8, RasterOptions};
pub use render::{ChartRenderer, Layout};
pub use scale::{BandScale, LinearScale};
pub use source::{population_row, CsvSource, DataSource, MemorySource, Row};
pub use surface::Surface;
pub use theme::Theme;
pub use types::{Margins, Record, HEIGHT, POPULATION_SCALE, WIDTH};
