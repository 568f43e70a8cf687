// File: crates/barchart-core/src/error.rs
// Summary: Error type shared by loading, rendering and output.

use thiserror::Error;

use crate::types::Margins;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no records to render")]
    EmptyData,

    #[error("record {category:?} has invalid value {value}")]
    InvalidValue { category: String, value: f64 },

    #[error("canvas {width}x{height} leaves no plot area inside margins {margins:?}")]
    DegenerateCanvas { width: u32, height: u32, margins: Margins },

    #[error("missing column {0:?} in header row")]
    MissingColumn(String),

    #[error("row {row}: column {column:?} is not a number: {raw:?}")]
    ParseValue { row: u64, column: String, raw: String },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(String),

    #[error("raster: {0}")]
    Raster(String),
}

impl From<toml::de::Error> for ChartError {
    fn from(e: toml::de::Error) -> Self {
        ChartError::Config(e.to_string())
    }
}
