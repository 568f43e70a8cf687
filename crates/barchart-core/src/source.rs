// File: crates/barchart-core/src/source.rs
// Summary: Data sources that produce ordered records, including a header-aware CSV loader.

use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::{debug, info};

use crate::error::{ChartError, Result};
use crate::types::{Record, POPULATION_SCALE};

/// Supplies the ordered records for one render.
pub trait DataSource {
    fn load(&self) -> Result<Vec<Record>>;
}

/// Records held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    records: Vec<Record>,
}

impl MemorySource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl DataSource for MemorySource {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}

/// One raw data row with its header, all fields still strings.
pub struct Row<'a> {
    headers: &'a [String],
    record: &'a StringRecord,
    /// 1-based data row number (the header row is not counted).
    pub number: u64,
}

impl<'a> Row<'a> {
    /// Field under `column`, matched trimmed and ASCII-case-insensitively.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let ix = self.headers.iter().position(|h| h.eq_ignore_ascii_case(column.trim()))?;
        self.record.get(ix)
    }

    pub fn require(&self, column: &str) -> Result<&'a str> {
        self.get(column).ok_or_else(|| ChartError::MissingColumn(column.to_string()))
    }

    /// Parse `column` as a number.
    pub fn number(&self, column: &str) -> Result<f64> {
        let raw = self.require(column)?;
        raw.trim().parse::<f64>().map_err(|_| ChartError::ParseValue {
            row: self.number,
            column: column.to_string(),
            raw: raw.to_string(),
        })
    }
}

/// Default row mapper: `country` verbatim, `population` (thousands) scaled to people.
pub fn population_row(row: &Row<'_>) -> Result<Record> {
    let category = row.require("country")?.to_string();
    let value = row.number("population")? * POPULATION_SCALE;
    Ok(Record { category, value })
}

type RowMapper = Box<dyn Fn(&Row<'_>) -> Result<Record>>;

/// Delimited text file with a header row.
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
    mapper: RowMapper,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), delimiter: b',', mapper: Box::new(population_row) }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replace the row mapper.
    pub fn map_rows<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&Row<'_>) -> Result<Record> + 'static,
    {
        self.mapper = Box::new(mapper);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read records from any reader; the path is only used for logging.
    pub fn load_from<R: std::io::Read>(&self, reader: R) -> Result<Vec<Record>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect::<Vec<_>>();
        debug!(?headers, "csv headers");

        let mut out = Vec::new();
        for (i, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let row = Row { headers: &headers, record: &rec, number: i as u64 + 1 };
            out.push((self.mapper)(&row)?);
        }
        Ok(out)
    }
}

impl DataSource for CsvSource {
    fn load(&self) -> Result<Vec<Record>> {
        let file = std::fs::File::open(&self.path)?;
        let records = self.load_from(file)?;
        info!(path = %self.path.display(), rows = records.len(), "loaded records");
        Ok(records)
    }
}
