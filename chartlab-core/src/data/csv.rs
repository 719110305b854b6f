//! CSV-backed price source.
//!
//! Reads one `<TICKER>.csv` per ticker from a root directory, with the
//! header `date,open,high,low,close,volume` and ISO dates. An optional
//! `<TICKER>.name` sidecar supplies the display description; without one,
//! the ticker itself is the description. A missing CSV file means the
//! ticker is unknown; a present file whose rows all fall outside the
//! requested range yields an empty series.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{Bar, Series};

use super::{PriceSource, SourceError};

/// One CSV row, in file column order.
#[derive(Debug, Deserialize)]
struct CsvRow {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

/// Price source reading per-ticker CSV files from a directory.
pub struct CsvSource {
    root: PathBuf,
}

impl CsvSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn csv_path(&self, ticker: &str) -> PathBuf {
        self.root.join(format!("{ticker}.csv"))
    }

    fn read_bars(&self, path: &Path) -> Result<Vec<Bar>, SourceError> {
        let mut reader =
            ::csv::Reader::from_path(path).map_err(|source| SourceError::Csv {
                path: path.to_path_buf(),
                source,
            })?;

        let mut bars = Vec::new();
        for row in reader.deserialize() {
            let row: CsvRow = row.map_err(|source| SourceError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            bars.push(Bar {
                date: row.date,
                open: row.open,
                high: row.high,
                low: row.low,
                close: row.close,
                volume: row.volume,
            });
        }
        Ok(bars)
    }
}

impl PriceSource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Series, SourceError> {
        let path = self.csv_path(ticker);
        if !path.exists() {
            return Err(SourceError::TickerNotFound {
                ticker: ticker.to_string(),
            });
        }

        let bars = self.read_bars(&path)?;
        let series = Series::new(bars).map_err(|source| SourceError::Malformed {
            ticker: ticker.to_string(),
            source,
        })?;
        Ok(series.between(start, end))
    }

    fn description(&self, ticker: &str) -> Result<String, SourceError> {
        if !self.csv_path(ticker).exists() {
            return Err(SourceError::TickerNotFound {
                ticker: ticker.to_string(),
            });
        }

        let sidecar = self.root.join(format!("{ticker}.name"));
        if sidecar.exists() {
            let text = std::fs::read_to_string(&sidecar).map_err(|source| SourceError::Io {
                path: sidecar,
                source,
            })?;
            Ok(text.trim().to_string())
        } else {
            Ok(ticker.to_string())
        }
    }
}
