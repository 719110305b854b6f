//! Data-source boundary — where price series come from.
//!
//! The `PriceSource` trait abstracts over data sources (CSV directories,
//! synthetic walks) so the indicator engine never depends on how bars were
//! obtained. A reachable source with nothing in the requested range returns
//! an empty series, not an error; error kinds distinguish an unreachable
//! source from an unknown ticker.

pub mod csv;
pub mod synthetic;

pub use self::csv::CsvSource;
pub use synthetic::RandomWalkSource;

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{Series, SeriesError};

/// Structured error types for price-source operations.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source unavailable: {0}")]
    Unavailable(String),

    #[error("ticker not found: {ticker}")]
    TickerNotFound { ticker: String },

    #[error("malformed price data for {ticker}: {source}")]
    Malformed {
        ticker: String,
        #[source]
        source: SeriesError,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },
}

/// Trait for price sources.
///
/// `fetch` returns the bars for a ticker inside a closed date range,
/// ascending by date. An empty range yields an empty series. `description`
/// returns a free-text display name for the ticker.
pub trait PriceSource {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Series, SourceError>;

    fn description(&self, ticker: &str) -> Result<String, SourceError>;
}
