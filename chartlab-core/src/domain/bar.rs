//! Bar — the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// OHLCV bar for a single trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Validation failure for a single bar, naming the offending field.
#[derive(Debug, Error)]
pub enum BarError {
    #[error("non-finite price on {date}: {field}")]
    NonFinitePrice { date: NaiveDate, field: &'static str },

    #[error("non-positive price on {date}: {field} = {value}")]
    NonPositivePrice {
        date: NaiveDate,
        field: &'static str,
        value: f64,
    },

    #[error("inverted range on {date}: low {low} > high {high}")]
    InvertedRange {
        date: NaiveDate,
        low: f64,
        high: f64,
    },

    #[error("{field} = {value} outside [{low}, {high}] on {date}")]
    OutsideRange {
        date: NaiveDate,
        field: &'static str,
        value: f64,
        low: f64,
        high: f64,
    },
}

impl Bar {
    /// Check OHLC sanity: finite positive prices, high >= low, open and close
    /// inside the low/high range.
    pub fn validate(&self) -> Result<(), BarError> {
        for (field, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !value.is_finite() {
                return Err(BarError::NonFinitePrice {
                    date: self.date,
                    field,
                });
            }
            if value <= 0.0 {
                return Err(BarError::NonPositivePrice {
                    date: self.date,
                    field,
                    value,
                });
            }
        }

        if self.low > self.high {
            return Err(BarError::InvertedRange {
                date: self.date,
                low: self.low,
                high: self.high,
            });
        }

        for (field, value) in [("open", self.open), ("close", self.close)] {
            if value < self.low || value > self.high {
                return Err(BarError::OutsideRange {
                    date: self.date,
                    field,
                    value,
                    low: self.low,
                    high: self.high,
                });
            }
        }

        Ok(())
    }

    /// Convenience predicate over [`Bar::validate`].
    pub fn is_sane(&self) -> bool {
        self.validate().is_ok()
    }
}
