//! Series — an ordered run of daily bars.
//!
//! The shared data model every transform operates on. Construction validates
//! chronological order, duplicate dates, and per-bar OHLC sanity, so the
//! indicator engine can assume well-formed input and stay total.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use super::bar::{Bar, BarError};

/// Chronologically ordered daily bars, no duplicate dates.
///
/// Calendar gaps (weekends, holidays) are permitted and never filled.
/// Transforms borrow the series; existing bars are never mutated or
/// reordered once constructed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    bars: Vec<Bar>,
}

/// Construction failure, naming the offending row.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("bar {index} ({date}) is not after previous date {prev}")]
    OutOfOrder {
        index: usize,
        date: NaiveDate,
        prev: NaiveDate,
    },

    #[error("duplicate date at bar {index}: {date}")]
    DuplicateDate { index: usize, date: NaiveDate },

    #[error("bar {index} failed validation: {source}")]
    BadBar {
        index: usize,
        #[source]
        source: BarError,
    },
}

impl Series {
    /// Build a series from bars, validating order, uniqueness, and sanity.
    pub fn new(bars: Vec<Bar>) -> Result<Self, SeriesError> {
        for (index, bar) in bars.iter().enumerate() {
            bar.validate()
                .map_err(|source| SeriesError::BadBar { index, source })?;
            if index > 0 {
                let prev = bars[index - 1].date;
                if bar.date == prev {
                    return Err(SeriesError::DuplicateDate {
                        index,
                        date: bar.date,
                    });
                }
                if bar.date < prev {
                    return Err(SeriesError::OutOfOrder {
                        index,
                        date: bar.date,
                        prev,
                    });
                }
            }
        }
        Ok(Self { bars })
    }

    /// A valid zero-row series.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Bar at a row position.
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// Row position of a calendar date, if present.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.bars.binary_search_by_key(&date, |bar| bar.date).ok()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.bars.first().map(|bar| bar.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|bar| bar.date)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.bars.iter().map(|bar| bar.date)
    }

    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.bars.iter().map(|bar| bar.close)
    }

    pub fn highs(&self) -> impl Iterator<Item = f64> + '_ {
        self.bars.iter().map(|bar| bar.high)
    }

    pub fn lows(&self) -> impl Iterator<Item = f64> + '_ {
        self.bars.iter().map(|bar| bar.low)
    }

    /// Sub-series over a closed date range (both ends inclusive).
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Self {
        let bars = self
            .bars
            .iter()
            .filter(|bar| bar.date >= start && bar.date <= end)
            .cloned()
            .collect();
        // Order and uniqueness survive filtering.
        Self { bars }
    }
}

impl TryFrom<Vec<Bar>> for Series {
    type Error = SeriesError;

    fn try_from(bars: Vec<Bar>) -> Result<Self, Self::Error> {
        Self::new(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(y: i32, m: u32, d: u32, close: f64) -> Bar {
        Bar {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            open: close - 0.5,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1000,
        }
    }

    #[test]
    fn accepts_ordered_bars_with_gaps() {
        // Friday then Monday: a calendar gap is fine.
        let series = Series::new(vec![bar(2024, 1, 5, 100.0), bar(2024, 1, 8, 101.0)]).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(
            series.first_date(),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(series.last_date(), NaiveDate::from_ymd_opt(2024, 1, 8));
    }

    #[test]
    fn rejects_duplicate_date() {
        let err = Series::new(vec![bar(2024, 1, 5, 100.0), bar(2024, 1, 5, 101.0)]).unwrap_err();
        assert!(matches!(err, SeriesError::DuplicateDate { index: 1, .. }));
    }

    #[test]
    fn rejects_out_of_order() {
        let err = Series::new(vec![bar(2024, 1, 8, 100.0), bar(2024, 1, 5, 101.0)]).unwrap_err();
        assert!(matches!(err, SeriesError::OutOfOrder { index: 1, .. }));
    }

    #[test]
    fn rejects_bad_bar_naming_row() {
        let mut bad = bar(2024, 1, 8, 100.0);
        bad.low = bad.high + 5.0;
        let err = Series::new(vec![bar(2024, 1, 5, 100.0), bad]).unwrap_err();
        assert!(matches!(err, SeriesError::BadBar { index: 1, .. }));
    }

    #[test]
    fn empty_series_is_valid() {
        let series = Series::empty();
        assert!(series.is_empty());
        assert_eq!(series.first_date(), None);
    }

    #[test]
    fn index_of_finds_exact_date() {
        let series = Series::new(vec![
            bar(2024, 1, 2, 100.0),
            bar(2024, 1, 3, 101.0),
            bar(2024, 1, 5, 102.0),
        ])
        .unwrap();
        assert_eq!(series.index_of(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()), Some(1));
        // A date inside a calendar gap is absent, not approximated.
        assert_eq!(series.index_of(NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()), None);
    }

    #[test]
    fn between_filters_inclusive() {
        let series = Series::new(vec![
            bar(2024, 1, 2, 100.0),
            bar(2024, 1, 3, 101.0),
            bar(2024, 1, 5, 102.0),
            bar(2024, 1, 8, 103.0),
        ])
        .unwrap();
        let clipped = series.between(
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        );
        assert_eq!(clipped.len(), 2);
        assert_eq!(clipped.get(0).unwrap().close, 101.0);
        assert_eq!(clipped.get(1).unwrap().close, 102.0);
    }
}
