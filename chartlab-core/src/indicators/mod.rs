//! Indicator engine — rolling-window transforms over a [`Series`].
//!
//! Every transform is a typed column group: a struct of named
//! `Vec<Option<f64>>` columns with a `compute` constructor taking the series
//! by reference. Missing values (warmup rows, shift overruns) are explicit
//! `None`, never a NaN sentinel. Transforms are independent and composable;
//! none mutates the series or another transform's output, so callers may
//! apply any subset in any order.
//!
//! All transforms are total over well-formed series: an empty series yields
//! zero-row columns, a series shorter than a window yields all-`None`
//! columns. Neither is an error.

pub mod bollinger;
pub mod ichimoku;
pub mod moving_average;
pub mod returns;

pub use bollinger::BollingerBands;
pub use ichimoku::Ichimoku;
pub use moving_average::MovingAverages;
pub use returns::Returns;

use std::collections::VecDeque;

/// A derived per-row column, same length as the series it was computed from.
pub type Column = Vec<Option<f64>>;

/// Trailing mean over `window` rows, sliding-sum accumulator.
///
/// `result[i]` = mean of `values[i+1-window ..= i]`; `None` for the first
/// `window - 1` rows.
pub(crate) fn rolling_mean(values: &[f64], window: usize) -> Column {
    assert!(window >= 1, "window must be >= 1");
    let n = values.len();
    let mut result = vec![None; n];
    if n < window {
        return result;
    }

    let mut sum: f64 = values[..window].iter().sum();
    result[window - 1] = Some(sum / window as f64);
    for i in window..n {
        sum += values[i] - values[i - window];
        result[i] = Some(sum / window as f64);
    }
    result
}

/// Trailing sample standard deviation (divide by n-1) over `window` rows.
///
/// Tracks sum and sum-of-squares incrementally. Windows below 2 have no
/// sample deviation, so the column is all `None`.
pub(crate) fn rolling_std(values: &[f64], window: usize) -> Column {
    let n = values.len();
    let mut result = vec![None; n];
    if window < 2 || n < window {
        return result;
    }

    let w = window as f64;
    let mut sum: f64 = values[..window].iter().sum();
    let mut sum_sq: f64 = values[..window].iter().map(|v| v * v).sum();

    let variance = |sum: f64, sum_sq: f64| {
        // Guard against tiny negative values from float cancellation.
        ((sum_sq - sum * sum / w) / (w - 1.0)).max(0.0)
    };

    result[window - 1] = Some(variance(sum, sum_sq).sqrt());
    for i in window..n {
        let entering = values[i];
        let leaving = values[i - window];
        sum += entering - leaving;
        sum_sq += entering * entering - leaving * leaving;
        result[i] = Some(variance(sum, sum_sq).sqrt());
    }
    result
}

/// Sliding-window extremum via a monotonic index deque.
///
/// `evict(kept, candidate)` returns true when the kept value can never again
/// be the extremum once the candidate has entered the window.
fn rolling_extreme(values: &[f64], window: usize, evict: fn(f64, f64) -> bool) -> Column {
    assert!(window >= 1, "window must be >= 1");
    let n = values.len();
    let mut result = vec![None; n];
    let mut deque: VecDeque<usize> = VecDeque::new();

    for i in 0..n {
        while let Some(&back) = deque.back() {
            if evict(values[back], values[i]) {
                deque.pop_back();
            } else {
                break;
            }
        }
        deque.push_back(i);

        if let Some(&front) = deque.front() {
            if front + window <= i {
                deque.pop_front();
            }
        }

        if i + 1 >= window {
            if let Some(&front) = deque.front() {
                result[i] = Some(values[front]);
            }
        }
    }
    result
}

/// Trailing maximum over `window` rows; `None` for the first `window - 1`.
pub(crate) fn rolling_max(values: &[f64], window: usize) -> Column {
    rolling_extreme(values, window, |kept, candidate| kept <= candidate)
}

/// Trailing minimum over `window` rows; `None` for the first `window - 1`.
pub(crate) fn rolling_min(values: &[f64], window: usize) -> Column {
    rolling_extreme(values, window, |kept, candidate| kept >= candidate)
}

/// Shift a column forward along the row index: the value computed at row `i`
/// lands at row `i + offset`. The first `offset` rows become `None`; values
/// that would land past the series end are discarded.
pub(crate) fn shift_ahead(column: &Column, offset: usize) -> Column {
    let n = column.len();
    let mut result = vec![None; n];
    for i in offset..n {
        result[i] = column[i - offset];
    }
    result
}

/// Look ahead along the row index: `result[i] = values[i + offset]`.
/// The last `offset` rows become `None`.
pub(crate) fn look_ahead(values: &[f64], offset: usize) -> Column {
    let n = values.len();
    let mut result = vec![None; n];
    for i in 0..n.saturating_sub(offset) {
        result[i] = Some(values[i + offset]);
    }
    result
}

// ── Test helpers ─────────────────────────────────────────────────────

/// Build a series from close prices with plausible synthetic OHLC.
#[cfg(test)]
pub(crate) fn make_series(closes: &[f64]) -> crate::domain::Series {
    use crate::domain::{Bar, Series};
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + 1.0;
            let low = (open.min(close) - 1.0).max(0.01);
            Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high,
                low,
                close,
                volume: 1000,
            }
        })
        .collect();
    Series::new(bars).expect("synthetic bars are well-formed")
}

/// Build a series from explicit (open, high, low, close) rows.
#[cfg(test)]
pub(crate) fn make_ohlc_series(rows: &[(f64, f64, f64, f64)]) -> crate::domain::Series {
    use crate::domain::{Bar, Series};
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let bars = rows
        .iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| Bar {
            date: base_date + chrono::Duration::days(i as i64),
            open,
            high,
            low,
            close,
            volume: 1000,
        })
        .collect();
    Series::new(bars).expect("test bars are well-formed")
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub(crate) fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub(crate) const DEFAULT_EPSILON: f64 = 1e-9;
