//! Simple moving averages of close — two trailing windows plus one centered.
//!
//! Trailing: value at row i is the mean of close over [i-w+1, i], `None`
//! for the first w-1 rows. Centered (odd window 2h+1): value at row i is
//! the mean over [i-h, i+h], `None` for the first and last h rows.

use crate::config::MaParams;
use crate::domain::Series;

use super::{rolling_mean, Column};

/// Moving-average column group.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingAverages {
    /// Trailing SMA over the long window (default 200).
    pub sma_long: Column,
    /// Trailing SMA over the short window (default 50).
    pub sma_short: Column,
    /// Centered SMA over the centered window (default 5).
    pub sma_centered: Column,
    /// The windows these columns were computed with.
    pub params: MaParams,
}

impl MovingAverages {
    pub fn compute(series: &Series, params: &MaParams) -> Self {
        assert!(
            params.centered_window % 2 == 1,
            "centered window must be odd"
        );
        let closes: Vec<f64> = series.closes().collect();

        Self {
            sma_long: rolling_mean(&closes, params.long_window),
            sma_short: rolling_mean(&closes, params.short_window),
            sma_centered: centered_mean(&closes, params.centered_window),
            params: params.clone(),
        }
    }
}

/// Centered mean: the window ending at row i is centered at row i - h,
/// so defined rows are exactly [h, n-1-h].
fn centered_mean(values: &[f64], window: usize) -> Column {
    let half = window / 2;
    let n = values.len();
    let mut result = vec![None; n];
    if n < window {
        return result;
    }

    let mut sum: f64 = values[..window].iter().sum();
    result[half] = Some(sum / window as f64);
    for i in window..n {
        sum += values[i] - values[i - window];
        result[i - half] = Some(sum / window as f64);
    }
    result
}
