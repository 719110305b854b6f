//! Bollinger Bands — rolling mean of close with standard-deviation envelopes.
//!
//! Mid band: trailing mean over the window (default 20). Deviation: trailing
//! sample standard deviation (divide by n-1) over the same window. Outer
//! bands sit at mid ± outer_multiplier·std, the inner "no-man's-zone" pair
//! at mid ± inner_multiplier·std.

use crate::config::BollingerParams;
use crate::domain::Series;

use super::{rolling_mean, rolling_std, Column};

/// Bollinger Band column group.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    pub mid: Column,
    pub std: Column,
    pub upper: Column,
    pub lower: Column,
    pub upper_inner: Column,
    pub lower_inner: Column,
    /// The window and multipliers these columns were computed with.
    pub params: BollingerParams,
}

impl BollingerBands {
    pub fn compute(series: &Series, params: &BollingerParams) -> Self {
        let closes: Vec<f64> = series.closes().collect();
        let mid = rolling_mean(&closes, params.window);
        let std = rolling_std(&closes, params.window);

        let band = |multiplier: f64, sign: f64| -> Column {
            mid.iter()
                .zip(&std)
                .map(|(m, s)| match (m, s) {
                    (Some(m), Some(s)) => Some(m + sign * multiplier * s),
                    _ => None,
                })
                .collect()
        };

        Self {
            upper: band(params.outer_multiplier, 1.0),
            lower: band(params.outer_multiplier, -1.0),
            upper_inner: band(params.inner_multiplier, 1.0),
            lower_inner: band(params.inner_multiplier, -1.0),
            mid,
            std,
            params: params.clone(),
        }
    }
}
