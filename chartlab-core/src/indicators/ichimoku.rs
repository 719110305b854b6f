//! Ichimoku components — conversion, baseline, projected spans, lagging line.
//!
//! Conversion and baseline are midpoints of the rolling high/low range over
//! their windows (defaults 9 and 26). Span A is the conversion/baseline
//! midpoint, Span B the 52-row range midpoint; both are projected *forward*
//! by the displacement (default 26), so the value computed at row i is
//! stored at row i + 26 and the cloud at today's date reflects rows 26 back.
//! The lagging line is close shifted the other way: value at row i is
//! close[i + 26], `None` for the last 26 rows.

use crate::cloud::{segment_cloud, Segment};
use crate::config::IchimokuParams;
use crate::domain::Series;

use super::{look_ahead, rolling_max, rolling_min, shift_ahead, Column};

/// Ichimoku column group.
#[derive(Debug, Clone, PartialEq)]
pub struct Ichimoku {
    pub conversion: Column,
    pub baseline: Column,
    pub span_a: Column,
    pub span_b: Column,
    pub lagging: Column,
    /// The windows and displacement these columns were computed with.
    pub params: IchimokuParams,
}

impl Ichimoku {
    pub fn compute(series: &Series, params: &IchimokuParams) -> Self {
        let highs: Vec<f64> = series.highs().collect();
        let lows: Vec<f64> = series.lows().collect();
        let closes: Vec<f64> = series.closes().collect();

        let conversion = range_midpoint(&highs, &lows, params.conversion_window);
        let baseline = range_midpoint(&highs, &lows, params.baseline_window);

        let span_a_unshifted: Column = conversion
            .iter()
            .zip(&baseline)
            .map(|(c, b)| match (c, b) {
                (Some(c), Some(b)) => Some((c + b) / 2.0),
                _ => None,
            })
            .collect();
        let span_b_unshifted = range_midpoint(&highs, &lows, params.span_b_window);

        Self {
            span_a: shift_ahead(&span_a_unshifted, params.displacement),
            span_b: shift_ahead(&span_b_unshifted, params.displacement),
            lagging: look_ahead(&closes, params.displacement),
            conversion,
            baseline,
            params: params.clone(),
        }
    }

    /// Maximal runs of constant cloud dominance (`span_a > span_b`), for
    /// rendering the cloud fill.
    pub fn cloud_segments(&self) -> Vec<Segment> {
        segment_cloud(&self.span_a, &self.span_b)
    }
}

/// (rolling max of high + rolling min of low) / 2 over `window`.
fn range_midpoint(highs: &[f64], lows: &[f64], window: usize) -> Column {
    rolling_max(highs, window)
        .iter()
        .zip(&rolling_min(lows, window))
        .map(|(hi, lo)| match (hi, lo) {
            (Some(hi), Some(lo)) => Some((hi + lo) / 2.0),
            _ => None,
        })
        .collect()
}
