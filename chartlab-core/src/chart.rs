//! Chart adapter contract.
//!
//! Rendering is an external collaborator: the core hands an adapter the
//! series, the already-computed indicator columns, and (for the Ichimoku
//! chart) the cloud segments plus a label-to-fill-color mapping. The figure
//! type is the adapter's own; the core never inspects it. Adapters must not
//! mutate their inputs and must not compute indicators themselves — the
//! borrow-only signatures enforce the first half of that contract.

use crate::cloud::Segment;
use crate::domain::Series;
use crate::indicators::{BollingerBands, Ichimoku, MovingAverages};

/// Maps a segment's dominance label to a fill color string.
pub type FillColorFn<'a> = &'a dyn Fn(bool) -> String;

/// Builds renderable figures from an enriched series.
pub trait ChartAdapter {
    /// The renderable figure type, opaque to the core.
    type Figure;

    /// Candlesticks overlaid with the three moving averages.
    fn moving_average_chart(
        &self,
        series: &Series,
        averages: &MovingAverages,
        title: &str,
    ) -> Self::Figure;

    /// Candlesticks with outer and inner Bollinger envelopes.
    fn bollinger_chart(
        &self,
        series: &Series,
        bands: &BollingerBands,
        title: &str,
    ) -> Self::Figure;

    /// The five Ichimoku lines plus one filled cloud region per segment,
    /// colored by `fill_color(segment.bullish)`.
    fn ichimoku_chart(
        &self,
        series: &Series,
        lines: &Ichimoku,
        segments: &[Segment],
        fill_color: FillColorFn<'_>,
        title: &str,
    ) -> Self::Figure;
}
