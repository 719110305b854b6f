//! Cloud segmenter — run-length grouping of span dominance.
//!
//! The Ichimoku cloud fill is rendered one region per maximal run of rows
//! where the same span is on top. A row is bullish only when both spans are
//! defined and span A is strictly greater; ties and missing values count as
//! bearish, which keeps the fill color stable across warmup gaps.

use serde::{Deserialize, Serialize};

use crate::indicators::Column;

/// A maximal contiguous run of rows with constant cloud dominance.
///
/// `start` and `end` are row positions, both inclusive. Segments returned by
/// [`segment_cloud`] are non-overlapping, ascending, and cover every input
/// row exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub bullish: bool,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        false // a segment always spans at least one row
    }
}

/// Per-row dominance label: strictly `span_a > span_b`, with missing values
/// labelled false.
fn row_label(span_a: Option<f64>, span_b: Option<f64>) -> bool {
    matches!((span_a, span_b), (Some(a), Some(b)) if a > b)
}

/// Group rows into maximal runs of constant dominance label.
///
/// Single linear pass. A new segment starts at row 0 and at every label
/// change; the final segment closes at the series end. Empty input yields
/// an empty list.
///
/// # Panics
/// If the two columns differ in length (programmer error).
pub fn segment_cloud(span_a: &Column, span_b: &Column) -> Vec<Segment> {
    assert_eq!(
        span_a.len(),
        span_b.len(),
        "span columns must be the same length"
    );

    let n = span_a.len();
    let mut segments = Vec::new();
    if n == 0 {
        return segments;
    }

    let mut start = 0;
    let mut label = row_label(span_a[0], span_b[0]);
    for i in 1..n {
        let next = row_label(span_a[i], span_b[i]);
        if next != label {
            segments.push(Segment {
                start,
                end: i - 1,
                bullish: label,
            });
            start = i;
            label = next;
        }
    }
    segments.push(Segment {
        start,
        end: n - 1,
        bullish: label,
    });

    segments
}
