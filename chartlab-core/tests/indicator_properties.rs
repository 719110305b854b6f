//! Property tests for windowing and segmentation invariants.
//!
//! Uses proptest to verify:
//! 1. Segment coverage — segments partition the rows exactly once, labels
//!    match the row predicate, adjacent segments alternate
//! 2. Trailing SMA warmup — defined count and first defined row
//! 3. Bollinger ordering — upper >= mid >= lower wherever defined
//! 4. Lagging line — exact forward read with a `None` tail

use proptest::prelude::*;

use chartlab_core::cloud::segment_cloud;
use chartlab_core::config::{BollingerParams, IchimokuParams, MaParams};
use chartlab_core::domain::{Bar, Series};
use chartlab_core::indicators::{BollingerBands, Column, Ichimoku, MovingAverages};

fn make_series(closes: &[f64]) -> Series {
    let base_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: (open.min(close) - 1.0).max(0.01),
                close,
                volume: 1000,
            }
        })
        .collect();
    Series::new(bars).expect("generated bars are well-formed")
}

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_closes() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..500.0_f64, 0..250)
}

fn arb_span_rows() -> impl Strategy<Value = Vec<(Option<f64>, Option<f64>)>> {
    prop::collection::vec(
        (
            prop::option::of(0.0..100.0_f64),
            prop::option::of(0.0..100.0_f64),
        ),
        0..200,
    )
}

// ── 1. Segment coverage ──────────────────────────────────────────────

proptest! {
    /// Segments are contiguous, non-overlapping, cover every row exactly
    /// once, carry the row predicate as label, and are maximal.
    #[test]
    fn segments_partition_rows(rows in arb_span_rows()) {
        let (span_a, span_b): (Column, Column) = rows.iter().cloned().unzip();
        let segments = segment_cloud(&span_a, &span_b);

        let label = |i: usize| matches!(
            (span_a[i], span_b[i]),
            (Some(a), Some(b)) if a > b
        );

        let mut covered = 0;
        for segment in &segments {
            prop_assert_eq!(segment.start, covered);
            prop_assert!(segment.end >= segment.start);
            prop_assert!(segment.end < rows.len());
            for i in segment.start..=segment.end {
                prop_assert_eq!(label(i), segment.bullish, "label mismatch at row {}", i);
            }
            covered = segment.end + 1;
        }
        prop_assert_eq!(covered, rows.len());

        // Maximality: adjacent segments must alternate.
        for pair in segments.windows(2) {
            prop_assert_ne!(pair[0].bullish, pair[1].bullish);
        }
    }
}

// ── 2. Trailing SMA warmup ───────────────────────────────────────────

proptest! {
    /// The trailing SMA over window w has exactly max(0, n-w+1) defined
    /// values, all at the tail, and matches the naive mean where defined.
    #[test]
    fn trailing_sma_warmup(closes in arb_closes(), window in 1_usize..60) {
        let series = make_series(&closes);
        let params = MaParams {
            long_window: window,
            short_window: window,
            centered_window: 1,
        };
        let averages = MovingAverages::compute(&series, &params);
        let n = closes.len();

        let expected_defined = if n >= window { n - window + 1 } else { 0 };
        let defined = averages.sma_long.iter().filter(|v| v.is_some()).count();
        prop_assert_eq!(defined, expected_defined);

        if expected_defined > 0 {
            prop_assert!(averages.sma_long[..window - 1].iter().all(Option::is_none));
            // Spot-check the last row against the naive mean.
            let naive: f64 =
                closes[n - window..].iter().sum::<f64>() / window as f64;
            prop_assert!((averages.sma_long[n - 1].unwrap() - naive).abs() < 1e-6);
        }
    }
}

// ── 3. Bollinger ordering ────────────────────────────────────────────

proptest! {
    /// Wherever all three bands are defined, upper >= mid >= lower and the
    /// inner pair sits inside the outer pair.
    #[test]
    fn bollinger_band_ordering(closes in arb_closes()) {
        let series = make_series(&closes);
        let bands = BollingerBands::compute(&series, &BollingerParams::default());

        for i in 0..closes.len() {
            if let (Some(upper), Some(mid), Some(lower)) =
                (bands.upper[i], bands.mid[i], bands.lower[i])
            {
                prop_assert!(upper >= mid);
                prop_assert!(mid >= lower);
                prop_assert!(bands.upper_inner[i].unwrap() <= upper);
                prop_assert!(bands.lower_inner[i].unwrap() >= lower);
            }
        }
    }
}

// ── 4. Lagging line ──────────────────────────────────────────────────

proptest! {
    /// The lagging line reads close exactly `displacement` rows ahead and
    /// is None for the final `displacement` rows.
    #[test]
    fn lagging_line_reads_ahead(closes in arb_closes(), displacement in 0_usize..40) {
        let series = make_series(&closes);
        let params = IchimokuParams {
            displacement,
            ..IchimokuParams::default()
        };
        let lines = Ichimoku::compute(&series, &params);
        let n = closes.len();

        for i in 0..n {
            if i + displacement < n {
                prop_assert_eq!(lines.lagging[i], Some(closes[i + displacement]));
            } else {
                prop_assert_eq!(lines.lagging[i], None);
            }
        }
    }
}
