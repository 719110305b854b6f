//! ChartLab Plot — the default chart adapter.
//!
//! Implements the core's `ChartAdapter` contract with a serializable figure
//! description: a title, an axis label, and an ordered trace list
//! (candlesticks, styled lines, filled bands). The description carries
//! everything a renderer needs and nothing about how to draw it; `None`
//! column entries serialize as JSON nulls, which is how renderers encode
//! gaps.

use chrono::NaiveDate;
use serde::Serialize;

use chartlab_core::cloud::Segment;
use chartlab_core::domain::Series;
use chartlab_core::indicators::{BollingerBands, Column, Ichimoku, MovingAverages};
use chartlab_core::{ChartAdapter, FillColorFn};

/// Dash pattern for a line trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dash {
    Solid,
    Dash,
    Dot,
}

/// Visual style of a line trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
    pub dash: Dash,
}

impl LineStyle {
    fn new(color: &str, width: f64, dash: Dash) -> Self {
        Self {
            color: color.to_string(),
            width,
            dash,
        }
    }
}

/// One drawable element of a figure, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Candlestick {
        name: String,
        dates: Vec<NaiveDate>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
    },
    Line {
        name: String,
        dates: Vec<NaiveDate>,
        values: Column,
        style: LineStyle,
    },
    /// Region filled between two span slices, one per cloud segment.
    FilledBand {
        dates: Vec<NaiveDate>,
        upper: Column,
        lower: Column,
        fill_color: String,
    },
}

/// A renderable figure description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: String,
    pub y_axis_title: String,
    pub traces: Vec<Trace>,
}

impl Figure {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Default fill-color mapping for cloud segments: translucent green when
/// span A dominates, translucent red otherwise.
pub fn default_fill_color(bullish: bool) -> String {
    if bullish {
        "rgba(0,250,0,0.4)".to_string()
    } else {
        "rgba(250,0,0,0.4)".to_string()
    }
}

/// The default adapter: builds [`Figure`] values from enriched series.
#[derive(Debug, Clone, Copy, Default)]
pub struct FigureAdapter;

impl FigureAdapter {
    pub fn new() -> Self {
        Self
    }

    fn candlestick(series: &Series) -> Trace {
        Trace::Candlestick {
            name: "Candlestick".to_string(),
            dates: series.dates().collect(),
            open: series.bars().iter().map(|bar| bar.open).collect(),
            high: series.highs().collect(),
            low: series.lows().collect(),
            close: series.closes().collect(),
        }
    }

    fn line(name: impl Into<String>, series: &Series, values: &Column, style: LineStyle) -> Trace {
        Trace::Line {
            name: name.into(),
            dates: series.dates().collect(),
            values: values.clone(),
            style,
        }
    }
}

impl ChartAdapter for FigureAdapter {
    type Figure = Figure;

    fn moving_average_chart(
        &self,
        series: &Series,
        averages: &MovingAverages,
        title: &str,
    ) -> Figure {
        let params = &averages.params;
        Figure {
            title: format!("{title} Moving Averages"),
            y_axis_title: "Price".to_string(),
            traces: vec![
                Self::line(
                    format!("{}d SMA", params.long_window),
                    series,
                    &averages.sma_long,
                    LineStyle::new("rgba(0, 150, 255, 0.75)", 2.0, Dash::Solid),
                ),
                Self::line(
                    format!("{}d SMA", params.short_window),
                    series,
                    &averages.sma_short,
                    LineStyle::new("rgba(128, 0, 128, 0.75)", 2.0, Dash::Dash),
                ),
                Self::line(
                    format!("{}d SMA", params.centered_window),
                    series,
                    &averages.sma_centered,
                    LineStyle::new("rgba(0, 0, 0, 1)", 1.0, Dash::Solid),
                ),
                Self::candlestick(series),
            ],
        }
    }

    fn bollinger_chart(&self, series: &Series, bands: &BollingerBands, title: &str) -> Figure {
        Figure {
            title: format!("{title} Bollinger Bands"),
            y_axis_title: "Price".to_string(),
            traces: vec![
                Self::line(
                    "Upper Band",
                    series,
                    &bands.upper,
                    LineStyle::new("rgba(100, 149, 237, 0.75)", 1.0, Dash::Solid),
                ),
                Self::line(
                    "Upper No Mans Zone",
                    series,
                    &bands.upper_inner,
                    LineStyle::new("rgba(100, 149, 237, 0.75)", 1.0, Dash::Dash),
                ),
                Self::line(
                    "Lower Band",
                    series,
                    &bands.lower,
                    LineStyle::new("rgba(255, 140, 0, 0.75)", 1.0, Dash::Solid),
                ),
                Self::line(
                    "Lower No Mans Zone",
                    series,
                    &bands.lower_inner,
                    LineStyle::new("rgba(255, 140, 0, 0.75)", 1.0, Dash::Dash),
                ),
                Self::candlestick(series),
            ],
        }
    }

    fn ichimoku_chart(
        &self,
        series: &Series,
        lines: &Ichimoku,
        segments: &[Segment],
        fill_color: FillColorFn<'_>,
        title: &str,
    ) -> Figure {
        let dates: Vec<NaiveDate> = series.dates().collect();
        let mut traces = Vec::with_capacity(segments.len() + 6);

        // Cloud regions go first so every line paints above the fill.
        for segment in segments {
            let range = segment.start..=segment.end;
            traces.push(Trace::FilledBand {
                dates: dates[range.clone()].to_vec(),
                upper: lines.span_a[range.clone()].to_vec(),
                lower: lines.span_b[range].to_vec(),
                fill_color: fill_color(segment.bullish),
            });
        }

        traces.push(Self::line(
            "Span B",
            series,
            &lines.span_b,
            LineStyle::new("red", 1.0, Dash::Dot),
        ));
        traces.push(Self::line(
            "Span A",
            series,
            &lines.span_a,
            LineStyle::new("green", 2.0, Dash::Dot),
        ));
        traces.push(Self::line(
            "Lag Line",
            series,
            &lines.lagging,
            LineStyle::new("purple", 1.0, Dash::Dot),
        ));
        traces.push(Self::line(
            "Conversion Line",
            series,
            &lines.conversion,
            LineStyle::new("pink", 2.0, Dash::Solid),
        ));
        traces.push(Self::line(
            "Baseline",
            series,
            &lines.baseline,
            LineStyle::new("black", 1.0, Dash::Solid),
        ));
        traces.push(Self::candlestick(series));

        Figure {
            title: format!("{title} Ichimoku"),
            y_axis_title: "Price".to_string(),
            traces,
        }
    }
}
