//! Full render path: synthetic source -> transforms -> all three figures.

use chrono::NaiveDate;

use chartlab_core::config::AnalysisConfig;
use chartlab_core::data::{PriceSource, RandomWalkSource};
use chartlab_core::indicators::{BollingerBands, Ichimoku, MovingAverages};
use chartlab_core::ChartAdapter;
use chartlab_plot::{default_fill_color, FigureAdapter, Trace};

#[test]
fn all_three_charts_build_from_one_series() {
    let source = RandomWalkSource::new(5);
    let ticker = "ACME";
    let series = source
        .fetch(
            ticker,
            NaiveDate::from_ymd_opt(2022, 1, 3).unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
        )
        .unwrap();
    let title = source.description(ticker).unwrap();
    let config = AnalysisConfig::default();
    let adapter = FigureAdapter::new();

    let averages = MovingAverages::compute(&series, &config.moving_averages);
    let ma_figure = adapter.moving_average_chart(&series, &averages, &title);
    assert_eq!(
        ma_figure.title,
        "ACME (synthetic random walk) Moving Averages"
    );
    assert_eq!(ma_figure.traces.len(), 4);

    let bands = BollingerBands::compute(&series, &config.bollinger);
    let bb_figure = adapter.bollinger_chart(&series, &bands, &title);
    assert_eq!(bb_figure.traces.len(), 5);

    let lines = Ichimoku::compute(&series, &config.ichimoku);
    let segments = lines.cloud_segments();
    let cloud_figure =
        adapter.ichimoku_chart(&series, &lines, &segments, &default_fill_color, &title);
    // One band per segment plus five lines and the candlestick.
    assert_eq!(cloud_figure.traces.len(), segments.len() + 6);

    // Every trace spans the full series except the per-segment bands.
    for figure in [&ma_figure, &bb_figure, &cloud_figure] {
        let json = figure.to_json().unwrap();
        assert!(json.contains("\"type\":"));
        for trace in &figure.traces {
            match trace {
                Trace::Candlestick { dates, .. } | Trace::Line { dates, .. } => {
                    assert_eq!(dates.len(), series.len());
                }
                Trace::FilledBand { dates, upper, lower, .. } => {
                    assert!(!dates.is_empty());
                    assert_eq!(dates.len(), upper.len());
                    assert_eq!(dates.len(), lower.len());
                }
            }
        }
    }
}
