//! ChartLab Core — indicator engine, cloud segmenter, and series store.
//!
//! This crate contains the computation layer of ChartLab:
//! - Domain types (daily bars, the validated ordered series)
//! - Indicator engine (moving averages, returns, Bollinger Bands, Ichimoku)
//! - Cloud segmenter (run-length grouping of span dominance for the fill)
//! - Data-source boundary (`PriceSource` trait, CSV and synthetic sources)
//! - Chart adapter contract (figure construction stays outside the core)
//! - Analysis configuration (indicator windows, TOML-loadable)
//!
//! Indicator columns are `Vec<Option<f64>>`: warmup rows and shift overruns
//! are explicit `None`, never a sentinel value. Every transform is total
//! over well-formed series, including empty ones.

pub mod chart;
pub mod cloud;
pub mod config;
pub mod data;
pub mod domain;
pub mod indicators;

pub use chart::{ChartAdapter, FillColorFn};
pub use cloud::{segment_cloud, Segment};
pub use config::{AnalysisConfig, BollingerParams, ConfigError, IchimokuParams, MaParams};
pub use data::{PriceSource, SourceError};
pub use domain::{Bar, BarError, Series, SeriesError};
pub use indicators::{BollingerBands, Column, Ichimoku, MovingAverages, Returns};
