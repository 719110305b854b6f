//! Analysis configuration — window parameters for the indicator engine.
//!
//! Defaults mirror the classic daily-chart settings (200/50/5 moving
//! averages, 20-period 2-sigma Bollinger, 9/26/52 Ichimoku with a 26-row
//! displacement). Loadable from TOML; validation fails fast on windows that
//! would make a transform meaningless.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Moving-average windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaParams {
    /// Long trailing SMA window.
    pub long_window: usize,
    /// Short trailing SMA window.
    pub short_window: usize,
    /// Centered SMA window; must be odd.
    pub centered_window: usize,
}

impl Default for MaParams {
    fn default() -> Self {
        Self {
            long_window: 200,
            short_window: 50,
            centered_window: 5,
        }
    }
}

/// Bollinger Band window and multipliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BollingerParams {
    pub window: usize,
    /// Outer band distance in standard deviations.
    pub outer_multiplier: f64,
    /// Inner "no-man's-zone" distance in standard deviations.
    pub inner_multiplier: f64,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            window: 20,
            outer_multiplier: 2.0,
            inner_multiplier: 1.0,
        }
    }
}

/// Ichimoku windows and cloud displacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IchimokuParams {
    pub conversion_window: usize,
    pub baseline_window: usize,
    pub span_b_window: usize,
    /// Rows the spans are projected ahead (and the lagging line behind).
    pub displacement: usize,
}

impl Default for IchimokuParams {
    fn default() -> Self {
        Self {
            conversion_window: 9,
            baseline_window: 26,
            span_b_window: 52,
            displacement: 26,
        }
    }
}

/// Top-level analysis configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub moving_averages: MaParams,
    pub bollinger: BollingerParams,
    pub ichimoku: IchimokuParams,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{name} must be >= {min}, got {value}")]
    WindowTooSmall {
        name: &'static str,
        value: usize,
        min: usize,
    },

    #[error("centered window must be odd, got {value}")]
    CenteredWindowEven { value: usize },

    #[error("{name} must be positive and finite, got {value}")]
    BadMultiplier { name: &'static str, value: f64 },

    #[error("inner multiplier {inner} must be below outer multiplier {outer}")]
    MultiplierOrder { inner: f64, outer: f64 },
}

impl AnalysisConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let windows = [
            ("moving_averages.long_window", self.moving_averages.long_window, 1),
            ("moving_averages.short_window", self.moving_averages.short_window, 1),
            ("moving_averages.centered_window", self.moving_averages.centered_window, 1),
            ("bollinger.window", self.bollinger.window, 2),
            ("ichimoku.conversion_window", self.ichimoku.conversion_window, 1),
            ("ichimoku.baseline_window", self.ichimoku.baseline_window, 1),
            ("ichimoku.span_b_window", self.ichimoku.span_b_window, 1),
        ];
        for (name, value, min) in windows {
            if value < min {
                return Err(ConfigError::WindowTooSmall { name, value, min });
            }
        }

        if self.moving_averages.centered_window % 2 == 0 {
            return Err(ConfigError::CenteredWindowEven {
                value: self.moving_averages.centered_window,
            });
        }

        for (name, value) in [
            ("bollinger.outer_multiplier", self.bollinger.outer_multiplier),
            ("bollinger.inner_multiplier", self.bollinger.inner_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::BadMultiplier { name, value });
            }
        }
        if self.bollinger.inner_multiplier >= self.bollinger.outer_multiplier {
            return Err(ConfigError::MultiplierOrder {
                inner: self.bollinger.inner_multiplier,
                outer: self.bollinger.outer_multiplier,
            });
        }

        Ok(())
    }
}
