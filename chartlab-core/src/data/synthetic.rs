//! Synthetic price source — seeded geometric random walk over weekdays.
//!
//! Deterministic for a given (seed, ticker) pair, so tests and demos get
//! reproducible series without touching the network. Every ticker exists;
//! the walk parameters are the same for all of them.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Bar, Series};

use super::{PriceSource, SourceError};

/// Seeded random-walk price source.
pub struct RandomWalkSource {
    seed: u64,
    start_price: f64,
    daily_move: f64,
}

impl RandomWalkSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            start_price: 100.0,
            daily_move: 0.02,
        }
    }

    pub fn with_walk(seed: u64, start_price: f64, daily_move: f64) -> Self {
        assert!(start_price > 0.0, "start price must be positive");
        assert!(
            daily_move > 0.0 && daily_move < 1.0,
            "daily move must be in (0, 1)"
        );
        Self {
            seed,
            start_price,
            daily_move,
        }
    }

    /// Fold the ticker into the seed so different tickers walk differently.
    fn rng_for(&self, ticker: &str) -> StdRng {
        let mixed = ticker
            .bytes()
            .fold(self.seed, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
        StdRng::seed_from_u64(mixed)
    }
}

impl PriceSource for RandomWalkSource {
    fn name(&self) -> &str {
        "random-walk"
    }

    fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Series, SourceError> {
        let mut rng = self.rng_for(ticker);
        let mut bars = Vec::new();
        let mut close = self.start_price;

        let mut date = start;
        while date <= end {
            if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                let open = close;
                let ret: f64 = rng.gen_range(-self.daily_move..self.daily_move);
                close = open * (1.0 + ret);
                let high = open.max(close) * (1.0 + rng.gen_range(0.0..self.daily_move / 2.0));
                let low = open.min(close) * (1.0 - rng.gen_range(0.0..self.daily_move / 2.0));
                let volume = rng.gen_range(100_000..5_000_000);
                bars.push(Bar {
                    date,
                    open,
                    high,
                    low,
                    close,
                    volume,
                });
            }
            match date.checked_add_days(Days::new(1)) {
                Some(next) => date = next,
                None => break,
            }
        }

        Series::new(bars).map_err(|source| SourceError::Malformed {
            ticker: ticker.to_string(),
            source,
        })
    }

    fn description(&self, ticker: &str) -> Result<String, SourceError> {
        Ok(format!("{ticker} (synthetic random walk)"))
    }
}
