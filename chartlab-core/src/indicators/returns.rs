//! Daily and cumulative returns of close.
//!
//! Daily: `close[i] / close[i-1] - 1`, `None` at row 0. Cumulative: running
//! product of `1 + daily` starting at row 1. Row 0 has no prior close, so
//! both columns leave it `None` rather than seeding the product with a
//! multiplicative identity.

use crate::domain::Series;

use super::Column;

/// Return column group.
#[derive(Debug, Clone, PartialEq)]
pub struct Returns {
    pub daily: Column,
    pub cumulative: Column,
}

impl Returns {
    pub fn compute(series: &Series) -> Self {
        let closes: Vec<f64> = series.closes().collect();
        let n = closes.len();

        let mut daily: Column = vec![None; n];
        let mut cumulative: Column = vec![None; n];

        let mut product = 1.0;
        for i in 1..n {
            let ret = closes[i] / closes[i - 1] - 1.0;
            daily[i] = Some(ret);
            product *= 1.0 + ret;
            cumulative[i] = Some(product);
        }

        Self { daily, cumulative }
    }
}
