//! Domain types: bars and the ordered series they form.

pub mod bar;
pub mod series;

pub use bar::{Bar, BarError};
pub use series::{Series, SeriesError};
