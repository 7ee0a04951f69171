//! Price data sources.
//!
//! The toolkit core consumes in-memory series only; this crate covers the
//! one offline surface it has, CSV exports of daily charts.

mod csv_source;

pub use csv_source::CsvSource;

use kquant_core::error::DataError;
use kquant_core::types::{PriceSeries, Timeframe};
use std::path::Path;

/// Load a price series from a CSV file.
pub fn load_csv(
    path: impl AsRef<Path>,
    symbol: &str,
    timeframe: Timeframe,
) -> Result<PriceSeries, DataError> {
    CsvSource::new(path.as_ref())?.load(symbol, timeframe)
}
