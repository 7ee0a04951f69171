//! CSV price source.

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use kquant_core::error::DataError;
use kquant_core::types::{Bar, PriceSeries, Timeframe};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CSV record format.
///
/// Accepts both the generic OHLCV header set and the KIS daily-chart
/// column names.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(
        alias = "Date",
        alias = "date",
        alias = "timestamp",
        alias = "stck_bsop_date"
    )]
    date: String,
    #[serde(alias = "Open", alias = "open", alias = "stck_oprc")]
    open: f64,
    #[serde(alias = "High", alias = "high", alias = "stck_hgpr")]
    high: f64,
    #[serde(alias = "Low", alias = "low", alias = "stck_lwpr")]
    low: f64,
    #[serde(alias = "Close", alias = "close", alias = "stck_clpr")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", alias = "acml_vol", default)]
    volume: f64,
}

/// CSV source for one symbol's historical bars.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    /// Create a new CSV source.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DataError> {
        let path = path.into();
        if !path.exists() {
            return Err(DataError::NoDataAvailable(path.display().to_string()));
        }
        Ok(Self { path })
    }

    /// Load the file into a price series.
    ///
    /// Rows are sorted ascending; the series itself enforces the strictly
    /// increasing timestamp invariant, so duplicate dates collapse to the
    /// first occurrence. An empty file yields an empty series.
    pub fn load(&self, symbol: &str, timeframe: Timeframe) -> Result<PriceSeries, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut bars = Vec::new();
        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            let timestamp = parse_timestamp(&record.date)?;
            bars.push(Bar::new(
                timestamp,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume,
            ));
        }
        bars.sort_by_key(|b| b.timestamp);

        let mut series = PriceSeries::new(symbol.to_string(), timeframe);
        series.extend(bars);

        tracing::debug!(
            symbol,
            bars = series.len(),
            path = %self.path.display(),
            "loaded price series"
        );
        Ok(series)
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse the timestamp formats seen in exported chart data.
fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
    let formats = ["%Y-%m-%d", "%Y-%m-%d %H:%M:%S", "%Y/%m/%d", "%Y%m%d"];

    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc().timestamp_millis());
        }
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            let dt = d.and_hms_opt(0, 0, 0).unwrap();
            return Ok(dt.and_utc().timestamp_millis());
        }
    }

    // Unix timestamp; assume milliseconds past 10 digits.
    if let Ok(ts) = date_str.parse::<i64>() {
        if ts > 10_000_000_000 {
            return Ok(ts);
        }
        return Ok(ts * 1000);
    }

    Err(DataError::ParseError(format!(
        "Could not parse date: {}",
        date_str
    )))
}
