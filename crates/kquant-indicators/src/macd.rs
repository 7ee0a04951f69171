//! MACD table computation with crossover detection.

use kquant_core::types::{Bar, PriceSeries};
use serde::{Deserialize, Serialize};

use crate::{Ema, Indicator};

/// Bars required before MACD(12, 26, 9) output is considered usable.
pub const MACD_MIN_BARS: usize = 35;

/// Crossover state of the MACD line against its signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CrossFlag {
    /// MACD line crossed above the signal line on this bar
    GoldenCross,
    /// MACD line crossed below the signal line on this bar
    DeadCross,
    #[default]
    None,
}

/// One bar with its derived MACD fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacdRow {
    /// The source bar
    pub bar: Bar,
    /// Fast EMA of close
    pub ema_fast: f64,
    /// Slow EMA of close
    pub ema_slow: f64,
    /// ema_fast - ema_slow
    pub macd_line: f64,
    /// EMA of macd_line
    pub macd_signal: f64,
    /// macd_line - macd_signal
    pub macd_histogram: f64,
    /// Crossover flag for this bar (index 0 is always None)
    pub cross: CrossFlag,
}

/// Derived MACD series for one symbol.
///
/// Empty when the source series was too short or had no usable closes;
/// callers must treat that as "insufficient data", not as a failure.
#[derive(Debug, Clone, Default)]
pub struct MacdTable {
    rows: Vec<MacdRow>,
}

impl MacdTable {
    /// Whether usable MACD output is present.
    pub fn ready(&self) -> bool {
        !self.rows.is_empty()
    }

    /// All rows, oldest first.
    pub fn rows(&self) -> &[MacdRow] {
        &self.rows
    }

    /// The most recent row.
    pub fn last(&self) -> Option<&MacdRow> {
        self.rows.last()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Most recent crossover strictly within the trailing `lookback` rows.
    ///
    /// Returns the flag and its age in rows (latest row = age 0).
    pub fn recent_cross(&self, lookback: usize) -> Option<(CrossFlag, usize)> {
        let window = self.rows.len().min(lookback);
        self.rows
            .iter()
            .rev()
            .take(window)
            .enumerate()
            .find(|(_, row)| row.cross != CrossFlag::None)
            .map(|(age, row)| (row.cross, age))
    }
}

/// MACD engine.
///
/// Pure transform from a price series to a [`MacdTable`]; the caller's
/// series is never mutated.
#[derive(Debug, Clone)]
pub struct Macd {
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
    min_bars: usize,
}

impl Macd {
    /// Create a MACD engine with the standard spans (12, 26, 9).
    pub fn new() -> Self {
        Self::with_spans(12, 26, 9)
    }

    /// Create a MACD engine with custom spans.
    pub fn with_spans(fast: usize, slow: usize, signal: usize) -> Self {
        assert!(fast > 0 && slow > 0 && signal > 0);
        assert!(fast < slow, "Fast span must be less than slow span");
        Self {
            fast_span: fast,
            slow_span: slow,
            signal_span: signal,
            min_bars: slow + signal,
        }
    }

    /// Bars required before output is produced.
    pub fn min_bars(&self) -> usize {
        self.min_bars
    }

    /// Compute the MACD table for a series.
    ///
    /// A series shorter than `min_bars`, or with no finite close at all,
    /// yields an empty table.
    pub fn compute(&self, series: &PriceSeries) -> MacdTable {
        if series.len() < self.min_bars {
            tracing::debug!(
                symbol = %series.symbol,
                bars = series.len(),
                required = self.min_bars,
                "series too short for MACD"
            );
            return MacdTable::default();
        }

        let closes = match filled_closes(&series.closes()) {
            Some(closes) => closes,
            None => {
                tracing::warn!(symbol = %series.symbol, "no usable closes in series");
                return MacdTable::default();
            }
        };

        let ema_fast = Ema::new(self.fast_span).calculate(&closes);
        let ema_slow = Ema::new(self.slow_span).calculate(&closes);

        let macd_line: Vec<f64> = ema_fast
            .iter()
            .zip(ema_slow.iter())
            .map(|(f, s)| f - s)
            .collect();
        let macd_signal = Ema::new(self.signal_span).calculate(&macd_line);

        let rows = series
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let cross = if i == 0 {
                    CrossFlag::None
                } else {
                    detect_cross(
                        macd_line[i],
                        macd_signal[i],
                        macd_line[i - 1],
                        macd_signal[i - 1],
                    )
                };
                MacdRow {
                    bar: *bar,
                    ema_fast: ema_fast[i],
                    ema_slow: ema_slow[i],
                    macd_line: macd_line[i],
                    macd_signal: macd_signal[i],
                    macd_histogram: macd_line[i] - macd_signal[i],
                    cross,
                }
            })
            .collect();

        MacdTable { rows }
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

fn detect_cross(line: f64, signal: f64, prev_line: f64, prev_signal: f64) -> CrossFlag {
    if line > signal && prev_line <= prev_signal {
        CrossFlag::GoldenCross
    } else if line < signal && prev_line >= prev_signal {
        CrossFlag::DeadCross
    } else {
        CrossFlag::None
    }
}

/// Forward-fill non-finite closes; the leading gap takes the first finite
/// value. Returns None when no close is usable.
fn filled_closes(closes: &[f64]) -> Option<Vec<f64>> {
    let first_finite = closes.iter().copied().find(|c| c.is_finite())?;

    let mut filled = Vec::with_capacity(closes.len());
    let mut carry = first_finite;
    for &close in closes {
        if close.is_finite() {
            carry = close;
        }
        filled.push(carry);
    }
    Some(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kquant_core::types::Timeframe;

    fn series_from_closes(closes: &[f64]) -> PriceSeries {
        let mut series = PriceSeries::new("TEST".to_string(), Timeframe::Daily);
        for (i, &close) in closes.iter().enumerate() {
            series.push(Bar::new(
                (i as i64 + 1) * 86_400_000,
                close,
                close + 1.0,
                close - 1.0,
                close,
                1000.0,
            ));
        }
        series
    }

    #[test]
    fn test_short_series_not_ready() {
        let macd = Macd::new();
        let series = series_from_closes(&vec![1000.0; MACD_MIN_BARS - 1]);

        let table = macd.compute(&series);
        assert!(!table.ready());
        assert!(table.is_empty());
    }

    #[test]
    fn test_min_bars_boundary() {
        let macd = Macd::new();
        let series = series_from_closes(&vec![1000.0; MACD_MIN_BARS]);

        let table = macd.compute(&series);
        assert!(table.ready());
        assert_eq!(table.len(), MACD_MIN_BARS);
    }

    #[test]
    fn test_constant_series_is_flat() {
        let macd = Macd::new();
        let series = series_from_closes(&vec![1000.0; 40]);

        let table = macd.compute(&series);
        for row in table.rows() {
            assert!(row.macd_line.abs() < 1e-9);
            assert!(row.macd_signal.abs() < 1e-9);
            assert!(row.macd_histogram.abs() < 1e-9);
            assert_eq!(row.cross, CrossFlag::None);
        }
    }

    #[test]
    fn test_rising_series_macd_turns_positive() {
        let macd = Macd::new();
        let closes: Vec<f64> = (0..40).map(|i| 900.0 + i as f64 * (200.0 / 39.0)).collect();
        let series = series_from_closes(&closes);

        let table = macd.compute(&series);
        assert!(table.ready());
        let last = table.last().unwrap();
        assert!(last.macd_line > 0.0);

        // Once positive the line stays positive for a steady climb.
        let first_positive = table
            .rows()
            .iter()
            .position(|r| r.macd_line > 0.0)
            .expect("macd line never went positive");
        for row in &table.rows()[first_positive..] {
            assert!(row.macd_line > 0.0);
        }
    }

    #[test]
    fn test_index_zero_never_crosses() {
        let macd = Macd::new();
        let closes: Vec<f64> = (0..40).map(|i| 1000.0 + (i as f64).sin() * 50.0).collect();
        let series = series_from_closes(&closes);

        let table = macd.compute(&series);
        assert_eq!(table.rows()[0].cross, CrossFlag::None);
    }

    #[test]
    fn test_cross_symmetry_under_reflection() {
        // Reflecting every close around a pivot negates the MACD and signal
        // lines, so a golden cross must appear as a dead cross at the same
        // index in the reflected series.
        let macd = Macd::new();
        let closes: Vec<f64> = (0..60)
            .map(|i| 1000.0 + (i as f64 * 0.4).sin() * 80.0)
            .collect();
        let reflected: Vec<f64> = closes.iter().map(|c| 2000.0 - c).collect();

        let table = macd.compute(&series_from_closes(&closes));
        let mirror = macd.compute(&series_from_closes(&reflected));

        let mut saw_cross = false;
        for (row, mirrored) in table.rows().iter().zip(mirror.rows()) {
            match row.cross {
                CrossFlag::GoldenCross => {
                    saw_cross = true;
                    assert_eq!(mirrored.cross, CrossFlag::DeadCross);
                }
                CrossFlag::DeadCross => {
                    saw_cross = true;
                    assert_eq!(mirrored.cross, CrossFlag::GoldenCross);
                }
                CrossFlag::None => assert_eq!(mirrored.cross, CrossFlag::None),
            }
        }
        assert!(saw_cross, "oscillating series produced no crosses");
    }

    #[test]
    fn test_forward_fill_gaps() {
        let mut closes: Vec<f64> = (0..40).map(|i| 1000.0 + i as f64).collect();
        closes[5] = f64::NAN;
        closes[6] = f64::NAN;
        let series = series_from_closes(&closes);

        let macd = Macd::new();
        let table = macd.compute(&series);
        assert!(table.ready());
        for row in table.rows() {
            assert!(row.macd_line.is_finite());
            assert!(row.macd_signal.is_finite());
        }
    }

    #[test]
    fn test_all_missing_closes() {
        let series = series_from_closes(&vec![f64::NAN; 40]);

        let macd = Macd::new();
        let table = macd.compute(&series);
        assert!(!table.ready());
    }

    #[test]
    fn test_recent_cross_window() {
        let macd = Macd::new();
        let closes: Vec<f64> = (0..60)
            .map(|i| 1000.0 + (i as f64 * 0.4).sin() * 80.0)
            .collect();
        let table = macd.compute(&series_from_closes(&closes));

        if let Some((flag, age)) = table.recent_cross(5) {
            assert!(age < 5);
            assert_ne!(flag, CrossFlag::None);
            // The reported cross really is the youngest one.
            let from_end = table.len() - 1 - age;
            for row in &table.rows()[from_end + 1..] {
                assert_eq!(row.cross, CrossFlag::None);
            }
        }
    }
}
