//! Technical indicators for the KRX signal toolkit.
//!
//! Provides the derived series the signal layer consumes:
//! - Exponential moving averages
//! - MACD line/signal/histogram with crossover flags
//! - Rate-of-change momentum
//!
//! All computations are pure transforms over an input series; caller-owned
//! data is never mutated.

mod ema;
mod macd;
mod momentum;

pub use ema::Ema;
pub use macd::{CrossFlag, Macd, MacdRow, MacdTable, MACD_MIN_BARS};
pub use momentum::Roc;

use kquant_core::error::IndicatorError;

/// Trait for single-output technical indicators.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    fn calculate(&self, data: &[f64]) -> Vec<Self::Output>;

    /// Get the minimum data points required.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Validate that there's enough data.
    fn validate_data(&self, data: &[f64]) -> Result<(), IndicatorError> {
        if data.len() < self.period() {
            return Err(IndicatorError::InsufficientData {
                required: self.period(),
                available: data.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_data() {
        let ema = Ema::new(5);
        assert!(ema.validate_data(&[1.0, 2.0]).is_err());
        assert!(ema.validate_data(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_ok());
    }
}
