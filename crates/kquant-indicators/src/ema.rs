//! Exponential moving average.

use crate::Indicator;

/// Exponential Moving Average (EMA).
///
/// Uses the recursive definition seeded from the first value:
/// `ema[0] = price[0]`, `ema[i] = price[i]*k + ema[i-1]*(1-k)` with
/// `k = 2/(span+1)`. Output has the same length as the input, one value
/// per bar from index 0. Spans 12/26/9 must reproduce the reference MACD
/// outputs exactly, so this is deliberately not the SMA-seeded variant.
#[derive(Debug, Clone)]
pub struct Ema {
    span: usize,
    multiplier: f64,
}

impl Ema {
    /// Create a new EMA with the specified span.
    pub fn new(span: usize) -> Self {
        assert!(span > 0, "Span must be greater than 0");
        let multiplier = 2.0 / (span as f64 + 1.0);
        Self { span, multiplier }
    }

    /// The smoothing factor `k = 2/(span+1)`.
    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        let mut result = Vec::with_capacity(data.len());
        let one_minus_mult = 1.0 - self.multiplier;

        let mut ema = match data.first() {
            Some(&first) => first,
            None => return result,
        };
        result.push(ema);

        for &price in &data[1..] {
            ema = price * self.multiplier + ema * one_minus_mult;
            result.push(ema);
        }

        result
    }

    fn period(&self) -> usize {
        self.span
    }

    fn name(&self) -> &str {
        "EMA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ema_seeded_from_first_value() {
        let ema = Ema::new(3); // k = 0.5
        let data = vec![2.0, 4.0, 8.0];
        let result = ema.calculate(&data);

        assert_eq!(result.len(), 3);
        assert!((result[0] - 2.0).abs() < 1e-12);
        // 4*0.5 + 2*0.5 = 3
        assert!((result[1] - 3.0).abs() < 1e-12);
        // 8*0.5 + 3*0.5 = 5.5
        assert!((result[2] - 5.5).abs() < 1e-12);
    }

    #[test]
    fn test_ema_constant_series() {
        let ema = Ema::new(12);
        let data = vec![1000.0; 40];
        let result = ema.calculate(&data);

        assert_eq!(result.len(), 40);
        for value in result {
            assert!((value - 1000.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ema_empty_input() {
        let ema = Ema::new(12);
        assert!(ema.calculate(&[]).is_empty());
    }

    #[test]
    fn test_ema_tracks_rising_series() {
        let ema = Ema::new(5);
        let data: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
        let result = ema.calculate(&data);

        // The EMA lags a rising series but stays monotonically increasing.
        for pair in result.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        assert!(*result.last().unwrap() < *data.last().unwrap());
    }
}
