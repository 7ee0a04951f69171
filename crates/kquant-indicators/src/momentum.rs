//! Momentum indicators.

use crate::Indicator;

/// Rate of Change (ROC).
///
/// Percentage change of close against the close `period` bars earlier.
#[derive(Debug, Clone)]
pub struct Roc {
    period: usize,
}

impl Roc {
    /// Create a new ROC with the specified lookback.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// Latest momentum value, or None when the series is too short or the
    /// reference close is zero.
    pub fn latest(&self, data: &[f64]) -> Option<f64> {
        if data.len() < self.period + 1 {
            return None;
        }
        let current = *data.last()?;
        let past = data[data.len() - self.period - 1];
        if past != 0.0 {
            Some((current - past) / past)
        } else {
            None
        }
    }
}

impl Indicator for Roc {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() < self.period + 1 {
            return vec![];
        }

        data.windows(self.period + 1)
            .map(|w| {
                let past = w[0];
                let current = w[self.period];
                if past != 0.0 {
                    (current - past) / past
                } else {
                    0.0
                }
            })
            .collect()
    }

    fn period(&self) -> usize {
        self.period + 1
    }

    fn name(&self) -> &str {
        "ROC"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roc_basic() {
        let roc = Roc::new(2);
        let data = vec![100.0, 110.0, 120.0, 126.0];
        let result = roc.calculate(&data);

        assert_eq!(result.len(), 2);
        assert!((result[0] - 0.2).abs() < 1e-12); // (120-100)/100
        assert!((result[1] - (126.0 - 110.0) / 110.0).abs() < 1e-12);
    }

    #[test]
    fn test_roc_latest() {
        let roc = Roc::new(2);
        let data = vec![100.0, 110.0, 120.0, 126.0];

        let latest = roc.latest(&data).unwrap();
        assert!((latest - (126.0 - 110.0) / 110.0).abs() < 1e-12);
    }

    #[test]
    fn test_roc_insufficient_data() {
        let roc = Roc::new(10);
        assert!(roc.calculate(&[1.0, 2.0, 3.0]).is_empty());
        assert!(roc.latest(&[1.0, 2.0, 3.0]).is_none());
    }
}
