//! Position sizing.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Maps signal strength to a fraction of the position budget.
///
/// The exact scaling is policy; implementations are selected at
/// construction time and injected into the sizer.
pub trait StrengthCurve: Send + Sync {
    /// Fraction of the budget to allocate, in [0, 1].
    fn allocation_ratio(&self, strength: f64) -> Decimal;

    /// Get the name of the curve.
    fn name(&self) -> &str;
}

/// Stepped allocation: weak signals get nothing, strong signals the full
/// budget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SteppedAllocation;

impl StrengthCurve for SteppedAllocation {
    fn allocation_ratio(&self, strength: f64) -> Decimal {
        if strength < 0.5 {
            Decimal::ZERO
        } else if strength < 1.0 {
            dec!(0.2)
        } else if strength < 2.0 {
            dec!(0.4)
        } else if strength < 3.0 {
            dec!(0.6)
        } else if strength < 4.0 {
            dec!(0.8)
        } else {
            Decimal::ONE
        }
    }

    fn name(&self) -> &str {
        "stepped"
    }
}

/// Flat allocation: the full budget regardless of strength.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlatAllocation;

impl StrengthCurve for FlatAllocation {
    fn allocation_ratio(&self, _strength: f64) -> Decimal {
        Decimal::ONE
    }

    fn name(&self) -> &str {
        "flat"
    }
}

/// Position sizer.
///
/// Budget = available cash x max position ratio; the strength curve scales
/// the budget; the result is floored to whole shares. A zero quantity means
/// "skip this purchase", never an error.
pub struct PositionSizer {
    max_ratio: Decimal,
    min_investment: Decimal,
    curve: Box<dyn StrengthCurve>,
}

impl PositionSizer {
    /// Create a sizer with the given cash ratio and the stepped curve.
    pub fn new(max_ratio: Decimal) -> Self {
        Self {
            max_ratio: max_ratio.clamp(Decimal::ZERO, Decimal::ONE),
            min_investment: dec!(100000),
            curve: Box::new(SteppedAllocation),
        }
    }

    /// Set the minimum investment per order.
    pub fn with_min_investment(mut self, min_investment: Decimal) -> Self {
        self.min_investment = min_investment;
        self
    }

    /// Replace the strength curve.
    pub fn with_curve(mut self, curve: Box<dyn StrengthCurve>) -> Self {
        self.curve = curve;
        self
    }

    /// The active curve's name.
    pub fn curve_name(&self) -> &str {
        self.curve.name()
    }

    /// Calculate the order quantity in whole shares.
    ///
    /// An allocation below the minimum investment is bumped up to it when
    /// cash allows, otherwise the purchase is skipped.
    pub fn calculate(&self, available_cash: Decimal, price: Decimal, strength: f64) -> i64 {
        if price <= Decimal::ZERO || available_cash <= Decimal::ZERO {
            return 0;
        }

        let ratio = self.curve.allocation_ratio(strength);
        if ratio <= Decimal::ZERO {
            tracing::debug!(strength, "strength below allocation floor, skipping");
            return 0;
        }

        let budget = available_cash * self.max_ratio;
        let mut allocation = budget * ratio;

        if allocation < self.min_investment {
            if available_cash >= self.min_investment {
                allocation = self.min_investment;
            } else {
                return 0;
            }
        }

        let quantity = (allocation / price).floor().to_i64().unwrap_or(0);
        quantity.max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_sizer(max_ratio: Decimal) -> PositionSizer {
        PositionSizer::new(max_ratio).with_curve(Box::new(FlatAllocation))
    }

    #[test]
    fn test_base_allocation_floor() {
        let sizer = flat_sizer(dec!(0.2));

        // 1,000,000 * 0.2 = 200,000 budget at 50,000/share -> 4 shares.
        assert_eq!(sizer.calculate(dec!(1000000), dec!(50000), 2.0), 4);
        // 200,000 / 60,000 = 3.33 -> floored to 3, never rounded up.
        assert_eq!(sizer.calculate(dec!(1000000), dec!(60000), 2.0), 3);
    }

    #[test]
    fn test_zero_and_negative_inputs() {
        let sizer = flat_sizer(dec!(0.2));

        assert_eq!(sizer.calculate(Decimal::ZERO, dec!(50000), 2.0), 0);
        assert_eq!(sizer.calculate(dec!(1000000), Decimal::ZERO, 2.0), 0);
        assert_eq!(sizer.calculate(dec!(-5), dec!(50000), 2.0), 0);
    }

    #[test]
    fn test_stepped_curve_boundaries() {
        let curve = SteppedAllocation;

        assert_eq!(curve.allocation_ratio(0.4), Decimal::ZERO);
        assert_eq!(curve.allocation_ratio(0.5), dec!(0.2));
        assert_eq!(curve.allocation_ratio(1.0), dec!(0.4));
        assert_eq!(curve.allocation_ratio(2.0), dec!(0.6));
        assert_eq!(curve.allocation_ratio(3.0), dec!(0.8));
        assert_eq!(curve.allocation_ratio(4.0), Decimal::ONE);
        assert_eq!(curve.allocation_ratio(5.5), Decimal::ONE);
    }

    #[test]
    fn test_weak_signal_skips() {
        let sizer = PositionSizer::new(dec!(0.2));
        assert_eq!(sizer.calculate(dec!(10000000), dec!(50000), 0.3), 0);
    }

    #[test]
    fn test_stepped_scaling() {
        let sizer = PositionSizer::new(dec!(0.5));

        // 10,000,000 * 0.5 = 5,000,000 budget; strength 2.5 -> 60% ->
        // 3,000,000 at 50,000/share = 60 shares.
        assert_eq!(sizer.calculate(dec!(10000000), dec!(50000), 2.5), 60);
        // strength 4.2 -> full budget -> 100 shares.
        assert_eq!(sizer.calculate(dec!(10000000), dec!(50000), 4.2), 100);
    }

    #[test]
    fn test_min_investment_bump() {
        let sizer = PositionSizer::new(dec!(0.2));

        // Budget 100,000; strength 0.7 -> 20% -> 20,000, below the 100,000
        // minimum; cash covers the minimum so it is bumped -> 10 shares.
        assert_eq!(sizer.calculate(dec!(500000), dec!(10000), 0.7), 10);
    }

    #[test]
    fn test_min_investment_unaffordable() {
        let sizer = PositionSizer::new(dec!(0.2));

        // Allocation below the minimum and cash cannot cover the minimum.
        assert_eq!(sizer.calculate(dec!(80000), dec!(10000), 0.7), 0);
    }

    #[test]
    fn test_ratio_clamped() {
        let sizer = flat_sizer(dec!(1.5));
        // Clamped to 1.0: never allocates more than available cash.
        assert_eq!(sizer.calculate(dec!(1000000), dec!(100000), 2.0), 10);
    }
}
