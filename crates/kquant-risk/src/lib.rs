//! Purchase eligibility and position sizing.
//!
//! The gate decides whether a trade of a symbol is currently permitted;
//! the sizer turns an accepted buy signal into a whole-share quantity.
//! Neither ever raises for an ordinary "no": rejection and zero-quantity
//! are expected outcomes.

mod eligibility;
pub mod krx;
mod position_sizer;

pub use eligibility::{EligibilityGate, GateCheck, PurchaseLimits};
pub use position_sizer::{FlatAllocation, PositionSizer, SteppedAllocation, StrengthCurve};
