//! Purchase and sale eligibility checks.

use chrono::{DateTime, Duration, Utc};
use kquant_core::types::{Position, PurchaseHistory};
use serde::{Deserialize, Serialize};

/// Per-symbol purchase limits. Immutable for the duration of a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLimits {
    /// Maximum shares held per symbol
    pub max_quantity_per_symbol: i64,
    /// Maximum number of purchases per symbol
    pub max_purchases_per_symbol: u32,
    /// Hours to wait between purchases of the same symbol
    pub purchase_cooldown_hours: i64,
    /// Hours a position must be held before it may be sold
    pub min_holding_period_hours: i64,
}

impl Default for PurchaseLimits {
    fn default() -> Self {
        Self {
            max_quantity_per_symbol: 300,
            max_purchases_per_symbol: 3,
            purchase_cooldown_hours: 48,
            min_holding_period_hours: 24,
        }
    }
}

/// Result of an eligibility check.
///
/// Rejection is expected operation, not an error; it is never raised.
#[derive(Debug, Clone, PartialEq)]
pub enum GateCheck {
    /// Trade permitted
    Allowed,
    /// Trade rejected with reason
    Rejected { reason: String },
}

impl GateCheck {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateCheck::Allowed)
    }

    /// The rejection reason, if rejected.
    pub fn reason(&self) -> Option<&str> {
        match self {
            GateCheck::Allowed => None,
            GateCheck::Rejected { reason } => Some(reason),
        }
    }
}

/// The rule set deciding whether a trade of a symbol is currently permitted.
#[derive(Debug, Clone)]
pub struct EligibilityGate {
    limits: PurchaseLimits,
}

impl EligibilityGate {
    /// Create a gate with the given limits.
    pub fn new(limits: PurchaseLimits) -> Self {
        Self { limits }
    }

    /// The configured limits.
    pub fn limits(&self) -> &PurchaseLimits {
        &self.limits
    }

    /// Check whether a new purchase is permitted.
    ///
    /// Checks run in strict order and short-circuit on the first failure:
    /// held quantity, then purchase count, then cooldown.
    pub fn check_purchase(
        &self,
        position: Option<&Position>,
        history: Option<&PurchaseHistory>,
        now: DateTime<Utc>,
    ) -> GateCheck {
        let quantity = position.map(|p| p.quantity).unwrap_or(0);
        if quantity >= self.limits.max_quantity_per_symbol {
            return GateCheck::Rejected {
                reason: format!(
                    "max quantity exceeded ({}/{} shares)",
                    quantity, self.limits.max_quantity_per_symbol
                ),
            };
        }

        let purchase_count = history.map(|h| h.purchase_count).unwrap_or(0);
        if purchase_count >= self.limits.max_purchases_per_symbol {
            return GateCheck::Rejected {
                reason: format!(
                    "max purchase count exceeded ({}/{})",
                    purchase_count, self.limits.max_purchases_per_symbol
                ),
            };
        }

        if let Some(last) = history.and_then(|h| h.last_purchase_time) {
            let cooldown = Duration::hours(self.limits.purchase_cooldown_hours);
            let elapsed = now - last;
            if elapsed < cooldown {
                let remaining_hours = self.limits.purchase_cooldown_hours as f64
                    - elapsed.num_seconds() as f64 / 3600.0;
                return GateCheck::Rejected {
                    reason: format!("cooldown active ({:.1}h remaining)", remaining_hours),
                };
            }
        }

        GateCheck::Allowed
    }

    /// Check whether a sale is permitted: shares must be held, and the
    /// position must be older than the minimum holding period.
    pub fn check_sale(
        &self,
        position: Option<&Position>,
        history: Option<&PurchaseHistory>,
        now: DateTime<Utc>,
    ) -> GateCheck {
        let quantity = position.map(|p| p.quantity).unwrap_or(0);
        if quantity <= 0 {
            return GateCheck::Rejected {
                reason: "no position held".to_string(),
            };
        }

        if let Some(first) = history.and_then(|h| h.first_purchase_time) {
            let min_holding = Duration::hours(self.limits.min_holding_period_hours);
            let held = now - first;
            if held < min_holding {
                let remaining_hours = self.limits.min_holding_period_hours as f64
                    - held.num_seconds() as f64 / 3600.0;
                return GateCheck::Rejected {
                    reason: format!(
                        "minimum holding period not met ({:.1}h remaining)",
                        remaining_hours
                    ),
                };
            }
        }

        GateCheck::Allowed
    }
}
