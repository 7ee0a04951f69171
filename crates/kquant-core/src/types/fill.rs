//! Order side and confirmed fills.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Get the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// A confirmed execution reported by the order gateway.
///
/// Position state is updated only from fills, never from submitted orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fill {
    /// Symbol that traded
    pub symbol: String,
    /// Buy or sell
    pub side: Side,
    /// Executed share count (whole shares)
    pub quantity: i64,
    /// Executed price per share
    pub price: Decimal,
    /// Execution time
    pub executed_at: DateTime<Utc>,
}

impl Fill {
    /// Create a fill record.
    pub fn new(
        symbol: impl Into<String>,
        side: Side,
        quantity: i64,
        price: Decimal,
        executed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            quantity,
            price,
            executed_at,
        }
    }

    /// Total traded value.
    pub fn value(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
