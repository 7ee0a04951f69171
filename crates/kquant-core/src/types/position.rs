//! Position state and the position book.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Fill, Side};

/// A long position in a single security.
///
/// Updates go through the pure `applying` transform so that every state
/// change is driven by a confirmed fill and auditable at the call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Symbol
    pub symbol: String,
    /// Number of shares held (never negative; this book is long-only)
    pub quantity: i64,
    /// Weighted average entry price
    pub avg_price: Decimal,
}

impl Position {
    /// Create a position from a first purchase.
    pub fn opened(symbol: impl Into<String>, quantity: i64, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            avg_price: price,
        }
    }

    /// Check if the position is flat (no shares).
    pub fn is_flat(&self) -> bool {
        self.quantity == 0
    }

    /// Cost basis (quantity * avg_price).
    pub fn cost_basis(&self) -> Decimal {
        Decimal::from(self.quantity) * self.avg_price
    }

    /// Apply a fill, returning the updated position.
    ///
    /// Purchases fold into the weighted average entry price:
    /// `new_avg = (avg*qty + price*fill_qty) / (qty + fill_qty)`, computed
    /// exactly in `Decimal` with no mid-formula rounding. Sales reduce
    /// quantity at an unchanged average; selling more than held clamps to
    /// flat.
    #[must_use]
    pub fn applying(&self, fill: &Fill) -> Position {
        match fill.side {
            Side::Buy => {
                let new_quantity = self.quantity + fill.quantity;
                if new_quantity == 0 {
                    return Position {
                        symbol: self.symbol.clone(),
                        quantity: 0,
                        avg_price: self.avg_price,
                    };
                }
                let total_cost = self.cost_basis() + fill.value();
                Position {
                    symbol: self.symbol.clone(),
                    quantity: new_quantity,
                    avg_price: total_cost / Decimal::from(new_quantity),
                }
            }
            Side::Sell => {
                let new_quantity = (self.quantity - fill.quantity).max(0);
                Position {
                    symbol: self.symbol.clone(),
                    quantity: new_quantity,
                    avg_price: self.avg_price,
                }
            }
        }
    }
}

/// Per-symbol purchase history used by the eligibility gate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseHistory {
    /// Number of completed purchases
    pub purchase_count: u32,
    /// Time of the most recent purchase
    pub last_purchase_time: Option<DateTime<Utc>>,
    /// Time of the first purchase of the current position
    pub first_purchase_time: Option<DateTime<Utc>>,
}

impl PurchaseHistory {
    fn record_purchase(&mut self, at: DateTime<Utc>) {
        self.purchase_count += 1;
        self.last_purchase_time = Some(at);
        if self.first_purchase_time.is_none() {
            self.first_purchase_time = Some(at);
        }
    }
}

/// One tracked symbol: position state plus purchase history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub position: Position,
    pub history: PurchaseHistory,
}

/// Owned collection of positions for one account, keyed by symbol.
///
/// Mutated only by confirmed fills, one evaluation pass at a time. Full
/// liquidation removes the entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionBook {
    holdings: HashMap<String, Holding>,
}

impl PositionBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a holding by symbol.
    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.get(symbol)
    }

    /// Check if the book holds shares of a symbol.
    pub fn has_position(&self, symbol: &str) -> bool {
        self.holdings
            .get(symbol)
            .map(|h| !h.position.is_flat())
            .unwrap_or(false)
    }

    /// Number of tracked symbols.
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Check if the book is empty.
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// All tracked symbols.
    pub fn symbols(&self) -> Vec<&String> {
        self.holdings.keys().collect()
    }

    /// Apply a confirmed purchase fill.
    pub fn apply_purchase(&mut self, fill: &Fill) -> &Holding {
        debug_assert_eq!(fill.side, Side::Buy);

        let holding = self
            .holdings
            .entry(fill.symbol.clone())
            .or_insert_with(|| Holding {
                position: Position::opened(&fill.symbol, 0, fill.price),
                history: PurchaseHistory::default(),
            });

        holding.position = holding.position.applying(fill);
        holding.history.record_purchase(fill.executed_at);

        tracing::info!(
            symbol = %fill.symbol,
            quantity = fill.quantity,
            price = %fill.price,
            total = holding.position.quantity,
            "purchase recorded"
        );

        &*holding
    }

    /// Apply a confirmed sale fill. Removes the entry on full liquidation.
    pub fn apply_sale(&mut self, fill: &Fill) -> Option<Holding> {
        debug_assert_eq!(fill.side, Side::Sell);

        let holding = self.holdings.get_mut(&fill.symbol)?;
        holding.position = holding.position.applying(fill);

        tracing::info!(
            symbol = %fill.symbol,
            quantity = fill.quantity,
            price = %fill.price,
            remaining = holding.position.quantity,
            "sale recorded"
        );

        if holding.position.is_flat() {
            return self.holdings.remove(&fill.symbol);
        }
        Some(holding.clone())
    }
}
