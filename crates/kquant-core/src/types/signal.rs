//! Trading signal types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Discrete trading action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
    #[default]
    Hold,
}

impl std::fmt::Display for TradeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "BUY"),
            TradeAction::Sell => write!(f, "SELL"),
            TradeAction::Hold => write!(f, "HOLD"),
        }
    }
}

/// Trend direction read from the indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Bullish => write!(f, "bullish"),
            Trend::Bearish => write!(f, "bearish"),
            Trend::Neutral => write!(f, "neutral"),
        }
    }
}

/// Named score contributions and the human-readable rationale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignalComponents {
    /// Component name -> contribution or indicator value
    pub indicators: HashMap<String, f64>,
    /// Why the signal fired
    pub reason: String,
}

/// Result of one signal evaluation.
///
/// Computed fresh each evaluation; not persisted. A degraded evaluation
/// (short or missing data) is reported through `insufficient_data`, never
/// as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalResult {
    /// Discrete action
    pub action: TradeAction,
    /// Additive strength score (see the classifier decision table)
    pub strength: f64,
    /// Trend direction
    pub trend: Trend,
    /// True when the series was too short or unusable for MACD
    pub insufficient_data: bool,
    /// Score breakdown
    pub components: SignalComponents,
}

impl SignalResult {
    /// The neutral no-signal result.
    pub fn neutral(reason: impl Into<String>, insufficient_data: bool) -> Self {
        Self {
            action: TradeAction::Hold,
            strength: 0.0,
            trend: Trend::Neutral,
            insufficient_data,
            components: SignalComponents {
                indicators: HashMap::new(),
                reason: reason.into(),
            },
        }
    }

    /// Check if this is an actionable buy signal.
    pub fn is_buy(&self) -> bool {
        self.action == TradeAction::Buy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_result() {
        let result = SignalResult::neutral("series too short", true);

        assert_eq!(result.action, TradeAction::Hold);
        assert_eq!(result.strength, 0.0);
        assert_eq!(result.trend, Trend::Neutral);
        assert!(result.insufficient_data);
        assert!(!result.is_buy());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(TradeAction::Buy.to_string(), "BUY");
        assert_eq!(Trend::Bearish.to_string(), "bearish");
    }
}
