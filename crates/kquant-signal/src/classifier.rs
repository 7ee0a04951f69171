//! MACD crossover signal classifier.
//!
//! Reduces a MACD table to a discrete trading signal with an additive
//! strength score. One parameterized implementation covers both the terse
//! and the diagnostic output shape; `verbose` controls how much of the
//! indicator state lands in the component breakdown.

use kquant_core::error::KquantError;
use kquant_core::types::{SignalComponents, SignalResult, TradeAction, Trend};
use kquant_indicators::{CrossFlag, MacdTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for the MACD classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdClassifierConfig {
    /// A cross strictly within this many trailing rows counts as recent
    pub cross_lookback: usize,
    /// A recent golden cross at most this old earns the freshness bonus
    pub fresh_cross_age: usize,
    /// Attach the full indicator snapshot to the component breakdown
    pub verbose: bool,
}

impl Default for MacdClassifierConfig {
    fn default() -> Self {
        Self {
            cross_lookback: 5,
            fresh_cross_age: 2,
            verbose: false,
        }
    }
}

impl MacdClassifierConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), KquantError> {
        if self.cross_lookback == 0 {
            return Err(KquantError::Validation(
                "cross_lookback must be greater than 0".into(),
            ));
        }
        if self.fresh_cross_age >= self.cross_lookback {
            return Err(KquantError::Validation(
                "fresh_cross_age must be smaller than cross_lookback".into(),
            ));
        }
        Ok(())
    }
}

/// MACD signal classifier.
///
/// Decision table, first match wins:
/// 1. recent golden cross -> bullish, 2.0 base, +1.0 above zero line,
///    +0.5 fresh -> BUY
/// 2. recent dead cross -> bearish, -1.0 -> SELL
/// 3. macd above signal in positive territory -> bullish, 1.0 -> HOLD
/// 4. macd below signal in negative territory -> bearish, -0.5 -> HOLD
/// 5. otherwise -> neutral, 0.0 -> HOLD
///
/// A dead cross newer than a golden cross wins: only the youngest cross in
/// the window is considered. Classification never fails; unusable input
/// degrades to the neutral result.
#[derive(Debug, Clone)]
pub struct MacdClassifier {
    config: MacdClassifierConfig,
}

impl MacdClassifier {
    /// Create a classifier with the given configuration.
    pub fn new(config: MacdClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify the current state of a MACD table.
    pub fn classify(&self, table: &MacdTable) -> SignalResult {
        let latest = match table.last() {
            Some(row) if table.ready() => *row,
            _ => return SignalResult::neutral("insufficient data for MACD", true),
        };

        let mut indicators = HashMap::new();
        if self.config.verbose {
            indicators.insert("macd_line".to_string(), latest.macd_line);
            indicators.insert("macd_signal".to_string(), latest.macd_signal);
            indicators.insert("macd_histogram".to_string(), latest.macd_histogram);
            indicators.insert("ema_fast".to_string(), latest.ema_fast);
            indicators.insert("ema_slow".to_string(), latest.ema_slow);
        }

        let result = match table.recent_cross(self.config.cross_lookback) {
            Some((CrossFlag::GoldenCross, age)) => {
                let mut strength = 2.0;
                indicators.insert("golden_cross".to_string(), 2.0);
                if latest.macd_line > 0.0 {
                    strength += 1.0;
                    indicators.insert("macd_above_zero".to_string(), 1.0);
                }
                if age <= self.config.fresh_cross_age {
                    strength += 0.5;
                    indicators.insert("fresh_cross".to_string(), 0.5);
                }
                SignalResult {
                    action: TradeAction::Buy,
                    strength,
                    trend: Trend::Bullish,
                    insufficient_data: false,
                    components: SignalComponents {
                        indicators,
                        reason: format!("golden cross {} bars ago", age),
                    },
                }
            }
            Some((CrossFlag::DeadCross, age)) => {
                indicators.insert("dead_cross".to_string(), -1.0);
                SignalResult {
                    action: TradeAction::Sell,
                    strength: -1.0,
                    trend: Trend::Bearish,
                    insufficient_data: false,
                    components: SignalComponents {
                        indicators,
                        reason: format!("dead cross {} bars ago", age),
                    },
                }
            }
            _ => self.classify_alignment(&latest, indicators),
        };

        tracing::debug!(
            action = %result.action,
            strength = result.strength,
            trend = %result.trend,
            reason = %result.components.reason,
            "signal classified"
        );

        result
    }

    /// No recent cross: fall back to macd/signal/zero-line alignment.
    fn classify_alignment(
        &self,
        latest: &kquant_indicators::MacdRow,
        mut indicators: HashMap<String, f64>,
    ) -> SignalResult {
        if latest.macd_line > latest.macd_signal && latest.macd_line > 0.0 {
            indicators.insert("bullish_alignment".to_string(), 1.0);
            SignalResult {
                action: TradeAction::Hold,
                strength: 1.0,
                trend: Trend::Bullish,
                insufficient_data: false,
                components: SignalComponents {
                    indicators,
                    reason: "macd above signal in positive territory".to_string(),
                },
            }
        } else if latest.macd_line < latest.macd_signal && latest.macd_line < 0.0 {
            indicators.insert("bearish_alignment".to_string(), -0.5);
            SignalResult {
                action: TradeAction::Hold,
                strength: -0.5,
                trend: Trend::Bearish,
                insufficient_data: false,
                components: SignalComponents {
                    indicators,
                    reason: "macd below signal in negative territory".to_string(),
                },
            }
        } else {
            SignalResult {
                action: TradeAction::Hold,
                strength: 0.0,
                trend: Trend::Neutral,
                insufficient_data: false,
                components: SignalComponents {
                    indicators,
                    reason: "no recent cross, no alignment".to_string(),
                },
            }
        }
    }
}

impl Default for MacdClassifier {
    fn default() -> Self {
        Self::new(MacdClassifierConfig::default())
    }
}
