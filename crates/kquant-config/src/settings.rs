//! Configuration structures.

use kquant_risk::{FlatAllocation, PositionSizer, PurchaseLimits, SteppedAllocation};
use kquant_signal::MacdClassifierConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub signal: MacdClassifierConfig,
    #[serde(default)]
    pub limits: PurchaseLimits,
    #[serde(default)]
    pub sizing: SizingSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "kquant".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Strength curve selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    #[default]
    Stepped,
    Flat,
}

/// Position sizing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingSettings {
    /// Fraction of available cash a single order may claim
    pub max_position_ratio: Decimal,
    /// Minimum investment per order, in won
    pub min_investment: Decimal,
    /// Strength-to-allocation curve
    pub curve: CurveKind,
}

impl Default for SizingSettings {
    fn default() -> Self {
        use rust_decimal_macros::dec;
        Self {
            max_position_ratio: dec!(0.2),
            min_investment: dec!(100000),
            curve: CurveKind::Stepped,
        }
    }
}

impl SizingSettings {
    /// Build the configured position sizer. The curve implementation is
    /// picked once here, not swapped at runtime.
    pub fn build_sizer(&self) -> PositionSizer {
        let sizer = PositionSizer::new(self.max_position_ratio)
            .with_min_investment(self.min_investment);
        match self.curve {
            CurveKind::Stepped => sizer.with_curve(Box::new(SteppedAllocation)),
            CurveKind::Flat => sizer.with_curve(Box::new(FlatAllocation)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.app.name, "kquant");
        assert_eq!(config.limits.max_quantity_per_symbol, 300);
        assert_eq!(config.limits.purchase_cooldown_hours, 48);
        assert_eq!(config.sizing.max_position_ratio, dec!(0.2));
        assert_eq!(config.signal.cross_lookback, 5);
    }

    #[test]
    fn test_build_sizer_curve_selection() {
        let stepped = SizingSettings::default().build_sizer();
        assert_eq!(stepped.curve_name(), "stepped");

        let flat = SizingSettings {
            curve: CurveKind::Flat,
            ..Default::default()
        }
        .build_sizer();
        assert_eq!(flat.curve_name(), "flat");
    }

    #[test]
    fn test_toml_roundtrip() {
        let toml_src = r#"
            [app]
            name = "kquant"
            environment = "production"

            [limits]
            max_quantity_per_symbol = 100
            max_purchases_per_symbol = 2
            purchase_cooldown_hours = 24
            min_holding_period_hours = 12

            [sizing]
            max_position_ratio = "0.1"
            min_investment = "50000"
            curve = "flat"
        "#;

        let config: AppConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.app.environment, "production");
        assert_eq!(config.limits.max_quantity_per_symbol, 100);
        assert_eq!(config.sizing.curve, CurveKind::Flat);
        // Unlisted sections fall back to defaults.
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.signal.fresh_cross_age, 2);
    }
}
