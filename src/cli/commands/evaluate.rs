//! Evaluate command: series -> indicators -> signal -> sizing.

use anyhow::{Context, Result};
use kquant_core::types::Timeframe;
use kquant_indicators::{Macd, Roc, MACD_MIN_BARS};
use kquant_risk::{krx, EligibilityGate, GateCheck};
use kquant_signal::MacdClassifier;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::cli::EvaluateArgs;

pub fn run(args: EvaluateArgs, config_path: &Path) -> Result<()> {
    let config = super::load_or_default(config_path)?;
    config.signal.validate()?;

    let timeframe = Timeframe::from_str(&args.timeframe)
        .map_err(|e| anyhow::anyhow!("invalid timeframe: {e}"))?;
    let series = kquant_data::load_csv(&args.data, &args.symbol, timeframe)
        .with_context(|| format!("loading {}", args.data.display()))?;

    let table = Macd::new().compute(&series);
    let momentum = Roc::new(10).latest(&series.closes());
    let result = MacdClassifier::new(config.signal.clone()).classify(&table);

    if args.output == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Symbol:   {}", args.symbol);
        println!("Bars:     {}", series.len());
        match table.last() {
            Some(row) => println!(
                "MACD:     line {:.4}  signal {:.4}  histogram {:.4}",
                row.macd_line, row.macd_signal, row.macd_histogram
            ),
            None => println!("MACD:     insufficient data (need {} bars)", MACD_MIN_BARS),
        }
        match momentum {
            Some(m) => println!("Momentum: {:+.2}% over 10 bars", m * 100.0),
            None => println!("Momentum: n/a"),
        }
        println!("Signal:   {} ({})", result.action, result.trend);
        println!("Strength: {:.1}", result.strength);
        println!("Reason:   {}", result.components.reason);
    }

    if let Some(cash) = args.cash {
        report_order_plan(&config, cash, &series, &result)?;
    }

    Ok(())
}

/// Run the gate and sizer against a fresh book and report what an order
/// for this signal would look like.
fn report_order_plan(
    config: &kquant_config::AppConfig,
    cash: Decimal,
    series: &kquant_core::types::PriceSeries,
    result: &kquant_core::types::SignalResult,
) -> Result<()> {
    if !result.is_buy() {
        println!("Order:    none (signal is not a buy)");
        return Ok(());
    }

    let gate = EligibilityGate::new(config.limits.clone());
    match gate.check_purchase(None, None, chrono::Utc::now()) {
        GateCheck::Rejected { reason } => {
            println!("Order:    blocked ({})", reason);
            return Ok(());
        }
        GateCheck::Allowed => {}
    }

    let close = series.last().map(|b| b.close).unwrap_or(0.0);
    let price = Decimal::from_f64_retain(close)
        .filter(|p| *p > Decimal::ZERO)
        .context("series has no usable close price")?;

    let sizer = config.sizing.build_sizer();
    let quantity = sizer.calculate(cash, price, result.strength);
    if quantity == 0 {
        println!("Order:    skip (allocation below one share)");
        return Ok(());
    }

    let limit_price = krx::round_to_tick(price);
    println!(
        "Order:    buy {} shares @ {} (cost {})",
        quantity,
        limit_price,
        limit_price * Decimal::from(quantity)
    );
    Ok(())
}
