//! Validate configuration command.

use anyhow::Result;
use kquant_config::load_config;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            config.signal.validate()?;
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Cross lookback: {} bars", config.signal.cross_lookback);
            println!(
                "Max quantity per symbol: {} shares",
                config.limits.max_quantity_per_symbol
            );
            println!(
                "Max purchases per symbol: {}",
                config.limits.max_purchases_per_symbol
            );
            println!(
                "Purchase cooldown: {}h",
                config.limits.purchase_cooldown_hours
            );
            println!("Max position ratio: {}", config.sizing.max_position_ratio);
            println!("Min investment: {}", config.sizing.min_investment);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
