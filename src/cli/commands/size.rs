//! Size command: run the position sizer in isolation.

use anyhow::Result;
use rust_decimal::Decimal;
use std::path::Path;

use crate::cli::SizeArgs;
use kquant_risk::krx;

pub fn run(args: SizeArgs, config_path: &Path) -> Result<()> {
    let config = super::load_or_default(config_path)?;

    let sizer = config.sizing.build_sizer();
    let quantity = sizer.calculate(args.cash, args.price, args.strength);

    println!("Cash:      {}", args.cash);
    println!("Price:     {}", args.price);
    println!("Strength:  {:.1}", args.strength);
    println!("Curve:     {}", sizer.curve_name());

    if quantity == 0 {
        println!("Quantity:  0 (skip)");
    } else {
        let limit_price = krx::round_to_tick(args.price);
        println!("Quantity:  {}", quantity);
        println!(
            "Order:     {} shares @ {} (cost {})",
            quantity,
            limit_price,
            limit_price * Decimal::from(quantity)
        );
    }

    Ok(())
}
