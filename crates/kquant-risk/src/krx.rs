//! KRX price units.
//!
//! Korean equities quote in fixed price units that grow with the price
//! level. Limit prices must sit on a unit boundary or the exchange rejects
//! the order.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The quoting unit for a given price level.
pub fn tick_size(price: Decimal) -> Decimal {
    if price < dec!(1000) {
        dec!(1)
    } else if price < dec!(5000) {
        dec!(5)
    } else if price < dec!(10000) {
        dec!(10)
    } else if price < dec!(50000) {
        dec!(50)
    } else if price < dec!(100000) {
        dec!(100)
    } else if price < dec!(500000) {
        dec!(500)
    } else {
        dec!(1000)
    }
}

/// Round a price down to its unit boundary. Non-positive input yields the
/// minimum quotable price of 1 won.
pub fn round_to_tick(price: Decimal) -> Decimal {
    if price <= Decimal::ZERO {
        return Decimal::ONE;
    }
    let tick = tick_size(price);
    (price / tick).floor() * tick
}
