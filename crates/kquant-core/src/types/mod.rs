//! Core data types for the signal toolkit.

mod bar;
mod fill;
mod position;
mod signal;
mod timeframe;

pub use bar::{Bar, PriceSeries};
pub use fill::{Fill, Side};
pub use position::{Holding, Position, PositionBook, PurchaseHistory};
pub use signal::{SignalComponents, SignalResult, TradeAction, Trend};
pub use timeframe::Timeframe;
