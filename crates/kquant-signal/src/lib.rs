//! Signal classification for the KRX signal toolkit.
//!
//! Maps indicator output to a discrete trading signal (BUY/SELL/HOLD) with
//! an additive strength score and a trend reading.

mod classifier;

pub use classifier::{MacdClassifier, MacdClassifierConfig};
