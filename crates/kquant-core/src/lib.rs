//! Core types for the KRX signal toolkit.
//!
//! This crate provides the foundational building blocks:
//! - Market data types (Bar, PriceSeries)
//! - Position state and the position book
//! - Signal result types
//! - The error taxonomy

pub mod error;
pub mod types;

pub use error::{KquantError, KquantResult};
pub use types::*;
