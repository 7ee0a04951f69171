//! Error types for the signal toolkit.

use thiserror::Error;

/// Top-level toolkit error.
#[derive(Error, Debug)]
pub enum KquantError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Data source errors.
///
/// Raised for genuinely broken input (unreadable files, garbled rows).
/// An empty or short series is NOT an error anywhere in this toolkit;
/// it degrades to "no signal" downstream.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available at {0}")]
    NoDataAvailable(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Data source error: {0}")]
    Internal(String),
}

/// Indicator calculation errors.
///
/// These surface only from explicit validation helpers; the MACD engine
/// itself degrades short or malformed series to an empty table instead.
#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("Insufficient data: need {required} points, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for toolkit operations.
pub type KquantResult<T> = Result<T, KquantError>;
