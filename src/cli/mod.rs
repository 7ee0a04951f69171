//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kquant")]
#[command(author, version, about = "Signal and position-sizing toolkit for KRX stocks")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    /// Write logs to a file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate the trading signal for a price series
    Evaluate(EvaluateArgs),
    /// Calculate an order quantity in isolation
    Size(SizeArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct EvaluateArgs {
    /// Price data file (CSV)
    #[arg(short, long)]
    pub data: PathBuf,

    /// Symbol the data belongs to
    #[arg(short, long, default_value = "UNKNOWN")]
    pub symbol: String,

    /// Timeframe of the bars
    #[arg(short, long, default_value = "1d")]
    pub timeframe: String,

    /// Available cash; when set, the eligibility gate and sizer run too
    #[arg(long)]
    pub cash: Option<Decimal>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}

#[derive(clap::Args)]
pub struct SizeArgs {
    /// Available cash in won
    #[arg(long)]
    pub cash: Decimal,

    /// Current price per share
    #[arg(long)]
    pub price: Decimal,

    /// Signal strength driving the allocation curve
    #[arg(long, default_value = "2.0")]
    pub strength: f64,
}
