//! KRX signal toolkit CLI.

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use logging::setup_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level {
        cli::LogLevel::Trace => "trace",
        cli::LogLevel::Debug => "debug",
        cli::LogLevel::Info => "info",
        cli::LogLevel::Warn => "warn",
        cli::LogLevel::Error => "error",
    };
    let log_file = cli.log_file.as_ref().map(|p| p.to_string_lossy().to_string());
    let _guard = setup_logging(log_level, cli.json_logs, log_file.as_deref());

    match cli.command {
        Commands::Evaluate(args) => cli::commands::evaluate::run(args, &cli.config),
        Commands::Size(args) => cli::commands::size::run(args, &cli.config),
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config),
    }
}
