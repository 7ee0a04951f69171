//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, CurveKind, LoggingConfig, SizingSettings};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// Environment variables prefixed `KQUANT__` override file values, e.g.
/// `KQUANT__SIZING__MAX_POSITION_RATIO=0.1`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("KQUANT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
