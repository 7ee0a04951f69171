//! CLI command implementations.

pub mod evaluate;
pub mod size;
pub mod validate;

use anyhow::Result;
use kquant_config::AppConfig;
use std::path::Path;

/// Load the configuration, falling back to defaults when the file does not
/// exist. A file that exists but fails to parse is a hard error.
pub fn load_or_default(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        Ok(kquant_config::load_config(path)?)
    } else {
        tracing::warn!(path = %path.display(), "config file not found, using defaults");
        Ok(AppConfig::default())
    }
}
