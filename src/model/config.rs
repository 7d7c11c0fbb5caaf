use anyhow::Context;
use std::path::Path;

pub use forager_core::config::*;

/// Reads and validates a TOML configuration file.
pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    AppConfig::from_toml(&content).with_context(|| format!("failed to parse {}", path.display()))
}
