//! Configuration file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use sds_types::models::AppConfig;

/// Load configuration from a JSON file, or fall back to defaults when no
/// path was supplied. Absent sections default individually, so a file may
/// override only what it cares about.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: AppConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}
