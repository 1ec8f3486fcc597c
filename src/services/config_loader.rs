// Widget configuration loader
// Reads `WidgetConfig` from a JSON file at the platform-specific config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::platform;
use crate::types::config::WidgetConfig;
use crate::types::errors::ConfigError;

/// Returns `<config dir>/config.json`.
pub fn default_config_path() -> PathBuf {
    platform::get_config_dir().join("config.json")
}

/// Loads the config file.
///
/// A missing file yields defaults. Malformed JSON or illegal values are errors.
pub fn load_config(path: &Path) -> Result<WidgetConfig, ConfigError> {
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(WidgetConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::IoError(format!("Failed to read config file: {}", e)))?;

    let config: WidgetConfig = serde_json::from_str(&content).map_err(|e| {
        ConfigError::SerializationError(format!("Failed to parse config file: {}", e))
    })?;

    validate(&config)?;
    Ok(config)
}

/// Loads the config file, falling back to defaults on any error.
pub fn load_config_or_default(path: &Path) -> WidgetConfig {
    load_config(path).unwrap_or_else(|e| {
        log::warn!("{}; using default configuration", e);
        WidgetConfig::default()
    })
}

pub fn validate(config: &WidgetConfig) -> Result<(), ConfigError> {
    if config.storage_key.trim().is_empty() {
        return Err(ConfigError::InvalidValue("storage_key cannot be empty".to_string()));
    }
    if config.locale.trim().is_empty() {
        return Err(ConfigError::InvalidValue("locale cannot be empty".to_string()));
    }
    if config.max_chunk_chars == 0 {
        return Err(ConfigError::InvalidValue(
            "max_chunk_chars must be at least 1".to_string(),
        ));
    }
    if !(config.pitch > 0.0 && config.pitch <= 2.0) {
        return Err(ConfigError::InvalidValue(format!(
            "pitch must be in (0, 2], got {}",
            config.pitch
        )));
    }
    if config.panel_id.trim().is_empty() {
        return Err(ConfigError::InvalidValue("panel_id cannot be empty".to_string()));
    }
    if config.panel_width_px <= 0.0 || config.panel_height_px <= 0.0 || config.viewport_margin_px < 0.0 {
        return Err(ConfigError::InvalidValue(
            "panel size must be positive and margin non-negative".to_string(),
        ));
    }
    Ok(())
}
