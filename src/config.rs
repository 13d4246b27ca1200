use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploaderConfig {
    pub request_timeout_secs: u64,
    pub locale: String,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 60,
            locale: "en".to_string(),
        }
    }
}

fn get_config_path() -> AppResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| AppError::Config("Could not find config directory".to_string()))?
        .join("filehost-uploader");

    Ok(config_dir.join("config.json"))
}

/// Load the optional config file, falling back to defaults when it is
/// missing or malformed. Nothing is ever written back.
pub fn load_config() -> AppResult<UploaderConfig> {
    let config_path = get_config_path()?;

    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)?;
        let config: UploaderConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
            log::warn!("Failed to parse config file: {}. Using defaults.", e);
            UploaderConfig::default()
        });

        validate_config(&config)?;

        Ok(config)
    } else {
        log::debug!("No config file at {}, using defaults", config_path.display());
        Ok(UploaderConfig::default())
    }
}

pub fn validate_config(config: &UploaderConfig) -> AppResult<()> {
    if config.request_timeout_secs == 0 || config.request_timeout_secs > 600 {
        return Err(AppError::validation(
            "request_timeout_secs",
            "Must be between 1 and 600",
        ));
    }

    let valid_locales = ["en", "ru"];
    if !valid_locales.contains(&config.locale.as_str()) {
        return Err(AppError::validation("locale", "Must be 'en' or 'ru'"));
    }

    Ok(())
}
