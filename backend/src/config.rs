//! # Shelter Configuration
//!
//! Settings for the record store and the UI that drives it, loaded from YAML.
//! Every field has a default, so an empty document is a valid configuration.
//!
//! ## YAML Format
//!
//! ```yaml
//! storage_key: "ong_animals"
//! export_file_prefix: "animals"
//! placeholder_image: "assets/placeholder-animal.svg"
//! notification_timeout_ms: 3000
//! log_level: "info"
//! ```

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Storage key cannot be empty")]
    EmptyStorageKey,
    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelterConfig {
    /// Name of the storage slot holding the serialized collection
    pub storage_key: String,
    /// Export files are named `<prefix>_<YYYY-MM-DD>.json`
    pub export_file_prefix: String,
    /// Image shown on cards for animals without photos
    pub placeholder_image: String,
    pub notification_timeout_ms: u32,
    pub log_level: String,
}

impl Default for ShelterConfig {
    fn default() -> Self {
        Self {
            storage_key: "ong_animals".to_string(),
            export_file_prefix: "animals".to_string(),
            placeholder_image: "assets/placeholder-animal.svg".to_string(),
            notification_timeout_ms: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl ShelterConfig {
    /// Parse and validate a YAML configuration document
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml rejects an empty document, treat it as "all defaults"
        let config: ShelterConfig = if yaml.trim().is_empty() {
            ShelterConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        self.log_level_filter()?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ShelterConfig::from_yaml("").unwrap();
        assert_eq!(config, ShelterConfig::default());
        assert_eq!(config.storage_key, "ong_animals");
        assert_eq!(config.notification_timeout_ms, 3000);
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = ShelterConfig::from_yaml("export_file_prefix: shelter\nlog_level: debug\n").unwrap();
        assert_eq!(config.export_file_prefix, "shelter");
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(config.storage_key, "ong_animals");
    }

    #[test]
    fn test_rejects_blank_storage_key() {
        let result = ShelterConfig::from_yaml("storage_key: \"  \"\n");
        assert!(matches!(result, Err(ConfigError::EmptyStorageKey)));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let result = ShelterConfig::from_yaml("log_level: chatty\n");
        assert!(matches!(result, Err(ConfigError::InvalidLogLevel(level)) if level == "chatty"));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let result = ShelterConfig::from_yaml("notification_timeout_ms: [1, 2");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
