//! Configuration management for feedlink
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use feedlink::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Transformers configured: {}", config.transformers.len());
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `FEEDLINK__<section>__<key>`
//!
//! Examples:
//! - `FEEDLINK__READER__DEFAULT_TRANSFORMER=instapaper`
//! - `FEEDLINK__LOGGING__FILTER=feedlink=debug`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/feedlink.toml`.
//! This can be overridden using the `FEEDLINK_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use models::{Config, LoggingConfig, ReaderConfig, TransformerConfig};
pub use validation::ValidationError;

use thiserror::Error;

use crate::transform::TransformerRegistry;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`FEEDLINK__*`)
    /// 2. TOML file (default: `config/feedlink.toml`)
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file is malformed
    /// - Validation fails (empty templates, unknown default transformer)
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    ///
    /// Useful for testing with custom configuration files.
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Freeze the configured transformers into a registry
    pub fn transformer_registry(&self) -> TransformerRegistry {
        TransformerRegistry::from_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_minimal_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[transformers.reader]
name = "Reader"
url_template = "https://reader.example/view?url=[L]"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.transformers.len(), 1);
        assert!(config.reader.default_transformer.is_none());
    }

    #[test]
    fn test_validation_catches_unknown_default() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[reader]
default_transformer = "nonexistent"

[transformers.reader]
name = "Reader"
url_template = "https://reader.example/view?url=[L]"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let result = Config::load_from_path(config_path);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(ValidationError::UnknownDefaultTransformer { .. })
        ));
    }

    #[test]
    fn test_registry_integration() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[reader]
default_transformer = "mobile"

[transformers.mobile]
name = "Mobilizer"
url_template = "https://m.example/?u=[L]"

[transformers.print]
name = "Print view"
url_template = "https://print.example/[L]"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        let registry = config.transformer_registry();

        assert_eq!(registry.len(), 2);
        let transformer = registry.default_transformer().unwrap();
        assert_eq!(transformer.name(), "Mobilizer");
        assert_eq!(
            transformer.to_transformed_url(Some("http://a.com/")),
            "https://m.example/?u=http%3A%2F%2Fa.com%2F"
        );
    }
}
