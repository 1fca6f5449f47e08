use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Link transformers keyed by id
    #[serde(default)]
    pub transformers: HashMap<String, TransformerConfig>,
    #[serde(default)]
    pub reader: ReaderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Link transformer contribution
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransformerConfig {
    /// Display label
    #[serde(default)]
    pub name: String,
    /// Target URL with `[L]` where the encoded link goes
    pub url_template: String,
}

/// Reading view settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReaderConfig {
    /// Transformer used when none is requested explicitly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_transformer: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}
