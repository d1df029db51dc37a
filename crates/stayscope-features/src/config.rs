//! Configuration for the feature enricher
//!
//! Controls how review dates are parsed, how per-hotel means are rounded,
//! and how much the enricher reports in its logs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest supported rounding precision for aggregate means
pub const MAX_AGGREGATE_PRECISION: u32 = 15;

/// Enricher configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichConfig {
    /// `chrono` format strings tried, in order, after RFC 3339
    ///
    /// Date-only formats resolve to midnight.
    pub date_formats: Vec<String>,
    /// Decimal places kept on per-hotel means
    pub aggregate_precision: u32,
    /// Log the names of newly added columns when enrichment finishes
    pub log_new_columns: bool,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            date_formats: default_date_formats(),
            aggregate_precision: 3,
            log_new_columns: true,
        }
    }
}

fn default_date_formats() -> Vec<String> {
    [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%d.%m.%Y",
    ]
    .iter()
    .map(|f| f.to_string())
    .collect()
}

impl EnrichConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.date_formats.is_empty() {
            return Err(ConfigError::MissingField(
                "date_formats must list at least one format".to_string(),
            ));
        }

        if let Some(blank) = self.date_formats.iter().position(|f| f.trim().is_empty()) {
            return Err(ConfigError::OutOfRange(format!(
                "date_formats[{}] is blank",
                blank
            )));
        }

        if self.aggregate_precision > MAX_AGGREGATE_PRECISION {
            return Err(ConfigError::OutOfRange(format!(
                "aggregate_precision must be at most {}, got {}",
                MAX_AGGREGATE_PRECISION, self.aggregate_precision
            )));
        }

        Ok(())
    }
}

/// Configuration error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
    /// Required field is missing or empty
    #[error("Missing field: {0}")]
    MissingField(String),
    /// Configuration text could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
    /// Configuration could not be serialized
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),
}
