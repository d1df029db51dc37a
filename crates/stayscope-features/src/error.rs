//! Error types for stayscope-features
//!
//! Enrichment fails as a whole: when any of these is returned, no output
//! table is produced.

use crate::config::ConfigError;
use stayscope_table::TableError;
use thiserror::Error;

/// Main error type for enrichment
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    /// A date value could not be parsed
    #[error("Failed to parse '{value}' in column '{column}' at row {row} as a date")]
    Parse {
        column: String,
        row: usize,
        value: String,
    },

    /// A column needed by an unconditional step is absent
    #[error("Required column '{0}' is missing")]
    MissingColumn(String),

    /// A present column has a type the step cannot use
    #[error("Column '{column}' has type {actual}, expected {expected}")]
    TypeError {
        column: String,
        expected: String,
        actual: String,
    },

    /// Table construction errors
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for enrichment
pub type FeatureResult<T> = Result<T, FeatureError>;
