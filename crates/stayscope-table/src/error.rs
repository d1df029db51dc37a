//! Table error types

use thiserror::Error;

/// Errors that can occur while building or reading a table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Length mismatch for column '{column}': expected {expected} rows, got {actual}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Type mismatch for column '{column}': expected {expected}, got {actual}")]
    TypeMismatch {
        column: String,
        expected: String,
        actual: String,
    },
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;
