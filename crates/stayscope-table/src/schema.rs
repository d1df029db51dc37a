//! Schema types describing a table's columns

use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema describing the structure of a table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Column descriptors, in table order
    pub columns: Vec<ColumnDescriptor>,

    /// Number of rows
    pub num_rows: usize,
}

impl TableSchema {
    /// Create a new schema
    pub fn new(columns: Vec<ColumnDescriptor>, num_rows: usize) -> Self {
        Self { columns, num_rows }
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Check whether a column is present
    pub fn contains(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Check whether every named column is present
    pub fn contains_all(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.contains(name))
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Descriptor for a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// Data type
    pub dtype: ColumnType,
}

impl ColumnDescriptor {
    /// Create a new column descriptor
    pub fn new(name: impl Into<String>, dtype: ColumnType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }
}

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Float64,
    Int64,
    Bool,
    String,
    DateTime,
}

impl ColumnType {
    /// Check if this is a numeric type
    ///
    /// Booleans count as numeric (0/1), matching how score columns are coerced.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ColumnType::Float64 | ColumnType::Int64 | ColumnType::Bool
        )
    }

    /// Short lowercase name, used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Float64 => "float64",
            ColumnType::Int64 => "int64",
            ColumnType::Bool => "bool",
            ColumnType::String => "string",
            ColumnType::DateTime => "datetime",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
