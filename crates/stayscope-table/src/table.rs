//! Ordered, named columns sharing one row count

use crate::column::{DataColumn, Value};
use crate::error::{TableError, TableResult};
use crate::schema::{ColumnDescriptor, TableSchema};
use serde::{Deserialize, Serialize};

/// A named column within a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data: DataColumn,
}

/// An in-memory table
///
/// Every column holds exactly `num_rows` values. The row count is fixed by
/// the first column added. Deserialized tables are checked the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    columns: Vec<Column>,
    num_rows: usize,
}

/// Serialized form of a [`Table`], before its row counts are checked
#[derive(Deserialize)]
struct RawTable {
    columns: Vec<Column>,
    num_rows: usize,
}

impl TryFrom<RawTable> for Table {
    type Error = TableError;

    fn try_from(raw: RawTable) -> TableResult<Self> {
        let mut table = Self::new();
        for Column { name, data } in raw.columns {
            if data.len() != raw.num_rows {
                return Err(TableError::LengthMismatch {
                    column: name,
                    expected: raw.num_rows,
                    actual: data.len(),
                });
            }
            table.with_column(name, data)?;
        }
        Ok(table)
    }
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, column)` pairs
    ///
    /// Repeated names overwrite earlier ones in place.
    pub fn from_columns<I, S>(columns: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = (S, DataColumn)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, data) in columns {
            table.with_column(name, data)?;
        }
        Ok(table)
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.columns.len())
    }

    /// Describe the table's columns
    pub fn schema(&self) -> TableSchema {
        let columns = self
            .columns
            .iter()
            .map(|c| ColumnDescriptor::new(c.name.clone(), c.data.dtype()))
            .collect();
        TableSchema::new(columns, self.num_rows)
    }

    /// Get column names, in table order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Check whether a column is present
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&DataColumn> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.data)
    }

    /// Get a column by name, failing if it is absent
    pub fn require(&self, name: &str) -> TableResult<&DataColumn> {
        self.column(name)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))
    }

    /// Get a numeric column as f64 values
    pub fn column_f64(&self, name: &str) -> TableResult<Vec<f64>> {
        let data = self.require(name)?;
        data.to_f64().ok_or_else(|| TableError::TypeMismatch {
            column: name.to_string(),
            expected: "numeric".to_string(),
            actual: data.dtype().to_string(),
        })
    }

    /// Get a single cell
    pub fn value(&self, column: &str, row: usize) -> Option<Value> {
        self.column(column).and_then(|c| c.value(row))
    }

    /// Iterate over the columns
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Add a column, or replace an existing column of the same name in place
    pub fn with_column(&mut self, name: impl Into<String>, data: DataColumn) -> TableResult<()> {
        let name = name.into();

        if self.columns.is_empty() {
            self.num_rows = data.len();
        } else if data.len() != self.num_rows {
            return Err(TableError::LengthMismatch {
                column: name,
                expected: self.num_rows,
                actual: data.len(),
            });
        }

        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.data = data,
            None => self.columns.push(Column { name, data }),
        }
        Ok(())
    }
}
