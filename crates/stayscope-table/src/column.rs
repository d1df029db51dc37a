//! Typed column storage and cell values

use crate::schema::ColumnType;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A column of data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataColumn {
    Float64(Vec<f64>),
    Int64(Vec<i64>),
    Bool(Vec<bool>),
    String(Vec<String>),
    DateTime(Vec<NaiveDateTime>),
}

impl DataColumn {
    /// Get the column type
    pub fn dtype(&self) -> ColumnType {
        match self {
            DataColumn::Float64(_) => ColumnType::Float64,
            DataColumn::Int64(_) => ColumnType::Int64,
            DataColumn::Bool(_) => ColumnType::Bool,
            DataColumn::String(_) => ColumnType::String,
            DataColumn::DateTime(_) => ColumnType::DateTime,
        }
    }

    /// Get the number of elements
    pub fn len(&self) -> usize {
        match self {
            DataColumn::Float64(v) => v.len(),
            DataColumn::Int64(v) => v.len(),
            DataColumn::Bool(v) => v.len(),
            DataColumn::String(v) => v.len(),
            DataColumn::DateTime(v) => v.len(),
        }
    }

    /// Check if the column is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert to f64 (for numeric types)
    ///
    /// Booleans map to 0.0/1.0. Text and timestamps return `None`.
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        match self {
            DataColumn::Float64(v) => Some(v.clone()),
            DataColumn::Int64(v) => Some(v.iter().map(|&x| x as f64).collect()),
            DataColumn::Bool(v) => Some(v.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect()),
            DataColumn::String(_) | DataColumn::DateTime(_) => None,
        }
    }

    /// Get a single cell
    pub fn value(&self, index: usize) -> Option<Value> {
        match self {
            DataColumn::Float64(v) => v.get(index).map(|&x| Value::Float(x)),
            DataColumn::Int64(v) => v.get(index).map(|&x| Value::Int(x)),
            DataColumn::Bool(v) => v.get(index).map(|&x| Value::Bool(x)),
            DataColumn::String(v) => v.get(index).map(|s| Value::Text(s.clone())),
            DataColumn::DateTime(v) => v.get(index).map(|&t| Value::DateTime(t)),
        }
    }
}

impl From<Vec<f64>> for DataColumn {
    fn from(values: Vec<f64>) -> Self {
        DataColumn::Float64(values)
    }
}

impl From<Vec<i64>> for DataColumn {
    fn from(values: Vec<i64>) -> Self {
        DataColumn::Int64(values)
    }
}

impl From<Vec<bool>> for DataColumn {
    fn from(values: Vec<bool>) -> Self {
        DataColumn::Bool(values)
    }
}

impl From<Vec<String>> for DataColumn {
    fn from(values: Vec<String>) -> Self {
        DataColumn::String(values)
    }
}

impl From<Vec<&str>> for DataColumn {
    fn from(values: Vec<&str>) -> Self {
        DataColumn::String(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<NaiveDateTime>> for DataColumn {
    fn from(values: Vec<NaiveDateTime>) -> Self {
        DataColumn::DateTime(values)
    }
}

/// A single cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Float(f64),
    Int(i64),
    Bool(bool),
    Text(String),
    DateTime(NaiveDateTime),
}

impl Value {
    /// Numeric view of the value, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            Value::Int(x) => Some(*x as f64),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Text(_) | Value::DateTime(_) => None,
        }
    }

    /// Text view of the value, if it is text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}
