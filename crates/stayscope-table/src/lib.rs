//! stayscope-table - In-memory tables for review datasets
//!
//! This crate provides the tabular container the feature pipeline works on:
//!
//! - **Table**: ordered, named columns sharing one row count
//! - **DataColumn**: typed column storage (floats, ints, bools, text, timestamps)
//! - **TableSchema**: column names and types for presence checks
//!
//! # Design
//!
//! Tables are column-oriented. Column order is insertion order, and writing
//! a column under an existing name replaces it in place, so derived columns
//! never duplicate. Missing numeric values are represented as `NaN`.

pub mod column;
pub mod error;
pub mod schema;
pub mod table;

pub use column::*;
pub use error::*;
pub use schema::*;
pub use table::*;
