//! stayscope-stats - Statistical helpers for review features
//!
//! This crate provides the numeric primitives behind the derived columns:
//!
//! - **SummaryStats**: count, sum, mean, sample variance, min/max of a slice
//! - **nan_* helpers**: missing-value-aware mean, sum and count
//! - **round_to**: decimal rounding used for per-hotel means
//!
//! # Missing values
//!
//! `NaN` marks a missing observation and is skipped by every statistic
//! here. Infinite values are kept and propagate.

pub mod summary;

pub use summary::*;
