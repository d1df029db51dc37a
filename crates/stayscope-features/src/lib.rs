//! stayscope-features - Feature engineering for hotel review tables
//!
//! Takes a review table and returns a copy with derived columns:
//!
//! - **Temporal**: `review_year`, `review_month`, `review_day`,
//!   `review_dayofweek` (0 = Monday) and `season`, from `review_date`
//! - **Gaps**: `<dim>_gap = score_<dim> - <dim>_base` for cleanliness,
//!   comfort and facilities
//! - **Hotel aggregates**: per-`hotel_id` means (rounded) and review count,
//!   broadcast to every review of the hotel
//! - **Score summaries**: `total_specific_scores` and `score_variance`
//!   across the five specific scores
//!
//! Each block runs only when its input columns are present, except the
//! score summaries, which require all five specific scores.
//!
//! # Example
//!
//! ```
//! use stayscope_features::enrich;
//! use stayscope_table::{DataColumn, Table};
//!
//! let table = Table::from_columns(vec![
//!     ("score_cleanliness", DataColumn::Float64(vec![8.0])),
//!     ("score_comfort", DataColumn::Float64(vec![8.0])),
//!     ("score_facilities", DataColumn::Float64(vec![8.0])),
//!     ("score_location", DataColumn::Float64(vec![8.0])),
//!     ("score_staff", DataColumn::Float64(vec![8.0])),
//! ])
//! .unwrap();
//!
//! let enriched = enrich(&table).unwrap();
//! assert_eq!(enriched.column_f64("total_specific_scores").unwrap(), vec![40.0]);
//! ```

pub mod columns;
pub mod config;
pub mod enricher;
pub mod error;
pub mod gaps;
pub mod hotel;
pub mod scores;
pub mod temporal;

pub use config::{ConfigError, EnrichConfig};
pub use enricher::{enrich, EnrichReport, Enricher, FeatureGroup};
pub use error::{FeatureError, FeatureResult};
pub use gaps::Dimension;
pub use hotel::HotelAggregate;
pub use temporal::{parse_review_date, Season};
