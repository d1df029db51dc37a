//! Per-hotel aggregates broadcast back to every review of that hotel
//!
//! Groups are keyed by `hotel_id`. Aggregates are computed once per hotel
//! into a hash map and then joined onto the rows, so row order is untouched.

use crate::columns::{
    numeric, HOTEL_AVG_CLEANLINESS, HOTEL_AVG_COMFORT, HOTEL_AVG_SCORE, HOTEL_AVG_STAFF,
    HOTEL_ID, HOTEL_REVIEW_COUNT, SCORE_CLEANLINESS, SCORE_COMFORT, SCORE_OVERALL, SCORE_STAFF,
};
use crate::error::{FeatureError, FeatureResult};
use serde::{Deserialize, Serialize};
use stayscope_stats::{nan_count, nan_mean, round_to};
use stayscope_table::{DataColumn, Table};
use std::collections::HashMap;

/// Hashable form of a `hotel_id` cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum GroupKey {
    Text(String),
    Int(i64),
    Bool(bool),
    /// Bit pattern of a non-NaN float, with -0.0 folded into 0.0
    Float(u64),
}

/// Group key for every row; `None` marks a missing id
fn group_keys(column: &DataColumn) -> FeatureResult<Vec<Option<GroupKey>>> {
    let keys = match column {
        DataColumn::String(v) => v.iter().map(|s| Some(GroupKey::Text(s.clone()))).collect(),
        DataColumn::Int64(v) => v.iter().map(|&x| Some(GroupKey::Int(x))).collect(),
        DataColumn::Bool(v) => v.iter().map(|&b| Some(GroupKey::Bool(b))).collect(),
        DataColumn::Float64(v) => v
            .iter()
            .map(|&x| {
                if x.is_nan() {
                    None
                } else {
                    let x = if x == 0.0 { 0.0 } else { x };
                    Some(GroupKey::Float(x.to_bits()))
                }
            })
            .collect(),
        DataColumn::DateTime(_) => {
            return Err(FeatureError::TypeError {
                column: HOTEL_ID.to_string(),
                expected: "string, integer, bool or float".to_string(),
                actual: column.dtype().to_string(),
            })
        }
    };
    Ok(keys)
}

/// Aggregates for one hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelAggregate {
    /// Mean overall score
    pub avg_score: f64,
    /// Reviews with a non-missing overall score
    pub review_count: usize,
    /// Mean cleanliness score
    pub avg_cleanliness: f64,
    /// Mean comfort score
    pub avg_comfort: f64,
    /// Mean staff score
    pub avg_staff: f64,
}

impl HotelAggregate {
    /// Aggregate the rows at `indices`, rounding means to `precision` decimals
    fn from_rows(indices: &[usize], inputs: &AggregateInputs, precision: u32) -> Self {
        let pick = |values: &[f64]| indices.iter().map(|&i| values[i]).collect::<Vec<_>>();
        let overall = pick(&inputs.overall);

        Self {
            avg_score: round_to(nan_mean(&overall), precision),
            review_count: nan_count(&overall),
            avg_cleanliness: round_to(nan_mean(&pick(&inputs.cleanliness)), precision),
            avg_comfort: round_to(nan_mean(&pick(&inputs.comfort)), precision),
            avg_staff: round_to(nan_mean(&pick(&inputs.staff)), precision),
        }
    }
}

/// One value per row from its hotel's aggregate, NaN where there is none
fn broadcast(
    matched: &[Option<&HotelAggregate>],
    f: impl Fn(&HotelAggregate) -> f64,
) -> Vec<f64> {
    matched
        .iter()
        .map(|agg| agg.map_or(f64::NAN, &f))
        .collect()
}

struct AggregateInputs {
    overall: Vec<f64>,
    cleanliness: Vec<f64>,
    comfort: Vec<f64>,
    staff: Vec<f64>,
}

/// Add the five `hotel_*` columns when `hotel_id` and `score_overall` exist
///
/// The cleanliness, comfort and staff scores are then required as well.
/// Returns whether the columns were added.
pub(crate) fn add_hotel_aggregates(table: &mut Table, precision: u32) -> FeatureResult<bool> {
    if !table.schema().contains_all(&[HOTEL_ID, SCORE_OVERALL]) {
        return Ok(false);
    }

    let keys = group_keys(table.require(HOTEL_ID)?)?;
    let inputs = AggregateInputs {
        overall: numeric(table, SCORE_OVERALL)?,
        cleanliness: numeric(table, SCORE_CLEANLINESS)?,
        comfort: numeric(table, SCORE_COMFORT)?,
        staff: numeric(table, SCORE_STAFF)?,
    };

    let mut groups: HashMap<&GroupKey, Vec<usize>> = HashMap::new();
    for (row, key) in keys.iter().enumerate() {
        if let Some(key) = key {
            groups.entry(key).or_default().push(row);
        }
    }

    let aggregates: HashMap<&GroupKey, HotelAggregate> = groups
        .into_iter()
        .map(|(key, rows)| (key, HotelAggregate::from_rows(&rows, &inputs, precision)))
        .collect();

    let matched: Vec<Option<&HotelAggregate>> = keys
        .iter()
        .map(|key| key.as_ref().and_then(|k| aggregates.get(k)))
        .collect();

    // Rows without an id cannot hold an integer count
    let counts = if matched.iter().all(Option::is_some) {
        DataColumn::Int64(
            matched
                .iter()
                .map(|agg| agg.map_or(0, |a| a.review_count as i64))
                .collect(),
        )
    } else {
        DataColumn::Float64(broadcast(&matched, |a| a.review_count as f64))
    };

    table.with_column(
        HOTEL_AVG_SCORE,
        DataColumn::Float64(broadcast(&matched, |a| a.avg_score)),
    )?;
    table.with_column(HOTEL_REVIEW_COUNT, counts)?;
    table.with_column(
        HOTEL_AVG_CLEANLINESS,
        DataColumn::Float64(broadcast(&matched, |a| a.avg_cleanliness)),
    )?;
    table.with_column(
        HOTEL_AVG_COMFORT,
        DataColumn::Float64(broadcast(&matched, |a| a.avg_comfort)),
    )?;
    table.with_column(
        HOTEL_AVG_STAFF,
        DataColumn::Float64(broadcast(&matched, |a| a.avg_staff)),
    )?;

    Ok(true)
}
