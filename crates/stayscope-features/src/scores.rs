//! Row-wise summaries across the five specific score columns

use crate::columns::{numeric, SCORE_VARIANCE, SPECIFIC_SCORES, TOTAL_SPECIFIC_SCORES};
use crate::error::{FeatureError, FeatureResult};
use stayscope_stats::SummaryStats;
use stayscope_table::{DataColumn, Table};

/// Add `total_specific_scores` and `score_variance`
///
/// All five specific score columns must be present. The total stays integral
/// when every input column is an integer column.
pub(crate) fn add_score_summaries(table: &mut Table) -> FeatureResult<()> {
    if let Some(missing) = SPECIFIC_SCORES.iter().find(|name| !table.has_column(name)) {
        return Err(FeatureError::MissingColumn(missing.to_string()));
    }

    let columns = SPECIFIC_SCORES
        .iter()
        .map(|name| numeric(table, name))
        .collect::<FeatureResult<Vec<_>>>()?;

    let mut totals = Vec::with_capacity(table.num_rows());
    let mut variances = Vec::with_capacity(table.num_rows());
    for row in 0..table.num_rows() {
        let scores: Vec<f64> = columns.iter().map(|c| c[row]).collect();
        let stats = SummaryStats::from_data(&scores);
        totals.push(stats.sum);
        variances.push(stats.variance);
    }

    let all_integer = SPECIFIC_SCORES
        .iter()
        .all(|name| matches!(table.column(name), Some(DataColumn::Int64(_))));
    let totals = if all_integer {
        DataColumn::Int64(totals.iter().map(|&t| t as i64).collect())
    } else {
        DataColumn::Float64(totals)
    };

    table.with_column(TOTAL_SPECIFIC_SCORES, totals)?;
    table.with_column(SCORE_VARIANCE, DataColumn::Float64(variances))?;
    Ok(())
}
