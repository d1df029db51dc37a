//! Gaps between observed sub-scores and their baselines

use crate::columns::{numeric, SCORE_CLEANLINESS, SCORE_COMFORT, SCORE_FACILITIES};
use crate::error::FeatureResult;
use serde::{Deserialize, Serialize};
use stayscope_table::{DataColumn, Table};

/// A score dimension that may carry a baseline column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Cleanliness,
    Comfort,
    Facilities,
}

impl Dimension {
    /// All dimensions, in output order
    pub const ALL: [Dimension; 3] = [
        Dimension::Cleanliness,
        Dimension::Comfort,
        Dimension::Facilities,
    ];

    /// Observed score column, e.g. `score_comfort`
    pub fn score_column(&self) -> &'static str {
        match self {
            Dimension::Cleanliness => SCORE_CLEANLINESS,
            Dimension::Comfort => SCORE_COMFORT,
            Dimension::Facilities => SCORE_FACILITIES,
        }
    }

    /// Baseline column, e.g. `comfort_base`
    pub fn base_column(&self) -> &'static str {
        match self {
            Dimension::Cleanliness => "cleanliness_base",
            Dimension::Comfort => "comfort_base",
            Dimension::Facilities => "facilities_base",
        }
    }

    /// Output column, e.g. `comfort_gap`
    pub fn gap_column(&self) -> &'static str {
        match self {
            Dimension::Cleanliness => "cleanliness_gap",
            Dimension::Comfort => "comfort_gap",
            Dimension::Facilities => "facilities_gap",
        }
    }
}

/// Add `<dim>_gap = score_<dim> - <dim>_base` for each dimension whose two
/// input columns are both present. Returns the dimensions that were added.
pub(crate) fn add_gaps(table: &mut Table) -> FeatureResult<Vec<Dimension>> {
    let schema = table.schema();
    let mut added = Vec::new();

    for dim in Dimension::ALL {
        if !schema.contains_all(&[dim.score_column(), dim.base_column()]) {
            continue;
        }

        let scores = numeric(table, dim.score_column())?;
        let bases = numeric(table, dim.base_column())?;
        let gaps = scores
            .iter()
            .zip(&bases)
            .map(|(score, base)| score - base)
            .collect::<Vec<f64>>();

        table.with_column(dim.gap_column(), DataColumn::Float64(gaps))?;
        added.push(dim);
    }

    Ok(added)
}
