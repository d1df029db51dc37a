//! The feature enricher: runs every derivation step over a copy of the input

use crate::config::EnrichConfig;
use crate::error::FeatureResult;
use crate::gaps::{add_gaps, Dimension};
use crate::hotel::add_hotel_aggregates;
use crate::scores::add_score_summaries;
use crate::temporal;
use serde::{Deserialize, Serialize};
use stayscope_table::Table;
use tracing::{debug, info};

/// A group of derived columns added in one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureGroup {
    /// Year, month, day, day of week and season
    Temporal,
    /// Score minus baseline for one dimension
    Gap(Dimension),
    /// Per-hotel means and review count
    HotelAggregates,
    /// Total and variance of the specific scores
    ScoreSummaries,
}

/// What an enrichment run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichReport {
    /// Rows in the output (always equal to the input)
    pub num_rows: usize,
    /// Columns in the output
    pub num_columns: usize,
    /// Output columns absent from the input, in output order
    pub new_columns: Vec<String>,
    /// Feature groups that were applied, in order
    pub groups: Vec<FeatureGroup>,
}

/// Derives review features from a table
#[derive(Debug, Clone, Default)]
pub struct Enricher {
    config: EnrichConfig,
}

impl Enricher {
    /// Create an enricher, validating its configuration
    pub fn new(config: EnrichConfig) -> FeatureResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &EnrichConfig {
        &self.config
    }

    /// Return a new table with every applicable feature added
    pub fn enrich(&self, table: &Table) -> FeatureResult<Table> {
        self.enrich_with_report(table).map(|(table, _)| table)
    }

    /// Like [`Enricher::enrich`], also describing what was added
    ///
    /// The input is never modified; on error no table is returned.
    pub fn enrich_with_report(&self, table: &Table) -> FeatureResult<(Table, EnrichReport)> {
        let mut out = table.clone();
        let mut groups = Vec::new();

        if temporal::expand(&mut out, &self.config)? {
            info!("Added temporal features");
            groups.push(FeatureGroup::Temporal);
        } else {
            debug!("No review_date column, skipping temporal features");
        }

        for dim in add_gaps(&mut out)? {
            info!("Added {}", dim.gap_column());
            groups.push(FeatureGroup::Gap(dim));
        }

        if add_hotel_aggregates(&mut out, self.config.aggregate_precision)? {
            info!("Added hotel aggregate features");
            groups.push(FeatureGroup::HotelAggregates);
        } else {
            debug!("No hotel_id or score_overall column, skipping hotel aggregates");
        }

        add_score_summaries(&mut out)?;
        groups.push(FeatureGroup::ScoreSummaries);

        let new_columns: Vec<String> = out
            .column_names()
            .into_iter()
            .filter(|name| !table.has_column(name))
            .map(str::to_string)
            .collect();

        let (num_rows, num_columns) = out.shape();
        info!("Enriched table shape: ({}, {})", num_rows, num_columns);
        if self.config.log_new_columns {
            info!("New columns: {:?}", new_columns);
        }

        let report = EnrichReport {
            num_rows,
            num_columns,
            new_columns,
            groups,
        };
        Ok((out, report))
    }
}

/// Enrich a table with the default configuration
pub fn enrich(table: &Table) -> FeatureResult<Table> {
    Enricher::default().enrich(table)
}
