//! Column names read and written by the enricher

use crate::error::{FeatureError, FeatureResult};
use stayscope_table::{Table, TableError};

pub const REVIEW_DATE: &str = "review_date";
pub const HOTEL_ID: &str = "hotel_id";
pub const SCORE_OVERALL: &str = "score_overall";
pub const SCORE_CLEANLINESS: &str = "score_cleanliness";
pub const SCORE_COMFORT: &str = "score_comfort";
pub const SCORE_FACILITIES: &str = "score_facilities";
pub const SCORE_LOCATION: &str = "score_location";
pub const SCORE_STAFF: &str = "score_staff";

pub const REVIEW_YEAR: &str = "review_year";
pub const REVIEW_MONTH: &str = "review_month";
pub const REVIEW_DAY: &str = "review_day";
pub const REVIEW_DAYOFWEEK: &str = "review_dayofweek";
pub const SEASON: &str = "season";

pub const HOTEL_AVG_SCORE: &str = "hotel_avg_score";
pub const HOTEL_REVIEW_COUNT: &str = "hotel_review_count";
pub const HOTEL_AVG_CLEANLINESS: &str = "hotel_avg_cleanliness";
pub const HOTEL_AVG_COMFORT: &str = "hotel_avg_comfort";
pub const HOTEL_AVG_STAFF: &str = "hotel_avg_staff";

pub const TOTAL_SPECIFIC_SCORES: &str = "total_specific_scores";
pub const SCORE_VARIANCE: &str = "score_variance";

/// The five specific score columns summarised per row
pub const SPECIFIC_SCORES: [&str; 5] = [
    SCORE_CLEANLINESS,
    SCORE_COMFORT,
    SCORE_FACILITIES,
    SCORE_LOCATION,
    SCORE_STAFF,
];

/// Read a numeric column as f64, mapping table errors to enrichment errors
pub(crate) fn numeric(table: &Table, name: &str) -> FeatureResult<Vec<f64>> {
    table.column_f64(name).map_err(|e| match e {
        TableError::ColumnNotFound(column) => FeatureError::MissingColumn(column),
        TableError::TypeMismatch {
            column,
            expected,
            actual,
        } => FeatureError::TypeError {
            column,
            expected,
            actual,
        },
        other => FeatureError::Table(other),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stayscope_table::DataColumn;

    #[test]
    fn test_numeric_coerces_ints() {
        let table =
            Table::from_columns(vec![(SCORE_STAFF, DataColumn::Int64(vec![7, 9]))]).unwrap();
        assert_eq!(numeric(&table, SCORE_STAFF).unwrap(), vec![7.0, 9.0]);
    }

    #[test]
    fn test_numeric_errors() {
        let table = Table::from_columns(vec![(SCORE_STAFF, DataColumn::from(vec!["good", "bad"]))])
            .unwrap();

        assert_eq!(
            numeric(&table, SCORE_COMFORT),
            Err(FeatureError::MissingColumn(SCORE_COMFORT.to_string()))
        );
        assert!(matches!(
            numeric(&table, SCORE_STAFF),
            Err(FeatureError::TypeError { .. })
        ));
    }
}
