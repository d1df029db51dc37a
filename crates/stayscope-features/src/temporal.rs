//! Calendar features derived from the review date
//!
//! Adds `review_year`, `review_month`, `review_day`, `review_dayofweek` and
//! `season`. Day of week counts from Monday: 0 = Monday .. 6 = Sunday.

use crate::columns::{
    REVIEW_DATE, REVIEW_DAY, REVIEW_DAYOFWEEK, REVIEW_MONTH, REVIEW_YEAR, SEASON,
};
use crate::config::EnrichConfig;
use crate::error::{FeatureError, FeatureResult};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use stayscope_table::{DataColumn, Table};
use std::fmt;

/// Meteorological season of a review month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// Map a calendar month (1-12) to its season
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Autumn,
        }
    }

    /// Label written to the `season` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse one review date
///
/// RFC 3339 is tried first (keeping the local wall-clock time), then each
/// format in order, first as a date-time and then as a bare date.
pub fn parse_review_date(raw: &str, formats: &[String]) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    formats.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(s, fmt).ok().or_else(|| {
            NaiveDate::parse_from_str(s, fmt)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
    })
}

/// Parse the whole `review_date` column, failing on the first bad value
fn parse_dates(table: &Table, config: &EnrichConfig) -> FeatureResult<Vec<NaiveDateTime>> {
    let column = table.require(REVIEW_DATE)?;

    match column {
        DataColumn::DateTime(values) => Ok(values.clone()),
        DataColumn::String(values) => values
            .iter()
            .enumerate()
            .map(|(row, raw)| {
                parse_review_date(raw, &config.date_formats).ok_or_else(|| FeatureError::Parse {
                    column: REVIEW_DATE.to_string(),
                    row,
                    value: raw.clone(),
                })
            })
            .collect(),
        other => {
            let value = other
                .value(0)
                .map(|v| format!("{:?}", v))
                .unwrap_or_else(|| other.dtype().to_string());
            Err(FeatureError::Parse {
                column: REVIEW_DATE.to_string(),
                row: 0,
                value,
            })
        }
    }
}

/// Add calendar columns when `review_date` is present
///
/// The date column itself is replaced by its parsed form. Returns whether
/// the features were added.
pub(crate) fn expand(table: &mut Table, config: &EnrichConfig) -> FeatureResult<bool> {
    if !table.has_column(REVIEW_DATE) {
        return Ok(false);
    }

    let dates = parse_dates(table, config)?;

    let years = dates.iter().map(|d| d.year() as i64).collect::<Vec<_>>();
    let months = dates.iter().map(|d| d.month() as i64).collect::<Vec<_>>();
    let days = dates.iter().map(|d| d.day() as i64).collect::<Vec<_>>();
    let weekdays = dates
        .iter()
        .map(|d| d.weekday().num_days_from_monday() as i64)
        .collect::<Vec<_>>();
    let seasons = dates
        .iter()
        .map(|d| Season::from_month(d.month()).as_str().to_string())
        .collect::<Vec<_>>();

    table.with_column(REVIEW_DATE, DataColumn::DateTime(dates))?;
    table.with_column(REVIEW_YEAR, DataColumn::Int64(years))?;
    table.with_column(REVIEW_MONTH, DataColumn::Int64(months))?;
    table.with_column(REVIEW_DAY, DataColumn::Int64(days))?;
    table.with_column(REVIEW_DAYOFWEEK, DataColumn::Int64(weekdays))?;
    table.with_column(SEASON, DataColumn::String(seasons))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use stayscope_table::Value;

    fn formats() -> Vec<String> {
        EnrichConfig::default().date_formats
    }

    #[rstest]
    #[case(1, Season::Winter)]
    #[case(2, Season::Winter)]
    #[case(3, Season::Spring)]
    #[case(5, Season::Spring)]
    #[case(6, Season::Summer)]
    #[case(7, Season::Summer)]
    #[case(8, Season::Summer)]
    #[case(9, Season::Autumn)]
    #[case(11, Season::Autumn)]
    #[case(12, Season::Winter)]
    fn test_season_from_month(#[case] month: u32, #[case] expected: Season) {
        assert_eq!(Season::from_month(month), expected);
    }

    #[rstest]
    #[case("2023-07-14", 2023, 7, 14)]
    #[case("2023-07-14 18:30:00", 2023, 7, 14)]
    #[case("2023-07-14T18:30:00", 2023, 7, 14)]
    #[case("2023-07-14T23:30:00+05:00", 2023, 7, 14)]
    #[case("2023/07/14", 2023, 7, 14)]
    #[case("07/14/2023", 2023, 7, 14)]
    #[case("14.07.2023", 2023, 7, 14)]
    #[case("  2023-07-14  ", 2023, 7, 14)]
    #[case("2023-07-14 18:30:00.250", 2023, 7, 14)]
    #[case("2023-07-14T18:30:00.250", 2023, 7, 14)]
    #[case("2023-07-14T18:30:00.5+00:00", 2023, 7, 14)]
    fn test_parse_review_date(
        #[case] raw: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let parsed = parse_review_date(raw, &formats()).unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(year, month, day).unwrap());
    }

    #[test]
    fn test_fractional_seconds_kept() {
        let parsed = parse_review_date("2023-07-14 18:30:00.250", &formats()).unwrap();
        let expected = NaiveDate::from_ymd_opt(2023, 7, 14)
            .unwrap()
            .and_hms_milli_opt(18, 30, 0, 250)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case("not-a-date")]
    #[case("")]
    #[case("2023-13-01")]
    #[case("2023-02-30")]
    fn test_parse_review_date_rejects(#[case] raw: &str) {
        assert!(parse_review_date(raw, &formats()).is_none());
    }

    #[test]
    fn test_expand_adds_calendar_columns() {
        // 2024-01-01 was a Monday, 2023-07-16 a Sunday
        let mut table = Table::from_columns(vec![(
            REVIEW_DATE,
            DataColumn::from(vec!["2024-01-01", "2023-07-16"]),
        )])
        .unwrap();

        assert!(expand(&mut table, &EnrichConfig::default()).unwrap());

        assert_eq!(table.column(REVIEW_YEAR), Some(&DataColumn::Int64(vec![2024, 2023])));
        assert_eq!(table.column(REVIEW_MONTH), Some(&DataColumn::Int64(vec![1, 7])));
        assert_eq!(table.column(REVIEW_DAY), Some(&DataColumn::Int64(vec![1, 16])));
        assert_eq!(table.column(REVIEW_DAYOFWEEK), Some(&DataColumn::Int64(vec![0, 6])));
        assert_eq!(table.value(SEASON, 0), Some(Value::Text("Winter".to_string())));
        assert_eq!(table.value(SEASON, 1), Some(Value::Text("Summer".to_string())));
        assert_eq!(table.column(REVIEW_DATE).map(|c| c.dtype().name()), Some("datetime"));
    }

    #[test]
    fn test_expand_skips_without_date() {
        let mut table =
            Table::from_columns(vec![("hotel_id", DataColumn::from(vec!["H1"]))]).unwrap();
        assert!(!expand(&mut table, &EnrichConfig::default()).unwrap());
        assert_eq!(table.num_columns(), 1);
    }

    #[test]
    fn test_expand_reports_bad_row() {
        let mut table = Table::from_columns(vec![(
            REVIEW_DATE,
            DataColumn::from(vec!["2023-01-01", "not-a-date"]),
        )])
        .unwrap();

        let err = expand(&mut table, &EnrichConfig::default()).unwrap_err();
        assert_eq!(
            err,
            FeatureError::Parse {
                column: REVIEW_DATE.to_string(),
                row: 1,
                value: "not-a-date".to_string(),
            }
        );
    }

    #[test]
    fn test_expand_rejects_numeric_dates() {
        let mut table =
            Table::from_columns(vec![(REVIEW_DATE, DataColumn::Int64(vec![20230101]))]).unwrap();
        assert!(matches!(
            expand(&mut table, &EnrichConfig::default()),
            Err(FeatureError::Parse { row: 0, .. })
        ));
    }

    #[test]
    fn test_custom_format() {
        let formats = vec!["%d %B %Y".to_string()];
        let parsed = parse_review_date("3 March 2022", &formats).unwrap();
        assert_eq!(parsed.month(), 3);
        assert_eq!(parsed.weekday().num_days_from_monday(), 3);
    }
}
