//! Review table fixtures

use stayscope_table::{DataColumn, Table};

/// One review row, used to build fixture tables
pub struct Review {
    pub date: &'static str,
    pub hotel: &'static str,
    pub overall: f64,
    /// cleanliness, comfort, facilities, location, staff
    pub scores: [f64; 5],
}

/// Five reviews across two hotels, interleaved
pub fn sample_reviews() -> Vec<Review> {
    vec![
        Review { date: "2023-01-15", hotel: "H1", overall: 8.0, scores: [8.0, 7.0, 6.0, 9.0, 8.0] },
        Review { date: "2023-07-04", hotel: "H2", overall: 6.0, scores: [5.0, 6.0, 6.0, 7.0, 6.0] },
        Review { date: "2023-04-20", hotel: "H1", overall: 9.0, scores: [9.0, 8.0, 7.0, 9.0, 9.0] },
        Review { date: "2023-10-31", hotel: "H2", overall: 7.0, scores: [7.0, 7.0, 7.0, 7.0, 7.0] },
        Review { date: "2023-12-25", hotel: "H1", overall: 10.0, scores: [10.0, 9.0, 8.0, 10.0, 10.0] },
    ]
}

/// Build a table with date, hotel, overall and the five specific scores
pub fn review_table(reviews: &[Review]) -> Table {
    let score = |i: usize| DataColumn::Float64(reviews.iter().map(|r| r.scores[i]).collect());

    Table::from_columns(vec![
        ("review_date", DataColumn::from(reviews.iter().map(|r| r.date).collect::<Vec<_>>())),
        ("hotel_id", DataColumn::from(reviews.iter().map(|r| r.hotel).collect::<Vec<_>>())),
        ("score_overall", DataColumn::Float64(reviews.iter().map(|r| r.overall).collect())),
        ("score_cleanliness", score(0)),
        ("score_comfort", score(1)),
        ("score_facilities", score(2)),
        ("score_location", score(3)),
        ("score_staff", score(4)),
    ])
    .unwrap_or_else(|e| panic!("Failed to build fixture table: {}", e))
}

/// The sample table with baselines for cleanliness and comfort only
#[allow(dead_code)]
pub fn table_with_baselines() -> Table {
    let mut table = review_table(&sample_reviews());
    table
        .with_column("cleanliness_base", DataColumn::Float64(vec![7.0, 6.0, 8.0, 7.0, 9.0]))
        .unwrap();
    table
        .with_column("comfort_base", DataColumn::Float64(vec![7.5; 5]))
        .unwrap();
    table
}

/// Install a test log subscriber once per process
#[allow(dead_code)]
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
