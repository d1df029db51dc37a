//! Summary statistics for score vectors
//!
//! Provides the NaN-skipping summaries used by the feature pipeline:
//! - Count, sum, mean
//! - Sample variance and standard deviation (n - 1 divisor)
//! - Min, max, range

use serde::{Deserialize, Serialize};

/// Summary statistics for a numeric dataset
///
/// NaN values are treated as missing and excluded from every statistic.
/// Infinite values are kept and propagate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of non-NaN values
    pub count: usize,
    /// Number of missing/NaN values
    pub missing: usize,
    /// Sum of non-NaN values (0.0 when there are none)
    pub sum: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Mean (average)
    pub mean: f64,
    /// Sample variance (Bessel-corrected)
    pub variance: f64,
    /// Sample standard deviation
    pub std_dev: f64,
}

impl SummaryStats {
    /// Compute summary statistics from data
    pub fn from_data(data: &[f64]) -> Self {
        let present: Vec<f64> = data.iter().copied().filter(|x| !x.is_nan()).collect();
        let missing = data.len() - present.len();

        if present.is_empty() {
            return Self::empty(missing);
        }

        let count = present.len();
        let sum: f64 = present.iter().sum();
        let mean = sum / count as f64;

        let variance = if count < 2 {
            f64::NAN
        } else {
            present.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (count - 1) as f64
        };
        let std_dev = variance.sqrt();

        let min = present.iter().copied().fold(f64::INFINITY, f64::min);
        let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            count,
            missing,
            sum,
            min,
            max,
            mean,
            variance,
            std_dev,
        }
    }

    /// Statistics over no values
    fn empty(missing: usize) -> Self {
        Self {
            count: 0,
            missing,
            sum: 0.0,
            min: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            variance: f64::NAN,
            std_dev: f64::NAN,
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Mean of the non-NaN values, NaN if there are none
pub fn nan_mean(data: &[f64]) -> f64 {
    let (sum, count) = data
        .iter()
        .filter(|x| !x.is_nan())
        .fold((0.0, 0usize), |(s, n), &x| (s + x, n + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Sum of the non-NaN values, 0.0 if there are none
pub fn nan_sum(data: &[f64]) -> f64 {
    data.iter().filter(|x| !x.is_nan()).sum()
}

/// Number of non-NaN values
pub fn nan_count(data: &[f64]) -> usize {
    data.iter().filter(|x| !x.is_nan()).count()
}

/// Sample variance of the non-NaN values, NaN if fewer than two
pub fn sample_variance(data: &[f64]) -> f64 {
    SummaryStats::from_data(data).variance
}

/// Round to `decimals` places, ties to even
///
/// Non-finite values pass through unchanged.
pub fn round_to(x: f64, decimals: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scale = 10f64.powi(decimals as i32);
    (x * scale).round_ties_even() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_stats_basic() {
        let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let stats = SummaryStats::from_data(&data);

        assert_eq!(stats.count, 10);
        assert_eq!(stats.sum, 55.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 10.0);
        assert_eq!(stats.range(), 9.0);
        assert!((stats.mean - 5.5).abs() < 1e-10);
        // sum of squared deviations is 82.5, divided by n - 1 = 9
        assert!((stats.variance - 82.5 / 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_stats_with_nan() {
        let data = vec![1.0, 2.0, f64::NAN, 4.0, 5.0];
        let stats = SummaryStats::from_data(&data);

        assert_eq!(stats.count, 4);
        assert_eq!(stats.missing, 1);
        assert_eq!(stats.sum, 12.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
    }

    #[test]
    fn test_summary_stats_all_missing() {
        let stats = SummaryStats::from_data(&[f64::NAN, f64::NAN]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.missing, 2);
        assert_eq!(stats.sum, 0.0);
        assert!(stats.mean.is_nan());
        assert!(stats.variance.is_nan());
    }

    #[test]
    fn test_infinity_propagates() {
        let stats = SummaryStats::from_data(&[1.0, f64::INFINITY, f64::NAN]);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.missing, 1);
        assert_eq!(stats.sum, f64::INFINITY);
        assert_eq!(stats.max, f64::INFINITY);
        assert!(stats.variance.is_nan());

        assert_eq!(nan_mean(&[8.0, f64::NEG_INFINITY]), f64::NEG_INFINITY);
        assert_eq!(nan_count(&[8.0, f64::INFINITY, f64::NAN]), 2);
    }

    #[test]
    fn test_sample_variance_constant() {
        assert_eq!(sample_variance(&[8.0, 8.0, 8.0, 8.0, 8.0]), 0.0);
    }

    #[test]
    fn test_sample_variance_needs_two_values() {
        assert!(sample_variance(&[7.0]).is_nan());
        assert!(sample_variance(&[7.0, f64::NAN]).is_nan());
        assert_eq!(sample_variance(&[6.0, 8.0]), 2.0);
    }

    #[test]
    fn test_nan_helpers() {
        let data = vec![8.0, f64::NAN, 10.0];
        assert_eq!(nan_mean(&data), 9.0);
        assert_eq!(nan_sum(&data), 18.0);
        assert_eq!(nan_count(&data), 2);

        assert!(nan_mean(&[]).is_nan());
        assert_eq!(nan_sum(&[f64::NAN]), 0.0);
        assert_eq!(nan_count(&[f64::NAN]), 0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(8.66666, 3), 8.667);
        assert_eq!(round_to(9.0, 3), 9.0);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert!(round_to(f64::NAN, 3).is_nan());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_variance_non_negative(data in prop::collection::vec(-10.0f64..10.0, 2..20)) {
                prop_assert!(sample_variance(&data) >= 0.0);
            }

            #[test]
            fn test_sum_matches_count_times_mean(data in prop::collection::vec(0.0f64..10.0, 1..20)) {
                let stats = SummaryStats::from_data(&data);
                prop_assert!((stats.sum - stats.mean * stats.count as f64).abs() < 1e-9);
            }
        }
    }
}
