use serde::Serialize;

use crate::percentiles::compute_percentile;

/// Descriptive statistics summarizing a dataset.
///
/// Dispersion measures use the sample (n - 1) denominator. Measures that are
/// undefined for the given number of values are `NaN` rather than an error:
///
/// | count | mean / median / min / max | variance / std dev / sem |
/// |-------|---------------------------|--------------------------|
/// | 0     | `NaN`                     | `NaN`                    |
/// | 1     | defined                   | `NaN`                    |
/// | ≥ 2   | defined                   | defined                  |
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset.
    ///
    /// For an even number of values this is the average of the two middle values.
    pub median: f64,
    /// The sample variance of the dataset.
    pub variance: f64,
    /// The sample standard deviation of the dataset.
    pub std_dev: f64,
    /// The standard error of the mean (`std_dev / sqrt(count)`).
    pub sem: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oncostat_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.variance, 2.5);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    /// Use this when you already have sorted data to avoid unnecessary work.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oncostat_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::from_sorted(&[4.0]);
    /// assert_eq!(stats.mean, 4.0);
    /// assert!(stats.variance.is_nan());
    /// assert!(stats.sem.is_nan());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        let count = sorted_values.len();
        let min = sorted_values.first().copied().unwrap_or(f64::NAN);
        let max = sorted_values.last().copied().unwrap_or(f64::NAN);
        let n = count as f64;
        let mean = if count == 0 {
            f64::NAN
        } else {
            sorted_values.iter().sum::<f64>() / n
        };
        let median = compute_percentile(sorted_values, 50.0);

        let variance = if count < 2 {
            f64::NAN
        } else {
            sorted_values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>()
                / (n - 1.0)
        };
        let std_dev = variance.sqrt();
        let sem = std_dev / n.sqrt();

        Self {
            count,
            min,
            max,
            mean,
            median,
            variance,
            std_dev,
            sem,
        }
    }
}

/// Arithmetic mean of the values, `NaN` when there are none.
///
/// # Examples
///
/// ```
/// # use oncostat_stats::descriptive::mean;
/// assert_eq!(mean([1.0, 2.0, 6.0]), 3.0);
/// assert!(mean([]).is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}
