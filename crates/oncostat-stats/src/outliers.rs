//! Outlier detection with Tukey's fences.
//!
//! A value is an outlier when it lies strictly outside
//! `[Q1 - k * IQR, Q3 + k * IQR]`, where Q1 and Q3 are the linearly
//! interpolated quartiles (see [`compute_percentile`]) and `k` is usually 1.5.
//!
//! Outliers are reported, never removed: the caller decides what to do
//! with them.

use serde::Serialize;

use crate::percentiles::compute_percentile;

/// Conventional fence multiplier for Tukey's rule.
pub const DEFAULT_IQR_FACTOR: f64 = 1.5;

/// Which fence an outlier crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlierSide {
    /// Strictly below the lower fence.
    Low,
    /// Strictly above the upper fence.
    High,
}

/// Quartiles, fences and whiskers of a dataset.
///
/// Every field is `NaN` for an empty dataset, in which case no value is ever
/// classified as an outlier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TukeyFences {
    /// First quartile (25th percentile).
    pub q1: f64,
    /// Median (50th percentile).
    pub median: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
    /// Interquartile range (`q3 - q1`).
    pub iqr: f64,
    /// Fence multiplier applied to the IQR.
    pub factor: f64,
    /// `q1 - factor * iqr`
    pub lower_fence: f64,
    /// `q3 + factor * iqr`
    pub upper_fence: f64,
    /// Smallest value that is not an outlier.
    pub whisker_low: f64,
    /// Largest value that is not an outlier.
    pub whisker_high: f64,
}

impl TukeyFences {
    /// Computes fences from unsorted values.
    ///
    /// # Examples
    ///
    /// ```
    /// use oncostat_stats::outliers::{DEFAULT_IQR_FACTOR, OutlierSide, TukeyFences};
    ///
    /// let fences = TukeyFences::new(&[10.0, 12.0, 13.0, 14.0, 15.0, 16.0, 100.0], DEFAULT_IQR_FACTOR);
    /// assert_eq!(fences.iqr, 3.0);
    /// assert_eq!(fences.upper_fence, 20.0);
    /// assert_eq!(fences.classify(100.0), Some(OutlierSide::High));
    /// assert_eq!(fences.classify(16.0), None);
    /// assert_eq!(fences.whisker_high, 16.0);
    /// ```
    #[must_use]
    pub fn new(values: &[f64], factor: f64) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, factor)
    }

    /// Computes fences from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], factor: f64) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        let q1 = compute_percentile(sorted_values, 25.0);
        let median = compute_percentile(sorted_values, 50.0);
        let q3 = compute_percentile(sorted_values, 75.0);
        let iqr = q3 - q1;
        let lower_fence = q1 - factor * iqr;
        let upper_fence = q3 + factor * iqr;

        let mut inliers = sorted_values
            .iter()
            .copied()
            .filter(|&v| v >= lower_fence && v <= upper_fence);
        let whisker_low = inliers.next().unwrap_or(f64::NAN);
        let whisker_high = inliers.last().unwrap_or(whisker_low);

        Self {
            q1,
            median,
            q3,
            iqr,
            factor,
            lower_fence,
            upper_fence,
            whisker_low,
            whisker_high,
        }
    }

    /// Classifies a value against the fences.
    ///
    /// Values exactly on a fence are not outliers.
    #[must_use]
    pub fn classify(&self, value: f64) -> Option<OutlierSide> {
        if value < self.lower_fence {
            Some(OutlierSide::Low)
        } else if value > self.upper_fence {
            Some(OutlierSide::High)
        } else {
            None
        }
    }
}

/// A flagged value together with the key identifying where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outlier<K> {
    /// Identifier of the source of the value.
    pub key: K,
    /// The flagged value.
    pub value: f64,
    /// Which fence the value crossed.
    pub side: OutlierSide,
}

/// Result of outlier analysis over keyed samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlierAnalysis<K> {
    /// Number of analyzed samples.
    pub count: usize,
    /// Quartiles and fences the samples were judged against.
    pub fences: TukeyFences,
    /// Flagged samples, in input order.
    pub outliers: Vec<Outlier<K>>,
}

impl<K> OutlierAnalysis<K> {
    /// Detects outliers among keyed samples.
    ///
    /// # Examples
    ///
    /// ```
    /// use oncostat_stats::outliers::{DEFAULT_IQR_FACTOR, OutlierAnalysis};
    ///
    /// let samples = [("a", 10.0), ("b", 12.0), ("c", 13.0), ("d", 14.0), ("e", 100.0)];
    /// let analysis = OutlierAnalysis::detect(samples, DEFAULT_IQR_FACTOR);
    /// assert_eq!(analysis.outliers.len(), 1);
    /// assert_eq!(analysis.outliers[0].key, "e");
    /// ```
    pub fn detect<I>(samples: I, factor: f64) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        let samples = samples.into_iter().collect::<Vec<_>>();
        let mut sorted = samples.iter().map(|(_, v)| *v).collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        let fences = TukeyFences::from_sorted(&sorted, factor);

        let outliers = samples
            .into_iter()
            .filter_map(|(key, value)| {
                fences
                    .classify(value)
                    .map(|side| Outlier { key, value, side })
            })
            .collect();

        Self {
            count: sorted.len(),
            fences,
            outliers,
        }
    }

    /// Number of outliers below the lower fence.
    #[must_use]
    pub fn low_count(&self) -> usize {
        self.outliers
            .iter()
            .filter(|o| o.side == OutlierSide::Low)
            .count()
    }

    /// Number of outliers above the upper fence.
    #[must_use]
    pub fn high_count(&self) -> usize {
        self.outliers
            .iter()
            .filter(|o| o.side == OutlierSide::High)
            .count()
    }

    /// Percentage of samples that are outliers.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn outlier_percentage(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.outliers.len() as f64 / self.count as f64) * 100.0
    }
}
