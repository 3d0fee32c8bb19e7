//! Percentiles of sorted samples.

/// Computes a single percentile value from sorted data.
///
/// This function uses linear interpolation between the closest ranks. For a
/// dataset with n values the k-th percentile sits at fractional rank
/// `k / 100 * (n - 1)`; the result interpolates between the values at the
/// floor and ceiling of that rank. This is the default method of common
/// dataframe libraries, so quartiles and Tukey fences match their output.
///
/// Percentiles outside 0-100 are clamped.
///
/// # Returns
///
/// The value at the specified percentile. Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use oncostat_stats::percentiles::compute_percentile;
///
/// let values = [10.0, 12.0, 13.0, 14.0, 15.0, 16.0, 100.0];
///
/// assert_eq!(compute_percentile(&values, 50.0), 14.0);
/// assert_eq!(compute_percentile(&values, 25.0), 12.5);
/// assert_eq!(compute_percentile(&values, 75.0), 15.5);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    let Some(last_idx) = sorted_values.len().checked_sub(1) else {
        return f64::NAN;
    };
    let rank = (percentile.clamp(0.0, 100.0) / 100.0) * last_idx as f64;
    let lower_idx = (rank.floor() as usize).min(last_idx);
    let upper_idx = (lower_idx + 1).min(last_idx);
    let fraction = rank - lower_idx as f64;

    let lower = sorted_values[lower_idx];
    let upper = sorted_values[upper_idx];
    lower + fraction * (upper - lower)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_is_nan() {
        assert!(compute_percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn test_single_value() {
        assert_eq!(compute_percentile(&[3.0], 0.0), 3.0);
        assert_eq!(compute_percentile(&[3.0], 75.0), 3.0);
        assert_eq!(compute_percentile(&[3.0], 100.0), 3.0);
    }

    #[test]
    fn test_extremes_are_min_and_max() {
        let values = [1.0, 4.0, 9.0];
        assert_eq!(compute_percentile(&values, 0.0), 1.0);
        assert_eq!(compute_percentile(&values, 100.0), 9.0);
    }

    #[test]
    fn test_linear_interpolation() {
        // rank = 0.25 * 3 = 0.75 -> 10 + 0.75 * (20 - 10)
        let values = [10.0, 20.0, 30.0, 40.0];
        assert!((compute_percentile(&values, 25.0) - 17.5).abs() < 1e-12);
        assert!((compute_percentile(&values, 50.0) - 25.0).abs() < 1e-12);
        assert!((compute_percentile(&values, 75.0) - 32.5).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_percentile_is_clamped() {
        let values = [1.0, 2.0];
        assert_eq!(compute_percentile(&values, -10.0), 1.0);
        assert_eq!(compute_percentile(&values, 150.0), 2.0);
    }

    proptest! {
        #[test]
        fn prop_percentile_is_monotonic_and_bounded(
            mut values in proptest::collection::vec(-1.0e3f64..1.0e3, 1..60),
            a in 0.0f64..100.0,
            b in 0.0f64..100.0,
        ) {
            values.sort_by(f64::total_cmp);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = compute_percentile(&values, lo);
            let p_hi = compute_percentile(&values, hi);
            prop_assert!(p_lo <= p_hi + 1e-9);
            prop_assert!(values[0] <= p_lo + 1e-9);
            prop_assert!(p_hi <= values[values.len() - 1] + 1e-9);
        }
    }
}
