//! Pearson correlation and simple ordinary-least-squares regression.

use serde::Serialize;

/// Reasons a regression cannot be fitted.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum InsufficientDataError {
    #[display("not enough data points: got {got}, need at least 2")]
    TooFewPoints { got: usize },
    #[display("all {count} x values are {value}; the slope is undefined")]
    ConstantX { count: usize, value: f64 },
    #[display("point {index} is not finite ({x}, {y})")]
    NonFinitePoint { index: usize, x: f64, y: f64 },
}

/// Least-squares fit of `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearRegression {
    /// Number of fitted points.
    pub count: usize,
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient, `NaN` when y has zero variance.
    pub r: f64,
    /// Coefficient of determination (`r * r`).
    pub r_squared: f64,
    /// Standard error of the slope estimate, `NaN` for two points.
    pub slope_std_err: f64,
    pub x_mean: f64,
    pub y_mean: f64,
}

impl LinearRegression {
    /// Fits a line through `(x, y)` points.
    ///
    /// Fails when fewer than two points are given, when a coordinate is not
    /// finite, or when every x is the same (zero variance in x).
    ///
    /// # Examples
    ///
    /// ```
    /// use oncostat_stats::regression::LinearRegression;
    ///
    /// let points = [(1.0, 3.0), (2.0, 5.0), (3.0, 7.0)];
    /// let fit = LinearRegression::fit(&points).unwrap();
    /// assert!((fit.slope - 2.0).abs() < 1e-12);
    /// assert!((fit.intercept - 1.0).abs() < 1e-12);
    /// assert!((fit.r - 1.0).abs() < 1e-12);
    ///
    /// assert!(LinearRegression::fit(&[(2.0, 1.0), (2.0, 5.0)]).is_err());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn fit(points: &[(f64, f64)]) -> Result<Self, InsufficientDataError> {
        let count = points.len();
        let [(first_x, _), _, ..] = points else {
            return Err(InsufficientDataError::TooFewPoints { got: count });
        };
        if let Some((index, &(x, y))) = points
            .iter()
            .enumerate()
            .find(|(_, (x, y))| !x.is_finite() || !y.is_finite())
        {
            return Err(InsufficientDataError::NonFinitePoint { index, x, y });
        }
        if points.iter().all(|(x, _)| x.total_cmp(first_x).is_eq()) {
            return Err(InsufficientDataError::ConstantX {
                count,
                value: *first_x,
            });
        }

        let n = count as f64;
        let x_mean = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let y_mean = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (sxx, syy, sxy) =
            points
                .iter()
                .fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), &(x, y)| {
                    let dx = x - x_mean;
                    let dy = y - y_mean;
                    (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
                });

        let slope = sxy / sxx;
        // x values that differ only in sign of zero or by a few ulps leave no spread
        if sxx.is_nan() || sxx <= 0.0 || !slope.is_finite() {
            return Err(InsufficientDataError::ConstantX {
                count,
                value: *first_x,
            });
        }
        let intercept = y_mean - slope * x_mean;
        // 0 / 0 when y is constant, which leaves r undefined
        let r = (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0);
        let slope_std_err = if count > 2 {
            let residual_ss = (syy - slope * sxy).max(0.0);
            (residual_ss / (n - 2.0) / sxx).sqrt()
        } else {
            f64::NAN
        };

        Ok(Self {
            count,
            slope,
            intercept,
            r,
            r_squared: r * r,
            slope_std_err,
            x_mean,
            y_mean,
        })
    }

    /// Evaluates the fitted line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
