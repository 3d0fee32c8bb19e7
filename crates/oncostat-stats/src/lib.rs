//! Statistical analysis utilities for the oncostat project.
//!
//! This crate is independent of the study data model and works on plain
//! `f64` samples:
//!
//! - **Descriptive statistics**: mean, median, sample variance, standard deviation, SEM
//! - **Percentiles**: linearly interpolated percentiles of sorted samples
//! - **Outliers**: Tukey's fences over keyed samples
//! - **Regression**: Pearson correlation and ordinary-least-squares line fits
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Percentile computation
//! - [`outliers`]: Interquartile-range outlier detection
//! - [`regression`]: Correlation and simple linear regression
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use oncostat_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values);
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.variance, 2.5);
//! ```
//!
//! ## Computing percentiles
//!
//! ```
//! use oncostat_stats::percentiles::compute_percentile;
//!
//! let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(compute_percentile(&sorted, 50.0), 3.0);
//! assert_eq!(compute_percentile(&sorted, 25.0), 2.0);
//! ```
//!
//! ## Flagging outliers
//!
//! ```
//! use oncostat_stats::outliers::{DEFAULT_IQR_FACTOR, OutlierAnalysis};
//!
//! let samples = [10.0, 12.0, 13.0, 14.0, 15.0, 16.0, 100.0]
//!     .into_iter()
//!     .enumerate();
//! let analysis = OutlierAnalysis::detect(samples, DEFAULT_IQR_FACTOR);
//! assert_eq!(analysis.outliers.len(), 1);
//! assert_eq!(analysis.outliers[0].value, 100.0);
//! ```
//!
//! ## Fitting a line
//!
//! ```
//! use oncostat_stats::regression::LinearRegression;
//!
//! let fit = LinearRegression::fit(&[(1.0, 3.0), (2.0, 5.0), (4.0, 9.0)]).unwrap();
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//! ```

pub mod descriptive;
pub mod outliers;
pub mod percentiles;
pub mod regression;
