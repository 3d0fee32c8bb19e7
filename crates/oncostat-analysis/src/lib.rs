//! Tumor study analysis
//!
//! This crate loads a pre-clinical tumor study, cleans it, and computes the
//! statistics of the analysis on top of the generic tools of
//! [`oncostat_stats`].
//!
//! # Overview
//!
//! The analysis is a single linear pipeline:
//!
//! 1. **Load** ([`dataset`]): Read mouse metadata and study results from CSV
//! 2. **Join** ([`study::StudyTable::join`]): Left-join measurements to their mice
//! 3. **Clean** ([`study::StudyTable::deduplicate`]): Drop every mouse with a
//!    duplicated `(mouse, timepoint)` key
//! 4. **Summarize** ([`summary::SummaryStatsMap`]): Tumor volume statistics per regimen
//! 5. **Final volumes** ([`final_volume`]): Last measured volume of each mouse and
//!    Tukey outliers per treatment
//! 6. **Correlate** ([`correlation::WeightVolumeRegression`]): Average weight against
//!    average tumor volume within a regimen
//! 7. **Chart data** ([`charts::ChartData`]): Datasets behind the study charts
//!
//! The clean table is computed once and every later step reads from it.
//!
//! # Examples
//!
//! ```no_run
//! use std::fs::File;
//!
//! use oncostat_analysis::{
//!     correlation::WeightVolumeRegression,
//!     dataset,
//!     final_volume::{DEFAULT_TREATMENTS, TreatmentFinalVolumes},
//!     study::StudyTable,
//!     summary::SummaryStatsMap,
//! };
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let mice = dataset::read_mouse_metadata(File::open("data/Mouse_metadata.csv")?)?;
//! let measurements = dataset::read_measurements(File::open("data/Study_results.csv")?)?;
//!
//! let study = StudyTable::join(&mice, measurements)?.deduplicate().clean;
//!
//! let summary = SummaryStatsMap::tumor_volume_by_regimen(&study);
//! let finals = TreatmentFinalVolumes::collect(&study, &DEFAULT_TREATMENTS, 1.5);
//! let regression = WeightVolumeRegression::compute(&study, "Capomulin")?;
//!
//! println!("{} regimens", summary.map.len());
//! for treatment in &finals {
//!     println!("{}: {} outliers", treatment.regimen, treatment.analysis.outliers.len());
//! }
//! println!("r = {:.2}", regression.fit.r);
//! # Ok(())
//! # }
//! ```

pub mod charts;
pub mod correlation;
pub mod dataset;
pub mod error;
pub mod final_volume;
pub mod record;
pub mod study;
pub mod summary;
