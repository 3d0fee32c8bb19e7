//! Data behind the study charts
//!
//! Nothing here renders anything. Each dataset holds exactly what a plotting
//! tool needs to draw one chart, and the whole [`ChartData`] serializes to a
//! single JSON document:
//!
//! | chart            | dataset                                  |
//! |------------------|------------------------------------------|
//! | bar              | [`ChartData::regimen_counts`]            |
//! | pie              | [`ChartData::sex_distribution`]          |
//! | box              | [`ChartData::final_volumes`]             |
//! | line             | [`ChartData::mouse_timeline`]            |
//! | scatter + line   | [`ChartData::weight_volume`]             |

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    correlation::{DEFAULT_REGIMEN, WeightVolumeRegression},
    error::StudyError,
    final_volume::{DEFAULT_TREATMENTS, TreatmentFinalVolumes},
    record::StudyRecord,
    study::StudyTable,
};

/// The mouse whose tumor volume over time is charted by default.
pub const DEFAULT_MOUSE: &str = "l509";

/// Selection of the charted subsets
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Treatments compared in the final volume box plot
    pub treatments: Vec<String>,
    /// Regimen of the charted mouse and of the weight/volume scatter plot
    pub regimen: String,
    /// Mouse charted over time
    pub mouse_id: String,
    /// Fence multiplier for the box plot whiskers
    pub iqr_factor: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            treatments: DEFAULT_TREATMENTS.map(String::from).to_vec(),
            regimen: DEFAULT_REGIMEN.to_owned(),
            mouse_id: DEFAULT_MOUSE.to_owned(),
            iqr_factor: oncostat_stats::outliers::DEFAULT_IQR_FACTOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelShare {
    pub label: String,
    pub count: usize,
    /// Share of all rows, in percent
    pub percent: f64,
}

/// Tumor volume of one mouse over time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MouseTimeline {
    pub mouse_id: String,
    pub regimen: String,
    /// `(timepoint, tumor volume)`, ordered by timepoint
    pub points: Vec<(u32, f64)>,
}

/// Per-mouse averages with the fitted regression line
#[derive(Debug, Clone, Serialize)]
pub struct WeightVolumeChart {
    #[serde(flatten)]
    pub regression: WeightVolumeRegression,
    pub fitted_line: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub regimen_counts: Vec<LabelCount>,
    pub sex_distribution: Vec<LabelShare>,
    pub final_volumes: Vec<TreatmentFinalVolumes>,
    pub mouse_timeline: MouseTimeline,
    pub weight_volume: WeightVolumeChart,
}

impl ChartData {
    /// Computes every chart dataset from the clean study.
    pub fn compute(study: &StudyTable, options: &ChartOptions) -> Result<Self, StudyError> {
        let regression = WeightVolumeRegression::compute(study, &options.regimen)?;
        let fitted_line = regression.fitted_line();
        Ok(Self {
            regimen_counts: regimen_counts(study),
            sex_distribution: sex_distribution(study),
            final_volumes: TreatmentFinalVolumes::collect(
                study,
                &options.treatments,
                options.iqr_factor,
            ),
            mouse_timeline: mouse_timeline(study, &options.regimen, &options.mouse_id)?,
            weight_volume: WeightVolumeChart {
                regression,
                fitted_line,
            },
        })
    }
}

fn count_by<F>(study: &StudyTable, mut label: F) -> BTreeMap<&str, usize>
where
    F: FnMut(&StudyRecord) -> &str,
{
    let mut counts = BTreeMap::new();
    for record in study.records() {
        *counts.entry(label(record)).or_default() += 1;
    }
    counts
}

/// Number of rows per regimen, most observed first (ties by label).
#[must_use]
pub fn regimen_counts(study: &StudyTable) -> Vec<LabelCount> {
    let mut counts = count_by(study, |r| r.regimen.as_str())
        .into_iter()
        .map(|(label, count)| LabelCount {
            label: label.to_owned(),
            count,
        })
        .collect::<Vec<_>>();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    counts
}

/// Number and share of rows per sex, ordered by label.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn sex_distribution(study: &StudyTable) -> Vec<LabelShare> {
    let total = study.len();
    count_by(study, |r| r.sex.as_str())
        .into_iter()
        .map(|(label, count)| LabelShare {
            label: label.to_owned(),
            count,
            percent: 100.0 * count as f64 / total as f64,
        })
        .collect()
}

/// Tumor volume over time of one mouse within a regimen.
pub fn mouse_timeline(
    study: &StudyTable,
    regimen: &str,
    mouse_id: &str,
) -> Result<MouseTimeline, StudyError> {
    let mut points = study
        .regimen_records(regimen)
        .filter(|r| r.mouse_id == mouse_id)
        .map(|r| (r.timepoint, r.tumor_volume))
        .collect::<Vec<_>>();
    if points.is_empty() {
        return Err(StudyError::UnknownMouse {
            mouse_id: mouse_id.to_owned(),
            regimen: regimen.to_owned(),
        });
    }
    points.sort_by_key(|(timepoint, _)| *timepoint);

    Ok(MouseTimeline {
        mouse_id: mouse_id.to_owned(),
        regimen: regimen.to_owned(),
        points,
    })
}
