//! Mouse weight against tumor volume within one regimen
//!
//! Every mouse of the regimen contributes a single point: its weight and its
//! tumor volume, each averaged over all of its rows. The points are fitted
//! with [`LinearRegression`].

use std::collections::BTreeMap;

use oncostat_stats::{descriptive, regression::LinearRegression};
use serde::Serialize;

use crate::{error::StudyError, study::StudyTable};

/// The regimen whose weight/volume relationship is analyzed by default.
pub const DEFAULT_REGIMEN: &str = "Capomulin";

/// Per-mouse averages over all rows of the mouse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MouseAverages {
    pub mouse_id: String,
    pub weight: f64,
    pub tumor_volume: f64,
}

/// Average weight and tumor volume of every mouse in a regimen, ordered by mouse identifier.
#[must_use]
pub fn mouse_averages(study: &StudyTable, regimen: &str) -> Vec<MouseAverages> {
    let mut rows_by_mouse = BTreeMap::<&str, Vec<(f64, f64)>>::new();
    for record in study.regimen_records(regimen) {
        rows_by_mouse
            .entry(record.mouse_id.as_str())
            .or_default()
            .push((record.weight, record.tumor_volume));
    }

    rows_by_mouse
        .into_iter()
        .map(|(mouse_id, rows)| MouseAverages {
            mouse_id: mouse_id.to_owned(),
            weight: descriptive::mean(rows.iter().map(|(w, _)| *w)),
            tumor_volume: descriptive::mean(rows.iter().map(|(_, v)| *v)),
        })
        .collect()
}

/// Correlation and linear fit of average weight (x) against average tumor volume (y)
#[derive(Debug, Clone, Serialize)]
pub struct WeightVolumeRegression {
    pub regimen: String,
    pub points: Vec<MouseAverages>,
    pub fit: LinearRegression,
}

impl WeightVolumeRegression {
    /// Fits the regimen's per-mouse averages.
    ///
    /// Fails with [`StudyError::InsufficientData`] when the regimen has fewer
    /// than two mice or all of its mice share the same weight.
    pub fn compute(study: &StudyTable, regimen: &str) -> Result<Self, StudyError> {
        let points = mouse_averages(study, regimen);
        let pairs = points
            .iter()
            .map(|p| (p.weight, p.tumor_volume))
            .collect::<Vec<_>>();
        let fit = LinearRegression::fit(&pairs).map_err(|source| {
            tracing::warn!(%regimen, %source, "Regression is undefined");
            StudyError::InsufficientData {
                regimen: regimen.to_owned(),
                source,
            }
        })?;
        tracing::debug!(%regimen, mice = fit.count, r = fit.r, "Fitted weight against tumor volume");

        Ok(Self {
            regimen: regimen.to_owned(),
            points,
            fit,
        })
    }

    /// `(weight, fitted tumor volume)` for every point, in point order
    #[must_use]
    pub fn fitted_line(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.weight, self.fit.predict(p.weight)))
            .collect()
    }
}
