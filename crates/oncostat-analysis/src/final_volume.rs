//! Final tumor volumes and their outliers
//!
//! The final volume of a mouse is the tumor volume recorded at its largest
//! timepoint. Mice leave the study at different days, so this is not the
//! same timepoint for every mouse.
//!
//! Outliers among the final volumes of a treatment are flagged with Tukey's
//! fences; they stay in every other computation.

use std::collections::BTreeMap;

use oncostat_stats::outliers::OutlierAnalysis;
use serde::Serialize;

use crate::{record::StudyRecord, study::StudyTable};

/// The treatments compared in the final tumor volume analysis.
pub const DEFAULT_TREATMENTS: [&str; 4] = ["Capomulin", "Ramicane", "Infubinol", "Ceftamin"];

/// Last measured row of every mouse, ordered by mouse identifier.
///
/// If a mouse has several rows at its largest timepoint, the first one wins.
#[must_use]
pub fn final_records(study: &StudyTable) -> Vec<&StudyRecord> {
    let mut last_by_mouse = BTreeMap::<&str, &StudyRecord>::new();
    for record in study.records() {
        last_by_mouse
            .entry(record.mouse_id.as_str())
            .and_modify(|last| {
                if record.timepoint > last.timepoint {
                    *last = record;
                }
            })
            .or_insert(record);
    }
    last_by_mouse.into_values().collect()
}

/// Final tumor volumes of one treatment with their outlier analysis
#[derive(Debug, Clone, Serialize)]
pub struct TreatmentFinalVolumes {
    pub regimen: String,
    /// `(mouse_id, final tumor volume)`, ordered by mouse identifier
    pub volumes: Vec<(String, f64)>,
    pub analysis: OutlierAnalysis<String>,
}

impl TreatmentFinalVolumes {
    /// Analyze final volumes for each of the given treatments, in the given order.
    ///
    /// A treatment without any mouse is still reported, with `NaN` quartiles
    /// and no outliers.
    pub fn collect<S>(study: &StudyTable, treatments: &[S], iqr_factor: f64) -> Vec<Self>
    where
        S: AsRef<str>,
    {
        let finals = final_records(study);
        treatments
            .iter()
            .map(|regimen| {
                let regimen = regimen.as_ref();
                let volumes = finals
                    .iter()
                    .filter(|r| r.regimen == regimen)
                    .map(|r| (r.mouse_id.clone(), r.tumor_volume))
                    .collect::<Vec<_>>();
                if volumes.is_empty() {
                    tracing::warn!(%regimen, "No mice found for treatment");
                }

                let analysis = OutlierAnalysis::detect(volumes.iter().cloned(), iqr_factor);
                for outlier in &analysis.outliers {
                    tracing::debug!(
                        %regimen,
                        mouse_id = %outlier.key,
                        volume = outlier.value,
                        "Potential outlier"
                    );
                }

                Self {
                    regimen: regimen.to_owned(),
                    volumes,
                    analysis,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use oncostat_stats::outliers::{DEFAULT_IQR_FACTOR, OutlierSide};

    use super::*;
    use crate::record::test_util::{measurement, mouse};

    #[test]
    fn test_final_records_pick_max_timepoint() {
        let mice = vec![
            mouse("b", "Ramicane", "Male", 20.0),
            mouse("a", "Capomulin", "Female", 18.0),
        ];
        let study = StudyTable::join(
            &mice,
            vec![
                measurement("b", 0, 45.0),
                measurement("a", 10, 39.0),
                measurement("b", 45, 30.0),
                measurement("a", 0, 45.0),
                measurement("b", 20, 38.0),
            ],
        )
        .unwrap();

        let finals = final_records(&study);
        assert_eq!(finals.len(), 2);
        assert_eq!(finals[0].mouse_id, "a");
        assert_eq!(finals[0].timepoint, 10);
        assert!((finals[0].tumor_volume - 39.0).abs() < f64::EPSILON);
        assert_eq!(finals[0].regimen, "Capomulin");
        assert_eq!(finals[1].mouse_id, "b");
        assert_eq!(finals[1].timepoint, 45);
        assert!((finals[1].tumor_volume - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_final_records_tie_keeps_first_row() {
        let mice = vec![mouse("a", "Capomulin", "Female", 18.0)];
        let study = StudyTable::join(
            &mice,
            vec![measurement("a", 5, 41.0), measurement("a", 5, 42.0)],
        )
        .unwrap();
        let finals = final_records(&study);
        assert_eq!(finals.len(), 1);
        assert!((finals[0].tumor_volume - 41.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_collect_flags_outlier_per_treatment() {
        let volumes = [10.0, 12.0, 13.0, 14.0, 15.0, 16.0, 100.0];
        let mut mice = Vec::new();
        let mut measurements = Vec::new();
        for (i, volume) in volumes.iter().enumerate() {
            let id = format!("i{i}");
            mice.push(mouse(&id, "Infubinol", "Male", 25.0));
            measurements.push(measurement(&id, 0, 45.0));
            measurements.push(measurement(&id, 30, *volume));
        }
        mice.push(mouse("c0", "Capomulin", "Male", 20.0));
        measurements.push(measurement("c0", 45, 23.0));
        let study = StudyTable::join(&mice, measurements).unwrap();

        let treatments = ["Infubinol", "Ketapril", "Capomulin"];
        let reports = TreatmentFinalVolumes::collect(&study, &treatments, DEFAULT_IQR_FACTOR);
        assert_eq!(reports.len(), 3);

        let infubinol = &reports[0];
        assert_eq!(infubinol.regimen, "Infubinol");
        assert_eq!(infubinol.volumes.len(), 7);
        assert!((infubinol.analysis.fences.iqr - 3.0).abs() < 1e-12);
        assert_eq!(infubinol.analysis.outliers.len(), 1);
        assert_eq!(infubinol.analysis.outliers[0].key, "i6");
        assert_eq!(infubinol.analysis.outliers[0].side, OutlierSide::High);

        let ketapril = &reports[1];
        assert!(ketapril.volumes.is_empty());
        assert!(ketapril.analysis.fences.q1.is_nan());
        assert!(ketapril.analysis.outliers.is_empty());

        let capomulin = &reports[2];
        assert_eq!(capomulin.volumes, [("c0".to_owned(), 23.0)]);
        assert!(capomulin.analysis.outliers.is_empty());
    }
}
