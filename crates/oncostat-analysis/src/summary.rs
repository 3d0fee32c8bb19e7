//! Grouped descriptive statistics
//!
//! This module groups study rows by an arbitrary key and summarizes a value
//! of each row (tumor volume by default) with
//! [`DescriptiveStats`](oncostat_stats::descriptive::DescriptiveStats).
//!
//! Undefined statistics are not errors: a group with a single row reports
//! `NaN` variance, standard deviation and SEM.
//!
//! # Examples
//!
//! ## Tumor Volume by Regimen
//!
//! ```no_run
//! use oncostat_analysis::{study::StudyTable, summary::SummaryStatsMap};
//!
//! let study = StudyTable::default(); // Load and clean from CSV in practice
//! let summary = SummaryStatsMap::tumor_volume_by_regimen(&study);
//!
//! for (regimen, stats) in &summary.map {
//!     println!(
//!         "{regimen}: mean={:.2} median={:.2} var={:.2} std={:.2} sem={:.2}",
//!         stats.mean, stats.median, stats.variance, stats.std_dev, stats.sem
//!     );
//! }
//! ```
//!
//! ## Custom Grouping
//!
//! ```no_run
//! use oncostat_analysis::{study::StudyTable, summary::SummaryStatsMap};
//!
//! let study = StudyTable::default();
//!
//! // Weight by sex
//! let summary = SummaryStatsMap::collect_by_group(
//!     study.records(),
//!     |record| record.sex.clone(),
//!     |record| record.weight,
//! );
//! ```

use std::collections::BTreeMap;

use oncostat_stats::descriptive::DescriptiveStats;

use crate::{record::StudyRecord, study::StudyTable};

/// Descriptive statistics per group, ordered by group key
#[derive(Debug, Clone)]
pub struct SummaryStatsMap<K> {
    pub map: BTreeMap<K, DescriptiveStats>,
}

impl<K> SummaryStatsMap<K> {
    /// Summarize a value of each record, grouped by a custom key
    ///
    /// # Arguments
    ///
    /// * `records` - Rows to summarize
    /// * `group` - Closure that computes the grouping key of a row
    /// * `value` - Closure that extracts the summarized value of a row
    pub fn collect_by_group<'a, I, G, V>(records: I, mut group: G, mut value: V) -> Self
    where
        I: IntoIterator<Item = &'a StudyRecord>,
        G: FnMut(&StudyRecord) -> K,
        V: FnMut(&StudyRecord) -> f64,
        K: Ord,
    {
        let mut data_map: BTreeMap<K, Vec<f64>> = BTreeMap::new();
        for record in records {
            data_map
                .entry(group(record))
                .or_default()
                .push(value(record));
        }

        Self {
            map: data_map
                .into_iter()
                .map(|(key, values)| (key, DescriptiveStats::new(values)))
                .collect(),
        }
    }
}

impl SummaryStatsMap<String> {
    /// Tumor volume statistics per drug regimen
    #[must_use]
    pub fn tumor_volume_by_regimen(study: &StudyTable) -> Self {
        Self::collect_by_group(
            study.records(),
            |record| record.regimen.clone(),
            |record| record.tumor_volume,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{
        MouseRecord,
        test_util::{measurement, mouse},
    };

    fn study() -> StudyTable {
        let mice: Vec<MouseRecord> = vec![
            mouse("a", "Capomulin", "Male", 20.0),
            mouse("b", "Capomulin", "Female", 18.0),
            mouse("c", "Ketapril", "Female", 25.0),
            mouse("d", "Placebo", "Male", 27.0),
        ];
        StudyTable::join(
            &mice,
            vec![
                measurement("a", 0, 45.0),
                measurement("a", 5, 41.0),
                measurement("b", 0, 45.0),
                measurement("b", 5, 43.0),
                measurement("c", 0, 50.0),
                measurement("c", 5, 50.0),
                measurement("d", 0, 45.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_tumor_volume_by_regimen() {
        let summary = SummaryStatsMap::tumor_volume_by_regimen(&study());

        let regimens = summary.map.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(regimens, ["Capomulin", "Ketapril", "Placebo"]);

        let capomulin = &summary.map["Capomulin"];
        assert_eq!(capomulin.count, 4);
        assert!((capomulin.mean - 43.5).abs() < 1e-12);
        assert!((capomulin.median - 44.0).abs() < 1e-12);
        // deviations: 1.5, -2.5, 1.5, -0.5 -> 11 / 3
        assert!((capomulin.variance - 11.0 / 3.0).abs() < 1e-12);
        assert!((capomulin.sem - (11.0_f64 / 3.0).sqrt() / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_identical_values_have_zero_spread() {
        let summary = SummaryStatsMap::tumor_volume_by_regimen(&study());
        let ketapril = &summary.map["Ketapril"];
        assert!((ketapril.mean - 50.0).abs() < f64::EPSILON);
        assert!((ketapril.median - 50.0).abs() < f64::EPSILON);
        assert!(ketapril.variance.abs() < f64::EPSILON);
        assert!(ketapril.std_dev.abs() < f64::EPSILON);
        assert!(ketapril.sem.abs() < f64::EPSILON);
    }

    #[test]
    fn test_singleton_group_propagates_nan() {
        let summary = SummaryStatsMap::tumor_volume_by_regimen(&study());
        let placebo = &summary.map["Placebo"];
        assert_eq!(placebo.count, 1);
        assert!((placebo.mean - 45.0).abs() < f64::EPSILON);
        assert!(placebo.variance.is_nan());
        assert!(placebo.std_dev.is_nan());
        assert!(placebo.sem.is_nan());
    }

    #[test]
    fn test_custom_grouping() {
        let study = study();
        let summary =
            SummaryStatsMap::collect_by_group(study.records(), |r| r.sex.clone(), |r| r.weight);
        assert_eq!(summary.map["Female"].count, 4);
        assert!((summary.map["Male"].max - 27.0).abs() < f64::EPSILON);
    }
}
