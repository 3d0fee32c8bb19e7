//! Joining and cleaning study data
//!
//! Measurements are left-joined to mouse metadata on the mouse identifier,
//! producing a [`StudyTable`]. Each `(mouse, timepoint)` pair is expected to
//! be unique; a mouse that breaks this anywhere in its records is treated as
//! unreliable and [`StudyTable::deduplicate`] removes *all* of its rows, not
//! only the duplicated ones.
//!
//! # Examples
//!
//! ```
//! use oncostat_analysis::{
//!     record::{Measurement, MouseRecord},
//!     study::StudyTable,
//! };
//!
//! let mice = vec![MouseRecord {
//!     mouse_id: "g989".to_owned(),
//!     regimen: "Propriva".to_owned(),
//!     sex: "Female".to_owned(),
//!     age_months: 21,
//!     weight: 26.0,
//! }];
//! let measurement = |timepoint| Measurement {
//!     mouse_id: "g989".to_owned(),
//!     timepoint,
//!     tumor_volume: 45.0,
//!     metastatic_sites: 0,
//! };
//! let measurements = vec![measurement(0), measurement(0), measurement(5)];
//!
//! let joined = StudyTable::join(&mice, measurements)?;
//! assert_eq!(joined.len(), 3);
//!
//! let dedup = joined.deduplicate();
//! assert_eq!(dedup.duplicated_mouse_ids, ["g989"]);
//! assert!(dedup.clean.is_empty());
//! # Ok::<(), oncostat_analysis::error::StudyError>(())
//! ```

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::{
    error::StudyError,
    record::{Measurement, MouseRecord, StudyRecord},
};

/// Joined study rows, one per measurement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyTable {
    records: Vec<StudyRecord>,
}

/// Outcome of removing mice with duplicated `(mouse, timepoint)` keys.
#[derive(Debug, Clone)]
pub struct Deduplication {
    /// Rows of every mouse without duplicated keys, in their original order
    pub clean: StudyTable,
    /// Mice with at least one duplicated key, in order of first appearance
    pub duplicated_mouse_ids: Vec<String>,
    /// All rows of the removed mice, in their original order
    pub removed_records: Vec<StudyRecord>,
}

impl StudyTable {
    /// Left-joins measurements to mouse metadata on the mouse identifier.
    ///
    /// Every measurement must reference exactly one mouse. A mouse listed
    /// twice in the metadata fails with [`StudyError::DuplicateMouse`];
    /// measurements of unknown mice fail with [`StudyError::UnmatchedMice`],
    /// which lists every unknown identifier.
    pub fn join(
        mice: &[MouseRecord],
        measurements: Vec<Measurement>,
    ) -> Result<Self, StudyError> {
        let mut mouse_by_id = HashMap::with_capacity(mice.len());
        for mouse in mice {
            if mouse_by_id.insert(mouse.mouse_id.as_str(), mouse).is_some() {
                tracing::error!(mouse_id = %mouse.mouse_id, "Duplicate mouse in metadata");
                return Err(StudyError::DuplicateMouse {
                    mouse_id: mouse.mouse_id.clone(),
                });
            }
        }

        let mut unmatched = BTreeSet::new();
        let mut unmatched_rows = 0;
        let mut records = Vec::with_capacity(measurements.len());
        for measurement in measurements {
            match mouse_by_id.get(measurement.mouse_id.as_str()) {
                Some(mouse) => records.push(StudyRecord::new(measurement, mouse)),
                None => {
                    unmatched_rows += 1;
                    unmatched.insert(measurement.mouse_id);
                }
            }
        }

        if !unmatched.is_empty() {
            tracing::error!(
                rows = unmatched_rows,
                mice = unmatched.len(),
                "Measurements reference mice missing from the metadata"
            );
            return Err(StudyError::UnmatchedMice {
                mouse_ids: unmatched.into_iter().collect(),
                row_count: unmatched_rows,
            });
        }

        tracing::debug!(
            "Joined {} measurements to {} mice",
            records.len(),
            mouse_by_id.len()
        );
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[StudyRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct mice with at least one row.
    #[must_use]
    pub fn mouse_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.mouse_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Rows of the given regimen, in table order.
    pub fn regimen_records<'a>(
        &'a self,
        regimen: &'a str,
    ) -> impl Iterator<Item = &'a StudyRecord> + 'a {
        self.records.iter().filter(move |r| r.regimen == regimen)
    }

    /// Mouse identifiers with at least one duplicated `(mouse, timepoint)` key,
    /// in order of first appearance.
    #[must_use]
    pub fn duplicated_mouse_ids(&self) -> Vec<String> {
        let mut seen = HashSet::with_capacity(self.records.len());
        let mut duplicated = Vec::new();
        for record in &self.records {
            let key = (record.mouse_id.as_str(), record.timepoint);
            if !seen.insert(key) && !duplicated.contains(&record.mouse_id) {
                duplicated.push(record.mouse_id.clone());
            }
        }
        duplicated
    }

    /// Removes every row of every mouse that has a duplicated `(mouse, timepoint)` key.
    #[must_use]
    pub fn deduplicate(&self) -> Deduplication {
        let duplicated_mouse_ids = self.duplicated_mouse_ids();
        let (removed_records, clean): (Vec<_>, Vec<_>) = self
            .records
            .iter()
            .cloned()
            .partition(|r| duplicated_mouse_ids.contains(&r.mouse_id));

        for mouse_id in &duplicated_mouse_ids {
            tracing::warn!(%mouse_id, "Dropping mouse with duplicated timepoints");
        }
        tracing::debug!(
            "Clean study: {} of {} rows kept",
            clean.len(),
            self.records.len()
        );

        Deduplication {
            clean: Self { records: clean },
            duplicated_mouse_ids,
            removed_records,
        }
    }
}
