//! Study data structures
//!
//! This module provides the records of a tumor study: the per-mouse metadata,
//! the longitudinal measurements, and the joined rows the rest of the crate
//! works on.
//!
//! # Data Structure
//!
//! ```text
//! MouseRecord (one per mouse)          Measurement (one per mouse and timepoint)
//! ├─ mouse_id ◄──────────────────────── mouse_id
//! ├─ regimen                           ├─ timepoint
//! ├─ sex                               ├─ tumor_volume
//! ├─ age_months                        └─ metastatic_sites
//! └─ weight
//!                 │ left join on mouse_id
//!                 ▼
//!            StudyRecord (measurement + mouse attributes)
//! ```
//!
//! # Serialization
//!
//! Field names map onto the column headers of the study CSV files:
//!
//! ```text
//! Mouse ID,Drug Regimen,Sex,Age_months,Weight (g)
//! k403,Ramicane,Male,21,16
//!
//! Mouse ID,Timepoint,Tumor Volume (mm3),Metastatic Sites
//! k403,0,45.0,0
//! ```
//!
//! A [`StudyRecord`] serializes with the measurement columns first, followed
//! by the mouse columns.

use serde::{Deserialize, Serialize};

/// Attributes of a single mouse, fixed for the duration of the study.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MouseRecord {
    /// Unique identifier of the mouse
    #[serde(rename = "Mouse ID")]
    pub mouse_id: String,
    /// Drug regimen (treatment) assigned to the mouse
    #[serde(rename = "Drug Regimen")]
    pub regimen: String,
    #[serde(rename = "Sex")]
    pub sex: String,
    /// Age in months at the start of the study
    #[serde(rename = "Age_months")]
    pub age_months: u32,
    /// Weight in grams
    #[serde(rename = "Weight (g)")]
    pub weight: f64,
}

/// A tumor measurement of one mouse at one timepoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Measurement {
    /// Identifier of the measured mouse
    #[serde(rename = "Mouse ID")]
    pub mouse_id: String,
    /// Study day of the measurement
    #[serde(rename = "Timepoint")]
    pub timepoint: u32,
    /// Tumor volume in mm³
    #[serde(rename = "Tumor Volume (mm3)")]
    pub tumor_volume: f64,
    /// Number of metastatic sites observed
    #[serde(rename = "Metastatic Sites")]
    pub metastatic_sites: u32,
}

/// A measurement enriched with the attributes of its mouse.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StudyRecord {
    #[serde(rename = "Mouse ID")]
    pub mouse_id: String,
    #[serde(rename = "Timepoint")]
    pub timepoint: u32,
    #[serde(rename = "Tumor Volume (mm3)")]
    pub tumor_volume: f64,
    #[serde(rename = "Metastatic Sites")]
    pub metastatic_sites: u32,
    #[serde(rename = "Drug Regimen")]
    pub regimen: String,
    #[serde(rename = "Sex")]
    pub sex: String,
    #[serde(rename = "Age_months")]
    pub age_months: u32,
    #[serde(rename = "Weight (g)")]
    pub weight: f64,
}

impl StudyRecord {
    /// Joins a measurement with the attributes of its mouse.
    ///
    /// The caller is responsible for passing the matching mouse.
    #[must_use]
    pub fn new(measurement: Measurement, mouse: &MouseRecord) -> Self {
        debug_assert_eq!(measurement.mouse_id, mouse.mouse_id);
        let Measurement {
            mouse_id,
            timepoint,
            tumor_volume,
            metastatic_sites,
        } = measurement;
        Self {
            mouse_id,
            timepoint,
            tumor_volume,
            metastatic_sites,
            regimen: mouse.regimen.clone(),
            sex: mouse.sex.clone(),
            age_months: mouse.age_months,
            weight: mouse.weight,
        }
    }
}
