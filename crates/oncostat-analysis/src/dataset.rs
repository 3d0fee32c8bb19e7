//! CSV reading and writing of study records
//!
//! Columns are bound by header name, so column order does not matter and
//! extra columns are ignored. Whitespace around fields is trimmed.

use std::io;

use serde::de::DeserializeOwned;

use crate::{
    error::StudyError,
    record::{Measurement, MouseRecord, StudyRecord},
};

fn read_records<T, R>(file_kind: &'static str, reader: R) -> Result<Vec<T>, StudyError>
where
    T: DeserializeOwned,
    R: io::Read,
{
    let records = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| StudyError::ReadCsv { file_kind, source })?;
    tracing::debug!("Read {} {file_kind} rows", records.len());
    Ok(records)
}

/// Read mouse metadata rows (`Mouse ID`, `Drug Regimen`, `Sex`, `Age_months`, `Weight (g)`)
pub fn read_mouse_metadata<R>(reader: R) -> Result<Vec<MouseRecord>, StudyError>
where
    R: io::Read,
{
    read_records("mouse metadata", reader)
}

/// Read study result rows (`Mouse ID`, `Timepoint`, `Tumor Volume (mm3)`, `Metastatic Sites`)
pub fn read_measurements<R>(reader: R) -> Result<Vec<Measurement>, StudyError>
where
    R: io::Read,
{
    read_records("study results", reader)
}

/// Column headers of a written [`StudyRecord`], measurement columns first.
pub const STUDY_RECORD_HEADERS: [&str; 8] = [
    "Mouse ID",
    "Timepoint",
    "Tumor Volume (mm3)",
    "Metastatic Sites",
    "Drug Regimen",
    "Sex",
    "Age_months",
    "Weight (g)",
];

/// Write joined study records as CSV, header included.
///
/// The header is written even when there are no records.
pub fn write_study_records<'a, W, I>(writer: W, records: I) -> Result<(), StudyError>
where
    W: io::Write,
    I: IntoIterator<Item = &'a StudyRecord>,
{
    let mut writer = csv::Writer::from_writer(writer);
    let mut written = 0_usize;
    for record in records {
        writer
            .serialize(record)
            .map_err(|source| StudyError::WriteCsv { source })?;
        written += 1;
    }
    if written == 0 {
        // serde only emits the header together with the first record
        writer
            .write_record(STUDY_RECORD_HEADERS)
            .map_err(|source| StudyError::WriteCsv { source })?;
    }
    tracing::debug!("Wrote {written} study rows");
    writer.flush().map_err(|err| StudyError::WriteCsv {
        source: csv::Error::from(err),
    })?;
    Ok(())
}
