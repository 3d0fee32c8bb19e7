use oncostat_stats::regression::InsufficientDataError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum StudyError {
    #[display("Failed to read {file_kind} CSV")]
    ReadCsv {
        file_kind: &'static str,
        source: csv::Error,
    },
    #[display("Failed to write study CSV")]
    WriteCsv { source: csv::Error },
    #[display("Mouse '{mouse_id}' is listed more than once in the mouse metadata")]
    DuplicateMouse { mouse_id: String },
    #[display(
        "{row_count} measurement rows reference mice missing from the metadata: {}",
        mouse_ids.join(", ")
    )]
    UnmatchedMice {
        mouse_ids: Vec<String>,
        row_count: usize,
    },
    #[display("Mouse '{mouse_id}' has no measurements under regimen '{regimen}'")]
    UnknownMouse { mouse_id: String, regimen: String },
    #[display("Cannot fit weight against tumor volume for regimen '{regimen}'")]
    InsufficientData {
        regimen: String,
        source: InsufficientDataError,
    },
}
