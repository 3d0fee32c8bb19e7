use std::{
    fs::File,
    io::{self, BufReader, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use oncostat_analysis::{
    dataset,
    study::{Deduplication, StudyTable},
};

use crate::command::InputArg;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }

    /// Write study rows as CSV with the same headers as the input files
    pub fn write_study_csv(&mut self, study: &StudyTable) -> anyhow::Result<()> {
        dataset::write_study_records(&mut *self, study.records())
            .with_context(|| format!("Failed to write study CSV to {}", self.display_path()))?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

fn open_input(file_kind: &str, path: &Path) -> anyhow::Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;
    Ok(BufReader::new(file))
}

/// Joined and cleaned study
#[derive(Debug)]
pub struct LoadedStudy {
    /// Every measurement row joined with its mouse
    pub joined: StudyTable,
    pub dedup: Deduplication,
}

impl LoadedStudy {
    /// Study with duplicated mice removed, the input of every analysis
    pub fn clean(&self) -> &StudyTable {
        &self.dedup.clean
    }
}

/// Read both input files, join them, and drop duplicated mice
///
/// # Errors
///
/// Returns error if a file cannot be opened or parsed, or if the files do
/// not describe the same set of mice
pub fn load_study(input: &InputArg) -> anyhow::Result<LoadedStudy> {
    let mice = dataset::read_mouse_metadata(open_input("mouse metadata", &input.mouse_metadata)?)
        .with_context(|| format!("Failed to parse {}", input.mouse_metadata.display()))?;
    let measurements =
        dataset::read_measurements(open_input("study results", &input.study_results)?)
            .with_context(|| format!("Failed to parse {}", input.study_results.display()))?;
    tracing::info!(
        mice = mice.len(),
        measurements = measurements.len(),
        "Loaded study files"
    );

    let joined = StudyTable::join(&mice, measurements).context("Failed to join study files")?;
    let dedup = joined.deduplicate();
    tracing::info!(
        rows = dedup.clean.len(),
        mice = dedup.clean.mouse_count(),
        dropped_mice = dedup.duplicated_mouse_ids.len(),
        "Cleaned study"
    );

    Ok(LoadedStudy { joined, dedup })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use oncostat_analysis::record::StudyRecord;

    use super::*;

    const MICE: &str = "\
Mouse ID,Drug Regimen,Sex,Age_months,Weight (g)
a262,Placebo,Female,17,29
g989,Propriva,Female,21,26
";
    const RESULTS: &str = "\
Mouse ID,Timepoint,Tumor Volume (mm3),Metastatic Sites
a262,0,45.0,0
g989,0,45.0,0
a262,5,48.7,1
g989,0,45.0,0
";

    fn write_inputs(dir: &Path) -> InputArg {
        let input = InputArg {
            mouse_metadata: dir.join("mice.csv"),
            study_results: dir.join("results.csv"),
        };
        fs::write(&input.mouse_metadata, MICE).unwrap();
        fs::write(&input.study_results, RESULTS).unwrap();
        input
    }

    #[test]
    fn test_load_study_cleans_duplicated_mouse() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_study(&write_inputs(dir.path())).unwrap();
        assert_eq!(loaded.joined.len(), 4);
        assert_eq!(loaded.dedup.duplicated_mouse_ids, ["g989"]);
        assert_eq!(loaded.clean().len(), 2);
        assert_eq!(loaded.clean().mouse_count(), 1);
    }

    #[test]
    fn test_missing_input_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut input = write_inputs(dir.path());
        input.study_results = dir.path().join("no_such_results.csv");

        let err = load_study(&input).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("study results"), "{message}");
        assert!(message.contains("no_such_results.csv"), "{message}");
    }

    #[test]
    fn test_malformed_input_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_inputs(dir.path());
        fs::write(&input.mouse_metadata, "Mouse ID,Drug Regimen\na262,Placebo\n").unwrap();

        let err = load_study(&input).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("mice.csv"), "{message}");
    }

    #[test]
    fn test_write_study_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_study(&write_inputs(dir.path())).unwrap();

        let path = dir.path().join("clean.csv");
        let mut output = Output::open(path.clone()).unwrap();
        assert_eq!(output.display_path(), path.display().to_string());
        output.write_study_csv(loaded.clean()).unwrap();
        drop(output);

        let text = fs::read_to_string(&path).unwrap();
        let records = csv::Reader::from_reader(text.as_bytes())
            .deserialize()
            .collect::<Result<Vec<StudyRecord>, _>>()
            .unwrap();
        assert_eq!(records, loaded.clean().records());
    }

    #[test]
    fn test_write_empty_study_csv_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        let mut output = Output::open(path.clone()).unwrap();
        output.write_study_csv(&StudyTable::default()).unwrap();
        drop(output);

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text.trim_end(),
            dataset::STUDY_RECORD_HEADERS.join(",")
        );
    }

    #[test]
    fn test_output_to_unwritable_path_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.json");
        let err = Output::open(path).unwrap_err();
        assert!(format!("{err:#}").contains("missing_dir"));
    }
}
