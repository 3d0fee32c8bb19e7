use std::path::PathBuf;

use clap::Args;

use super::{InputArg, table};
use crate::util::{self, LoadedStudy, Output};

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct CleanArg {
    #[clap(flatten)]
    pub input: InputArg,

    /// Write the clean dataset to this CSV file
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CleanArg) -> anyhow::Result<()> {
    let loaded = util::load_study(&arg.input)?;
    print_clean_report(&loaded);

    if let Some(path) = &arg.output {
        let mut output = Output::open(path.clone())?;
        output.write_study_csv(loaded.clean())?;
        println!("Clean dataset saved to: {}", output.display_path());
    }
    Ok(())
}

/// Print row and mouse counts before and after cleaning, with the dropped rows
pub(super) fn print_clean_report(loaded: &LoadedStudy) {
    let LoadedStudy { joined, dedup } = loaded;
    table::print_section("Data Cleaning");

    println!(
        "  Joined: {:>6} rows {:>5} mice",
        joined.len(),
        joined.mouse_count()
    );
    println!(
        "  Clean:  {:>6} rows {:>5} mice",
        dedup.clean.len(),
        dedup.clean.mouse_count()
    );
    println!();

    if dedup.duplicated_mouse_ids.is_empty() {
        println!("  No duplicated (mouse, timepoint) keys found.");
        println!();
        return;
    }

    println!(
        "  Mice with duplicated timepoints (dropped): {}",
        dedup.duplicated_mouse_ids.join(", ")
    );
    println!();
    println!(
        "  {:<8} {:>9} {:>12} {:>10} {:<12} {:<7} {:>4} {:>7}",
        "Mouse", "Timepoint", "Volume", "Metastatic", "Regimen", "Sex", "Age", "Weight",
    );
    table::print_separator(&[8, 9, 12, 10, 12, 7, 4, 7]);
    for record in &dedup.removed_records {
        println!(
            "  {:<8} {:>9} {:>12.6} {:>10} {:<12} {:<7} {:>4} {:>7.1}",
            record.mouse_id,
            record.timepoint,
            record.tumor_volume,
            record.metastatic_sites,
            record.regimen,
            record.sex,
            record.age_months,
            record.weight,
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_clean_writes_only_surviving_mice() {
        let dir = tempfile::tempdir().unwrap();
        let input = InputArg {
            mouse_metadata: dir.path().join("mice.csv"),
            study_results: dir.path().join("results.csv"),
        };
        fs::write(
            &input.mouse_metadata,
            "Mouse ID,Drug Regimen,Sex,Age_months,Weight (g)\nA,Capomulin,Male,9,22\nB,Ramicane,Female,12,19\n",
        )
        .unwrap();
        fs::write(
            &input.study_results,
            "Mouse ID,Timepoint,Tumor Volume (mm3),Metastatic Sites\nA,0,45.0,0\nB,0,45.0,0\nA,5,44.1,0\nB,5,43.2,0\nA,5,44.9,0\nB,10,41.7,1\n",
        )
        .unwrap();
        let output = dir.path().join("clean.csv");

        run(&CleanArg {
            input,
            output: Some(output.clone()),
        })
        .unwrap();

        let text = fs::read_to_string(&output).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Mouse ID,Timepoint,"));
        assert!(lines[1..].iter().all(|line| line.starts_with("B,")));
    }

    #[test]
    fn test_clean_fails_on_missing_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let arg = CleanArg {
            input: InputArg {
                mouse_metadata: dir.path().join("absent.csv"),
                study_results: dir.path().join("results.csv"),
            },
            output: None,
        };
        let err = run(&arg).unwrap_err();
        assert!(format!("{err:#}").contains("absent.csv"));
    }
}
