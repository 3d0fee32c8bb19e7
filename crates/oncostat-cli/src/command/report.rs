use clap::Args;
use oncostat_analysis::{charts::DEFAULT_MOUSE, correlation::DEFAULT_REGIMEN};

use super::{FinalVolumeArg, InputArg, chart_data, clean, outliers, regression, summary};
use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    pub input: InputArg,

    #[clap(flatten)]
    pub final_volume: FinalVolumeArg,

    /// Regimen whose mice are correlated and whose mouse is charted
    #[arg(long, default_value = DEFAULT_REGIMEN)]
    pub regimen: String,

    /// Mouse whose tumor volume is charted over time
    #[arg(long, default_value = DEFAULT_MOUSE)]
    pub mouse: String,
}

impl Default for ReportArg {
    fn default() -> Self {
        Self {
            input: InputArg::default(),
            final_volume: FinalVolumeArg::default(),
            regimen: DEFAULT_REGIMEN.to_owned(),
            mouse: DEFAULT_MOUSE.to_owned(),
        }
    }
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let loaded = util::load_study(&arg.input)?;
    let study = loaded.clean();

    println!("Tumor Study Report");
    println!("==================\n");

    clean::print_clean_report(&loaded);
    summary::print_summary(study);
    outliers::print_outliers(study, &arg.final_volume);
    regression::print_regression(study, &arg.regimen)?;
    chart_data::print_charts(study, &arg.regimen, &arg.mouse)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use oncostat_analysis::error::StudyError;

    use super::*;

    fn write_inputs(dir: &tempfile::TempDir) -> InputArg {
        let input = InputArg {
            mouse_metadata: dir.path().join("mice.csv"),
            study_results: dir.path().join("results.csv"),
        };
        fs::write(
            &input.mouse_metadata,
            "\
Mouse ID,Drug Regimen,Sex,Age_months,Weight (g)
l509,Capomulin,Male,17,21
s185,Capomulin,Female,3,17
x401,Capomulin,Female,16,15
",
        )
        .unwrap();
        fs::write(
            &input.study_results,
            "\
Mouse ID,Timepoint,Tumor Volume (mm3),Metastatic Sites
l509,0,45.0,0
l509,5,45.6,0
s185,0,45.0,0
s185,5,43.8,0
x401,0,45.0,0
x401,5,45.4,0
",
        )
        .unwrap();
        input
    }

    #[test]
    fn test_report_runs_every_section() {
        let dir = tempfile::tempdir().unwrap();
        let arg = ReportArg {
            input: write_inputs(&dir),
            final_volume: FinalVolumeArg {
                treatments: vec!["Capomulin".to_owned()],
                ..FinalVolumeArg::default()
            },
            ..ReportArg::default()
        };
        run(&arg).unwrap();
    }

    #[test]
    fn test_report_fails_on_unknown_mouse() {
        let dir = tempfile::tempdir().unwrap();
        let arg = ReportArg {
            input: write_inputs(&dir),
            mouse: "zz99".to_owned(),
            ..ReportArg::default()
        };
        let err = run(&arg).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StudyError>(),
            Some(StudyError::UnknownMouse { mouse_id, .. }) if mouse_id == "zz99"
        ));
    }
}
