use clap::Args;
use oncostat_analysis::{final_volume::TreatmentFinalVolumes, study::StudyTable};

use super::{
    FinalVolumeArg, InputArg,
    table::{self, fmt_stat},
};
use crate::util;

/// Widths of the regimen, count, six statistic, low/high/share and outlier columns
const COLUMNS: [usize; 12] = [12, 5, 9, 9, 9, 9, 9, 9, 4, 4, 6, 8];

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct OutliersArg {
    #[clap(flatten)]
    pub input: InputArg,

    #[clap(flatten)]
    pub final_volume: FinalVolumeArg,
}

pub(crate) fn run(arg: &OutliersArg) -> anyhow::Result<()> {
    let loaded = util::load_study(&arg.input)?;
    print_outliers(loaded.clean(), &arg.final_volume);
    Ok(())
}

fn header_line() -> String {
    format!(
        "{:<12} {:>5} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>4} {:>4} {:>6} {:<8}",
        "Regimen", "Mice", "Q1", "Median", "Q3", "IQR", "Lower", "Upper", "Low", "High", "Out%",
        "Outliers",
    )
}

fn row_line(treatment: &TreatmentFinalVolumes) -> String {
    let analysis = &treatment.analysis;
    let fences = &analysis.fences;
    let outliers = if analysis.outliers.is_empty() {
        "-".to_owned()
    } else {
        analysis
            .outliers
            .iter()
            .map(|o| format!("{} ({:.3})", o.key, o.value))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "{:<12} {:>5} {} {} {} {} {} {} {:>4} {:>4} {:>5.1}% {}",
        treatment.regimen,
        analysis.count,
        fmt_stat(fences.q1, 9),
        fmt_stat(fences.median, 9),
        fmt_stat(fences.q3, 9),
        fmt_stat(fences.iqr, 9),
        fmt_stat(fences.lower_fence, 9),
        fmt_stat(fences.upper_fence, 9),
        analysis.low_count(),
        analysis.high_count(),
        analysis.outlier_percentage(),
        outliers,
    )
}

/// Print final tumor volume quartiles, fences and outliers per treatment
pub(super) fn print_outliers(study: &StudyTable, arg: &FinalVolumeArg) {
    table::print_section(&format!(
        "Final Tumor Volume Outliers (IQR x {})",
        arg.iqr_factor
    ));

    let treatments = TreatmentFinalVolumes::collect(study, &arg.treatments, arg.iqr_factor);
    println!("  {}", header_line());
    table::print_separator(&COLUMNS);
    for treatment in &treatments {
        println!("  {}", row_line(treatment));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use oncostat_stats::outliers::{DEFAULT_IQR_FACTOR, OutlierAnalysis};

    use super::*;

    #[test]
    fn test_separator_matches_header() {
        assert_eq!(header_line().len(), table::separator(&COLUMNS).len());
    }

    #[test]
    fn test_row_reports_low_high_split() {
        let volumes = [-50.0, 20.0, 21.0, 22.0, 23.0, 24.0, 100.0]
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("m{i}"), *v))
            .collect::<Vec<_>>();
        let treatment = TreatmentFinalVolumes {
            regimen: "Infubinol".to_owned(),
            analysis: OutlierAnalysis::detect(volumes.iter().cloned(), DEFAULT_IQR_FACTOR),
            volumes,
        };

        let row = row_line(&treatment);
        let fields = row.split_whitespace().collect::<Vec<_>>();
        assert_eq!(fields[0], "Infubinol");
        assert_eq!(fields[1], "7");
        // low, high and share follow the six statistics
        assert_eq!(&fields[8..11], ["1", "1", "28.6%"]);
        assert!(row.ends_with("m0 (-50.000), m6 (100.000)"));
    }

    #[test]
    fn test_row_without_outliers() {
        let treatment = TreatmentFinalVolumes {
            regimen: "Ketapril".to_owned(),
            volumes: Vec::new(),
            analysis: OutlierAnalysis::detect(Vec::new(), DEFAULT_IQR_FACTOR),
        };
        let row = row_line(&treatment);
        assert!(row.contains("N/A"));
        assert!(row.ends_with("0.0% -"));
    }
}
