use clap::Args;
use oncostat_analysis::{study::StudyTable, summary::SummaryStatsMap};

use super::{
    InputArg,
    table::{self, fmt_stat},
};
use crate::util;

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    pub input: InputArg,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let loaded = util::load_study(&arg.input)?;
    print_summary(loaded.clean());
    Ok(())
}

/// Print tumor volume statistics per drug regimen
pub(super) fn print_summary(study: &StudyTable) {
    table::print_section("Tumor Volume (mm3) by Drug Regimen");

    let summary = SummaryStatsMap::tumor_volume_by_regimen(study);
    println!(
        "  {:<12} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Regimen", "N", "Mean", "Median", "Variance", "Std Dev", "SEM",
    );
    table::print_separator(&[12, 6, 10, 10, 10, 10, 10]);
    for (regimen, stats) in &summary.map {
        println!(
            "  {:<12} {:>6} {} {} {} {} {}",
            regimen,
            stats.count,
            fmt_stat(stats.mean, 10),
            fmt_stat(stats.median, 10),
            fmt_stat(stats.variance, 10),
            fmt_stat(stats.std_dev, 10),
            fmt_stat(stats.sem, 10),
        );
    }
    println!();
}
