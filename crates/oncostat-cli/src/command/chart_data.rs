use std::path::PathBuf;

use clap::Args;
use oncostat_analysis::{
    charts::{self, ChartData, ChartOptions, DEFAULT_MOUSE},
    correlation::DEFAULT_REGIMEN,
    study::StudyTable,
};

use super::{FinalVolumeArg, InputArg, table};
use crate::util::{self, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct ChartDataArg {
    #[clap(flatten)]
    pub input: InputArg,

    #[clap(flatten)]
    pub final_volume: FinalVolumeArg,

    /// Regimen of the charted mouse and of the weight/volume scatter plot
    #[arg(long, default_value = DEFAULT_REGIMEN)]
    pub regimen: String,

    /// Mouse whose tumor volume is charted over time
    #[arg(long, default_value = DEFAULT_MOUSE)]
    pub mouse: String,

    /// Output JSON file (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ChartDataArg) -> anyhow::Result<()> {
    let loaded = util::load_study(&arg.input)?;
    let options = ChartOptions {
        treatments: arg.final_volume.treatments.clone(),
        regimen: arg.regimen.clone(),
        mouse_id: arg.mouse.clone(),
        iqr_factor: arg.final_volume.iqr_factor,
    };
    let charts = ChartData::compute(loaded.clean(), &options)?;
    tracing::info!(
        regimens = charts.regimen_counts.len(),
        treatments = charts.final_volumes.len(),
        "Computed chart data"
    );
    Output::save_json(&charts, arg.output.clone())
}

/// Print the bar, pie and line chart datasets as tables
///
/// The box and scatter datasets are covered by the outlier and regression
/// sections.
pub(super) fn print_charts(
    study: &StudyTable,
    regimen: &str,
    mouse_id: &str,
) -> anyhow::Result<()> {
    table::print_section("Chart Data");

    println!("  Rows per regimen");
    println!("  {:<12} {:>6}", "Regimen", "Rows");
    table::print_separator(&[12, 6]);
    for count in charts::regimen_counts(study) {
        println!("  {:<12} {:>6}", count.label, count.count);
    }
    println!();

    println!("  Sex distribution");
    println!("  {:<12} {:>6} {:>7}", "Sex", "Rows", "Share");
    table::print_separator(&[12, 6, 7]);
    for share in charts::sex_distribution(study) {
        println!(
            "  {:<12} {:>6} {:>6.1}%",
            share.label, share.count, share.percent
        );
    }
    println!();

    let timeline = charts::mouse_timeline(study, regimen, mouse_id)?;
    println!(
        "  Tumor volume of mouse {} ({})",
        timeline.mouse_id, timeline.regimen
    );
    println!("  {:>9} {:>12}", "Timepoint", "Volume");
    table::print_separator(&[9, 12]);
    for (timepoint, volume) in &timeline.points {
        println!("  {timepoint:>9} {volume:>12.3}");
    }
    println!();
    Ok(())
}
