use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use oncostat_analysis::final_volume::DEFAULT_TREATMENTS;
use oncostat_stats::outliers::DEFAULT_IQR_FACTOR;
use tracing_subscriber::EnvFilter;

use self::{
    chart_data::ChartDataArg, clean::CleanArg, outliers::OutliersArg, regression::RegressionArg,
    report::ReportArg, summary::SummaryArg,
};

mod chart_data;
mod clean;
mod outliers;
mod regression;
mod report;
mod summary;
mod table;

const DEFAULT_MOUSE_METADATA: &str = "data/Mouse_metadata.csv";
const DEFAULT_STUDY_RESULTS: &str = "data/Study_results.csv";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// What analysis to run (defaults to the full report)
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Run every analysis in sequence
    Report(#[clap(flatten)] ReportArg),
    /// Report and optionally export the cleaned dataset
    Clean(#[clap(flatten)] CleanArg),
    /// Tumor volume statistics per drug regimen
    Summary(#[clap(flatten)] SummaryArg),
    /// Final tumor volume quartiles and outliers per treatment
    Outliers(#[clap(flatten)] OutliersArg),
    /// Correlate mouse weight with tumor volume for one regimen
    Regression(#[clap(flatten)] RegressionArg),
    /// Export the data behind the study charts as JSON
    ChartData(#[clap(flatten)] ChartDataArg),
}

/// Paths of the two study input files
#[derive(Debug, Clone, Args)]
pub(crate) struct InputArg {
    /// Path to the mouse metadata CSV file
    #[arg(long, default_value = DEFAULT_MOUSE_METADATA)]
    pub mouse_metadata: PathBuf,

    /// Path to the study results CSV file
    #[arg(long, default_value = DEFAULT_STUDY_RESULTS)]
    pub study_results: PathBuf,
}

impl Default for InputArg {
    fn default() -> Self {
        Self {
            mouse_metadata: PathBuf::from(DEFAULT_MOUSE_METADATA),
            study_results: PathBuf::from(DEFAULT_STUDY_RESULTS),
        }
    }
}

/// Treatments compared by final tumor volume
#[derive(Debug, Clone, Args)]
pub(crate) struct FinalVolumeArg {
    /// Treatments to analyze (comma-separated)
    #[arg(long, value_delimiter = ',', default_values = DEFAULT_TREATMENTS)]
    pub treatments: Vec<String>,

    /// Multiplier of the interquartile range for the outlier fences
    #[arg(long, default_value_t = DEFAULT_IQR_FACTOR)]
    pub iqr_factor: f64,
}

impl Default for FinalVolumeArg {
    fn default() -> Self {
        Self {
            treatments: DEFAULT_TREATMENTS.map(String::from).to_vec(),
            iqr_factor: DEFAULT_IQR_FACTOR,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "oncostat=debug"
    } else {
        "oncostat=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);

    match args.mode.unwrap_or(Mode::Report(ReportArg::default())) {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Clean(arg) => clean::run(&arg)?,
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Outliers(arg) => outliers::run(&arg)?,
        Mode::Regression(arg) => regression::run(&arg)?,
        Mode::ChartData(arg) => chart_data::run(&arg)?,
    }
    Ok(())
}
