use clap::Args;
use oncostat_analysis::{
    correlation::{DEFAULT_REGIMEN, WeightVolumeRegression},
    study::StudyTable,
};

use super::{InputArg, table};
use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct RegressionArg {
    #[clap(flatten)]
    pub input: InputArg,

    /// Regimen whose mice are correlated
    #[arg(long, default_value = DEFAULT_REGIMEN)]
    pub regimen: String,
}

pub(crate) fn run(arg: &RegressionArg) -> anyhow::Result<()> {
    let loaded = util::load_study(&arg.input)?;
    print_regression(loaded.clean(), &arg.regimen)
}

/// Print the correlation and linear fit of mouse weight against tumor volume
pub(super) fn print_regression(study: &StudyTable, regimen: &str) -> anyhow::Result<()> {
    table::print_section(&format!("Weight vs. Average Tumor Volume ({regimen})"));

    let regression = WeightVolumeRegression::compute(study, regimen)?;
    let fit = &regression.fit;
    println!("  Mice:          {}", fit.count);
    println!("  Correlation r: {:.2}", fit.r);
    println!("  R squared:     {:.4}", fit.r_squared);
    println!("  Slope:         {:.4}", fit.slope);
    println!("  Intercept:     {:.4}", fit.intercept);
    println!("  Slope std err: {}", table::fmt_stat(fit.slope_std_err, 0));
    println!(
        "  Fitted line:   volume = {:.2} * weight + {:.2}",
        fit.slope, fit.intercept
    );
    println!();
    Ok(())
}
