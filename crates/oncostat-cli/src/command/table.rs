//! Fixed-width table display
//!
//! Shared helpers for printing report sections in a consistent layout.

/// Print a section title underlined with `=`
pub(super) fn print_section(title: &str) {
    println!("{title}");
    println!("{}", "=".repeat(title.chars().count()));
    println!();
}

/// Separator line spanning columns of the given widths
///
/// Columns are separated by one space.
pub(super) fn separator(columns: &[usize]) -> String {
    let total_width = columns.iter().sum::<usize>() + columns.len().saturating_sub(1);
    "-".repeat(total_width)
}

/// Print table separator line
pub(super) fn print_separator(columns: &[usize]) {
    println!("  {}", separator(columns));
}

/// Format a statistic, printing undefined values as `N/A`
pub(super) fn fmt_stat(value: f64, width: usize) -> String {
    if value.is_nan() {
        format!("{:>width$}", "N/A")
    } else {
        format!("{value:>width$.3}")
    }
}
