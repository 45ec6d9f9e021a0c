//! Outliers command - show each stage of the scatter-plot filter.

use std::path::PathBuf;

use colored::Colorize;
use evdash::{DashboardConfig, DashboardContext, Table};

pub fn run(
    file: PathBuf,
    quantile: f64,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = DashboardConfig::new(&file).with_quantile(quantile);
    let context = DashboardContext::load(&config)?;
    let summary = context.summary();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Outlier filter for".cyan().bold(),
        file.display().to_string().white()
    );
    println!();
    println!("  Rows loaded:  {}", summary.rows_loaded.to_string().white());
    println!("  Rows dropped: {} (missing values)", summary.rows_dropped.to_string().yellow());
    println!("  Quantile:     {}", summary.filter.quantile);
    println!();

    println!("{}", "Stages:".yellow().bold());
    for (i, stage) in summary.filter.stages.iter().enumerate() {
        let threshold = stage
            .threshold
            .map(|t| format!("{:.4}", t))
            .unwrap_or_else(|| "-".to_string());
        let removed = stage.rows_before - stage.rows_after;
        println!(
            "  {}. {:<24} threshold {:>16}  {} -> {} rows ({})",
            i + 1,
            stage.field.to_string(),
            threshold,
            stage.rows_before,
            stage.rows_after,
            format!("-{}", removed).red()
        );
    }
    println!();
    println!(
        "Scatter plot uses {} of {} rows",
        summary.rows_filtered.to_string().green().bold(),
        summary.rows_loaded
    );

    if verbose {
        let trimmed = trimmed_states(context.table(), context.filtered());
        println!();
        println!("{} {}", "Trimmed:".yellow(), trimmed.join(", "));
    }

    Ok(())
}

/// States of the rows the filter removed, in table order.
///
/// `filtered` is a subsequence of `table`, so rows are matched by position
/// rather than by state name.
fn trimmed_states<'a>(table: &'a Table, filtered: &Table) -> Vec<&'a str> {
    let mut kept = filtered.records().iter().peekable();
    table
        .records()
        .iter()
        .filter(|record| {
            if kept.peek() == Some(record) {
                kept.next();
                false
            } else {
                true
            }
        })
        .map(|record| record.state.as_str())
        .collect()
}
