//! Serve command - load the dataset once and run the dashboard server.

use std::path::PathBuf;

use colored::Colorize;
use evdash::{DashboardConfig, DashboardContext};

use crate::server::{app, state::AppState};

pub fn run(
    file: PathBuf,
    host: String,
    port: u16,
    quantile: f64,
    no_open: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = DashboardConfig::new(&file).with_quantile(quantile);

    // A load failure aborts before the server binds
    let context = DashboardContext::load(&config)?;
    let summary = context.summary();
    let state = AppState::new(context);

    let url = format!("http://{}:{}", host, port);
    println!();
    println!(
        "{} {}",
        "Starting dashboard at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  File: {}", file.display());
    println!(
        "  Rows: {} loaded, {} dropped, {} in scatter plot",
        summary.rows_loaded, summary.rows_dropped, summary.rows_filtered
    );
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, &host, port))
}
