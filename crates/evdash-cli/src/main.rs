//! evdash CLI - U.S. EV charging station dashboard.

mod cli;
mod commands;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Serve {
            file,
            port,
            host,
            quantile,
            no_open,
        } => commands::serve::run(file, host, port, quantile, no_open),

        Commands::Stats { file, state, json } => commands::stats::run(file, state, json),

        Commands::Outliers {
            file,
            quantile,
            json,
        } => commands::outliers::run(file, quantile, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
