//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use evdash::DEFAULT_DATA_PATH;

/// evdash: U.S. EV charging station dashboard
#[derive(Parser)]
#[command(name = "evdash")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the interactive dashboard
    Serve {
        /// Path to the state statistics file (CSV/TSV)
        #[arg(value_name = "FILE", env = "EVDASH_DATA", default_value = DEFAULT_DATA_PATH)]
        file: PathBuf,

        /// Port for web server
        #[arg(short, long, default_value = "8050")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Quantile above which scatter-plot points are trimmed
        #[arg(short, long, default_value = "0.95")]
        quantile: f64,

        /// Don't automatically open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Print the statistics block for one state
    Stats {
        /// Path to the state statistics file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// State name, matched exactly
        #[arg(value_name = "STATE")]
        state: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what the outlier filter removes at each stage
    Outliers {
        /// Path to the state statistics file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Quantile above which values are trimmed
        #[arg(short, long, default_value = "0.95")]
        quantile: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["evdash", "serve"]).unwrap();
        match cli.command {
            Commands::Serve {
                port,
                host,
                quantile,
                no_open,
                ..
            } => {
                assert_eq!(port, 8050);
                assert_eq!(host, "127.0.0.1");
                assert_eq!(quantile, 0.95);
                assert!(!no_open);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_stats_args() {
        let cli =
            Cli::try_parse_from(["evdash", "-v", "stats", "states.csv", "New York", "--json"])
                .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Stats { file, state, json } => {
                assert_eq!(file, PathBuf::from("states.csv"));
                assert_eq!(state, "New York");
                assert!(json);
            }
            _ => panic!("expected stats"),
        }
    }
}
