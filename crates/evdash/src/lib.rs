//! evdash: data core for the U.S. EV charging station dashboard.
//!
//! Loads a CSV of state-level statistics, trims outliers for the scatter
//! plot, and turns user selections into render models. Both tables are built
//! once and shared read-only; every request is a pure computation over them.
//!
//! # Example
//!
//! ```no_run
//! use evdash::{DashboardConfig, DashboardContext};
//!
//! let context = DashboardContext::load(&DashboardConfig::new("data/Final_Merged_Dataset.csv"))?;
//!
//! let chart = context.scatter("gas_price_regular")?;
//! println!("{} ({} points)", chart.title, chart.x.len());
//!
//! let stats = context.state_stats("California")?;
//! println!("{}", stats.to_text());
//! # Ok::<(), evdash::DashboardError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod stats;
pub mod view;

mod dashboard;

pub use config::{DEFAULT_DATA_PATH, DashboardConfig};
pub use dashboard::{Controls, DashboardContext, DatasetSummary, SelectOption};
pub use data::{
    Field, LoadedDataset, Loader, LoaderConfig, Record, SourceMetadata, Table, load,
};
pub use error::{DashboardError, ErrorKind, Result};
pub use stats::{FilterReport, FilterStage, OutlierFilter, filter_outliers, quantile};
pub use view::{ChartSpec, StatLine, StateStats, XAxis, lookup, scatter_chart};
