//! Dashboard configuration.

use std::path::PathBuf;

use crate::data::{Field, LoaderConfig, ensure_numeric};
use crate::error::Result;
use crate::stats::{DEFAULT_FILTER_ORDER, DEFAULT_QUANTILE, validate_quantile};

/// Default location of the dataset, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/Final_Merged_Dataset.csv";

/// Configuration for building a [`crate::DashboardContext`].
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Path to the data file.
    pub data_path: PathBuf,
    /// How the file is split into cells.
    pub loader: LoaderConfig,
    /// Outlier quantile for the scatter-plot table.
    pub quantile: f64,
    /// Columns to trim, in order.
    pub filter_order: Vec<Field>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            loader: LoaderConfig::default(),
            quantile: DEFAULT_QUANTILE,
            filter_order: DEFAULT_FILTER_ORDER.to_vec(),
        }
    }
}

impl DashboardConfig {
    /// Default configuration reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_quantile(mut self, quantile: f64) -> Self {
        self.quantile = quantile;
        self
    }

    pub fn with_filter_order(mut self, order: Vec<Field>) -> Self {
        self.filter_order = order;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.loader.delimiter = Some(delimiter);
        self
    }

    /// Check the quantile and filter columns before any data is read.
    pub fn validate(&self) -> Result<()> {
        validate_quantile(self.quantile)?;
        for &field in &self.filter_order {
            ensure_numeric(field)?;
        }
        Ok(())
    }
}
