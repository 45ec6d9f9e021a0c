//! Error types for the evdash library.

use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of a [`DashboardError`].
///
/// Load errors are fatal at startup; the other kinds are recoverable and
/// surface as a message at the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The dataset could not be loaded.
    DataLoad,
    /// A lookup key matched nothing.
    NotFound,
    /// A caller-supplied parameter was rejected before computation.
    InvalidParameter,
}

/// Main error type for dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Error reading or accessing the data file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("Missing required column '{column}'")]
    MissingColumn { column: String },

    /// A cell could not be parsed as the type its column requires.
    #[error("Invalid value '{value}' at row {row}, column '{column}': {message}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
        message: String,
    },

    /// The file has no header or no lines at all.
    #[error("Empty data: {0}")]
    EmptyFile(String),

    /// No record matches the requested key.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unknown column name, out-of-range quantile, and similar.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl DashboardError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DashboardError::Io { .. }
            | DashboardError::Csv(_)
            | DashboardError::MissingColumn { .. }
            | DashboardError::InvalidValue { .. }
            | DashboardError::EmptyFile(_) => ErrorKind::DataLoad,
            DashboardError::NotFound(_) => ErrorKind::NotFound,
            DashboardError::InvalidParameter(_) => ErrorKind::InvalidParameter,
        }
    }

    /// Whether this error came from loading the dataset.
    pub fn is_data_load(&self) -> bool {
        self.kind() == ErrorKind::DataLoad
    }
}

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
