//! Quantiles and outlier filtering.

mod outlier;
mod quantile;

pub use outlier::{
    DEFAULT_FILTER_ORDER, DEFAULT_QUANTILE, FilterReport, FilterStage, OutlierFilter,
    filter_outliers,
};
pub use quantile::{quantile, validate_quantile};
