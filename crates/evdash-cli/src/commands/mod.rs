//! CLI command implementations.

pub mod outliers;
pub mod serve;
pub mod stats;
