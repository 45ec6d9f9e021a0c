//! Render models: the scatter chart and the per-state statistics block.

mod chart;
mod format;
mod state_stats;

pub use chart::{
    CHART_HEIGHT, CHART_TEMPLATE, CHART_WIDTH, ChartSpec, GAS_PRICE_RANGE, XAxis, Y_FIELD,
    Y_LABEL, scatter_chart,
};
pub use format::{format_count, format_currency, format_decimal};
pub use state_stats::{StatLine, StateStats, lookup};
