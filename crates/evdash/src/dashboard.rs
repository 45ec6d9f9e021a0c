//! The immutable data context shared by every request.

use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::data::{Loader, SourceMetadata, Table};
use crate::error::Result;
use crate::stats::{FilterReport, OutlierFilter};
use crate::view::{ChartSpec, StateStats, XAxis, scatter_chart};

/// A dropdown option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Everything the UI needs to populate its controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    pub x_axis_options: Vec<SelectOption>,
    pub default_x_axis: String,
    pub state_options: Vec<SelectOption>,
    /// First row's state; `None` for an empty table.
    pub default_state: Option<String>,
}

/// Load and filter statistics for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// `None` when the context was built from an in-memory table.
    pub source: Option<SourceMetadata>,
    pub rows_loaded: usize,
    pub rows_dropped: usize,
    pub rows_filtered: usize,
    pub filter: FilterReport,
}

/// Both tables plus provenance, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    table: Table,
    filtered: Table,
    report: FilterReport,
    source: Option<SourceMetadata>,
    rows_dropped: usize,
}

impl DashboardContext {
    /// Load the configured file and derive the filtered table.
    ///
    /// Any error here is a startup failure; no partial context is returned.
    pub fn load(config: &DashboardConfig) -> Result<Self> {
        config.validate()?;

        let loaded = Loader::with_config(config.loader.clone()).load(&config.data_path)?;
        let mut context = Self::from_table(loaded.table, config)?;
        context.source = Some(loaded.source);
        context.rows_dropped = loaded.rows_dropped;
        Ok(context)
    }

    /// Build a context around an already-clean table.
    pub fn from_table(table: Table, config: &DashboardConfig) -> Result<Self> {
        let filter = OutlierFilter::new(config.filter_order.clone(), config.quantile)?;
        let (filtered, report) = filter.apply(&table)?;

        Ok(Self {
            table,
            filtered,
            report,
            source: None,
            rows_dropped: 0,
        })
    }

    /// The full cleaned table, used for per-state lookup.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The outlier-trimmed table, used for the scatter plot.
    pub fn filtered(&self) -> &Table {
        &self.filtered
    }

    pub fn filter_report(&self) -> &FilterReport {
        &self.report
    }

    /// Chart for an X-axis selection, given as a column name.
    pub fn scatter(&self, x_axis: &str) -> Result<ChartSpec> {
        let axis: XAxis = x_axis.parse()?;
        scatter_chart(&self.filtered, axis)
    }

    /// Statistics block for a state selection.
    pub fn state_stats(&self, state: &str) -> Result<StateStats> {
        StateStats::for_state(&self.table, state)
    }

    pub fn controls(&self) -> Controls {
        let x_axis_options = XAxis::ALL
            .into_iter()
            .map(|axis| SelectOption {
                label: axis.label().to_string(),
                value: axis.value().to_string(),
            })
            .collect();

        let state_options = self
            .table
            .states()
            .into_iter()
            .map(|state| SelectOption {
                label: state.to_string(),
                value: state.to_string(),
            })
            .collect();

        Controls {
            x_axis_options,
            default_x_axis: XAxis::default().value().to_string(),
            state_options,
            default_state: self.table.records().first().map(|r| r.state.clone()),
        }
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            source: self.source.clone(),
            rows_loaded: self.table.len(),
            rows_dropped: self.rows_dropped,
            rows_filtered: self.filtered.len(),
            filter: self.report.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::record;
    use crate::error::DashboardError;

    fn context() -> DashboardContext {
        let table: Table = (1..=20)
            .map(|i| record(&format!("State {i}"), i * 100, i, 3.0))
            .collect();
        DashboardContext::from_table(table, &DashboardConfig::default()).unwrap()
    }

    #[test]
    fn test_filtered_is_subset_of_table() {
        let ctx = context();
        assert_eq!(ctx.table().len(), 20);
        assert!(ctx.filtered().len() < ctx.table().len());
        for record in ctx.filtered().records() {
            assert!(ctx.table().records().contains(record));
        }
    }

    #[test]
    fn test_scatter_uses_filtered_table() {
        let ctx = context();
        let chart = ctx.scatter("Population").unwrap();
        assert_eq!(chart.x.len(), ctx.filtered().len());
    }

    #[test]
    fn test_scatter_rejects_unknown_axis() {
        let err = context().scatter("Altitude").unwrap_err();
        assert!(matches!(err, DashboardError::InvalidParameter(_)));
    }

    #[test]
    fn test_state_stats_uses_full_table() {
        // State 20 is trimmed from the filtered table but still has stats
        let ctx = context();
        assert!(ctx.filtered().find("State 20").is_none());
        let stats = ctx.state_stats("State 20").unwrap();
        assert_eq!(stats.record.population, 2_000);
    }

    #[test]
    fn test_controls() {
        let controls = context().controls();
        assert_eq!(controls.x_axis_options.len(), 4);
        assert_eq!(controls.x_axis_options[1].label, "Average Temperature");
        assert_eq!(controls.x_axis_options[1].value, "Avg Celcius");
        assert_eq!(controls.default_x_axis, "Population");
        assert_eq!(controls.state_options.len(), 20);
        assert_eq!(controls.default_state.as_deref(), Some("State 1"));
    }

    #[test]
    fn test_controls_empty_table() {
        let ctx = DashboardContext::from_table(Table::default(), &DashboardConfig::default())
            .unwrap();
        let controls = ctx.controls();
        assert!(controls.state_options.is_empty());
        assert_eq!(controls.default_state, None);
    }

    #[test]
    fn test_summary() {
        let summary = context().summary();
        assert!(summary.source.is_none());
        assert_eq!(summary.rows_loaded, 20);
        assert_eq!(summary.filter.stages.len(), 3);
        assert_eq!(summary.rows_filtered, 20 - summary.filter.rows_removed());
    }
}
