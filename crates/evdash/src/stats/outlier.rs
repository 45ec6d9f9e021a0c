//! Quantile-based outlier trimming.
//!
//! Each stage computes its threshold against the table produced by the
//! previous stage, so the result depends on stage order.

use serde::{Deserialize, Serialize};

use super::quantile::{quantile, validate_quantile};
use crate::data::{Field, Table, ensure_numeric};
use crate::error::Result;

/// Default quantile above which values count as outliers.
pub const DEFAULT_QUANTILE: f64 = 0.95;

/// Default stage order for the scatter-plot table.
pub const DEFAULT_FILTER_ORDER: [Field; 3] = [
    Field::Population,
    Field::EvChargingStations,
    Field::GasPriceRegular,
];

/// Remove records whose `field` value exceeds the table's `q` quantile.
///
/// Values equal to the threshold are kept. Order is preserved. An empty table
/// yields an empty table.
pub fn filter_outliers(table: &Table, field: Field, q: f64) -> Result<Table> {
    Ok(filter_stage(table, field, q)?.0)
}

fn filter_stage(table: &Table, field: Field, q: f64) -> Result<(Table, Option<f64>)> {
    ensure_numeric(field)?;
    validate_quantile(q)?;

    let Some(threshold) = quantile(&table.column(field)?, q) else {
        return Ok((Table::default(), None));
    };

    let kept = table.retain_where(|record| {
        record
            .value(field)
            .is_some_and(|value| value <= threshold)
    });

    Ok((kept, Some(threshold)))
}

/// One applied stage of an [`OutlierFilter`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterStage {
    /// Column the stage filtered on.
    pub field: Field,
    /// Threshold used; `None` when the stage saw an empty table.
    pub threshold: Option<f64>,
    pub rows_before: usize,
    pub rows_after: usize,
}

/// What an [`OutlierFilter`] did, stage by stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterReport {
    pub quantile: f64,
    pub stages: Vec<FilterStage>,
}

impl FilterReport {
    /// Total rows removed across all stages.
    pub fn rows_removed(&self) -> usize {
        match (self.stages.first(), self.stages.last()) {
            (Some(first), Some(last)) => first.rows_before - last.rows_after,
            _ => 0,
        }
    }
}

/// An ordered sequence of outlier stages sharing one quantile.
#[derive(Debug, Clone)]
pub struct OutlierFilter {
    fields: Vec<Field>,
    quantile: f64,
}

impl OutlierFilter {
    /// Filter on `fields`, in order, at quantile `q`.
    ///
    /// Fails if `q` is outside (0, 1) or any field is not numeric.
    pub fn new(fields: Vec<Field>, q: f64) -> Result<Self> {
        validate_quantile(q)?;
        for &field in &fields {
            ensure_numeric(field)?;
        }
        Ok(Self {
            fields,
            quantile: q,
        })
    }

    /// Stage fields in application order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn quantile(&self) -> f64 {
        self.quantile
    }

    /// Run every stage and report what each one did.
    pub fn apply(&self, table: &Table) -> Result<(Table, FilterReport)> {
        let mut current = table.clone();
        let mut stages = Vec::with_capacity(self.fields.len());

        for &field in &self.fields {
            let rows_before = current.len();
            let (next, threshold) = filter_stage(&current, field, self.quantile)?;

            log::info!(
                "Outlier stage {}: threshold {:?}, {} -> {} rows",
                field,
                threshold,
                rows_before,
                next.len()
            );

            stages.push(FilterStage {
                field,
                threshold,
                rows_before,
                rows_after: next.len(),
            });
            current = next;
        }

        Ok((
            current,
            FilterReport {
                quantile: self.quantile,
                stages,
            },
        ))
    }
}

impl Default for OutlierFilter {
    fn default() -> Self {
        Self {
            fields: DEFAULT_FILTER_ORDER.to_vec(),
            quantile: DEFAULT_QUANTILE,
        }
    }
}
