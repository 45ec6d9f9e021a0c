//! Typed records and the read-only table that holds them.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::field::Field;
use crate::error::{DashboardError, Result};

/// One state's statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Population")]
    pub population: u64,
    #[serde(rename = "Avg Celcius")]
    pub avg_celsius: f64,
    #[serde(rename = "Personal_Income_Millions")]
    pub personal_income_millions: f64,
    #[serde(rename = "EV_Charging_Stations")]
    pub ev_charging_stations: u64,
    #[serde(rename = "gas_price_regular")]
    pub gas_price_regular: f64,
}

impl Record {
    /// Numeric value of a field, `None` for `State`.
    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::State => None,
            Field::Population => Some(self.population as f64),
            Field::AvgCelsius => Some(self.avg_celsius),
            Field::PersonalIncomeMillions => Some(self.personal_income_millions),
            Field::EvChargingStations => Some(self.ev_charging_stations as f64),
            Field::GasPriceRegular => Some(self.gas_price_regular),
        }
    }
}

/// Ordered, immutable sequence of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    /// Create a table from records, keeping their order.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Values of a numeric column, in table order.
    pub fn column(&self, field: Field) -> Result<Vec<f64>> {
        ensure_numeric(field)?;
        Ok(self
            .records
            .iter()
            .filter_map(|record| record.value(field))
            .collect())
    }

    /// Largest value of a numeric column; `None` when the table is empty.
    pub fn max(&self, field: Field) -> Result<Option<f64>> {
        Ok(self.column(field)?.into_iter().reduce(f64::max))
    }

    /// Distinct state names in first-seen order.
    pub fn states(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.state.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// First record with exactly this state name.
    pub fn find(&self, state: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.state == state)
    }

    /// Records satisfying a predicate, order preserved.
    pub fn retain_where(&self, mut keep: impl FnMut(&Record) -> bool) -> Table {
        Table::new(
            self.records
                .iter()
                .filter(|&record| keep(record))
                .cloned()
                .collect(),
        )
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Table::new(iter.into_iter().collect())
    }
}

pub(crate) fn ensure_numeric(field: Field) -> Result<()> {
    if field.is_numeric() {
        Ok(())
    } else {
        Err(DashboardError::InvalidParameter(format!(
            "Column '{}' is not numeric",
            field
        )))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn record(state: &str, population: u64, ev: u64, gas: f64) -> Record {
        Record {
            state: state.to_string(),
            population,
            avg_celsius: 12.5,
            personal_income_millions: 100_000.0,
            ev_charging_stations: ev,
            gas_price_regular: gas,
        }
    }
}
