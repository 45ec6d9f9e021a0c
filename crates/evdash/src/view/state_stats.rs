//! Per-state lookup and the statistics block rendered from it.

use serde::{Deserialize, Serialize};

use super::format::{format_count, format_currency, format_decimal};
use crate::data::{Record, Table};
use crate::error::{DashboardError, Result};

/// First record whose `State` equals `state` exactly.
pub fn lookup<'a>(table: &'a Table, state: &str) -> Result<&'a Record> {
    table.find(state).ok_or_else(|| {
        log::debug!("No record for state '{}'", state);
        DashboardError::NotFound(format!("No data for state '{}'", state))
    })
}

/// One labelled line of the statistics block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    pub label: String,
    pub value: String,
}

impl StatLine {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Display-ready statistics for one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateStats {
    pub state: String,
    /// Six lines; the first names the state.
    pub lines: Vec<StatLine>,
    /// The unformatted record.
    pub record: Record,
}

impl StateStats {
    pub fn from_record(record: &Record) -> Self {
        let lines = vec![
            StatLine::new("State", record.state.clone()),
            StatLine::new("Population", format_count(record.population)),
            StatLine::new(
                "Average Temperature (°C)",
                format_decimal(record.avg_celsius),
            ),
            StatLine::new(
                "Annual Total Personal Income (Millions)",
                format_currency(record.personal_income_millions),
            ),
            StatLine::new(
                "EV Charging Stations",
                format_count(record.ev_charging_stations),
            ),
            StatLine::new(
                "Gas Price (Regular)",
                format_currency(record.gas_price_regular),
            ),
        ];

        Self {
            state: record.state.clone(),
            lines,
            record: record.clone(),
        }
    }

    /// Look up `state` and format it.
    pub fn for_state(table: &Table, state: &str) -> Result<Self> {
        lookup(table, state).map(Self::from_record)
    }

    /// The block as plain text, one `label: value` per line.
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{}: {}", line.label, line.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn california() -> Record {
        Record {
            state: "California".to_string(),
            population: 39_538_223,
            avg_celsius: 15.0,
            personal_income_millions: 3_213_254.5,
            ev_charging_stations: 15_923,
            gas_price_regular: 4.6,
        }
    }

    fn table() -> Table {
        let mut texas = california();
        texas.state = "Texas".to_string();
        texas.population = 29_145_505;
        Table::new(vec![texas, california()])
    }

    #[test]
    fn test_lookup_returns_exact_record() {
        let table = table();
        let record = lookup(&table, "California").unwrap();
        assert_eq!(record, &california());
    }

    #[test]
    fn test_lookup_missing_state() {
        let table = table();
        let err = lookup(&table, "Nowhere").unwrap_err();
        assert!(matches!(err, DashboardError::NotFound(_)));
        assert!(err.to_string().contains("Nowhere"));
    }

    #[test]
    fn test_stats_text() {
        let stats = StateStats::for_state(&table(), "California").unwrap();
        assert_eq!(
            stats.to_text(),
            "State: California\n\
             Population: 39,538,223\n\
             Average Temperature (°C): 15.0\n\
             Annual Total Personal Income (Millions): $3,213,254.50\n\
             EV Charging Stations: 15,923\n\
             Gas Price (Regular): $4.60"
        );
        assert_eq!(stats.lines.len(), 6);
        assert_eq!(stats.record, california());
    }
}
