//! Loads the state statistics file into a typed [`Table`].
//!
//! The loader projects the raw file onto the six required columns, drops any
//! row with a missing value in one of them, and parses the rest. Extra columns
//! are ignored. A cell that is present but unparseable is a load error rather
//! than a dropped row.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::field::Field;
use super::reader::{detect_delimiter, format_name, read_rows};
use super::table::{Record, Table};
use crate::error::{DashboardError, Result};

/// How the data file is split into cells.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Delimiter to use (None = detect from the header row).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
        }
    }
}

/// Provenance of a loaded file, reported by the dataset summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    pub file: String,
    pub path: PathBuf,
    /// `sha256:` followed by the hex digest of the file bytes.
    pub hash: String,
    pub size_bytes: u64,
    /// `csv`, `tsv`, `csv-semicolon`, `psv` or `delimited`.
    pub format: String,
    /// Data rows in the file, before incomplete rows were dropped.
    pub row_count: usize,
    pub column_count: usize,
    pub loaded_at: DateTime<Utc>,
}

/// A cleaned table plus what was learned while loading it.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    /// The cleaned table.
    pub table: Table,
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Rows discarded for missing values.
    pub rows_dropped: usize,
}

/// Reads and cleans the dataset.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a loader that detects the delimiter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load and clean the file at `path`.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadedDataset> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| DashboardError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&bytes, self.config.quote)?,
        };
        let (headers, rows) = read_rows(&bytes, delimiter, self.config.quote)?;
        let (table, rows_dropped) = clean(&headers, &rows)?;

        let source = SourceMetadata {
            file: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
            hash: format!("sha256:{:x}", Sha256::digest(&bytes)),
            size_bytes: bytes.len() as u64,
            format: format_name(delimiter).to_string(),
            row_count: rows.len(),
            column_count: headers.len(),
            loaded_at: Utc::now(),
        };

        log::info!(
            "Loaded {} rows from {} ({} dropped for missing values)",
            table.len(),
            source.file,
            rows_dropped
        );

        Ok(LoadedDataset {
            table,
            source,
            rows_dropped,
        })
    }
}

/// Load the file at `path` with default settings and return only the table.
pub fn load(path: impl AsRef<Path>) -> Result<Table> {
    Ok(Loader::new().load(path)?.table)
}

/// Project, drop incomplete rows, and parse raw string rows.
///
/// Returns the cleaned table and the number of rows dropped.
pub fn clean(headers: &[String], rows: &[Vec<String>]) -> Result<(Table, usize)> {
    let indices = resolve_columns(headers)?;
    let mut records = Vec::with_capacity(rows.len());
    let mut dropped = 0;

    for (row_idx, row) in rows.iter().enumerate() {
        let cells: Vec<&str> = indices
            .iter()
            .map(|&i| row.get(i).map(String::as_str).unwrap_or(""))
            .collect();

        if let Some(pos) = cells.iter().position(|c| is_missing(c)) {
            log::debug!(
                "Dropping row {}: missing '{}'",
                row_idx + 1,
                Field::ALL[pos]
            );
            dropped += 1;
            continue;
        }

        records.push(parse_record(row_idx + 1, &cells)?);
    }

    Ok((Table::new(records), dropped))
}

/// Empty cells and the usual spreadsheet null markers.
fn is_missing(cell: &str) -> bool {
    matches!(
        cell.trim().to_ascii_lowercase().as_str(),
        "" | "na" | "n/a" | "nan" | "null" | "none" | "nil" | "." | "-"
    )
}

/// Header positions of the required columns, in [`Field::ALL`] order.
fn resolve_columns(headers: &[String]) -> Result<[usize; 6]> {
    let mut indices = [0; 6];
    for (slot, field) in indices.iter_mut().zip(Field::ALL) {
        *slot = headers
            .iter()
            .position(|h| h == field.column_name())
            .ok_or_else(|| DashboardError::MissingColumn {
                column: field.column_name().to_string(),
            })?;
    }
    Ok(indices)
}

fn parse_record(row: usize, cells: &[&str]) -> Result<Record> {
    Ok(Record {
        state: cells[0].trim().to_string(),
        population: parse_count(row, Field::Population, cells[1])?,
        avg_celsius: parse_float(row, Field::AvgCelsius, cells[2])?,
        personal_income_millions: parse_float(row, Field::PersonalIncomeMillions, cells[3])?,
        ev_charging_stations: parse_count(row, Field::EvChargingStations, cells[4])?,
        gas_price_regular: parse_float(row, Field::GasPriceRegular, cells[5])?,
    })
}

fn parse_float(row: usize, field: Field, cell: &str) -> Result<f64> {
    let value = cell.trim();
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid(row, field, value, "expected a number")),
    }
}

/// Whole numbers may be written as integral floats (`1200.0`).
fn parse_count(row: usize, field: Field, cell: &str) -> Result<u64> {
    let value = cell.trim();
    if let Ok(v) = value.parse::<u64>() {
        return Ok(v);
    }
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 => {
            Ok(v as u64)
        }
        _ => Err(invalid(row, field, value, "expected a non-negative integer")),
    }
}

fn invalid(row: usize, field: Field, value: &str, message: &str) -> DashboardError {
    DashboardError::InvalidValue {
        row,
        column: field.column_name().to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "State,Population,Avg Celcius,Personal_Income_Millions,EV_Charging_Stations,gas_price_regular";

    fn clean_str(content: &str) -> Result<(Table, usize)> {
        let (headers, rows) = read_rows(content.as_bytes(), b',', b'"').unwrap();
        clean(&headers, &rows)
    }

    #[test]
    fn test_clean_parses_records() {
        let content = format!("{HEADER}\nOhio,11799448,10.4,601234.5,2450,2.89\n");
        let (table, dropped) = clean_str(&content).unwrap();

        assert_eq!(dropped, 0);
        assert_eq!(table.len(), 1);
        let ohio = &table.records()[0];
        assert_eq!(ohio.state, "Ohio");
        assert_eq!(ohio.population, 11_799_448);
        assert_eq!(ohio.avg_celsius, 10.4);
        assert_eq!(ohio.personal_income_millions, 601_234.5);
        assert_eq!(ohio.ev_charging_stations, 2_450);
        assert_eq!(ohio.gas_price_regular, 2.89);
    }

    #[test]
    fn test_clean_drops_rows_with_missing_values() {
        let content = format!(
            "{HEADER}\n\
             Ohio,11799448,10.4,601234.5,2450,2.89\n\
             Utah,,9.1,180000,1100,3.05\n\
             Iowa,3190369,8.8,200000,NA,2.75\n"
        );
        let (table, dropped) = clean_str(&content).unwrap();

        assert_eq!(dropped, 2);
        assert_eq!(table.states(), vec!["Ohio"]);
    }

    #[test]
    fn test_clean_ignores_extra_columns_and_order() {
        let content = "Year,gas_price_regular,State,EV_Charging_Stations,Avg Celcius,Population,Personal_Income_Millions\n\
                       2023,3.05,Utah,1100,9.1,3271616,180000\n";
        let (table, _) = clean_str(content).unwrap();

        let utah = &table.records()[0];
        assert_eq!(utah.state, "Utah");
        assert_eq!(utah.population, 3_271_616);
        assert_eq!(utah.gas_price_regular, 3.05);
    }

    #[test]
    fn test_clean_missing_column() {
        let content = "State,Population,Avg Celcius,Personal_Income_Millions,EV_Charging_Stations\n\
                       Utah,3271616,9.1,180000,1100\n";
        let err = clean_str(content).unwrap_err();

        match err {
            DashboardError::MissingColumn { column } => assert_eq!(column, "gas_price_regular"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_clean_integral_float_counts() {
        let content = format!("{HEADER}\nUtah,3271616.0,9.1,180000,1100.0,3.05\n");
        let (table, _) = clean_str(&content).unwrap();
        assert_eq!(table.records()[0].population, 3_271_616);
        assert_eq!(table.records()[0].ev_charging_stations, 1_100);
    }

    #[test]
    fn test_clean_rejects_bad_values() {
        let content = format!("{HEADER}\nUtah,3271616,9.1,180000,-4,3.05\n");
        let err = clean_str(&content).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidValue { row: 1, .. }));

        let content = format!("{HEADER}\nUtah,3271616,warm,180000,4,3.05\n");
        let err = clean_str(&content).unwrap_err();
        match err {
            DashboardError::InvalidValue { column, value, .. } => {
                assert_eq!(column, "Avg Celcius");
                assert_eq!(value, "warm");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_null_markers() {
        for cell in ["", "  ", "NA", "NaN", "N/A", "null", "None", ".", "-"] {
            assert!(is_missing(cell), "{cell:?} should be missing");
        }
        assert!(!is_missing("Nevada"));
        assert!(!is_missing("0"));
        assert!(!is_missing("-4"));
    }
}
