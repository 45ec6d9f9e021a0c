//! Raw delimited-text reading for the loader.
//!
//! The delimiter is detected from the header row alone: each candidate is
//! tried and the one that exposes the most of the required column names wins.

use super::field::Field;
use crate::error::{DashboardError, Result};

/// Candidates in tie-break order.
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b'\t', b';', b'|'];

/// Header names and string cells, rows padded to the header width.
pub(crate) type RawRows = (Vec<String>, Vec<Vec<String>>);

/// Pick the delimiter that splits the header row into the required columns.
///
/// When no candidate yields any required name, the one producing the most
/// header cells is used so the loader can report the missing column.
pub(crate) fn detect_delimiter(bytes: &[u8], quote: u8) -> Result<u8> {
    let mut best: Option<(u8, usize, usize)> = None;

    for delimiter in CANDIDATE_DELIMITERS {
        let headers = read_headers(bytes, delimiter, quote)?;
        if headers.iter().all(|h| h.is_empty()) {
            continue;
        }
        let matched = Field::ALL
            .iter()
            .filter(|field| headers.iter().any(|h| h == field.column_name()))
            .count();

        let better = match best {
            None => true,
            Some((_, best_matched, best_width)) => {
                (matched, headers.len()) > (best_matched, best_width)
            }
        };
        if better {
            best = Some((delimiter, matched, headers.len()));
        }
    }

    best.map(|(delimiter, _, _)| delimiter)
        .ok_or_else(|| DashboardError::EmptyFile("No header row found".to_string()))
}

/// Read every row with a known delimiter.
pub(crate) fn read_rows(bytes: &[u8], delimiter: u8, quote: u8) -> Result<RawRows> {
    let mut reader = csv_reader(bytes, delimiter, quote);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(DashboardError::EmptyFile("No header row found".to_string()));
    }

    let width = headers.len();
    let rows = reader
        .records()
        .map(|record| -> Result<Vec<String>> {
            let mut row: Vec<String> = record?.iter().map(str::to_string).collect();
            // absent trailing cells read as missing
            row.resize(width, String::new());
            Ok(row)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((headers, rows))
}

/// Short name for the delimiter, reported in source metadata.
pub(crate) fn format_name(delimiter: u8) -> &'static str {
    match delimiter {
        b',' => "csv",
        b'\t' => "tsv",
        b';' => "csv-semicolon",
        b'|' => "psv",
        _ => "delimited",
    }
}

fn read_headers(bytes: &[u8], delimiter: u8, quote: u8) -> Result<Vec<String>> {
    let mut reader = csv_reader(bytes, delimiter, quote);
    Ok(reader.headers()?.iter().map(|h| h.trim().to_string()).collect())
}

fn csv_reader(bytes: &[u8], delimiter: u8, quote: u8) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .quote(quote)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes)
}
