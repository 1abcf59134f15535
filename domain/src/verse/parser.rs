//! CSV table parsing for per-model source resources
//!
//! Each source is delimited text whose first column is a row index
//! (discarded). Header casing and padding vary between resources, so
//! headers are trimmed and lower-cased before any column lookup.

use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while parsing one source table
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed CSV: {0}")]
    Malformed(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Empty table")]
    EmptyTable,
}

/// One parsed row, keyed by normalized (trimmed, lower-cased) header name.
///
/// The row-index column is already dropped; empty cells are absent keys.
pub type TableRow = BTreeMap<String, String>;

/// Parse a CSV body into rows keyed by normalized header names.
///
/// Fails when the body is not valid CSV or when the `chapter` or `verse`
/// column is missing entirely; per-row problems (non-numeric indices) are
/// left for corpus normalization to drop.
pub fn parse_table(body: &str) -> Result<Vec<TableRow>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();

    if headers.is_empty() {
        return Err(ParseError::EmptyTable);
    }
    for required in ["chapter", "verse"] {
        // Column 0 is the row index regardless of its header
        if !headers.iter().skip(1).any(|h| h == required) {
            return Err(ParseError::MissingColumn(required));
        }
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = TableRow::new();
        for (i, field) in record.iter().enumerate().skip(1) {
            let Some(header) = headers.get(i) else {
                continue;
            };
            if header.is_empty() || field.is_empty() {
                continue;
            }
            row.insert(header.clone(), field.to_string());
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Trim and lower-case a header name
pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Coerce a cell value to a positive 1-based index.
///
/// Accepts plain integers and float-formatted integers ("3.0", as written
/// by spreadsheet exports); everything else is treated as missing.
pub fn coerce_index(value: &str) -> Option<u32> {
    let value = value.trim();
    if let Ok(n) = value.parse::<i64>() {
        return u32::try_from(n).ok().filter(|n| *n > 0);
    }
    match value.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f > 0.0 && f <= u32::MAX as f64 => Some(f as u32),
        _ => None,
    }
}
