// src/table/mod.rs
use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::{debug, warn};

pub mod fill;
pub mod melt;

pub use fill::forward_fill;
pub use melt::{melt, pivot, RawObservation};

/// One source table in wide format: rows keyed by country, one value column
/// per year. Cells hold the raw text from the file; empty cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    /// Name of the key column, as it appeared in the header.
    pub key_column: String,
    /// Year of each value column, in source order.
    pub years: Vec<i32>,
    /// One entry per key: the key plus one cell per year column.
    pub rows: Vec<(String, Vec<Option<String>>)>,
}

/// Load a wide table from a delimited file.
///
/// The header row must contain `key_column` plus one column per year; any
/// other header label is a load error. Rows shorter than the header are
/// padded with missing cells; rows with an empty key are skipped.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_wide_csv<P: AsRef<Path>>(path: P, key_column: &str) -> Result<WideTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(&path)
        .with_context(|| format!("Failed to open source table: {:?}", path.as_ref()))?;

    let headers = rdr
        .headers()
        .with_context(|| format!("Failed to read header row of {:?}", path.as_ref()))?
        .clone();

    let key_idx = headers
        .iter()
        .position(|h| h == key_column)
        .ok_or_else(|| {
            anyhow!(
                "No {:?} column in {:?} (headers: {:?})",
                key_column,
                path.as_ref(),
                headers
            )
        })?;

    // Every non-key header must be a year label.
    let mut years = Vec::with_capacity(headers.len().saturating_sub(1));
    for (i, label) in headers.iter().enumerate() {
        if i == key_idx {
            continue;
        }
        let year: i32 = label.parse().with_context(|| {
            format!("Header {:?} in {:?} is not a year", label, path.as_ref())
        })?;
        years.push(year);
    }

    let mut rows: Vec<(String, Vec<Option<String>>)> = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result
            .with_context(|| format!("CSV parse error in {:?} at record {}", path.as_ref(), idx))?;

        let key = record.get(key_idx).unwrap_or("").to_string();
        if key.is_empty() {
            warn!(record = idx, "row without a key, skipping");
            continue;
        }

        let cells: Vec<Option<String>> = (0..headers.len())
            .filter(|i| *i != key_idx)
            .map(|i| record.get(i).filter(|v| !v.is_empty()).map(str::to_string))
            .collect();
        rows.push((key, cells));
    }

    debug!(rows = rows.len(), years = years.len(), "loaded wide table");

    Ok(WideTable {
        key_column: key_column.to_string(),
        years,
        rows,
    })
}
