//! CSV loading into an in-memory row table.
//!
//! Header names are normalized (BOM stripped, trimmed, lower-cased) exactly
//! once here, before any later stage sees them. Cells are trimmed but not
//! otherwise coerced; type interpretation belongs to the reporting stage.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use picks_model::ColumnHint;

use crate::error::{IngestError, Result};

/// An ordered row table with normalized column names.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Normalized header names, in source order.
    pub columns: Vec<String>,
    /// Rows of trimmed cells, one cell per column.
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Index of a column by its normalized name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Whether a column with this normalized name exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_lowercase()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Read a headered CSV file into a [`Dataset`].
///
/// # Errors
///
/// - [`IngestError::FileNotFound`] if the path does not exist.
/// - [`IngestError::CsvParse`] if the content is not well-formed CSV,
///   including records whose column count differs from the header.
/// - [`IngestError::EmptyCsv`] if the file has no header row.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
    let headers = reader
        .headers()
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let columns: Vec<String> = headers.iter().map(normalize_header).collect();
    if columns.is_empty() || columns.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(normalize_cell).collect());
    }
    debug!(
        columns = columns.len(),
        rows = rows.len(),
        path = %path.display(),
        "loaded dataset"
    );
    Ok(Dataset { columns, rows })
}

/// Compute per-column statistics for diagnostics and run summaries.
#[must_use]
pub fn build_column_hints(dataset: &Dataset) -> BTreeMap<String, ColumnHint> {
    let mut hints = BTreeMap::new();
    let row_count = dataset.rows.len();
    for (col_idx, column) in dataset.columns.iter().enumerate() {
        let mut non_null = 0usize;
        let mut numeric = 0usize;
        let mut uniques = BTreeSet::new();
        for row in &dataset.rows {
            let value = row.get(col_idx).map(String::as_str).unwrap_or("");
            if value.is_empty() {
                continue;
            }
            non_null += 1;
            uniques.insert(value);
            if value.parse::<f64>().is_ok() {
                numeric += 1;
            }
        }
        let null_ratio = if row_count == 0 {
            1.0
        } else {
            row_count.saturating_sub(non_null) as f64 / row_count as f64
        };
        let (numeric_ratio, unique_ratio) = if non_null == 0 {
            (0.0, 0.0)
        } else {
            (
                numeric as f64 / non_null as f64,
                uniques.len() as f64 / non_null as f64,
            )
        };
        hints.insert(
            column.clone(),
            ColumnHint {
                is_numeric: non_null > 0 && numeric == non_null,
                numeric_ratio,
                unique_ratio,
                null_ratio,
            },
        );
    }
    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization_strips_bom_and_case() {
        assert_eq!(normalize_header("\u{feff} IMDB_Rating "), "imdb_rating");
    }

    #[test]
    fn cells_are_trimmed_but_not_lowercased() {
        assert_eq!(normalize_cell("  The Wire "), "The Wire");
    }
}
