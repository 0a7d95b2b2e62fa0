//! Rating filter, stable ordering, and fixed-format block rendering.
//!
//! Report values are the raw cell strings from the dataset; the rating is
//! parsed only for filtering and ordering and is never reformatted, so
//! repeated runs over unchanged input produce byte-identical output.

use std::cmp::Ordering;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use picks_ingest::Dataset;
use picks_map::ResolutionMap;
use picks_model::LogicalField;

use crate::error::{ReportError, Result};

/// Default rating threshold; rows must score strictly above it.
pub const DEFAULT_MIN_RATING: f64 = 7.5;

/// Conventional report file name, consumed by external display tooling.
pub const DEFAULT_REPORT_NAME: &str = "HBO_Max_Top_Picks.txt";

/// Tunable knobs for filtering.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Rows are kept when their rating is strictly greater than this.
    pub min_rating: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            min_rating: DEFAULT_MIN_RATING,
        }
    }
}

/// A surviving row projected onto the five resolved columns.
///
/// Constructed during filtering, rendered immediately, not retained.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    /// Raw cell values in report block order (title, genre, year, rating,
    /// regions).
    pub values: [String; 5],
    /// Parsed rating, used for ordering only.
    pub rating: f64,
}

/// Outcome counts of a filter or report run.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    /// Rows in the input dataset.
    pub total_rows: usize,
    /// Rows dropped because their rating cell was not numeric.
    pub skipped_non_numeric: usize,
    /// Rows that survived the filter and appear in the report.
    pub matched: usize,
    /// Path the report was written to, when one was written.
    pub output: Option<PathBuf>,
}

/// Filtered, ordered rows plus their counts.
#[derive(Debug)]
pub struct FilteredRows {
    pub entries: Vec<ReportEntry>,
    pub summary: ReportSummary,
}

fn missing_fields(dataset: &Dataset, resolution: &ResolutionMap) -> Vec<LogicalField> {
    LogicalField::ALL
        .iter()
        .copied()
        .filter(|&field| !dataset.has_column(resolution.column(field)))
        .collect()
}

/// Filter and order dataset rows without touching the filesystem.
///
/// # Errors
///
/// [`ReportError::MissingColumns`] when any resolved column is absent from
/// the dataset; no partial result is produced in that case.
pub fn filter_rows(
    dataset: &Dataset,
    resolution: &ResolutionMap,
    options: ReportOptions,
) -> Result<FilteredRows> {
    let missing = missing_fields(dataset, resolution);
    if !missing.is_empty() {
        return Err(ReportError::MissingColumns { fields: missing });
    }

    let indices: Vec<usize> = LogicalField::ALL
        .iter()
        .map(|&field| {
            // Existence was just verified.
            dataset
                .column_index(resolution.column(field))
                .unwrap_or_default()
        })
        .collect();
    let rating_idx = indices[3];

    let mut skipped = 0usize;
    let mut entries = Vec::new();
    for (row_idx, row) in dataset.rows.iter().enumerate() {
        let raw_rating = row.get(rating_idx).map(String::as_str).unwrap_or("");
        let Ok(rating) = raw_rating.parse::<f64>() else {
            skipped += 1;
            debug!(row = row_idx, value = raw_rating, "dropping non-numeric rating");
            continue;
        };
        if rating > options.min_rating {
            let values = std::array::from_fn(|i| {
                row.get(indices[i]).cloned().unwrap_or_default()
            });
            entries.push(ReportEntry { values, rating });
        }
    }

    // Stable: equal ratings keep original row order.
    entries.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));

    let summary = ReportSummary {
        total_rows: dataset.rows.len(),
        skipped_non_numeric: skipped,
        matched: entries.len(),
        output: None,
    };
    Ok(FilteredRows { entries, summary })
}

/// Render entries as five-line labeled blocks, each followed by one blank
/// line.
///
/// The label strings and single-space-after-colon formatting are re-parsed
/// by an external viewer and must not change.
#[must_use]
pub fn render_report(entries: &[ReportEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        for (field, value) in LogicalField::ALL.iter().zip(entry.values.iter()) {
            out.push_str(field.report_label());
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Run the full filter-and-write stage.
///
/// Zero surviving rows is not an error: the (empty) report is still written
/// and the summary reports `matched == 0`. The write is atomic; on any
/// failure the previous report file is left untouched.
///
/// # Errors
///
/// - [`ReportError::MissingColumns`] before anything is written.
/// - [`ReportError::Write`] if the report cannot be persisted.
pub fn write_report(
    dataset: &Dataset,
    resolution: &ResolutionMap,
    options: ReportOptions,
    output_path: &Path,
) -> Result<ReportSummary> {
    let filtered = filter_rows(dataset, resolution, options)?;
    let rendered = render_report(&filtered.entries);
    write_atomic(output_path, rendered.as_bytes())?;
    info!(
        matched = filtered.summary.matched,
        skipped = filtered.summary.skipped_non_numeric,
        path = %output_path.display(),
        "report written"
    );
    Ok(ReportSummary {
        output: Some(output_path.to_path_buf()),
        ..filtered.summary
    })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_error = |source: std::io::Error| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    tmp.write_all(bytes).map_err(write_error)?;
    tmp.flush().map_err(write_error)?;
    tmp.persist(path).map_err(|error| write_error(error.error))?;
    Ok(())
}
