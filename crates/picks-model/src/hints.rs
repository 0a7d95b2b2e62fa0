//! Per-column statistics gathered at ingest time.

use serde::{Deserialize, Serialize};

/// Hints about a source column's characteristics.
///
/// Computed by the loader and surfaced in run summaries so an operator can
/// see, for example, why a rating column dropped rows during coercion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnHint {
    /// True if every non-empty cell parses as a number.
    pub is_numeric: bool,
    /// Ratio of numeric cells to non-empty cells (0.0 to 1.0).
    pub numeric_ratio: f64,
    /// Ratio of unique values to non-empty cells (0.0 to 1.0).
    pub unique_ratio: f64,
    /// Ratio of empty cells to total rows (0.0 to 1.0).
    pub null_ratio: f64,
}
