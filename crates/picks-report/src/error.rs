//! Error types for report generation.

use std::path::PathBuf;
use thiserror::Error;

use picks_model::LogicalField;

/// Errors that can occur while filtering and writing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// One or more resolved column names do not exist in the dataset.
    #[error(
        "dataset is missing resolved column(s) for: {}",
        .fields.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    )]
    MissingColumns { fields: Vec<LogicalField> },

    /// The report could not be persisted to disk.
    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for reporting operations.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_names_every_field() {
        let err = ReportError::MissingColumns {
            fields: vec![LogicalField::Title, LogicalField::Rating],
        };
        assert_eq!(
            err.to_string(),
            "dataset is missing resolved column(s) for: title, rating"
        );
    }
}
