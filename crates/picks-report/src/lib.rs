#![deny(unsafe_code)]

pub mod error;
pub mod report;

pub use error::{ReportError, Result};
pub use report::{
    DEFAULT_MIN_RATING, DEFAULT_REPORT_NAME, FilteredRows, ReportEntry, ReportOptions,
    ReportSummary, filter_rows, render_report, write_report,
};
