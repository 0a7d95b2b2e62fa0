#![deny(unsafe_code)]

pub mod dataset;
pub mod error;

pub use dataset::{Dataset, build_column_hints, read_dataset};
pub use error::{IngestError, Result};
