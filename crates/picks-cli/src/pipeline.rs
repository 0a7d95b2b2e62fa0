//! Pipeline orchestration with explicit stages.
//!
//! The pipeline runs three stages in order:
//! 1. **Ingest**: read the catalog CSV into a normalized row table
//! 2. **Resolve**: bind the five logical fields to dataset columns
//! 3. **Report**: filter, order, and write the report file
//!
//! Each stage takes the output of the previous stage; there is no shared
//! state beyond the in-memory dataset.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info_span, warn};

use picks_ingest::{Dataset, read_dataset};
use picks_map::{ResolutionMap, ResolverConfig, ResolverEngine};
use picks_report::{ReportOptions, ReportSummary, write_report};

/// Read and normalize the input dataset.
pub fn ingest(input: &Path) -> Result<Dataset> {
    let span = info_span!("ingest", path = %input.display());
    let _guard = span.enter();
    let dataset = read_dataset(input).context("read input dataset")?;
    debug!(
        columns = dataset.columns.len(),
        rows = dataset.rows.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Bind every logical field to a column name.
pub fn resolve(dataset: &Dataset, cutoff: f64) -> ResolutionMap {
    let span = info_span!("resolve", cutoff);
    let _guard = span.enter();
    let engine = ResolverEngine::new(&dataset.columns, ResolverConfig { cutoff });
    let resolution = engine.resolve_all();
    for entry in resolution.iter() {
        if entry.matched {
            debug!(
                field = %entry.field,
                column = %entry.column,
                score = entry.score,
                "resolved by fuzzy match"
            );
        } else {
            warn!(
                field = %entry.field,
                column = %entry.column,
                best_score = entry.score,
                "no header cleared the cutoff; using fallback column"
            );
        }
    }
    resolution
}

/// Filter, order, and persist the report.
pub fn report(
    dataset: &Dataset,
    resolution: &ResolutionMap,
    min_rating: f64,
    output: &Path,
) -> Result<ReportSummary> {
    let span = info_span!("report", path = %output.display());
    let _guard = span.enter();
    let summary = write_report(
        dataset,
        resolution,
        ReportOptions { min_rating },
        output,
    )
    .context("write report")?;
    Ok(summary)
}
