use std::collections::BTreeMap;
use std::path::PathBuf;

use picks_map::ResolutionMap;
use picks_model::ColumnHint;
use picks_report::ReportSummary;

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// Written report path; `None` on dry runs.
    pub output: Option<PathBuf>,
    pub resolution: ResolutionMap,
    pub hints: BTreeMap<String, ColumnHint>,
    pub summary: ReportSummary,
    pub min_rating: f64,
}
