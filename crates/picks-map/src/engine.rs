//! Field-to-column resolution engine.
//!
//! Scores every dataset column against a logical field's query key with
//! Jaro-Winkler similarity on normalized names. The best candidate wins if
//! its score clears the cutoff; otherwise the field's fallback column name
//! is used. Tie-break is deterministic: candidates are ranked by descending
//! score with a stable sort, so among equal scores the column appearing
//! first in the dataset's column order wins.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rapidfuzz::distance::jaro_winkler;
use serde::{Deserialize, Serialize};

use picks_model::LogicalField;

use crate::utils::normalize_text;

/// Default similarity cutoff below which a candidate is rejected.
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Tunable knobs for resolution.
#[derive(Debug, Clone, Copy)]
pub struct ResolverConfig {
    /// Minimum similarity (0.0 to 1.0) for a fuzzy match to be accepted.
    pub cutoff: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

/// The outcome of resolving one logical field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    /// The logical field being resolved.
    pub field: LogicalField,
    /// The column name the field resolved to (match or fallback).
    pub column: String,
    /// Index of the matched column in dataset order; `None` for fallbacks.
    pub column_index: Option<usize>,
    /// Similarity score of the best candidate seen, even when rejected.
    pub score: f64,
    /// True if `column` is a fuzzy match; false if it is the fallback.
    pub matched: bool,
}

/// A total binding from every logical field to a column name.
///
/// Totality is an invariant: every field maps to some name even when that
/// column does not exist in the dataset. Existence is checked separately by
/// the reporting stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolutionMap {
    resolutions: BTreeMap<LogicalField, Resolution>,
}

impl ResolutionMap {
    /// The column name a field resolved to.
    #[must_use]
    pub fn column(&self, field: LogicalField) -> &str {
        &self.resolutions[&field].column
    }

    /// Full resolution details for a field.
    #[must_use]
    pub fn get(&self, field: LogicalField) -> &Resolution {
        &self.resolutions[&field]
    }

    /// Resolutions in report block order.
    pub fn iter(&self) -> impl Iterator<Item = &Resolution> {
        LogicalField::ALL.iter().map(|field| &self.resolutions[field])
    }
}

/// Engine for resolving logical fields against a fixed set of column names.
///
/// Pure: for a fixed column list and config, every call produces the same
/// result.
#[derive(Debug, Clone)]
pub struct ResolverEngine {
    columns: Vec<String>,
    normalized: Vec<String>,
    config: ResolverConfig,
}

impl ResolverEngine {
    /// Create an engine over the dataset's column names, in dataset order.
    #[must_use]
    pub fn new(columns: &[String], config: ResolverConfig) -> Self {
        let normalized = columns.iter().map(|c| normalize_text(c)).collect();
        Self {
            columns: columns.to_vec(),
            normalized,
            config,
        }
    }

    /// Resolve a single logical field.
    #[must_use]
    pub fn resolve(&self, field: LogicalField) -> Resolution {
        let query = normalize_text(field.query_key());
        let mut ranked: Vec<(usize, f64)> = self
            .normalized
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                (
                    idx,
                    jaro_winkler::similarity(name.chars(), query.chars()),
                )
            })
            .collect();
        // Stable: equal scores keep dataset column order.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let best = ranked.first();
        let best_score = best.map_or(0.0, |(_, score)| *score);
        match best {
            Some(&(idx, score)) if score >= self.config.cutoff => Resolution {
                field,
                column: self.columns[idx].clone(),
                column_index: Some(idx),
                score,
                matched: true,
            },
            _ => Resolution {
                field,
                column: field.fallback_column().to_string(),
                column_index: None,
                score: best_score,
                matched: false,
            },
        }
    }

    /// Resolve all five logical fields into a total [`ResolutionMap`].
    #[must_use]
    pub fn resolve_all(&self) -> ResolutionMap {
        let resolutions = LogicalField::ALL
            .iter()
            .map(|&field| (field, self.resolve(field)))
            .collect();
        ResolutionMap { resolutions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn exact_match_scores_one() {
        let engine = ResolverEngine::new(
            &columns(&["title", "genre"]),
            ResolverConfig::default(),
        );
        let resolution = engine.resolve(LogicalField::Title);
        assert!(resolution.matched);
        assert_eq!(resolution.column, "title");
        assert!((resolution.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn resolution_map_is_total() {
        let engine = ResolverEngine::new(&columns(&["unrelated"]), ResolverConfig::default());
        let map = engine.resolve_all();
        for field in LogicalField::ALL {
            assert!(!map.column(field).is_empty());
        }
    }

    #[test]
    fn tie_break_prefers_first_column_in_dataset_order() {
        // Identical headers score identically; the first must win.
        let engine = ResolverEngine::new(
            &columns(&["genre", "genre"]),
            ResolverConfig::default(),
        );
        let resolution = engine.resolve(LogicalField::Genre);
        assert!(resolution.matched);
        assert_eq!(resolution.column_index, Some(0));
    }

    #[test]
    fn resolution_map_serializes_to_json() {
        let engine = ResolverEngine::new(&columns(&["title"]), ResolverConfig::default());
        let json = serde_json::to_value(engine.resolve_all()).unwrap();
        assert!(json.get("title").is_some());
        assert!(json.get("rating").is_some());
    }
}
