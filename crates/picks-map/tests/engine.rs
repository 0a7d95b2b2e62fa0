use picks_map::{ResolverConfig, ResolverEngine};
use picks_model::LogicalField;

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn imdb_rating_header_resolves_for_rating_query() {
    // Ingest lowercases headers, but resolution itself is case-insensitive.
    let engine = ResolverEngine::new(
        &columns(&["title", "IMDB_Rating", "genres"]),
        ResolverConfig::default(),
    );
    let resolution = engine.resolve(LogicalField::Rating);
    assert!(resolution.matched, "score was {}", resolution.score);
    assert_eq!(resolution.column, "IMDB_Rating");
    assert!(resolution.score >= 0.6);
}

#[test]
fn unrelated_columns_fall_back_to_documented_defaults() {
    let engine = ResolverEngine::new(
        &columns(&["zzz", "qqq", "xxx"]),
        ResolverConfig::default(),
    );
    for field in LogicalField::ALL {
        let resolution = engine.resolve(field);
        assert!(!resolution.matched);
        assert_eq!(resolution.column, field.fallback_column());
        assert!(resolution.score < 0.6);
    }
}

#[test]
fn resolution_is_deterministic() {
    let cols = columns(&["release year", "releaseyr", "year of release"]);
    let engine = ResolverEngine::new(&cols, ResolverConfig::default());
    let first = engine.resolve(LogicalField::ReleaseYear);
    for _ in 0..10 {
        let again = engine.resolve(LogicalField::ReleaseYear);
        assert_eq!(first.column, again.column);
        assert_eq!(first.score, again.score);
    }
}

#[test]
fn cutoff_is_configurable() {
    let cols = columns(&["titel"]);
    let strict = ResolverEngine::new(&cols, ResolverConfig { cutoff: 0.99 });
    assert!(!strict.resolve(LogicalField::Title).matched);

    let relaxed = ResolverEngine::new(&cols, ResolverConfig { cutoff: 0.6 });
    assert!(relaxed.resolve(LogicalField::Title).matched);
}

#[test]
fn map_iterates_in_report_order() {
    let engine = ResolverEngine::new(&columns(&["title"]), ResolverConfig::default());
    let map = engine.resolve_all();
    let fields: Vec<LogicalField> = map.iter().map(|r| r.field).collect();
    assert_eq!(fields, LogicalField::ALL.to_vec());
}
