//! Text normalization for similarity comparison.

/// Normalizes text for comparison by lowercasing and replacing separators
/// with spaces.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
