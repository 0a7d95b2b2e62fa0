//! The five logical fields the pipeline needs from any catalog dataset.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A canonical semantic column, independent of how the source header spells it.
///
/// Each field carries three fixed strings:
/// - a *query key* used for fuzzy matching against dataset headers,
/// - a *fallback column* used when no header clears the similarity cutoff,
/// - a *report label* used verbatim in the output report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalField {
    Title,
    Genre,
    ReleaseYear,
    Rating,
    AvailableRegions,
}

impl LogicalField {
    /// All fields, in report block order.
    pub const ALL: [LogicalField; 5] = [
        LogicalField::Title,
        LogicalField::Genre,
        LogicalField::ReleaseYear,
        LogicalField::Rating,
        LogicalField::AvailableRegions,
    ];

    /// The name used when fuzzy-matching this field against dataset headers.
    #[must_use]
    pub fn query_key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Genre => "genre",
            Self::ReleaseYear => "year",
            Self::Rating => "imdb_rating",
            Self::AvailableRegions => "available_regions",
        }
    }

    /// The column name assumed when no header clears the similarity cutoff.
    #[must_use]
    pub fn fallback_column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Genre => "genres",
            Self::ReleaseYear => "releaseyear",
            Self::Rating => "imdbaveragerating",
            Self::AvailableRegions => "availablecountries",
        }
    }

    /// The label written before this field's value in each report block.
    ///
    /// The downstream viewer re-parses the report by prefix-matching these
    /// exact strings, so they are part of the wire format.
    #[must_use]
    pub fn report_label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Genre => "Genre",
            Self::ReleaseYear => "Year",
            Self::Rating => "IMDb Rating",
            Self::AvailableRegions => "Available in",
        }
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Genre => "genre",
            Self::ReleaseYear => "release_year",
            Self::Rating => "rating",
            Self::AvailableRegions => "available_regions",
        };
        f.write_str(name)
    }
}
