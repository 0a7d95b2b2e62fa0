use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};

use picks_map::ResolutionMap;
use picks_model::ColumnHint;

use crate::types::RunResult;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// One table row per logical field: field, query, column, score, source,
/// numeric ratio of the resolved column.
pub fn resolution_rows(
    resolution: &ResolutionMap,
    hints: &BTreeMap<String, ColumnHint>,
) -> Vec<Vec<Cell>> {
    resolution
        .iter()
        .map(|entry| {
            let source = if entry.matched {
                Cell::new("fuzzy").fg(Color::Green)
            } else {
                Cell::new("fallback").fg(Color::Yellow)
            };
            let numeric = hints
                .get(&entry.column)
                .map_or_else(|| "-".to_string(), |h| format!("{:.0}%", h.numeric_ratio * 100.0));
            vec![
                Cell::new(entry.field),
                Cell::new(entry.field.query_key()),
                Cell::new(&entry.column),
                Cell::new(format!("{:.2}", entry.score)).set_alignment(CellAlignment::Right),
                source,
                Cell::new(numeric).set_alignment(CellAlignment::Right),
            ]
        })
        .collect()
}

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Report: {}", path.display()),
        None => println!("Report: (dry run, not written)"),
    }

    let mut table = Table::new();
    table.set_header(vec!["Field", "Query", "Column", "Score", "Source", "Numeric"]);
    apply_table_style(&mut table);
    for row in resolution_rows(&result.resolution, &result.hints) {
        table.add_row(row);
    }
    println!("{table}");

    println!(
        "{} rows read, {} skipped (non-numeric rating), {} above {}",
        result.summary.total_rows,
        result.summary.skipped_non_numeric,
        result.summary.matched,
        result.min_rating,
    );
    if result.summary.matched == 0 {
        println!("No titles scored above {}; the report is empty.", result.min_rating);
    }
}
