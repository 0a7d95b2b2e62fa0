use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use picks_cli::pipeline;
use picks_ingest::build_column_hints;
use picks_report::{ReportOptions, filter_rows};

use crate::cli::{ResolveArgs, RunArgs};
use crate::summary::{apply_table_style, resolution_rows};
use crate::types::RunResult;

pub fn run_report(args: &RunArgs) -> Result<RunResult> {
    let dataset = pipeline::ingest(&args.input)?;
    let hints = build_column_hints(&dataset);
    let resolution = pipeline::resolve(&dataset, args.cutoff);

    let (summary, output) = if args.dry_run {
        let filtered = filter_rows(
            &dataset,
            &resolution,
            ReportOptions {
                min_rating: args.min_rating,
            },
        )
        .context("filter rows")?;
        info!(matched = filtered.summary.matched, "dry run, no report written");
        (filtered.summary, None)
    } else {
        let summary = pipeline::report(&dataset, &resolution, args.min_rating, &args.output)?;
        (summary, Some(args.output.clone()))
    };

    Ok(RunResult {
        input: args.input.clone(),
        output,
        resolution,
        hints,
        summary,
        min_rating: args.min_rating,
    })
}

pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let dataset = pipeline::ingest(&args.input)?;
    let hints = build_column_hints(&dataset);
    let resolution = pipeline::resolve(&dataset, args.cutoff);

    if args.json {
        let json =
            serde_json::to_string_pretty(&resolution).context("serialize resolution map")?;
        println!("{json}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Field", "Query", "Column", "Score", "Source", "Numeric"]);
    apply_table_style(&mut table);
    for row in resolution_rows(&resolution, &hints) {
        table.add_row(row);
    }
    println!("{table}");
    Ok(())
}
