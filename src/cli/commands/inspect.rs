//! Inspect command implementation
//!
//! Parses a report without running the motor analysis and describes what
//! was recovered: RPM blocks, row counts, and skip diagnostics.

use tracing::warn;

use super::shared::setup_logging;
use crate::Result;
use crate::app::services::report_parser::{ParseOutcome, ReportParser};
use crate::cli::args::{InspectArgs, OutputFormat};

/// Inspect command runner
pub fn run_inspect(args: InspectArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;

    let input = args.resolve_input();
    let parser = ReportParser::new();
    let outcome = parser.parse_path(&input)?;

    for error in &outcome.stats.errors {
        warn!("{}", error);
    }

    match args.output_format {
        OutputFormat::Human => render_human(&input.display().to_string(), &outcome),
        OutputFormat::Json => render_json(&outcome)?,
        OutputFormat::Csv => render_csv(&outcome),
    }

    Ok(())
}

/// Render the human-readable structure report
fn render_human(input: &str, outcome: &ParseOutcome) {
    println!("\n📄 {}", input);

    if outcome.table.is_empty() {
        println!("No parseable performance data found.");
    } else {
        println!("RPM blocks:");
        for rpm in outcome.table.rpm_blocks() {
            println!("   • {} RPM: {} rows", rpm, outcome.table.block(rpm).len());
        }
    }

    let stats = &outcome.stats;
    println!(
        "\nScan: {} lines, {} headers, {} rows parsed, {} skipped, {} orphan rows",
        stats.lines_scanned,
        stats.rpm_headers,
        stats.rows_parsed,
        stats.lines_skipped,
        stats.orphan_rows
    );

    if !stats.errors.is_empty() {
        println!("⚠️  Diagnostics:");
        for error in &stats.errors {
            println!("   • {}", error);
        }
    }
}

/// Render the structure report as JSON for scripting
fn render_json(outcome: &ParseOutcome) -> Result<()> {
    let blocks: Vec<_> = outcome
        .table
        .rpm_blocks()
        .into_iter()
        .map(|rpm| {
            serde_json::json!({
                "rpm": rpm,
                "rows": outcome.table.block(rpm).len(),
            })
        })
        .collect();

    let report = serde_json::json!({
        "blocks": blocks,
        "stats": outcome.stats,
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Render block counts as CSV for data analysis
fn render_csv(outcome: &ParseOutcome) {
    println!("rpm,rows");
    for rpm in outcome.table.rpm_blocks() {
        println!("{},{}", rpm, outcome.table.block(rpm).len());
    }
}
