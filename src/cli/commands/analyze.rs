//! Analyze command implementation
//!
//! Runs the full pipeline: parse the report, derive motor operating points,
//! and render one selected RPM block with its summary figures.

use tracing::{debug, info, warn};

use super::shared::{feasibility_mark, format_efficiency, setup_logging};
use crate::app::models::{AnalyzedTable, MotorSpec};
use crate::app::services::motor_analysis::{BlockSummary, compute_motor_performance};
use crate::app::services::report_parser::ReportParser;
use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::config;
use crate::{Error, Result};

/// Analyze command runner
///
/// 1. Set up logging and resolve the motor spec
/// 2. Parse the report document
/// 3. Derive motor quantities for every operating point
/// 4. Render the selected RPM block
pub fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let spec = config::resolve_motor_spec(args.motor_file.as_deref(), &args.overrides())?;
    debug!("Resolved motor spec: {:?}", spec);

    let input = args.resolve_input();
    let parser = ReportParser::new();
    let outcome = parser.parse_path(&input)?;

    if outcome.table.is_empty() {
        for error in &outcome.stats.errors {
            warn!("{}", error);
        }
        println!("No datapoints found in {}", input.display());
        return Ok(());
    }

    info!(
        "Loaded {} with {} RPM blocks",
        input.display(),
        outcome.table.rpm_blocks().len()
    );

    let analyzed = compute_motor_performance(&outcome.table, &spec)?;
    let rpm = select_rpm(&analyzed, args.rpm)?;
    let summary = BlockSummary::for_block(&analyzed, rpm);

    match args.output_format {
        OutputFormat::Human => render_human(&analyzed, rpm, summary.as_ref(), &spec),
        OutputFormat::Json => render_json(&analyzed, rpm, summary.as_ref())?,
        OutputFormat::Csv => render_csv(&analyzed, rpm),
    }

    Ok(())
}

/// Pick the RPM block to display, defaulting to the highest set point
fn select_rpm(analyzed: &AnalyzedTable, requested: Option<u32>) -> Result<u32> {
    let blocks = analyzed.rpm_blocks();

    match requested {
        Some(rpm) if blocks.contains(&rpm) => Ok(rpm),
        Some(rpm) => Err(Error::data_validation(format!(
            "RPM block {} not present in report (available: {})",
            rpm,
            blocks
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
        None => blocks
            .iter()
            .copied()
            .max()
            .ok_or_else(|| Error::data_validation("report has no RPM blocks".to_string())),
    }
}

/// Render the human-readable operating-point table and summary
fn render_human(analyzed: &AnalyzedTable, rpm: u32, summary: Option<&BlockSummary>, spec: &MotorSpec) {
    println!("\nPropulsion analysis at {} RPM", rpm);
    println!("{}", "━".repeat(96));
    println!(
        "{:>8}  {:>9}  {:>11}  {:>10}  {:>10}  {:>9}  {:>9}  {:>8}  {:>8}",
        "mph", "thrust N", "thrust lbf", "current A", "voltage V", "power W", "motor eff", "prop eff", "feasible"
    );

    for row in analyzed.block(rpm) {
        println!(
            "{:>8.1}  {:>9.2}  {:>11.2}  {:>10.2}  {:>10.2}  {:>9.1}  {:>9}  {:>8}  {:>8}",
            row.row.airspeed_mph,
            row.row.thrust_n,
            row.row.thrust_lbf,
            row.motor_current_a,
            row.motor_voltage_v,
            row.motor_power_w,
            format_efficiency(row.motor_efficiency),
            format_efficiency(row.row.prop_efficiency),
            feasibility_mark(row.feasible),
        );
    }

    println!();
    match summary {
        Some(summary) => {
            println!("📊 Feasible envelope:");
            println!(
                "   • Peak motor efficiency: {}",
                format_efficiency(summary.peak_motor_efficiency)
            );
            println!("   • Max thrust: {:.1} N", summary.max_thrust_n);
            println!("   • Max current draw: {:.1} A", summary.max_current_a);
        }
        None => {
            println!("⚠️  No feasible operating points with this motor spec");
        }
    }

    match spec.max_current {
        Some(limit) => println!(
            "\nMotor: {} Kv, {} ohm, {} V supply, {} A limit",
            spec.kv_rpm_per_volt, spec.resistance_ohm, spec.voltage, limit
        ),
        None => println!(
            "\nMotor: {} Kv, {} ohm, {} V supply, no current limit",
            spec.kv_rpm_per_volt, spec.resistance_ohm, spec.voltage
        ),
    }
}

/// Render the selected block as JSON for scripting
fn render_json(analyzed: &AnalyzedTable, rpm: u32, summary: Option<&BlockSummary>) -> Result<()> {
    let rows: Vec<_> = analyzed.block(rpm);

    let report = serde_json::json!({
        "rpm": rpm,
        "rows": rows,
        "summary": summary,
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Render the selected block as CSV for data analysis
fn render_csv(analyzed: &AnalyzedTable, rpm: u32) {
    println!(
        "rpm,airspeed_mph,thrust_n,thrust_lbf,torque_nm,power_w,prop_efficiency,motor_current_a,motor_voltage_v,motor_power_w,motor_efficiency,feasible,voltage_headroom_v"
    );

    for row in analyzed.block(rpm) {
        println!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{}",
            row.row.rpm,
            row.row.airspeed_mph,
            row.row.thrust_n,
            row.row.thrust_lbf,
            row.row.torque_nm,
            row.row.power_w,
            row.row.prop_efficiency,
            row.motor_current_a,
            row.motor_voltage_v,
            row.motor_power_w,
            row.motor_efficiency,
            row.feasible,
            row.voltage_headroom_v,
        );
    }
}
