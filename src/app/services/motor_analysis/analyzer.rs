//! Closed-form electrical transform from shaft load to motor terminals
//!
//! Pure value computation: no I/O, no mutation of the input table, and
//! identical inputs always produce identical outputs.

use tracing::debug;

use crate::Result;
use crate::app::models::{AnalyzedTable, AugmentedRow, MotorSpec, PerformanceRow, PerformanceTable};
use crate::constants::FEASIBILITY_EPSILON;

/// Derive motor-side quantities for every row of `table`
///
/// An empty input yields an empty output before the torque constant is
/// requested, so a degenerate spec only fails once there are rows to
/// process. A non-positive Kv fails fast with
/// [`crate::Error::InvalidSpec`].
pub fn compute_motor_performance(
    table: &PerformanceTable,
    spec: &MotorSpec,
) -> Result<AnalyzedTable> {
    if table.is_empty() {
        return Ok(AnalyzedTable::default());
    }

    let kt = spec.torque_constant()?;
    debug!("Torque constant: {:.6} N-m/A", kt);

    let rows = table
        .rows()
        .iter()
        .map(|row| augment_row(row, spec, kt))
        .collect();

    Ok(AnalyzedTable::new(rows))
}

fn augment_row(row: &PerformanceRow, spec: &MotorSpec, kt: f64) -> AugmentedRow {
    let motor_current_a = row.torque_nm / kt + spec.no_load_current;

    // Back-EMF term plus resistive drop
    let motor_voltage_v =
        f64::from(row.rpm) / spec.kv_rpm_per_volt + motor_current_a * spec.resistance_ohm;

    let motor_power_w = motor_voltage_v * motor_current_a;

    let motor_efficiency = if motor_power_w > 0.0 {
        row.power_w / motor_power_w
    } else {
        f64::NAN
    };

    let mut feasible = motor_voltage_v <= spec.voltage + FEASIBILITY_EPSILON;
    if let Some(limit) = spec.max_current {
        feasible = feasible && motor_current_a <= limit + FEASIBILITY_EPSILON;
    }

    AugmentedRow {
        row: row.clone(),
        motor_current_a,
        motor_voltage_v,
        motor_power_w,
        motor_efficiency,
        feasible,
        voltage_headroom_v: spec.voltage - motor_voltage_v,
    }
}
