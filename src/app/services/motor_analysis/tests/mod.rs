//! Test helpers shared across motor-analysis test modules


use crate::app::models::{MotorSpec, PerformanceRow, PerformanceTable};

/// The worked reference spec: 720 Kv, 0.05 ohm, 22.2 V, 1.5 A no-load,
/// 65 A limit
pub fn reference_spec() -> MotorSpec {
    MotorSpec {
        kv_rpm_per_volt: 720.0,
        resistance_ohm: 0.05,
        voltage: 22.2,
        no_load_current: 1.5,
        max_current: Some(65.0),
    }
}

/// One static operating point at 6000 RPM: 0.30 N-m, 188 W shaft power
pub fn reference_row() -> PerformanceRow {
    PerformanceRow::from_source_units(6000, 0.0, 5.9, 0.30, 188.0, 0.0)
}

/// A small single-block table around the reference point
pub fn reference_table() -> PerformanceTable {
    PerformanceTable::new(vec![
        reference_row(),
        PerformanceRow::from_source_units(6000, 13.6, 5.1, 0.28, 175.0, 0.42),
        PerformanceRow::from_source_units(6000, 27.2, 4.0, 0.24, 150.0, 0.55),
    ])
}
