//! Data models for propeller performance analysis
//!
//! This module contains the typed records for manufacturer performance data
//! and the brushless-motor electrical specification. Tables are explicit
//! ordered sequences of rows grouped by RPM set point; there is no dynamic
//! column lookup.

use crate::constants::{LBF_TO_N, motor_defaults};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Performance Row and Table
// =============================================================================

/// One measured operating point from a manufacturer performance report
///
/// Rows carry thrust in both newtons and pound-force; the newton value is
/// always derived from the pound-force source column by the fixed conversion
/// 1 lbf = 4.44822 N.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRow {
    /// Propeller rotational speed, identifies the RPM block
    pub rpm: u32,

    /// Forward airspeed set point (mph)
    pub airspeed_mph: f64,

    /// Thrust (N), derived from `thrust_lbf`
    pub thrust_n: f64,

    /// Thrust (lbf), as tabulated in the source report
    pub thrust_lbf: f64,

    /// Propeller shaft torque (N-m)
    pub torque_nm: f64,

    /// Mechanical shaft power (W), as tabulated in the source report
    pub power_w: f64,

    /// Propeller efficiency column, preserved for the dual-efficiency display
    pub prop_efficiency: f64,
}

impl PerformanceRow {
    /// Build a row from source-unit fields, normalizing thrust to both units
    pub fn from_source_units(
        rpm: u32,
        airspeed_mph: f64,
        thrust_lbf: f64,
        torque_nm: f64,
        power_w: f64,
        prop_efficiency: f64,
    ) -> Self {
        Self {
            rpm,
            airspeed_mph,
            thrust_n: thrust_lbf * LBF_TO_N,
            thrust_lbf,
            torque_nm,
            power_w,
            prop_efficiency,
        }
    }
}

/// Ordered performance rows grouped into RPM blocks
///
/// A zero-row table is the explicit "no parseable data" state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceTable {
    rows: Vec<PerformanceRow>,
}

impl PerformanceTable {
    /// Create a table from rows already in document order
    pub fn new(rows: Vec<PerformanceRow>) -> Self {
        Self { rows }
    }

    /// Check whether the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows across all RPM blocks
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// All rows in document order
    pub fn rows(&self) -> &[PerformanceRow] {
        &self.rows
    }

    /// Distinct RPM values in document order
    pub fn rpm_blocks(&self) -> Vec<u32> {
        distinct_rpms(self.rows.iter().map(|row| row.rpm))
    }

    /// Rows belonging to one RPM block, in document order
    pub fn block(&self, rpm: u32) -> Vec<&PerformanceRow> {
        self.rows.iter().filter(|row| row.rpm == rpm).collect()
    }
}

// =============================================================================
// Motor Specification
// =============================================================================

/// Electrical parameters describing a brushless DC motor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorSpec {
    /// Motor velocity constant (RPM per volt)
    pub kv_rpm_per_volt: f64,

    /// Winding resistance (ohm)
    pub resistance_ohm: f64,

    /// Supply voltage ceiling (V)
    pub voltage: f64,

    /// No-load current (A)
    #[serde(default)]
    pub no_load_current: f64,

    /// Maximum continuous current (A); `None` means no limit is enforced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_current: Option<f64>,
}

impl Default for MotorSpec {
    fn default() -> Self {
        Self {
            kv_rpm_per_volt: motor_defaults::KV_RPM_PER_VOLT,
            resistance_ohm: motor_defaults::RESISTANCE_OHM,
            voltage: motor_defaults::VOLTAGE,
            no_load_current: motor_defaults::NO_LOAD_CURRENT,
            max_current: Some(motor_defaults::MAX_CURRENT),
        }
    }
}

impl MotorSpec {
    /// Torque constant Kt = 60 / (2*pi*Kv), in N-m per ampere
    ///
    /// Fails with [`Error::InvalidSpec`] when `kv_rpm_per_volt` is not
    /// positive; the value is never silently coerced.
    pub fn torque_constant(&self) -> Result<f64> {
        if self.kv_rpm_per_volt <= 0.0 {
            return Err(Error::invalid_spec(format!(
                "kv_rpm_per_volt must be positive, got {}",
                self.kv_rpm_per_volt
            )));
        }
        Ok(60.0 / (2.0 * std::f64::consts::PI * self.kv_rpm_per_volt))
    }

    /// Validate field ranges for values arriving from user input
    pub fn validate(&self) -> Result<()> {
        if self.kv_rpm_per_volt <= 0.0 {
            return Err(Error::invalid_spec(format!(
                "kv_rpm_per_volt must be positive, got {}",
                self.kv_rpm_per_volt
            )));
        }

        if self.resistance_ohm < 0.0 {
            return Err(Error::invalid_spec(format!(
                "resistance_ohm must be non-negative, got {}",
                self.resistance_ohm
            )));
        }

        if self.voltage <= 0.0 {
            return Err(Error::invalid_spec(format!(
                "voltage must be positive, got {}",
                self.voltage
            )));
        }

        if self.no_load_current < 0.0 {
            return Err(Error::invalid_spec(format!(
                "no_load_current must be non-negative, got {}",
                self.no_load_current
            )));
        }

        if let Some(limit) = self.max_current {
            if limit <= 0.0 {
                return Err(Error::invalid_spec(format!(
                    "max_current must be positive when set, got {}",
                    limit
                )));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Augmented Row and Analyzed Table
// =============================================================================

/// A performance row augmented with derived motor-side quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentedRow {
    /// The source operating point
    #[serde(flatten)]
    pub row: PerformanceRow,

    /// Motor current draw (A)
    pub motor_current_a: f64,

    /// Required motor terminal voltage (V)
    pub motor_voltage_v: f64,

    /// Electrical input power (W)
    pub motor_power_w: f64,

    /// Shaft-to-electrical efficiency; NaN when electrical power is not positive
    pub motor_efficiency: f64,

    /// Whether the operating point is achievable with the given supply
    pub feasible: bool,

    /// Supply voltage minus required voltage; negative means infeasible on
    /// voltage grounds alone
    pub voltage_headroom_v: f64,
}

/// Augmented rows in the same order as the source table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedTable {
    rows: Vec<AugmentedRow>,
}

impl AnalyzedTable {
    /// Create a table from augmented rows already in document order
    pub fn new(rows: Vec<AugmentedRow>) -> Self {
        Self { rows }
    }

    /// Check whether the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows across all RPM blocks
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// All rows in document order
    pub fn rows(&self) -> &[AugmentedRow] {
        &self.rows
    }

    /// Distinct RPM values in document order
    pub fn rpm_blocks(&self) -> Vec<u32> {
        distinct_rpms(self.rows.iter().map(|row| row.row.rpm))
    }

    /// Rows belonging to one RPM block, in document order
    pub fn block(&self, rpm: u32) -> Vec<&AugmentedRow> {
        self.rows.iter().filter(|row| row.row.rpm == rpm).collect()
    }
}

fn distinct_rpms(rpms: impl Iterator<Item = u32>) -> Vec<u32> {
    let mut seen = Vec::new();
    for rpm in rpms {
        if !seen.contains(&rpm) {
            seen.push(rpm);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_row(rpm: u32, airspeed_mph: f64) -> PerformanceRow {
        PerformanceRow::from_source_units(rpm, airspeed_mph, 5.9, 0.30, 188.0, 0.55)
    }

    mod row_tests {
        use super::*;

        #[test]
        fn test_thrust_normalization() {
            let row = create_test_row(6000, 0.0);
            assert_eq!(row.thrust_lbf, 5.9);
            assert!((row.thrust_n - 5.9 * LBF_TO_N).abs() < 1e-12);
        }
    }

    mod table_tests {
        use super::*;

        #[test]
        fn test_rpm_blocks_document_order() {
            let table = PerformanceTable::new(vec![
                create_test_row(6000, 0.0),
                create_test_row(6000, 10.0),
                create_test_row(1000, 0.0),
                create_test_row(6000, 20.0),
            ]);

            // First appearance wins; later repeats do not reorder
            assert_eq!(table.rpm_blocks(), vec![6000, 1000]);
        }

        #[test]
        fn test_block_selects_matching_rows() {
            let table = PerformanceTable::new(vec![
                create_test_row(1000, 0.0),
                create_test_row(6000, 0.0),
                create_test_row(6000, 10.0),
            ]);

            let block = table.block(6000);
            assert_eq!(block.len(), 2);
            assert_eq!(block[0].airspeed_mph, 0.0);
            assert_eq!(block[1].airspeed_mph, 10.0);

            assert!(table.block(3000).is_empty());
        }

        #[test]
        fn test_empty_table_is_valid() {
            let table = PerformanceTable::default();
            assert!(table.is_empty());
            assert_eq!(table.len(), 0);
            assert!(table.rpm_blocks().is_empty());
        }
    }

    mod motor_spec_tests {
        use super::*;

        #[test]
        fn test_torque_constant_value() {
            let spec = MotorSpec::default();
            let kt = spec.torque_constant().unwrap();
            // 60 / (2*pi*720)
            assert!((kt - 0.013262912).abs() < 1e-8);
        }

        #[test]
        fn test_torque_constant_rejects_non_positive_kv() {
            let mut spec = MotorSpec::default();

            spec.kv_rpm_per_volt = 0.0;
            assert!(matches!(
                spec.torque_constant(),
                Err(Error::InvalidSpec { .. })
            ));

            spec.kv_rpm_per_volt = -100.0;
            assert!(matches!(
                spec.torque_constant(),
                Err(Error::InvalidSpec { .. })
            ));
        }

        #[test]
        fn test_validate_field_ranges() {
            let mut spec = MotorSpec::default();
            assert!(spec.validate().is_ok());

            spec.resistance_ohm = -0.01;
            assert!(spec.validate().is_err());

            spec.resistance_ohm = 0.0;
            assert!(spec.validate().is_ok());

            spec.voltage = 0.0;
            assert!(spec.validate().is_err());

            spec.voltage = 22.2;
            spec.no_load_current = -1.0;
            assert!(spec.validate().is_err());

            spec.no_load_current = 0.0;
            spec.max_current = Some(0.0);
            assert!(spec.validate().is_err());

            spec.max_current = None;
            assert!(spec.validate().is_ok());
        }

        #[test]
        fn test_spec_deserializes_with_defaults() {
            let spec: MotorSpec = serde_json::from_str(
                r#"{"kv_rpm_per_volt": 900.0, "resistance_ohm": 0.04, "voltage": 14.8}"#,
            )
            .unwrap();

            assert_eq!(spec.kv_rpm_per_volt, 900.0);
            assert_eq!(spec.no_load_current, 0.0);
            assert_eq!(spec.max_current, None);
        }
    }
}
