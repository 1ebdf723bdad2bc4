//! Application constants for the propulsion analyzer
//!
//! This module contains unit conversions, the manufacturer column layout,
//! default motor parameters, and file/configuration constants used
//! throughout the application.

// =============================================================================
// Unit Conversions and Tolerances
// =============================================================================

/// Newtons per pound-force
pub const LBF_TO_N: f64 = 4.44822;

/// Tolerance absorbing floating-point noise at exact-boundary operating points
pub const FEASIBILITY_EPSILON: f64 = 1e-6;

// =============================================================================
// Manufacturer Report Layout
// =============================================================================

/// Minimum whitespace-separated numeric fields for a line to qualify as a
/// data row
pub const MIN_DATA_COLUMNS: usize = 10;

/// Column positions in the manufacturer's performance table
///
/// Fixed for the APC PER3 report layout. Thrust is sourced in pound-force
/// and normalized to newtons at parse time; torque and shaft power come
/// from the metric columns.
pub mod columns {
    /// Forward airspeed set point (mph)
    pub const AIRSPEED_MPH: usize = 0;

    /// Propeller efficiency (dimensionless)
    pub const PROP_EFFICIENCY: usize = 2;

    /// Thrust (lbf)
    pub const THRUST_LBF: usize = 7;

    /// Mechanical shaft power (W)
    pub const POWER_W: usize = 8;

    /// Shaft torque (N-m)
    pub const TORQUE_NM: usize = 9;
}

// =============================================================================
// Default Motor Parameters
// =============================================================================

/// Default motor electrical parameters (a 720 Kv outrunner on a 6S pack)
pub mod motor_defaults {
    /// Motor velocity constant (RPM per volt)
    pub const KV_RPM_PER_VOLT: f64 = 720.0;

    /// Winding resistance (ohm)
    pub const RESISTANCE_OHM: f64 = 0.05;

    /// Supply voltage ceiling (V)
    pub const VOLTAGE: f64 = 22.2;

    /// No-load current (A)
    pub const NO_LOAD_CURRENT: f64 = 1.5;

    /// Maximum continuous current (A)
    pub const MAX_CURRENT: f64 = 60.0;
}

// =============================================================================
// Files and Configuration
// =============================================================================

/// Bundled sample report (APC 17x8), used when no input file is given
pub const DEFAULT_SAMPLE_PATH: &str = "data/apc_17x8.dat";

/// PDF file signature for content sniffing
pub const PDF_MAGIC: &[u8] = b"%PDF-";

/// Directory name under the user config dir for analyzer settings
pub const CONFIG_DIR_NAME: &str = "prop-analyzer";

/// File name of the optional user motor spec
pub const MOTOR_SPEC_FILENAME: &str = "motor.json";
