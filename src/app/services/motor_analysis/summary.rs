//! Summary figures for a selected RPM block

use serde::{Deserialize, Serialize};

use crate::app::models::AnalyzedTable;

/// Headline figures over the feasible rows of one RPM block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSummary {
    /// The summarized RPM set point
    pub rpm: u32,

    /// Highest shaft-to-electrical efficiency among feasible rows
    pub peak_motor_efficiency: f64,

    /// Largest thrust among feasible rows (N)
    pub max_thrust_n: f64,

    /// Largest current draw among feasible rows (A)
    pub max_current_a: f64,
}

impl BlockSummary {
    /// Summarize one RPM block; `None` when the block has no feasible row
    pub fn for_block(table: &AnalyzedTable, rpm: u32) -> Option<Self> {
        let feasible: Vec<_> = table
            .block(rpm)
            .into_iter()
            .filter(|row| row.feasible)
            .collect();

        if feasible.is_empty() {
            return None;
        }

        // f64::max skips NaN efficiencies from non-positive electrical power
        let peak_motor_efficiency = feasible
            .iter()
            .map(|row| row.motor_efficiency)
            .fold(f64::NEG_INFINITY, f64::max);
        let max_thrust_n = feasible
            .iter()
            .map(|row| row.row.thrust_n)
            .fold(f64::NEG_INFINITY, f64::max);
        let max_current_a = feasible
            .iter()
            .map(|row| row.motor_current_a)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            rpm,
            peak_motor_efficiency,
            max_thrust_n,
            max_current_a,
        })
    }
}
