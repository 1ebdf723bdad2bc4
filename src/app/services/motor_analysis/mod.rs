//! Motor electrical analysis over parsed performance tables
//!
//! Combines a performance table with a brushless-motor electrical spec to
//! derive current draw, required terminal voltage, electrical power,
//! efficiency, and feasibility for every tabulated operating point.
//!
//! ## Architecture
//!
//! - [`analyzer`] - The closed-form per-row transform
//! - [`summary`] - Per-block summary figures over feasible rows

pub mod analyzer;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use analyzer::compute_motor_performance;
pub use summary::BlockSummary;
