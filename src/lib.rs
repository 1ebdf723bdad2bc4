//! Propulsion Analyzer Library
//!
//! A Rust library for combining APC propeller performance reports with a
//! brushless-motor electrical model.
//!
//! This library provides tools for:
//! - Parsing manufacturer performance reports (plain `.dat` text or PDF)
//!   into typed rows grouped by RPM set point
//! - Deriving motor current, terminal voltage, electrical power, efficiency,
//!   and feasibility for every tabulated operating point
//! - Summarizing the feasible envelope of a selected RPM block
//! - Row-level error containment with parse diagnostics

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod motor_analysis;
        pub mod report_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AnalyzedTable, AugmentedRow, MotorSpec, PerformanceRow, PerformanceTable};
pub use app::services::motor_analysis::{BlockSummary, compute_motor_performance};
pub use app::services::report_parser::{ParseOutcome, ParseStats, ReportParser};

/// Result type alias for the propulsion analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for propulsion analysis operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Motor spec rejected (non-positive Kv or out-of-range field)
    #[error("invalid motor spec: {message}")]
    InvalidSpec { message: String },

    /// Data validation error
    #[error("data validation error: {message}")]
    DataValidation { message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("file not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid motor spec error
    pub fn invalid_spec(message: impl Into<String>) -> Self {
        Self::InvalidSpec {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Configuration {
            message: format!("JSON parsing failed: {}", error),
        }
    }
}
