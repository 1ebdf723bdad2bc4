//! Parser for manufacturer propeller performance reports
//!
//! This module recovers typed performance rows from the semi-structured
//! table layout APC ships in its `.dat` reports and the PDF renderings of
//! the same reports. Both encodings linearize to the same line sequence, so
//! one scanner serves both; only the byte-to-line step differs.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Orchestration, file reading, and input-kind detection
//! - [`scanner`] - Line-oriented state machine recovering RPM blocks
//! - [`field_parsers`] - Numeric field parsing for data rows
//! - [`pdf_text`] - PDF text linearization behind the `pdf-extract` crate
//! - [`stats`] - Parse diagnostics and outcome structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use prop_analyzer::app::services::report_parser::ReportParser;
//!
//! # fn example() -> prop_analyzer::Result<()> {
//! let parser = ReportParser::new();
//! let outcome = parser.parse_path(std::path::Path::new("data/apc_17x8.dat"))?;
//!
//! println!(
//!     "Parsed {} rows across {} RPM blocks",
//!     outcome.stats.rows_parsed,
//!     outcome.table.rpm_blocks().len()
//! );
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod parser;
pub mod pdf_text;
pub mod scanner;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{DocumentKind, ReportParser};
pub use scanner::LineScanner;
pub use stats::{ParseOutcome, ParseStats};
