//! Parse diagnostics and outcome structures
//!
//! Malformed content never fails a parse; these types carry what the
//! scanner recovered and what it had to skip.

use crate::app::models::PerformanceTable;

/// Parse outcome: the recovered table plus scan diagnostics
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Rows recovered from the document, grouped into RPM blocks
    pub table: PerformanceTable,

    /// Scan statistics and collected diagnostics
    pub stats: ParseStats,
}

/// Line-scan statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Lines consumed by the scanner
    pub lines_scanned: usize,

    /// RPM block headers recognized
    pub rpm_headers: usize,

    /// Data rows bound to an RPM block
    pub rows_parsed: usize,

    /// Data rows seen before any RPM header
    pub orphan_rows: usize,

    /// Lines matching neither pattern (blanks, labels, footers)
    pub lines_skipped: usize,

    /// Diagnostics collected along the way
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of scanned lines that produced rows, as a percentage
    pub fn yield_rate(&self) -> f64 {
        if self.lines_scanned == 0 {
            0.0
        } else {
            (self.rows_parsed as f64 / self.lines_scanned as f64) * 100.0
        }
    }
}
