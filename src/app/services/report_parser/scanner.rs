//! Line-oriented state machine recovering RPM blocks from report text
//!
//! Report documents announce each RPM set point with a header line and
//! follow it with whitespace-columnar numeric rows until the next header.
//! The scanner consumes lines in document order with two states:
//!
//! - `AwaitingHeader` - no RPM header seen yet; data rows are orphans
//! - `InBlock` - data rows bind to the most recent header's RPM
//!
//! Lines matching neither pattern (blanks, column labels, footer text) are
//! skipped and counted.

use regex::Regex;
use std::sync::LazyLock;

use super::field_parsers;
use super::stats::{ParseOutcome, ParseStats};
use crate::app::models::{PerformanceRow, PerformanceTable};
use crate::constants::{MIN_DATA_COLUMNS, columns};

/// Matches a block header such as `PROP RPM =     6000`
static RPM_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)PROP\s+RPM\s*=\s*(\d+)").expect("header pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    AwaitingHeader,
    InBlock { rpm: u32 },
}

/// Incremental line scanner
///
/// Feed lines in document order, then call [`LineScanner::finish`] to obtain
/// the recovered table and scan diagnostics.
#[derive(Debug)]
pub struct LineScanner {
    state: ScanState,
    rows: Vec<PerformanceRow>,
    stats: ParseStats,
}

impl Default for LineScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl LineScanner {
    /// Create a scanner with no current RPM block
    pub fn new() -> Self {
        Self {
            state: ScanState::AwaitingHeader,
            rows: Vec::new(),
            stats: ParseStats::new(),
        }
    }

    /// Consume one line, transitioning on header and data-row matches
    pub fn feed_line(&mut self, line: &str) {
        self.stats.lines_scanned += 1;

        if let Some(rpm) = match_rpm_header(line) {
            self.state = ScanState::InBlock { rpm };
            self.stats.rpm_headers += 1;
            return;
        }

        match parse_data_fields(line) {
            Some(fields) => match self.state {
                ScanState::InBlock { rpm } => {
                    self.rows.push(row_from_fields(rpm, &fields));
                    self.stats.rows_parsed += 1;
                }
                ScanState::AwaitingHeader => {
                    // No block to bind this row to
                    self.stats.orphan_rows += 1;
                }
            },
            None => self.stats.lines_skipped += 1,
        }
    }

    /// Consume a whole document in line order
    pub fn feed_text(&mut self, text: &str) {
        for line in text.lines() {
            self.feed_line(line);
        }
    }

    /// Record a diagnostic that did not originate from a scanned line
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.stats.errors.push(message.into());
    }

    /// Finish scanning and return the recovered table with diagnostics
    pub fn finish(self) -> ParseOutcome {
        ParseOutcome {
            table: PerformanceTable::new(self.rows),
            stats: self.stats,
        }
    }
}

/// Match an RPM block header and extract its integer set point
fn match_rpm_header(line: &str) -> Option<u32> {
    RPM_HEADER
        .captures(line)
        .and_then(|caps| field_parsers::parse_integer(&caps[1]))
}

/// Match a data row: at least [`MIN_DATA_COLUMNS`] fields, all numeric
///
/// A field that fails to parse cleanly invalidates the whole row.
fn parse_data_fields(line: &str) -> Option<Vec<f64>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_DATA_COLUMNS {
        return None;
    }

    fields
        .iter()
        .map(|field| field_parsers::parse_float(field))
        .collect()
}

/// Bind matched fields to a row using the fixed manufacturer column map
fn row_from_fields(rpm: u32, fields: &[f64]) -> PerformanceRow {
    PerformanceRow::from_source_units(
        rpm,
        fields[columns::AIRSPEED_MPH],
        fields[columns::THRUST_LBF],
        fields[columns::TORQUE_NM],
        fields[columns::POWER_W],
        fields[columns::PROP_EFFICIENCY],
    )
}
