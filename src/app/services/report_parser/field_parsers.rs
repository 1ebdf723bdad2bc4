//! Numeric field parsing for report data rows
//!
//! Data rows are recognized structurally, so these helpers return `Option`:
//! an unparsable field silently disqualifies its line rather than failing
//! the document.

/// Parse one numeric field as floating point
pub fn parse_float(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok()
}

/// Parse an integer field, e.g. an RPM set point
pub fn parse_integer(field: &str) -> Option<u32> {
    field.trim().parse::<u32>().ok()
}
