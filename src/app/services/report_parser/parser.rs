//! Report parser orchestration
//!
//! Handles document reading, input-kind detection, and dispatch into the
//! shared line scanner. The PDF and plain-text pipelines differ only in how
//! bytes become lines; the recognition patterns are shared.

use std::path::Path;
use tracing::{debug, info, warn};

use super::pdf_text;
use super::scanner::LineScanner;
use super::stats::ParseOutcome;
use crate::constants::PDF_MAGIC;
use crate::{Error, Result};

/// Input document encodings the parser understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Line-oriented manufacturer `.dat` report
    PlainText,

    /// PDF rendering of the same report, with extractable text runs
    Pdf,
}

/// Parser for manufacturer propeller performance reports
///
/// Malformed or unrecognized content never fails a parse: it yields an
/// empty table plus diagnostics in [`super::ParseStats`]. Only an
/// unreadable file is an error.
#[derive(Debug, Default)]
pub struct ReportParser;

impl ReportParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a report file, auto-detecting the document kind
    pub fn parse_path(&self, path: &Path) -> Result<ParseOutcome> {
        info!("Parsing performance report: {}", path.display());

        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| Error::io(format!("failed to read {}", path.display()), e))?;

        let kind = detect_kind(path, &bytes);
        debug!("Detected document kind: {:?}", kind);

        self.parse_bytes(&bytes, kind)
    }

    /// Parse in-memory report content of a known kind
    pub fn parse_bytes(&self, bytes: &[u8], kind: DocumentKind) -> Result<ParseOutcome> {
        let mut scanner = LineScanner::new();

        match kind {
            DocumentKind::PlainText => {
                let text = String::from_utf8_lossy(bytes);
                scanner.feed_text(&text);
            }
            DocumentKind::Pdf => match pdf_text::extract_text(bytes) {
                Ok(text) => scanner.feed_text(&text),
                Err(message) => {
                    warn!("{}", message);
                    scanner.record_error(message);
                }
            },
        }

        let outcome = scanner.finish();
        info!(
            "Parsed {} rows across {} RPM blocks ({} lines skipped, {} orphan rows)",
            outcome.stats.rows_parsed,
            outcome.table.rpm_blocks().len(),
            outcome.stats.lines_skipped,
            outcome.stats.orphan_rows
        );

        Ok(outcome)
    }
}

/// Detect the document kind from the content signature, then the extension
///
/// Detection failure falls back to plain-text parsing.
pub fn detect_kind(path: &Path, bytes: &[u8]) -> DocumentKind {
    if bytes.starts_with(PDF_MAGIC) {
        return DocumentKind::Pdf;
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => DocumentKind::Pdf,
        _ => DocumentKind::PlainText,
    }
}
