//! PDF text linearization
//!
//! Wraps the `pdf-extract` crate so the line scanner never sees PDF
//! structure, only the document's text in page and line order. Encrypted,
//! scanned-image, and corrupt documents surface as a single diagnostic
//! string instead of an error; the parse contract treats them as
//! unparseable content.

use tracing::debug;

/// Extract the text content of a PDF, in page and line order
pub fn extract_text(bytes: &[u8]) -> std::result::Result<String, String> {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => {
            debug!("Extracted {} characters of PDF text", text.len());
            Ok(text)
        }
        Err(e) => Err(format!("PDF text extraction failed: {}", e)),
    }
}
