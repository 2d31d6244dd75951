//! DOCX (Microsoft Word) text extraction using docx-lite.
//!
//! docx-lite streams `word/document.xml` straight out of the ZIP container, so
//! no intermediate DOM is built.

use crate::error::{DoctextError, Result};

/// Extract text from DOCX bytes.
///
/// # Errors
///
/// Returns `DoctextError::Parsing` if the bytes are not a readable DOCX package.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    docx_lite::extract_text_from_bytes(bytes)
        .map_err(|e| DoctextError::parsing(format!("DOCX text extraction failed: {}", e)))
}
