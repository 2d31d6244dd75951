//! PDF text extraction using `lopdf`.

use crate::error::Result;

/// Extract the text layer of every page, in page order.
///
/// Scanned PDFs without a text layer produce an empty or near-empty string;
/// no OCR is attempted.
///
/// # Errors
///
/// Returns `DoctextError::Parsing` if the document cannot be loaded or a page's
/// content stream cannot be decoded.
pub fn extract_text(content: &[u8]) -> Result<String> {
    let document = lopdf::Document::load_mem(content)?;

    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    if page_numbers.is_empty() {
        return Ok(String::new());
    }

    tracing::debug!(pages = page_numbers.len(), "Extracting PDF text");
    Ok(document.extract_text(&page_numbers)?)
}
