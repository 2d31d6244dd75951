//! Shared data types.

use serde::{Deserialize, Serialize};

/// One worksheet rendered as CSV text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetCsv {
    /// Sheet name as stored in the workbook
    pub name: String,
    /// CSV text, one `\n`-terminated line per row
    pub csv: String,
}

/// A document downloaded over HTTP(S).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    /// Normalised MIME type taken from `Content-Type`, or inferred from the URL
    pub mime_type: String,
    /// Response body, chunks appended in arrival order
    pub bytes: Vec<u8>,
}

/// Extracted text together with the MIME type that selected its decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    pub mime_type: String,
    pub content: String,
}
