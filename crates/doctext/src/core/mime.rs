//! MIME type resolution.
//!
//! Maps file paths and URLs to MIME type strings, normalises `Content-Type`
//! header values, and turns a MIME string into the closed [`DocumentKind`]
//! set the dispatcher matches on.

use crate::{DoctextError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const PLAIN_TEXT_MIME_TYPE: &str = "text/plain";
pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";
pub const MARKDOWN_ALT_MIME_TYPE: &str = "text/x-markdown";
pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const DOCX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const LEGACY_WORD_MIME_TYPE: &str = "application/msword";
pub const EXCEL_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const EXCEL_BINARY_MIME_TYPE: &str = "application/vnd.ms-excel";
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Extension to MIME type mapping for the formats we extract, plus a few
/// common neighbours so that they resolve (and then fail as unsupported)
/// rather than being skipped.
static EXT_TO_MIME: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert("txt", PLAIN_TEXT_MIME_TYPE);
    m.insert("text", PLAIN_TEXT_MIME_TYPE);
    m.insert("md", MARKDOWN_MIME_TYPE);
    m.insert("markdown", MARKDOWN_MIME_TYPE);

    m.insert("pdf", PDF_MIME_TYPE);

    m.insert("docx", DOCX_MIME_TYPE);
    m.insert("doc", LEGACY_WORD_MIME_TYPE);

    m.insert("xlsx", EXCEL_MIME_TYPE);
    m.insert("xls", EXCEL_BINARY_MIME_TYPE);

    m.insert("csv", CSV_MIME_TYPE);

    m.insert("html", "text/html");
    m.insert("htm", "text/html");
    m.insert("json", "application/json");
    m.insert("xml", "application/xml");
    m.insert("pptx", "application/vnd.openxmlformats-officedocument.presentationml.presentation");
    m.insert("ppt", "application/vnd.ms-powerpoint");

    m
});

/// The extraction paths the dispatcher knows about.
///
/// One variant per supported family of MIME types; anything else is rejected
/// by [`DocumentKind::from_mime`] before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    PlainText,
    Markdown,
    Pdf,
    /// Office Open XML word processing document (.docx).
    Word,
    /// Binary Word document (.doc).
    LegacyWord,
    /// .xls or .xlsx workbook.
    Spreadsheet,
    Csv,
}

impl DocumentKind {
    /// Classify a MIME type. Header parameters and case are ignored.
    ///
    /// # Errors
    ///
    /// Returns `DoctextError::UnsupportedFormat` for any type without an extraction path.
    pub fn from_mime(mime_type: &str) -> Result<Self> {
        let normalized = normalize_mime_type(mime_type);

        let kind = match normalized.as_str() {
            PLAIN_TEXT_MIME_TYPE => Self::PlainText,
            MARKDOWN_MIME_TYPE | MARKDOWN_ALT_MIME_TYPE => Self::Markdown,
            PDF_MIME_TYPE => Self::Pdf,
            DOCX_MIME_TYPE => Self::Word,
            LEGACY_WORD_MIME_TYPE => Self::LegacyWord,
            EXCEL_MIME_TYPE | EXCEL_BINARY_MIME_TYPE => Self::Spreadsheet,
            CSV_MIME_TYPE => Self::Csv,
            _ => return Err(DoctextError::UnsupportedFormat(mime_type.to_string())),
        };

        Ok(kind)
    }

    /// Canonical MIME type for this kind.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::PlainText => PLAIN_TEXT_MIME_TYPE,
            Self::Markdown => MARKDOWN_MIME_TYPE,
            Self::Pdf => PDF_MIME_TYPE,
            Self::Word => DOCX_MIME_TYPE,
            Self::LegacyWord => LEGACY_WORD_MIME_TYPE,
            Self::Spreadsheet => EXCEL_MIME_TYPE,
            Self::Csv => CSV_MIME_TYPE,
        }
    }
}

/// Lowercase a MIME type and drop any `;`-separated parameters.
///
/// ```rust
/// use doctext::core::mime::normalize_mime_type;
///
/// assert_eq!(normalize_mime_type("Text/CSV; charset=UTF-8"), "text/csv");
/// ```
pub fn normalize_mime_type(raw: &str) -> String {
    raw.split(';').next().unwrap_or("").trim().to_ascii_lowercase()
}

/// Resolve a MIME type from a file path or URL.
///
/// URL query strings and fragments are ignored, and only the last path segment
/// is inspected. The built-in table is consulted first, then `mime_guess`.
///
/// Never fails: `None` means the extension is missing or unrecognised.
pub fn detect_mime_type(path_or_url: &str) -> Option<String> {
    let extension = extension_of(path_or_url)?;

    if let Some(mime_type) = EXT_TO_MIME.get(extension.as_str()) {
        return Some((*mime_type).to_string());
    }

    mime_guess::from_ext(&extension).first().map(|m| m.essence_str().to_string())
}

/// Returns `true` if the string looks like an HTTP or HTTPS URL.
pub fn is_remote(path_or_url: &str) -> bool {
    let lower = path_or_url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn extension_of(path_or_url: &str) -> Option<String> {
    let without_fragment = path_or_url.split('#').next().unwrap_or(path_or_url);
    let without_query = without_fragment.split('?').next().unwrap_or(without_fragment);

    let last_segment = without_query.rsplit(['/', '\\']).next().unwrap_or(without_query);
    let (stem, ext) = last_segment.rsplit_once('.')?;

    if stem.is_empty() || ext.is_empty() {
        return None;
    }

    Some(ext.to_ascii_lowercase())
}
