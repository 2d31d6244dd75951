//! Pluggable decoder capabilities.
//!
//! - [`Plugin`] - Base trait every decoder implements
//! - [`PdfTextExtractor`] - PDF text layer
//! - [`OfficeTextExtractor`] - DOC/DOCX text, keyed by MIME type
//! - [`SpreadsheetConverter`] - Workbook to per-sheet CSV
//! - [`MarkdownRenderer`] - Markdown to HTML
//! - [`CsvRowReader`] - CSV data rows
//!
//! Decoders are grouped in a [`DecoderSet`] and handed to an
//! [`Extractor`](crate::Extractor):
//!
//! ```rust
//! use doctext::plugins::{DecoderSet, Plugin, PdfTextExtractor};
//! use doctext::{Extractor, ExtractionConfig, Result};
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! struct CannedPdf;
//!
//! impl Plugin for CannedPdf {
//!     fn name(&self) -> &str { "canned-pdf" }
//!     fn version(&self) -> String { "1.0.0".to_string() }
//! }
//!
//! #[async_trait]
//! impl PdfTextExtractor for CannedPdf {
//!     async fn extract_text(&self, _content: &[u8]) -> Result<String> {
//!         Ok("canned".to_string())
//!     }
//! }
//!
//! let extractor = Extractor::new(ExtractionConfig::default())
//!     .with_decoders(DecoderSet::default().with_pdf(Arc::new(CannedPdf)));
//! # let _ = extractor;
//! ```

pub mod decoders;
pub mod traits;

pub use decoders::{
    CsvRowReader, DecoderSet, MarkdownRenderer, OfficeTextExtractor, PdfTextExtractor, SpreadsheetConverter,
};
pub use traits::Plugin;
