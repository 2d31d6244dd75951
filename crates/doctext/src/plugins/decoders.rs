//! Decoder capability traits and the set that bundles them.
//!
//! Each external decoding concern sits behind its own small trait so the
//! dispatcher never names a concrete crate. [`DecoderSet::default`] wires in the
//! built-in implementations from [`crate::extractors`]; tests and embedders can
//! swap any of them out.

use crate::Result;
use crate::core::config::{ExtractionConfig, MarkdownConfig};
use crate::error::DoctextError;
use crate::plugins::Plugin;
use crate::types::SheetCsv;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Extracts the text layer of a PDF document.
#[async_trait]
pub trait PdfTextExtractor: Plugin {
    async fn extract_text(&self, content: &[u8]) -> Result<String>;
}

/// Extracts text from word processing documents, keyed by MIME type.
///
/// Receives either the DOCX or the legacy DOC MIME type.
#[async_trait]
pub trait OfficeTextExtractor: Plugin {
    async fn extract_text(&self, content: &[u8], mime_type: &str, config: &ExtractionConfig) -> Result<String>;
}

/// Opens a workbook and renders every sheet as CSV, in workbook order.
#[async_trait]
pub trait SpreadsheetConverter: Plugin {
    async fn sheets_to_csv(&self, content: &[u8]) -> Result<Vec<SheetCsv>>;
}

/// Renders Markdown source to HTML.
pub trait MarkdownRenderer: Plugin {
    fn render_html(&self, source: &str, options: &MarkdownConfig) -> String;
}

/// Parses CSV input into data rows. The header row is consumed, not returned.
pub trait CsvRowReader: Plugin {
    fn read_rows(&self, content: &[u8]) -> Result<Vec<Vec<String>>>;
}

/// The decoders available to the dispatcher.
///
/// A missing decoder is reported as `DoctextError::MissingDependency` when a
/// document of that kind is dispatched.
#[derive(Clone)]
pub struct DecoderSet {
    pdf: Option<Arc<dyn PdfTextExtractor>>,
    office: Option<Arc<dyn OfficeTextExtractor>>,
    spreadsheet: Option<Arc<dyn SpreadsheetConverter>>,
    markdown: Option<Arc<dyn MarkdownRenderer>>,
    csv: Option<Arc<dyn CsvRowReader>>,
}

impl DecoderSet {
    /// A set with no decoders at all.
    pub fn empty() -> Self {
        Self {
            pdf: None,
            office: None,
            spreadsheet: None,
            markdown: None,
            csv: None,
        }
    }

    pub fn with_pdf(mut self, decoder: Arc<dyn PdfTextExtractor>) -> Self {
        self.pdf = Some(decoder);
        self
    }

    pub fn with_office(mut self, decoder: Arc<dyn OfficeTextExtractor>) -> Self {
        self.office = Some(decoder);
        self
    }

    pub fn with_spreadsheet(mut self, decoder: Arc<dyn SpreadsheetConverter>) -> Self {
        self.spreadsheet = Some(decoder);
        self
    }

    pub fn with_markdown(mut self, decoder: Arc<dyn MarkdownRenderer>) -> Self {
        self.markdown = Some(decoder);
        self
    }

    pub fn with_csv(mut self, decoder: Arc<dyn CsvRowReader>) -> Self {
        self.csv = Some(decoder);
        self
    }

    pub fn pdf(&self) -> Result<&Arc<dyn PdfTextExtractor>> {
        self.pdf.as_ref().ok_or_else(|| missing("PDF", "pdf"))
    }

    pub fn office(&self) -> Result<&Arc<dyn OfficeTextExtractor>> {
        self.office.as_ref().ok_or_else(|| missing("DOC/DOCX", "office"))
    }

    pub fn spreadsheet(&self) -> Result<&Arc<dyn SpreadsheetConverter>> {
        self.spreadsheet.as_ref().ok_or_else(|| missing("XLS/XLSX", "excel"))
    }

    pub fn markdown(&self) -> Result<&Arc<dyn MarkdownRenderer>> {
        self.markdown.as_ref().ok_or_else(|| missing("Markdown", "default"))
    }

    pub fn csv(&self) -> Result<&Arc<dyn CsvRowReader>> {
        self.csv.as_ref().ok_or_else(|| missing("CSV", "default"))
    }
}

fn missing(format: &str, feature: &str) -> DoctextError {
    DoctextError::MissingDependency(format!(
        "No {} decoder is registered (built-in decoder requires the `{}` feature)",
        format, feature
    ))
}

impl Default for DecoderSet {
    fn default() -> Self {
        #[allow(unused_mut)]
        let mut set = Self::empty()
            .with_markdown(Arc::new(crate::extractors::MarkdownExtractor::new()))
            .with_csv(Arc::new(crate::extractors::CsvExtractor::new()));

        #[cfg(feature = "pdf")]
        {
            set = set.with_pdf(Arc::new(crate::extractors::PdfExtractor::new()));
        }

        #[cfg(feature = "office")]
        {
            set = set.with_office(Arc::new(crate::extractors::DocxExtractor::new()));
        }

        #[cfg(feature = "excel")]
        {
            set = set.with_spreadsheet(Arc::new(crate::extractors::ExcelExtractor::new()));
        }

        set
    }
}

impl fmt::Debug for DecoderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderSet")
            .field("pdf", &self.pdf.as_ref().map(|d| d.name().to_string()))
            .field("office", &self.office.as_ref().map(|d| d.name().to_string()))
            .field("spreadsheet", &self.spreadsheet.as_ref().map(|d| d.name().to_string()))
            .field("markdown", &self.markdown.as_ref().map(|d| d.name().to_string()))
            .field("csv", &self.csv.as_ref().map(|d| d.name().to_string()))
            .finish()
    }
}
