//! PDF text extractor.

use crate::Result;
use crate::error::DoctextError;
use crate::plugins::{PdfTextExtractor, Plugin};
use async_trait::async_trait;

/// PDF text extractor using lopdf.
///
/// Parsing runs on the blocking thread pool; large documents would otherwise
/// stall the async executor.
pub struct PdfExtractor;

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for PdfExtractor {
    fn name(&self) -> &str {
        "pdf-extractor"
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn description(&self) -> &str {
        "Extracts the text layer of PDF documents"
    }
}

#[async_trait]
impl PdfTextExtractor for PdfExtractor {
    async fn extract_text(&self, content: &[u8]) -> Result<String> {
        let content_owned = content.to_vec();
        let span = tracing::Span::current();
        tokio::task::spawn_blocking(move || {
            let _guard = span.entered();
            crate::extraction::pdf::extract_text(&content_owned)
        })
        .await
        .map_err(|e| DoctextError::parsing(format!("PDF extraction task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_plugin_interface() {
        let extractor = PdfExtractor::new();
        assert_eq!(extractor.name(), "pdf-extractor");
        assert!(!extractor.description().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_pdf_fails() {
        let result = PdfExtractor::new().extract_text(b"not a pdf").await;
        assert!(matches!(result, Err(DoctextError::Parsing { .. })));
    }
}
