//! Word document extractor.
//!
//! DOCX is read directly. Legacy DOC is converted to DOCX through LibreOffice
//! first, so that path needs `soffice` on the host.

use crate::Result;
use crate::core::config::ExtractionConfig;
use crate::core::mime::{DOCX_MIME_TYPE, LEGACY_WORD_MIME_TYPE};
use crate::error::DoctextError;
use crate::plugins::{OfficeTextExtractor, Plugin};
use async_trait::async_trait;

/// DOC/DOCX text extractor using docx-lite.
pub struct DocxExtractor;

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for DocxExtractor {
    fn name(&self) -> &str {
        "docx-extractor"
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn description(&self) -> &str {
        "Extracts text from Word documents (DOCX natively, DOC via LibreOffice)"
    }
}

async fn extract_docx(content: Vec<u8>) -> Result<String> {
    let span = tracing::Span::current();
    tokio::task::spawn_blocking(move || {
        let _guard = span.entered();
        crate::extraction::docx::extract_text(&content)
    })
    .await
    .map_err(|e| DoctextError::parsing(format!("DOCX extraction task failed: {}", e)))?
}

#[async_trait]
impl OfficeTextExtractor for DocxExtractor {
    async fn extract_text(&self, content: &[u8], mime_type: &str, config: &ExtractionConfig) -> Result<String> {
        match mime_type {
            DOCX_MIME_TYPE => extract_docx(content.to_vec()).await,
            LEGACY_WORD_MIME_TYPE => {
                let converted =
                    crate::extraction::libreoffice::convert_doc_to_docx(content, config.libreoffice_timeout_secs)
                        .await?;
                extract_docx(converted).await
            }
            other => Err(DoctextError::UnsupportedFormat(other.to_string())),
        }
    }
}
