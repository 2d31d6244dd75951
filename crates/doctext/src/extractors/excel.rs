//! Excel spreadsheet converter.

use crate::Result;
use crate::error::DoctextError;
use crate::plugins::{Plugin, SpreadsheetConverter};
use crate::types::SheetCsv;
use async_trait::async_trait;

/// Workbook to CSV converter using calamine.
///
/// Supports: .xlsx, .xlsm, .xls, .xlsb, .ods
pub struct ExcelExtractor;

impl Default for ExcelExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExcelExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for ExcelExtractor {
    fn name(&self) -> &str {
        "excel-extractor"
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

#[async_trait]
impl SpreadsheetConverter for ExcelExtractor {
    async fn sheets_to_csv(&self, content: &[u8]) -> Result<Vec<SheetCsv>> {
        let content_owned = content.to_vec();
        let span = tracing::Span::current();
        tokio::task::spawn_blocking(move || {
            let _guard = span.entered();
            crate::extraction::excel::read_workbook_csv(&content_owned)
        })
        .await
        .map_err(|e| DoctextError::parsing(format!("Excel extraction task failed: {}", e)))?
    }
}
