//! Format dispatch.
//!
//! Maps a MIME type to one [`DocumentKind`] and runs the matching decoder from
//! a [`DecoderSet`]. Decoder failures for Word, CSV and (optionally) workbooks
//! are replaced by fixed user-facing messages here; the backend error stays
//! reachable as the error source.

use crate::core::config::{ExtractionConfig, SpreadsheetErrorPolicy};
use crate::core::mime::DocumentKind;
use crate::error::{CSV_READ_FAILED, DOC_EXTRACTION_FAILED, DoctextError, Result, SPREADSHEET_PROCESSING_FAILED};
use crate::extraction::csv::join_rows;
use crate::extraction::text::decode_utf8;
use crate::plugins::DecoderSet;

/// Extract text from `content` according to `mime_type`.
///
/// # Errors
///
/// - `UnsupportedFormat` if the MIME type has no extraction path
/// - `Decoder` with a fixed message for DOC/DOCX and CSV failures, and for
///   workbooks under [`SpreadsheetErrorPolicy::Raise`]
/// - `MissingDependency` if the set lacks the needed decoder
/// - PDF decoder errors unchanged
pub async fn dispatch(
    content: &[u8],
    mime_type: &str,
    decoders: &DecoderSet,
    config: &ExtractionConfig,
) -> Result<String> {
    let kind = DocumentKind::from_mime(mime_type)?;
    tracing::debug!(?kind, mime_type, size_bytes = content.len(), "Dispatching document");

    match kind {
        DocumentKind::PlainText => Ok(decode_utf8(content).into_owned()),

        DocumentKind::Markdown => {
            let renderer = decoders.markdown()?;
            Ok(renderer.render_html(&decode_utf8(content), &config.markdown))
        }

        DocumentKind::Pdf => decoders.pdf()?.extract_text(content).await,

        DocumentKind::Word | DocumentKind::LegacyWord => {
            let office = decoders.office()?;
            office
                .extract_text(content, kind.mime_type(), config)
                .await
                .map_err(|e| DoctextError::decoder(DOC_EXTRACTION_FAILED, e))
        }

        DocumentKind::Spreadsheet => {
            let converter = decoders.spreadsheet()?;
            match converter.sheets_to_csv(content).await {
                Ok(sheets) => Ok(sheets.into_iter().map(|sheet| sheet.csv).collect()),
                Err(e) => match config.spreadsheet_errors {
                    SpreadsheetErrorPolicy::Sentinel => {
                        tracing::warn!(error = %e, "Workbook could not be processed");
                        Ok(SPREADSHEET_PROCESSING_FAILED.to_string())
                    }
                    SpreadsheetErrorPolicy::Raise => Err(DoctextError::decoder(SPREADSHEET_PROCESSING_FAILED, e)),
                },
            }
        }

        DocumentKind::Csv => {
            let rows = decoders
                .csv()?
                .read_rows(content)
                .map_err(|e| DoctextError::decoder(CSV_READ_FAILED, e))?;
            Ok(join_rows(&rows))
        }
    }
}
