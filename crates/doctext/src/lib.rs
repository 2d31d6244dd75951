//! doctext - plain text out of everyday documents
//!
//! Give doctext bytes plus a MIME type, a file path, or an HTTP(S) URL and it
//! returns the document's text. Supported formats:
//!
//! | Format | MIME type | Output |
//! |---|---|---|
//! | Plain text | `text/plain` | the text itself |
//! | Markdown | `text/markdown` | rendered HTML |
//! | PDF | `application/pdf` | text layer |
//! | DOCX / DOC | Word MIME types | document text (DOC needs LibreOffice) |
//! | XLSX / XLS | Excel MIME types | every sheet as CSV, in order |
//! | CSV | `text/csv` | data rows, fields joined with `", "` |
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use doctext::{extract_file_sync, ExtractionConfig};
//!
//! # fn main() -> doctext::Result<()> {
//! let config = ExtractionConfig::default();
//! match extract_file_sync("report.pdf", &config)? {
//!     Some(text) => println!("{}", text),
//!     None => eprintln!("not a supported file type"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Core Module** (`core`): entry points, MIME resolution, acquisition, dispatch, config
//! - **Plugins** (`plugins`): capability traits and the [`DecoderSet`](plugins::DecoderSet)
//! - **Extractors** (`extractors`): built-in decoders
//! - **Extraction** (`extraction`): synchronous format parsers

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod extraction;
pub mod extractors;
pub mod plugins;
pub mod types;

pub use error::{DoctextError, Result};
pub use types::{ExtractedText, FetchedDocument, SheetCsv};

pub use self::core::config::{ExtractionConfig, FetchConfig, MarkdownConfig, SpreadsheetErrorPolicy};
pub use self::core::dispatch::dispatch;
pub use self::core::extractor::{
    Extractor, extract_bytes, extract_bytes_sync, extract_file, extract_file_sync,
};
pub use self::core::mime::{DocumentKind, detect_mime_type, is_remote, normalize_mime_type};

#[cfg(feature = "remote")]
pub use self::core::extractor::{extract_url, extract_url_sync};

#[cfg(feature = "remote")]
pub use self::core::fetch::fetch_document;

pub use plugins::DecoderSet;
