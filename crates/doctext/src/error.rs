//! Error types for doctext.
//!
//! Every fallible operation in the crate returns [`DoctextError`]. The variants
//! fall into three groups:
//!
//! - **System errors** (`Io`) bubble up unchanged from the file system.
//! - **Acquisition errors** (`Http`, `HttpStatus`, `UnknownMimeType`) come from
//!   the remote fetcher.
//! - **Extraction errors** (`UnsupportedFormat`, `Decoder`, `Parsing`,
//!   `MissingDependency`) come from the dispatcher and the decoder backends.
//!
//! `Decoder` is special: its `Display` output is a fixed, user-facing message
//! chosen per format, and the underlying backend failure is only reachable
//! through [`std::error::Error::source`].
//!
//! # Example
//!
//! ```rust
//! use doctext::{DoctextError, Result};
//!
//! fn read_config(path: &str) -> Result<String> {
//!     let content = std::fs::read_to_string(path)?;
//!
//!     if content.is_empty() {
//!         return Err(DoctextError::validation(format!("Config file is empty: {}", path)));
//!     }
//!
//!     Ok(content)
//! }
//! ```
use thiserror::Error;

/// Result type alias using `DoctextError`.
pub type Result<T> = std::result::Result<T, DoctextError>;

/// Fixed message surfaced when a DOC/DOCX document cannot be decoded.
pub const DOC_EXTRACTION_FAILED: &str = "Ошибка при извлечении текста из DOC/DOCX файла.";

/// Fixed message surfaced (or returned as text) when a workbook cannot be processed.
pub const SPREADSHEET_PROCESSING_FAILED: &str = "Ошибка при обработке XLS/XLSX файла.";

/// Fixed message surfaced when CSV input cannot be read.
pub const CSV_READ_FAILED: &str = "Ошибка при чтении CSV файла.";

/// Main error type for all doctext operations.
///
/// # Variants
///
/// - `Io` - File system and I/O errors (always bubble up)
/// - `Http` - Connection or transport failure while fetching a URL
/// - `HttpStatus` - The server answered with something other than 200
/// - `UnknownMimeType` - Neither the response headers nor the URL named a type
/// - `UnsupportedFormat` - The MIME type has no extraction path
/// - `Decoder` - A format decoder failed; carries a fixed message
/// - `Parsing` - Backend-level parsing failure
/// - `Validation` - Invalid arguments or configuration
/// - `MissingDependency` - A decoder was compiled out or a system tool is absent
/// - `Other` - Catch-all
#[derive(Debug, Error)]
pub enum DoctextError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to fetch document '{url}': HTTP status {status}")]
    HttpStatus { status: u16, url: String },

    #[error("Unknown mime type for '{0}'")]
    UnknownMimeType(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("{message}")]
    Decoder {
        message: &'static str,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Parsing error: {message}")]
    Parsing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "excel")]
impl From<calamine::Error> for DoctextError {
    fn from(err: calamine::Error) -> Self {
        DoctextError::Parsing {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(feature = "pdf")]
impl From<lopdf::Error> for DoctextError {
    fn from(err: lopdf::Error) -> Self {
        DoctextError::Parsing {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<csv::Error> for DoctextError {
    fn from(err: csv::Error) -> Self {
        DoctextError::Parsing {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(feature = "remote")]
impl From<reqwest::Error> for DoctextError {
    fn from(err: reqwest::Error) -> Self {
        DoctextError::Http {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

macro_rules! error_constructor {
    ($name:ident, $variant:ident) => {
        pastey::paste! {
            #[doc = "Create a " $variant " error"]
            pub fn $name<S: Into<String>>(message: S) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: None,
                }
            }

            #[doc = "Create a " $variant " error with source"]
            pub fn [<$name _with_source>]<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
                message: S,
                source: E,
            ) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: Some(Box::new(source)),
                }
            }
        }
    };
}

impl DoctextError {
    error_constructor!(parsing, Parsing);
    error_constructor!(validation, Validation);
    error_constructor!(http, Http);

    /// Wrap a backend failure behind one of the fixed decoder messages.
    pub fn decoder(message: &'static str, source: DoctextError) -> Self {
        Self::Decoder {
            message,
            source: Some(Box::new(source)),
        }
    }

    /// Returns `true` if this is a `Decoder` error carrying the given fixed message.
    pub fn is_decoder_failure(&self, expected: &str) -> bool {
        matches!(self, Self::Decoder { message, .. } if *message == expected)
    }
}
