//! Synchronous format decoders.
//!
//! These functions do the actual parsing. The async plugin wrappers in
//! [`crate::extractors`] move the heavy ones onto the blocking pool.

pub mod csv;
pub mod markdown;
pub mod text;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "excel")]
pub mod excel;

#[cfg(feature = "office")]
pub mod docx;

#[cfg(feature = "office")]
pub mod libreoffice;

pub use self::csv::{join_rows, read_rows};
pub use markdown::render_html;
pub use text::decode_utf8;

#[cfg(feature = "excel")]
pub use excel::read_workbook_csv;

#[cfg(feature = "office")]
pub use libreoffice::convert_doc_to_docx;
