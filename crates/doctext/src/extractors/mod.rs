//! Built-in decoders.
//!
//! Each struct implements one capability trait from [`crate::plugins`] on top
//! of the synchronous functions in [`crate::extraction`]. They are wired into
//! [`DecoderSet::default`](crate::plugins::DecoderSet).

pub mod csv;
pub mod markdown;

#[cfg(feature = "excel")]
pub mod excel;

#[cfg(feature = "office")]
pub mod docx;

#[cfg(feature = "pdf")]
pub mod pdf;

pub use self::csv::CsvExtractor;
pub use markdown::MarkdownExtractor;

#[cfg(feature = "excel")]
pub use excel::ExcelExtractor;

#[cfg(feature = "office")]
pub use docx::DocxExtractor;

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;
