//! Core extraction pipeline.
//!
//! - `mime`: MIME resolution and classification
//! - `io`: local file reads
//! - `fetch`: HTTP(S) acquisition
//! - `dispatch`: MIME type to decoder
//! - `extractor`: public entry points
//! - `config`: configuration loading

pub mod config;
pub mod dispatch;
pub mod extractor;
pub mod io;
pub mod mime;

#[cfg(feature = "remote")]
pub mod fetch;
