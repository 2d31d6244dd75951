//! Main extraction entry points.
//!
//! # Functions
//!
//! - [`extract_bytes`] - Extract text from bytes with a known MIME type
//! - [`extract_file`] - Extract text from a file, inferring the MIME type from its name
//! - [`extract_url`] - Download a document and extract its text
//!
//! Each has a `_sync` twin that blocks on a shared runtime. The free functions
//! use the built-in decoders; build an [`Extractor`] to supply others.

use crate::core::config::ExtractionConfig;
use crate::core::dispatch::dispatch;
use crate::core::io::read_file_async;
use crate::core::mime::detect_mime_type;
use crate::plugins::DecoderSet;
use crate::Result;
use once_cell::sync::Lazy;
use std::path::Path;

/// Global Tokio runtime for synchronous operations.
///
/// Lazily initialized on first use and shared across all sync wrappers.
///
/// # Safety
///
/// The `.expect()` here is justified because:
/// 1. Runtime creation can only fail due to system resource exhaustion (OOM, thread limit)
/// 2. If runtime creation fails, the process is already in a critical state
/// 3. This is a one-time initialization - if it fails, nothing will work
static GLOBAL_RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create global Tokio runtime - system may be out of resources")
});

static DEFAULT_DECODERS: Lazy<DecoderSet> = Lazy::new(DecoderSet::default);

/// Extraction front end bound to a configuration and a decoder set.
///
/// ```rust,no_run
/// use doctext::{Extractor, ExtractionConfig};
///
/// # async fn example() -> doctext::Result<()> {
/// let extractor = Extractor::new(ExtractionConfig::default());
/// if let Some(text) = extractor.extract_file("notes.md").await? {
///     println!("{}", text);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractionConfig,
    decoders: DecoderSet,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

impl Extractor {
    /// Create an extractor using the built-in decoders.
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            config,
            decoders: DEFAULT_DECODERS.clone(),
        }
    }

    /// Replace the decoder set.
    pub fn with_decoders(mut self, decoders: DecoderSet) -> Self {
        self.decoders = decoders;
        self
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn decoders(&self) -> &DecoderSet {
        &self.decoders
    }

    /// Extract text from bytes of the given MIME type.
    pub async fn extract_bytes(&self, content: &[u8], mime_type: &str) -> Result<String> {
        dispatch(content, mime_type, &self.decoders, &self.config).await
    }

    /// Extract text from a file.
    ///
    /// Returns `Ok(None)` without reading the file when its name does not
    /// resolve to a MIME type.
    ///
    /// # Errors
    ///
    /// I/O errors are returned unchanged; otherwise as [`Extractor::extract_bytes`].
    pub async fn extract_file(&self, path: impl AsRef<Path>) -> Result<Option<String>> {
        let path = path.as_ref();
        let path_str = path.to_string_lossy();

        let Some(mime_type) = detect_mime_type(&path_str) else {
            tracing::warn!(path = %path.display(), "Unsupported filetype");
            return Ok(None);
        };

        let content = read_file_async(path).await?;
        self.extract_bytes(&content, &mime_type).await.map(Some)
    }

    /// Download a document and extract its text.
    #[cfg(feature = "remote")]
    pub async fn extract_url(&self, url: &str) -> Result<String> {
        self.extract_url_with_mime(url).await.map(|extracted| extracted.content)
    }

    /// Like [`extract_url`](Self::extract_url), also reporting the MIME type
    /// resolved from the response.
    #[cfg(feature = "remote")]
    pub async fn extract_url_with_mime(&self, url: &str) -> Result<crate::types::ExtractedText> {
        let document = crate::core::fetch::fetch_document(url, &self.config.fetch).await?;
        let content = self.extract_bytes(&document.bytes, &document.mime_type).await?;
        Ok(crate::types::ExtractedText {
            mime_type: document.mime_type,
            content,
        })
    }
}

/// Extract text from bytes of the given MIME type.
///
/// # Example
///
/// ```rust
/// use doctext::{extract_bytes, ExtractionConfig};
///
/// # async fn example() -> doctext::Result<()> {
/// let text = extract_bytes(b"hello", "text/plain", &ExtractionConfig::default()).await?;
/// assert_eq!(text, "hello");
/// # Ok(())
/// # }
/// ```
pub async fn extract_bytes(content: &[u8], mime_type: &str, config: &ExtractionConfig) -> Result<String> {
    dispatch(content, mime_type, &DEFAULT_DECODERS, config).await
}

/// Extract text from a file; `Ok(None)` when the file type is not recognised.
pub async fn extract_file(path: impl AsRef<Path>, config: &ExtractionConfig) -> Result<Option<String>> {
    Extractor::new(config.clone()).extract_file(path).await
}

/// Download a document and extract its text.
#[cfg(feature = "remote")]
pub async fn extract_url(url: &str, config: &ExtractionConfig) -> Result<String> {
    Extractor::new(config.clone()).extract_url(url).await
}

/// Synchronous wrapper for `extract_bytes`.
///
/// Must not be called from inside an async runtime.
pub fn extract_bytes_sync(content: &[u8], mime_type: &str, config: &ExtractionConfig) -> Result<String> {
    GLOBAL_RUNTIME.block_on(extract_bytes(content, mime_type, config))
}

/// Synchronous wrapper for `extract_file`.
pub fn extract_file_sync(path: impl AsRef<Path>, config: &ExtractionConfig) -> Result<Option<String>> {
    GLOBAL_RUNTIME.block_on(extract_file(path, config))
}

/// Synchronous wrapper for `extract_url`.
#[cfg(feature = "remote")]
pub fn extract_url_sync(url: &str, config: &ExtractionConfig) -> Result<String> {
    GLOBAL_RUNTIME.block_on(extract_url(url, config))
}
