//! Configuration loading and management.
//!
//! [`ExtractionConfig`] can be built programmatically, loaded from TOML, YAML or
//! JSON, or discovered by walking up from the working directory looking for
//! `doctext.toml`.

use crate::{DoctextError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for by [`ExtractionConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "doctext.toml";

/// Main extraction configuration.
///
/// # Example
///
/// ```rust
/// use doctext::core::config::{ExtractionConfig, SpreadsheetErrorPolicy};
///
/// let mut config = ExtractionConfig::default();
/// config.spreadsheet_errors = SpreadsheetErrorPolicy::Raise;
/// config.fetch.timeout_secs = Some(30);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractionConfig {
    /// Remote acquisition options
    #[serde(default)]
    pub fetch: FetchConfig,

    /// What to do when a workbook cannot be processed
    #[serde(default)]
    pub spreadsheet_errors: SpreadsheetErrorPolicy,

    /// Markdown rendering options
    #[serde(default)]
    pub markdown: MarkdownConfig,

    /// Timeout for the LibreOffice `.doc` to `.docx` conversion
    #[serde(default = "default_libreoffice_timeout")]
    pub libreoffice_timeout_secs: u64,
}

/// Remote acquisition options.
///
/// The defaults reproduce a bare single GET: no timeout and no redirect
/// following. A hung connection therefore blocks until the peer gives up, and a
/// 3xx answer fails with its status code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FetchConfig {
    /// Overall request timeout in seconds (None = wait indefinitely)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Follow HTTP redirects (at most 10 hops)
    #[serde(default)]
    pub follow_redirects: bool,

    /// Value of the `User-Agent` header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Error policy for XLS/XLSX decoding.
///
/// `Sentinel` keeps the historical contract: a broken workbook yields
/// [`crate::error::SPREADSHEET_PROCESSING_FAILED`] as if it were the extracted
/// text. `Raise` turns the same failure into a `DoctextError::Decoder`, which is
/// how DOC/DOCX and CSV failures already behave.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpreadsheetErrorPolicy {
    #[default]
    Sentinel,
    Raise,
}

/// Markdown to HTML rendering options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkdownConfig {
    /// Render GFM pipe tables
    #[serde(default = "default_true")]
    pub tables: bool,

    /// Render `~~strikethrough~~`
    #[serde(default = "default_true")]
    pub strikethrough: bool,
}

fn default_true() -> bool {
    true
}

fn default_libreoffice_timeout() -> u64 {
    300
}

fn default_user_agent() -> String {
    format!("doctext/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            spreadsheet_errors: SpreadsheetErrorPolicy::default(),
            markdown: MarkdownConfig::default(),
            libreoffice_timeout_secs: default_libreoffice_timeout(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            follow_redirects: false,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `DoctextError::Validation` if the file can't be read or is invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        toml::from_str(&content)
            .map_err(|e| DoctextError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        serde_yaml_ng::from_str(&content)
            .map_err(|e| DoctextError::validation(format!("Invalid YAML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        serde_json::from_str(&content)
            .map_err(|e| DoctextError::validation(format!("Invalid JSON in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration, picking the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns `DoctextError::Validation` for extensions other than
    /// `toml`, `yaml`, `yml` and `json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("toml") => Self::from_toml_file(path),
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(DoctextError::validation(format!(
                "Unsupported config file format: {} (expected .toml, .yaml, .yml or .json)",
                path.display()
            ))),
        }
    }

    /// Discover `doctext.toml` in the current directory or any parent.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(DoctextError::Io)?;

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "Using discovered config file");
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }
}

fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| DoctextError::validation(format!("Failed to read config file {}: {}", path.display(), e)))
}
