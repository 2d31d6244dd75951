//! Remote document acquisition over HTTP(S).
//!
//! A single GET per call. The response must be exactly `200 OK`; the body is
//! collected chunk by chunk from the byte stream.

use crate::core::config::FetchConfig;
use crate::core::mime::{detect_mime_type, is_remote, normalize_mime_type};
use crate::error::{DoctextError, Result};
use crate::types::FetchedDocument;
use futures::StreamExt;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

const MAX_REDIRECTS: usize = 10;

/// Build an HTTP client from fetch options.
pub fn build_client(config: &FetchConfig) -> Result<reqwest::Client> {
    let redirect = if config.follow_redirects {
        reqwest::redirect::Policy::limited(MAX_REDIRECTS)
    } else {
        reqwest::redirect::Policy::none()
    };

    let mut builder = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .redirect(redirect);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder
        .build()
        .map_err(|e| DoctextError::http_with_source("Failed to build HTTP client", e))
}

/// Download a document and determine its MIME type.
///
/// The `Content-Type` header wins; the URL's extension is the fallback.
///
/// # Errors
///
/// - `Validation` for anything other than an `http://` or `https://` URL
/// - `Http` on connection or transport failure, including mid-body
/// - `HttpStatus` for any status other than 200
/// - `UnknownMimeType` when neither the header nor the URL names a type
pub async fn fetch_document(url: &str, config: &FetchConfig) -> Result<FetchedDocument> {
    if !is_remote(url) {
        return Err(DoctextError::validation(format!(
            "Only http:// and https:// URLs can be fetched: {}",
            url
        )));
    }

    let client = build_client(config)?;
    tracing::debug!(url, "Fetching document");

    let response = client.get(url).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(DoctextError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let header = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let mime_type = resolve_mime_type(header, url)?;

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        bytes.extend_from_slice(&chunk?);
    }

    tracing::debug!(url, mime_type = %mime_type, size_bytes = bytes.len(), "Fetched document");
    Ok(FetchedDocument { mime_type, bytes })
}

fn resolve_mime_type(content_type: Option<&str>, url: &str) -> Result<String> {
    if let Some(normalized) = content_type.map(normalize_mime_type).filter(|m| !m.is_empty()) {
        return Ok(normalized);
    }

    detect_mime_type(url).ok_or_else(|| DoctextError::UnknownMimeType(url.to_string()))
}
