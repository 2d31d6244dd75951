//! Local byte acquisition.
//!
//! Reads whole files into memory. I/O errors are never wrapped.

use crate::{DoctextError, Result};
use std::path::Path;
use tokio::fs;

/// Read a file asynchronously.
///
/// # Errors
///
/// Returns `DoctextError::Io` if the path does not exist or is unreadable.
pub async fn read_file_async(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    fs::read(path.as_ref()).await.map_err(DoctextError::Io)
}

/// Read a file synchronously.
///
/// # Errors
///
/// Returns `DoctextError::Io` if the path does not exist or is unreadable.
pub fn read_file_sync(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    std::fs::read(path.as_ref()).map_err(DoctextError::Io)
}
