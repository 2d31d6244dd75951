//! Legacy Word (.doc) conversion through headless LibreOffice.
//!
//! `.doc` is a binary OLE format with no pure-Rust text extractor in our stack,
//! so it is converted to `.docx` with `soffice --headless --convert-to docx`
//! and then read like any other DOCX file.
//!
//! # System Requirement
//!
//! LibreOffice must be installed and `soffice` reachable:
//! - **macOS**: `brew install --cask libreoffice`
//! - **Linux**: `apt install libreoffice` or `dnf install libreoffice`
//! - **Windows**: `winget install LibreOffice.LibreOffice`
//!
//! A custom location can be given through `DOCTEXT_LIBREOFFICE_PATH`.

use crate::error::{DoctextError, Result};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::process::Command;
use tokio::time::{Duration, timeout};

/// Removes the wrapped directory when dropped.
struct TempDir {
    path: PathBuf,
}

impl TempDir {
    async fn new(path: PathBuf) -> Result<Self> {
        fs::create_dir_all(&path).await?;
        Ok(Self { path })
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

fn libreoffice_install_message() -> String {
    "LibreOffice (soffice/libreoffice) is required for legacy Word (.doc) support. \
Install: macOS: 'brew install --cask libreoffice', \
Linux: 'apt install libreoffice', \
Windows: 'winget install LibreOffice.LibreOffice'. \
If LibreOffice is installed in a custom location, set DOCTEXT_LIBREOFFICE_PATH to the soffice executable."
        .to_string()
}

fn soffice_candidates() -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    let mut push_candidate = |path: PathBuf| {
        if seen.insert(path.clone()) {
            candidates.push(path);
        }
    };

    for var in ["DOCTEXT_LIBREOFFICE_PATH", "SOFFICE_PATH", "LIBREOFFICE_PATH"] {
        if let Some(value) = env::var_os(var).filter(|v| !v.is_empty()) {
            push_candidate(PathBuf::from(value));
        }
    }

    if cfg!(target_os = "macos") {
        push_candidate(PathBuf::from("/Applications/LibreOffice.app/Contents/MacOS/soffice"));
    }

    if cfg!(target_os = "windows") {
        push_candidate(PathBuf::from("C:\\Program Files\\LibreOffice\\program\\soffice.exe"));
    }

    if let Some(path_env) = env::var_os("PATH") {
        for dir in env::split_paths(&path_env) {
            push_candidate(dir.join("soffice"));
            push_candidate(dir.join("libreoffice"));
            push_candidate(dir.join("soffice.exe"));
        }
    }

    candidates
}

/// Locate the LibreOffice executable.
///
/// # Errors
///
/// Returns `DoctextError::MissingDependency` if no candidate exists.
pub fn locate_soffice_binary() -> Result<PathBuf> {
    soffice_candidates()
        .into_iter()
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| DoctextError::MissingDependency(libreoffice_install_message()))
}

async fn run_conversion(
    soffice_path: &Path,
    input_path: &Path,
    output_dir: &Path,
    timeout_seconds: u64,
) -> Result<Vec<u8>> {
    let child = Command::new(soffice_path)
        .arg("--headless")
        .arg("--convert-to")
        .arg("docx")
        .arg("--outdir")
        .arg(output_dir)
        .arg(input_path)
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| {
            DoctextError::parsing(format!(
                "Failed to execute LibreOffice at '{}': {}",
                soffice_path.display(),
                e
            ))
        })?;

    let output = match timeout(Duration::from_secs(timeout_seconds), child.wait_with_output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            return Err(DoctextError::parsing(format!("Failed to wait for LibreOffice: {}", e)));
        }
        Err(_) => {
            return Err(DoctextError::parsing(format!(
                "LibreOffice conversion timed out after {} seconds",
                timeout_seconds
            )));
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        return Err(DoctextError::parsing(format!(
            "LibreOffice conversion failed with code {}: {}",
            output.status.code().unwrap_or(-1),
            if !stderr.is_empty() { stderr } else { stdout }
        )));
    }

    let input_stem = input_path
        .file_stem()
        .ok_or_else(|| DoctextError::parsing("Invalid input file name"))?;
    let expected_output = output_dir.join(format!("{}.docx", input_stem.to_string_lossy()));

    let converted = fs::read(&expected_output).await.map_err(|e| {
        DoctextError::parsing(format!(
            "LibreOffice conversion completed but output file not found: {}",
            e
        ))
    })?;

    if converted.is_empty() {
        return Err(DoctextError::parsing("LibreOffice conversion produced empty file"));
    }

    Ok(converted)
}

/// Convert `.doc` bytes to `.docx` bytes.
///
/// Input and output live in per-call temporary directories that are removed
/// on every exit path.
pub async fn convert_doc_to_docx(doc_bytes: &[u8], timeout_seconds: u64) -> Result<Vec<u8>> {
    let soffice_path = locate_soffice_binary()?;

    let unique_id = uuid::Uuid::new_v4();
    let temp_dir = env::temp_dir();
    let input_dir = TempDir::new(temp_dir.join(format!("doctext_doc_{}", unique_id))).await?;
    let output_dir = TempDir::new(temp_dir.join(format!("doctext_doc_{}_out", unique_id))).await?;

    let input_path = input_dir.path.join("input.doc");
    fs::write(&input_path, doc_bytes).await?;

    tracing::debug!(soffice = %soffice_path.display(), size_bytes = doc_bytes.len(), "Converting .doc to .docx");
    run_conversion(&soffice_path, &input_path, &output_dir.path, timeout_seconds).await
}
