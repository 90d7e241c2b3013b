//! Input resolution: turn a path or byte buffer into PDF bytes.
//!
//! Path inputs are checked before anything else touches the document, so a
//! missing file is always reported as [`Pdf2PngError::FileNotFound`] rather
//! than as a parser error. The file stem is kept for output naming.

use crate::error::Pdf2PngError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What the caller handed us.
#[derive(Debug, Clone)]
pub enum PdfInput {
    /// A PDF file on disk.
    Path(PathBuf),
    /// PDF bytes already in memory.
    Bytes(Vec<u8>),
}

impl From<&str> for PdfInput {
    fn from(s: &str) -> Self {
        PdfInput::Path(PathBuf::from(s))
    }
}

impl From<String> for PdfInput {
    fn from(s: String) -> Self {
        PdfInput::Path(PathBuf::from(s))
    }
}

impl From<&Path> for PdfInput {
    fn from(p: &Path) -> Self {
        PdfInput::Path(p.to_path_buf())
    }
}

impl From<PathBuf> for PdfInput {
    fn from(p: PathBuf) -> Self {
        PdfInput::Path(p)
    }
}

impl From<&PathBuf> for PdfInput {
    fn from(p: &PathBuf) -> Self {
        PdfInput::Path(p.clone())
    }
}

impl From<Vec<u8>> for PdfInput {
    fn from(bytes: Vec<u8>) -> Self {
        PdfInput::Bytes(bytes)
    }
}

impl From<&[u8]> for PdfInput {
    fn from(bytes: &[u8]) -> Self {
        PdfInput::Bytes(bytes.to_vec())
    }
}

/// PDF bytes plus the file stem when the input was a path.
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    pub bytes: Vec<u8>,
    pub stem: Option<String>,
}

/// Resolve the input to bytes.
pub async fn resolve_input(input: PdfInput) -> Result<ResolvedInput, Pdf2PngError> {
    match input {
        PdfInput::Bytes(bytes) => {
            debug!("Using in-memory PDF buffer ({} bytes)", bytes.len());
            Ok(ResolvedInput { bytes, stem: None })
        }
        PdfInput::Path(path) => resolve_local(path).await,
    }
}

async fn resolve_local(path: PathBuf) -> Result<ResolvedInput, Pdf2PngError> {
    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(Pdf2PngError::FileNotFound { path }),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(Pdf2PngError::PermissionDenied { path });
        }
        Err(_) => return Err(Pdf2PngError::FileNotFound { path }),
    }

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(Pdf2PngError::PermissionDenied { path });
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Pdf2PngError::FileNotFound { path });
        }
        Err(source) => return Err(Pdf2PngError::InputReadFailed { path, source }),
    };

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned());

    debug!("Resolved local PDF: {} ({} bytes)", path.display(), bytes.len());
    Ok(ResolvedInput { bytes, stem })
}
