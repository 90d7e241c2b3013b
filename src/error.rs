//! Error type for the edgequake-pdf2png library.
//!
//! Every failure is fatal to the call that produced it. There is no
//! page-level error channel: if one page fails to render or encode, the
//! whole conversion returns `Err` and no partial output is handed back.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which bound a strictly-validated page number violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeViolation {
    /// The page number was below 1.
    BelowOne,
    /// The page number was above the document's page count.
    AboveTotal,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeViolation::BelowOne => f.write_str("page number must be >= 1"),
            RangeViolation::AboveTotal => f.write_str("page number must be <= total pages"),
        }
    }
}

/// All errors returned by the edgequake-pdf2png library.
#[derive(Debug, Error)]
pub enum Pdf2PngError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// No regular file exists at the given path.
    #[error("PDF file not found: '{path}'")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'")]
    PermissionDenied { path: PathBuf },

    /// The file exists but reading it failed for another reason.
    #[error("Failed to read PDF '{path}': {source}")]
    InputReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Page selection errors ─────────────────────────────────────────────
    /// A requested page is out of range and strict validation is enabled.
    #[error("Invalid pages requested: {violation} (got page {page}, document has {total} pages)")]
    InvalidPageRange {
        page: i64,
        total: usize,
        violation: RangeViolation,
    },

    // ── Document errors ───────────────────────────────────────────────────
    /// The document engine rejected the bytes.
    #[error("Failed to load PDF document: {detail}")]
    DocumentLoad { detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF is encrypted and requires a password")]
    PasswordRequired,

    /// A password was provided but it is wrong.
    #[error("Wrong password for encrypted PDF")]
    WrongPassword,

    // ── Render errors ─────────────────────────────────────────────────────
    /// Rendering or PNG encoding failed for a page.
    #[error("Rendering failed for page {page}: {detail}")]
    RenderFailed { page: usize, detail: String },

    /// The viewport is too large to allocate a surface for.
    #[error("Raster surface of {width}x{height} px is too large to allocate")]
    SurfaceTooLarge { width: u32, height: u32 },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create the output folder.
    #[error("Failed to create output folder '{path}': {source}")]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not write a rendered page to disk.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
Set PDFIUM_LIB_PATH=/path/to/libpdfium, place the library in the working\n\
directory, or install it system-wide.\n\
Pre-built libraries: https://github.com/bblanchon/pdfium-binaries/releases\n"
    )]
    PdfiumBindingFailed(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
