//! # edgequake-pdf2png
//!
//! Render the pages of a PDF document to PNG images.
//!
//! The input is a file path or an in-memory buffer; the output is one
//! [`PageOutput`] per rendered page, holding the PNG bytes and optionally the
//! path of the file written to an output folder. Parsing and rasterisation
//! are done by PDFium (through `pdfium-render`); PNG encoding by `image`.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF (path or bytes)
//!  │
//!  ├─ 1. Input    read the file, keep its stem for naming
//!  ├─ 2. Select   open the document, build the page plan (strict or lenient)
//!  ├─ 3. Render   per page: surface → render → PNG → release (spawn_blocking)
//!  └─ 4. Output   name each page, optionally write it to the output folder
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgequake_pdf2png::{convert, ConversionOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = ConversionOptions::builder()
//!         .viewport_scale(2.0)
//!         .output_folder("out")
//!         .build()?;
//!     let pages = convert("document.pdf", &options).await?;
//!     for page in &pages {
//!         println!("{} → {}x{}", page.name, page.width, page.height);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Page selection
//!
//! `pages_to_process` is rendered in the order given, duplicates included.
//! Out-of-range numbers are skipped unless `strict_pages_to_process` is set,
//! in which case they fail the call with [`Pdf2PngError::InvalidPageRange`].
//!
//! ## PDFium
//!
//! The pdfium shared library is looked up via `PDFIUM_LIB_PATH`, then the
//! working directory, then the system library path. Inject your own
//! [`DocumentSource`] through the options to render with something else.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pdfium;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionOptions, ConversionOptionsBuilder, OutputFileMaskFn, DEFAULT_VIEWPORT_SCALE};
pub use convert::{convert, convert_from_bytes, convert_sync, page_count};
pub use error::{Pdf2PngError, RangeViolation};
pub use output::PageOutput;
pub use pdfium::PdfiumSource;
pub use pipeline::input::PdfInput;
pub use pipeline::naming::DEFAULT_OUTPUT_FILE_MASK;
pub use pipeline::render::{DocumentPage, DocumentSource, LoadedDocument, Viewport};
pub use pipeline::surface::{PooledSurfaceFactory, RasterSurface, RasterSurfaceFactory};
pub use progress::{ConversionProgressCallback, NoopProgressCallback, ProgressCallback};
