//! Configuration types for PDF-to-PNG conversion.
//!
//! All conversion behaviour is controlled through [`ConversionOptions`],
//! built via its [`ConversionOptionsBuilder`]. Every field has a documented
//! default, so `ConversionOptions::default()` renders every page at scale
//! 1.0 and keeps the PNGs in memory only.

use crate::error::Pdf2PngError;
use crate::pipeline::render::DocumentSource;
use crate::pipeline::surface::RasterSurfaceFactory;
use crate::progress::{ConversionProgressCallback, ProgressCallback};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Maps a 1-indexed page number to the full output file name.
pub type OutputFileMaskFn = Arc<dyn Fn(usize) -> String + Send + Sync>;

/// Default viewport scale: one pixel per PDF point (72 DPI).
pub const DEFAULT_VIEWPORT_SCALE: f32 = 1.0;

/// Configuration for a PDF-to-PNG conversion.
///
/// # Example
/// ```rust
/// use edgequake_pdf2png::ConversionOptions;
///
/// let options = ConversionOptions::builder()
///     .pages_to_process([1, 2, 3])
///     .viewport_scale(2.0)
///     .output_folder("out/pages")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionOptions {
    /// Pages to render, 1-indexed, in the order given. Duplicates render
    /// twice. `None` renders every page. Default: `None`.
    pub pages_to_process: Option<Vec<i64>>,

    /// Reject out-of-range entries in `pages_to_process` instead of skipping
    /// them. Default: false.
    pub strict_pages_to_process: bool,

    /// Write each rendered page into this folder (created if absent).
    pub output_folder: Option<PathBuf>,

    /// File name stem; pages are named `<mask>_page_<n>.png`.
    pub output_file_mask: Option<String>,

    /// Full file name per page. Takes precedence over `output_file_mask`.
    pub output_file_mask_fn: Option<OutputFileMaskFn>,

    /// Scale applied to the page size in PDF points. Default: 1.0.
    pub viewport_scale: f32,

    /// User password for encrypted documents.
    pub password: Option<String>,

    /// Keep PNG bytes in each [`crate::PageOutput`]. Default: true.
    ///
    /// Turn off when writing large documents to an output folder and the
    /// bytes are not needed in memory afterwards.
    pub return_page_content: bool,

    /// Pre-constructed document engine. If None, PDFium is bound per call.
    pub document_source: Option<Arc<dyn DocumentSource>>,

    /// Surface factory. If None, a fresh pooled factory is used per call.
    pub surface_factory: Option<Arc<dyn RasterSurfaceFactory>>,

    /// Per-page progress events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            pages_to_process: None,
            strict_pages_to_process: false,
            output_folder: None,
            output_file_mask: None,
            output_file_mask_fn: None,
            viewport_scale: DEFAULT_VIEWPORT_SCALE,
            password: None,
            return_page_content: true,
            document_source: None,
            surface_factory: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionOptions")
            .field("pages_to_process", &self.pages_to_process)
            .field("strict_pages_to_process", &self.strict_pages_to_process)
            .field("output_folder", &self.output_folder)
            .field("output_file_mask", &self.output_file_mask)
            .field(
                "output_file_mask_fn",
                &self.output_file_mask_fn.as_ref().map(|_| "<fn(usize) -> String>"),
            )
            .field("viewport_scale", &self.viewport_scale)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("return_page_content", &self.return_page_content)
            .field(
                "document_source",
                &self.document_source.as_ref().map(|_| "<dyn DocumentSource>"),
            )
            .field(
                "surface_factory",
                &self.surface_factory.as_ref().map(|_| "<dyn RasterSurfaceFactory>"),
            )
            .finish()
    }
}

impl ConversionOptions {
    /// Create a new builder for `ConversionOptions`.
    pub fn builder() -> ConversionOptionsBuilder {
        ConversionOptionsBuilder {
            options: Self::default(),
        }
    }

    /// Check the fields the builder validates. Options built as a struct
    /// literal go through this too, at the start of every conversion.
    pub fn validate(&self) -> Result<(), Pdf2PngError> {
        let scale = self.viewport_scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Pdf2PngError::InvalidConfig(format!(
                "viewport scale must be a positive number, got {scale}"
            )));
        }
        Ok(())
    }
}

/// Builder for [`ConversionOptions`].
#[derive(Debug)]
pub struct ConversionOptionsBuilder {
    options: ConversionOptions,
}

impl ConversionOptionsBuilder {
    pub fn pages_to_process(mut self, pages: impl IntoIterator<Item = i64>) -> Self {
        self.options.pages_to_process = Some(pages.into_iter().collect());
        self
    }

    pub fn strict_pages_to_process(mut self, v: bool) -> Self {
        self.options.strict_pages_to_process = v;
        self
    }

    pub fn output_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.options.output_folder = Some(folder.into());
        self
    }

    pub fn output_file_mask(mut self, mask: impl Into<String>) -> Self {
        self.options.output_file_mask = Some(mask.into());
        self
    }

    pub fn output_file_mask_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) -> String + Send + Sync + 'static,
    {
        self.options.output_file_mask_fn = Some(Arc::new(f));
        self
    }

    pub fn viewport_scale(mut self, scale: f32) -> Self {
        self.options.viewport_scale = scale;
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.options.password = Some(pwd.into());
        self
    }

    pub fn return_page_content(mut self, v: bool) -> Self {
        self.options.return_page_content = v;
        self
    }

    pub fn document_source(mut self, source: Arc<dyn DocumentSource>) -> Self {
        self.options.document_source = Some(source);
        self
    }

    pub fn surface_factory(mut self, factory: Arc<dyn RasterSurfaceFactory>) -> Self {
        self.options.surface_factory = Some(factory);
        self
    }

    pub fn progress_callback(mut self, cb: Arc<dyn ConversionProgressCallback>) -> Self {
        self.options.progress_callback = Some(cb);
        self
    }

    /// Build the options, validating constraints.
    pub fn build(self) -> Result<ConversionOptions, Pdf2PngError> {
        self.options.validate()?;
        Ok(self.options)
    }
}
