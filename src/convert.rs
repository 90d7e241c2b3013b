//! Conversion entry points.
//!
//! [`convert`] resolves the input on the async runtime, then runs the whole
//! load → select → render loop on one `spawn_blocking` thread. Pages are
//! processed strictly one after another: a page is fetched, rendered,
//! encoded, released and written before the next one is touched.

use crate::config::ConversionOptions;
use crate::error::Pdf2PngError;
use crate::output::PageOutput;
use crate::pdfium::PdfiumSource;
use crate::pipeline::input::{self, PdfInput, ResolvedInput};
use crate::pipeline::naming::PageNaming;
use crate::pipeline::render::{self, DocumentSource};
use crate::pipeline::surface::{PooledSurfaceFactory, RasterSurfaceFactory};
use crate::pipeline::{persist, select};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Render pages of a PDF file or buffer to PNG.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `input`: a path (`&str`, `String`, `&Path`, `PathBuf`) or PDF bytes
///   (`Vec<u8>`, `&[u8]`)
/// * `options`: conversion options
///
/// # Errors
/// Every error is fatal; no partial results are returned.
/// - [`Pdf2PngError::FileNotFound`] before the document is opened
/// - [`Pdf2PngError::InvalidPageRange`] in strict mode
/// - [`Pdf2PngError::DocumentLoad`] / [`Pdf2PngError::RenderFailed`] from
///   the engine
pub async fn convert(
    input: impl Into<PdfInput>,
    options: &ConversionOptions,
) -> Result<Vec<PageOutput>, Pdf2PngError> {
    let start = Instant::now();
    let resolved = input::resolve_input(input.into()).await?;
    info!(
        "Starting conversion: {} ({} bytes)",
        resolved.stem.as_deref().unwrap_or("<buffer>"),
        resolved.bytes.len()
    );

    let options = options.clone();
    let pages = tokio::task::spawn_blocking(move || -> Result<Vec<PageOutput>, Pdf2PngError> {
        let source = document_source(&options)?;
        let surfaces = surface_factory(&options);
        convert_blocking(&resolved, &options, source.as_ref(), surfaces.as_ref())
    })
    .await
    .map_err(|e| Pdf2PngError::Internal(format!("Render task panicked: {}", e)))??;

    info!(
        "Conversion complete: {} pages in {}ms",
        pages.len(),
        start.elapsed().as_millis()
    );
    Ok(pages)
}

/// Render pages of a PDF held in memory.
///
/// Output names use the `"buffer"` stem unless a mask is configured.
pub async fn convert_from_bytes(
    bytes: &[u8],
    options: &ConversionOptions,
) -> Result<Vec<PageOutput>, Pdf2PngError> {
    convert(bytes, options).await
}

/// Synchronous wrapper around [`convert`].
///
/// Creates a temporary tokio runtime internally; do not call from inside an
/// async context.
pub fn convert_sync(
    input: impl Into<PdfInput>,
    options: &ConversionOptions,
) -> Result<Vec<PageOutput>, Pdf2PngError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Pdf2PngError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(convert(input, options))
}

/// Open the document and return its page count without rendering.
///
/// Only `password` and `document_source` of `options` are used.
pub async fn page_count(
    input: impl Into<PdfInput>,
    options: &ConversionOptions,
) -> Result<usize, Pdf2PngError> {
    let resolved = input::resolve_input(input.into()).await?;
    let options = options.clone();
    tokio::task::spawn_blocking(move || -> Result<usize, Pdf2PngError> {
        let source = document_source(&options)?;
        let document = source.load(&resolved.bytes, options.password.as_deref())?;
        Ok(document.page_count())
    })
    .await
    .map_err(|e| Pdf2PngError::Internal(format!("Page-count task panicked: {}", e)))?
}

// ── Internal helpers ─────────────────────────────────────────────────────

fn document_source(options: &ConversionOptions) -> Result<Arc<dyn DocumentSource>, Pdf2PngError> {
    match options.document_source {
        Some(ref source) => Ok(Arc::clone(source)),
        None => Ok(Arc::new(PdfiumSource::bind()?)),
    }
}

fn surface_factory(options: &ConversionOptions) -> Arc<dyn RasterSurfaceFactory> {
    match options.surface_factory {
        Some(ref factory) => Arc::clone(factory),
        None => Arc::new(PooledSurfaceFactory::new()),
    }
}

/// Load, select and render. Runs on a blocking thread.
fn convert_blocking(
    input: &ResolvedInput,
    options: &ConversionOptions,
    source: &dyn DocumentSource,
    surfaces: &dyn RasterSurfaceFactory,
) -> Result<Vec<PageOutput>, Pdf2PngError> {
    options.validate()?;
    let document = source.load(&input.bytes, options.password.as_deref())?;
    let total_pages = document.page_count();

    let selection = select::select_pages(
        options.pages_to_process.as_deref(),
        total_pages,
        options.strict_pages_to_process,
    )?;

    if let Some(ref folder) = options.output_folder {
        persist::ensure_output_folder(folder)?;
    }

    let naming = PageNaming::resolve(options, input.stem.as_deref());
    let progress = options.progress_callback.as_ref();

    for &requested in &selection.skipped {
        warn!(
            "Skipping page {} (out of range, total={})",
            requested, total_pages
        );
        if let Some(cb) = progress {
            cb.on_page_skipped(requested);
        }
    }
    if let Some(cb) = progress {
        cb.on_conversion_start(selection.pages.len());
    }

    let mut outputs = Vec::with_capacity(selection.pages.len());
    for &page_number in &selection.pages {
        let rendered = render::render_page(
            &*document,
            surfaces,
            page_number,
            options.viewport_scale,
        )?;

        let name = naming.name_for(page_number);
        let path = match options.output_folder {
            Some(ref folder) => Some(persist::write_page(folder, &name, &rendered.png)?),
            None => None,
        };

        if let Some(cb) = progress {
            cb.on_page_rendered(
                page_number,
                rendered.viewport.width,
                rendered.viewport.height,
                rendered.png.len(),
            );
        }

        outputs.push(PageOutput {
            page_number,
            name,
            content: if options.return_page_content {
                rendered.png
            } else {
                Vec::new()
            },
            path,
            width: rendered.viewport.width,
            height: rendered.viewport.height,
        });
    }

    if let Some(cb) = progress {
        cb.on_conversion_complete(outputs.len());
    }
    Ok(outputs)
}
