//! PDFium-backed [`DocumentSource`].
//!
//! PDFium is a blocking C library; everything here runs on the render
//! thread spawned by [`crate::convert::convert`].
//!
//! ## Library lookup
//!
//! 1. `PDFIUM_LIB_PATH`: explicit path to `libpdfium.{so,dylib}` / `pdfium.dll`
//! 2. the platform library name in the current directory
//! 3. the system library search path

use crate::error::Pdf2PngError;
use crate::pipeline::render::{DocumentPage, DocumentSource, LoadedDocument, Viewport};
use crate::pipeline::surface::RasterSurface;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming an explicit pdfium library to load.
pub const PDFIUM_LIB_PATH_ENV: &str = "PDFIUM_LIB_PATH";

/// Renders documents with PDFium.
pub struct PdfiumSource {
    pdfium: Pdfium,
}

impl PdfiumSource {
    /// Bind to a pdfium library using the lookup order in the module docs.
    pub fn bind() -> Result<Self, Pdf2PngError> {
        if let Ok(path) = std::env::var(PDFIUM_LIB_PATH_ENV) {
            if !path.is_empty() {
                return Self::bind_to_path(Path::new(&path));
            }
        }

        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| Pdf2PngError::PdfiumBindingFailed(e.to_string()))?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    /// Bind to the pdfium library at an explicit `path`.
    pub fn bind_to_path(path: &Path) -> Result<Self, Pdf2PngError> {
        let bindings = Pdfium::bind_to_library(path).map_err(|e| {
            Pdf2PngError::PdfiumBindingFailed(format!("'{}': {}", path.display(), e))
        })?;
        debug!("Bound pdfium from {}", path.display());
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl DocumentSource for PdfiumSource {
    fn load<'a>(
        &'a self,
        bytes: &'a [u8],
        password: Option<&'a str>,
    ) -> Result<Box<dyn LoadedDocument + 'a>, Pdf2PngError> {
        let document = self
            .pdfium
            .load_pdf_from_byte_slice(bytes, password)
            .map_err(|e| map_load_error(format!("{:?}", e), password))?;

        info!("PDF loaded: {} pages", document.pages().len());
        Ok(Box::new(PdfiumDocument { document }))
    }
}

/// Classify a pdfium load failure from its debug text.
///
/// pdfium reports a bad or missing password as `PdfiumLibraryInternalError(
/// PasswordError)`; anything else is a generic load failure.
fn map_load_error(detail: String, password: Option<&str>) -> Pdf2PngError {
    if detail.contains("Password") || detail.contains("password") {
        if password.is_some() {
            Pdf2PngError::WrongPassword
        } else {
            Pdf2PngError::PasswordRequired
        }
    } else {
        Pdf2PngError::DocumentLoad { detail }
    }
}

struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
}

impl LoadedDocument for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page(&self, page_number: usize) -> Result<Box<dyn DocumentPage + '_>, Pdf2PngError> {
        let index = page_number
            .checked_sub(1)
            .ok_or_else(|| Pdf2PngError::RenderFailed {
                page: page_number,
                detail: "page numbers start at 1".into(),
            })?;

        let page = self
            .document
            .pages()
            .get(index as u16)
            .map_err(|e| Pdf2PngError::RenderFailed {
                page: page_number,
                detail: format!("{:?}", e),
            })?;

        Ok(Box::new(PdfiumPage { page, page_number }))
    }
}

struct PdfiumPage<'a> {
    page: PdfPage<'a>,
    page_number: usize,
}

impl DocumentPage for PdfiumPage<'_> {
    fn viewport(&self, scale: f32) -> Viewport {
        Viewport::from_points(self.page.width().value, self.page.height().value, scale)
    }

    fn render(&self, surface: &mut RasterSurface) -> Result<(), Pdf2PngError> {
        let render_config = PdfRenderConfig::new()
            .set_target_size(surface.width() as i32, surface.height() as i32)
            .render_form_data(true);

        let bitmap = self
            .page
            .render_with_config(&render_config)
            .map_err(|e| Pdf2PngError::RenderFailed {
                page: self.page_number,
                detail: format!("{:?}", e),
            })?;

        // `replace` clips to the surface if the bitmap size ever differs.
        let rendered = bitmap.as_image().to_rgba8();
        image::imageops::replace(surface.image_mut(), &rendered, 0, 0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSWORD_ERROR: &str = "PdfiumLibraryInternalError(PasswordError)";

    #[test]
    fn password_error_without_password_asks_for_one() {
        let err = map_load_error(PASSWORD_ERROR.into(), None);
        assert!(matches!(err, Pdf2PngError::PasswordRequired));
    }

    #[test]
    fn password_error_with_password_is_wrong_password() {
        let err = map_load_error(PASSWORD_ERROR.into(), Some("guess"));
        assert!(matches!(err, Pdf2PngError::WrongPassword));
    }

    #[test]
    fn other_failures_keep_the_detail() {
        let err = map_load_error("PdfiumLibraryInternalError(FormatError)".into(), Some("pw"));
        match err {
            Pdf2PngError::DocumentLoad { detail } => assert!(detail.contains("FormatError")),
            other => panic!("expected DocumentLoad, got {other:?}"),
        }
    }
}
