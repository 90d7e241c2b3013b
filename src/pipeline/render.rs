//! Page rendering: the document-engine seam and the per-page
//! acquire → render → encode → release cycle.
//!
//! The engine is reached only through [`DocumentSource`], [`LoadedDocument`]
//! and [`DocumentPage`]. [`crate::pdfium::PdfiumSource`] is the production
//! implementation; tests plug in fakes.

use crate::error::Pdf2PngError;
use crate::pipeline::surface::{RasterSurface, RasterSurfaceFactory};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pixel-space rectangle a page is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Scale a page size in PDF points. Fractional pixels are truncated and
    /// each side is at least one pixel.
    pub fn from_points(width_pts: f32, height_pts: f32, scale: f32) -> Self {
        let px = |pts: f32| ((pts * scale).floor() as u32).max(1);
        Self {
            width: px(width_pts),
            height: px(height_pts),
        }
    }
}

/// Opens documents from raw bytes.
pub trait DocumentSource: Send + Sync {
    fn load<'a>(
        &'a self,
        bytes: &'a [u8],
        password: Option<&'a str>,
    ) -> Result<Box<dyn LoadedDocument + 'a>, Pdf2PngError>;
}

/// An opened document.
pub trait LoadedDocument {
    fn page_count(&self) -> usize;

    /// Fetch a page by 1-indexed number.
    fn page(&self, page_number: usize) -> Result<Box<dyn DocumentPage + '_>, Pdf2PngError>;
}

/// One page of an opened document.
pub trait DocumentPage {
    fn viewport(&self, scale: f32) -> Viewport;

    /// Draw the page into `surface`, which is sized to `viewport(scale)`.
    fn render(&self, surface: &mut RasterSurface) -> Result<(), Pdf2PngError>;
}

/// A page rendered and encoded, not yet named or persisted.
#[derive(Debug)]
pub struct RenderedPage {
    pub viewport: Viewport,
    pub png: Vec<u8>,
}

/// Render one page to PNG bytes.
///
/// The surface is always handed back to `surfaces`, whether rendering and
/// encoding succeeded or not.
pub fn render_page(
    document: &dyn LoadedDocument,
    surfaces: &dyn RasterSurfaceFactory,
    page_number: usize,
    scale: f32,
) -> Result<RenderedPage, Pdf2PngError> {
    let page = document.page(page_number)?;
    let viewport = page.viewport(scale);

    let mut surface = surfaces.create(viewport.width, viewport.height)?;
    let encoded = page.render(&mut surface).and_then(|()| {
        surface
            .encode_png()
            .map_err(|e| Pdf2PngError::RenderFailed {
                page: page_number,
                detail: format!("PNG encoding failed: {e}"),
            })
    });
    surfaces.destroy(surface);
    let png = encoded?;

    debug!(
        "Rendered page {} → {}x{} px, {} bytes",
        page_number,
        viewport.width,
        viewport.height,
        png.len()
    );

    Ok(RenderedPage { viewport, png })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::surface::PooledSurfaceFactory;
    use image::Rgba;

    struct OnePageDoc {
        fail: bool,
    }

    struct SolidPage {
        fail: bool,
    }

    impl LoadedDocument for OnePageDoc {
        fn page_count(&self) -> usize {
            1
        }

        fn page(&self, _page_number: usize) -> Result<Box<dyn DocumentPage + '_>, Pdf2PngError> {
            Ok(Box::new(SolidPage { fail: self.fail }))
        }
    }

    impl DocumentPage for SolidPage {
        fn viewport(&self, scale: f32) -> Viewport {
            Viewport::from_points(20.0, 10.0, scale)
        }

        fn render(&self, surface: &mut RasterSurface) -> Result<(), Pdf2PngError> {
            if self.fail {
                return Err(Pdf2PngError::RenderFailed {
                    page: 1,
                    detail: "broken content stream".into(),
                });
            }
            for p in surface.image_mut().pixels_mut() {
                *p = Rgba([0, 0, 255, 255]);
            }
            Ok(())
        }
    }

    #[test]
    fn viewport_truncates_and_clamps() {
        assert_eq!(
            Viewport::from_points(612.0, 792.0, 1.0),
            Viewport { width: 612, height: 792 }
        );
        assert_eq!(
            Viewport::from_points(100.7, 50.2, 1.5),
            Viewport { width: 151, height: 75 }
        );
        assert_eq!(
            Viewport::from_points(0.1, 0.1, 1.0),
            Viewport { width: 1, height: 1 }
        );
    }

    #[test]
    fn renders_at_scale() {
        let surfaces = PooledSurfaceFactory::new();
        let page = render_page(&OnePageDoc { fail: false }, &surfaces, 1, 2.0).unwrap();
        assert_eq!(page.viewport, Viewport { width: 40, height: 20 });
        let img = image::load_from_memory(&page.png).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(5, 5), &Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn surface_released_on_failure() {
        let surfaces = PooledSurfaceFactory::new();
        let err = render_page(&OnePageDoc { fail: true }, &surfaces, 1, 1.0).unwrap_err();
        assert!(matches!(err, Pdf2PngError::RenderFailed { page: 1, .. }));
        assert!(surfaces.has_spare());
    }
}
