//! Raster surfaces: the pixel buffers pages are rendered into, and their
//! PNG encoding.
//!
//! Surfaces are handed out by a [`RasterSurfaceFactory`] and must be given
//! back with [`RasterSurfaceFactory::destroy`] once the page has been
//! encoded. The default [`PooledSurfaceFactory`] keeps the released buffer
//! around and zero-fills it before the next page gets it, so consecutive
//! pages of similar size do not reallocate and never see each other's pixels.

use crate::error::Pdf2PngError;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::sync::Mutex;
use tracing::debug;

/// An RGBA pixel buffer sized to a page viewport.
#[derive(Debug)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Wrap an existing RGBA buffer.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Mutable pixel access for the rendering engine.
    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    /// Encode the surface as a PNG byte stream.
    ///
    /// PNG is lossless; rendered text stays crisp.
    pub fn encode_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut buf = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        debug!(
            "Encoded {}x{} surface → {} bytes PNG",
            self.width(),
            self.height(),
            buf.len()
        );
        Ok(buf)
    }

    /// Give up the surface and return its backing buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.image.into_raw()
    }
}

/// Allocates and recycles raster surfaces.
///
/// `create` and `destroy` are always called in pairs by the render loop,
/// including when rendering or encoding failed in between.
pub trait RasterSurfaceFactory: Send + Sync {
    /// Allocate a blank (fully transparent) surface of `width × height` px.
    fn create(&self, width: u32, height: u32) -> Result<RasterSurface, Pdf2PngError>;

    /// Take a surface back once its page is encoded.
    fn destroy(&self, surface: RasterSurface) {
        drop(surface);
    }
}

/// Default factory: reuses the last released buffer.
#[derive(Debug, Default)]
pub struct PooledSurfaceFactory {
    spare: Mutex<Option<Vec<u8>>>,
}

impl PooledSurfaceFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when a released buffer is waiting to be reused.
    pub fn has_spare(&self) -> bool {
        self.spare
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }
}

impl RasterSurfaceFactory for PooledSurfaceFactory {
    fn create(&self, width: u32, height: u32) -> Result<RasterSurface, Pdf2PngError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .filter(|_| width > 0 && height > 0)
            .ok_or(Pdf2PngError::SurfaceTooLarge { width, height })?;

        let mut buf = self
            .spare
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
            .unwrap_or_default();

        // Recycled pixels must never leak into the next page.
        buf.clear();
        buf.resize(len, 0);

        let image = RgbaImage::from_raw(width, height, buf)
            .ok_or_else(|| Pdf2PngError::Internal(format!("surface buffer mismatch for {width}x{height}")))?;
        Ok(RasterSurface::from_image(image))
    }

    fn destroy(&self, surface: RasterSurface) {
        let buf = surface.into_raw();
        *self
            .spare
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(buf);
    }
}
