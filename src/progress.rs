//! Progress-callback trait for per-page conversion events.
//!
//! Inject an [`Arc<dyn ConversionProgressCallback>`] via
//! [`crate::config::ConversionOptionsBuilder::progress_callback`] to receive
//! events as the render loop works through the document.
//!
//! Events fire from the blocking render thread, in page order.
//!
//! # Example
//!
//! ```rust
//! use edgequake_pdf2png::{ConversionProgressCallback, ConversionOptions};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     rendered: AtomicUsize,
//! }
//!
//! impl ConversionProgressCallback for CountingCallback {
//!     fn on_page_rendered(&self, page_number: usize, width: u32, height: u32, png_len: usize) {
//!         self.rendered.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("Page {page_number}: {width}x{height} ({png_len} bytes)");
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback { rendered: AtomicUsize::new(0) });
//!
//! let options = ConversionOptions::builder()
//!     .progress_callback(counter as Arc<dyn ConversionProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use std::sync::Arc;

/// Called by the conversion pipeline as it processes each page.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
pub trait ConversionProgressCallback: Send + Sync {
    /// Called once the render plan is known, before the first page.
    fn on_conversion_start(&self, planned_pages: usize) {
        let _ = planned_pages;
    }

    /// Called for each requested page number dropped as out of range.
    fn on_page_skipped(&self, requested: i64) {
        let _ = requested;
    }

    /// Called after a page is encoded (and written, if an output folder is set).
    fn on_page_rendered(&self, page_number: usize, width: u32, height: u32, png_len: usize) {
        let _ = (page_number, width, height, png_len);
    }

    /// Called once after the last page.
    fn on_conversion_complete(&self, rendered_pages: usize) {
        let _ = rendered_pages;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionOptions`].
pub type ProgressCallback = Arc<dyn ConversionProgressCallback>;
