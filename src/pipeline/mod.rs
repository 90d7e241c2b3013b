//! Pipeline stages for PDF-to-PNG conversion.
//!
//! Each submodule implements exactly one step, so each can be tested on its
//! own and the rendering engine can be swapped without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ select ──▶ render ──▶ naming ──▶ persist
//! (path/bytes) (plan)  (surface+PNG) (file name) (disk)
//! ```
//!
//! 1. [`input`]: read the path (or take the buffer) and remember the stem
//! 2. [`select`]: apply the strict/lenient page policy, build the plan
//! 3. [`render`]: engine seam plus the acquire/render/encode/release cycle;
//!    [`surface`] owns the pixel buffers and PNG encoding
//! 4. [`naming`]: `<stem>_page_<n>.png` or the caller's mask function
//! 5. [`persist`]: optional write into the output folder

pub mod input;
pub mod naming;
pub mod persist;
pub mod render;
pub mod select;
pub mod surface;
