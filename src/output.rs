//! Result types returned by the conversion entry points.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOutput {
    /// 1-indexed page number, matching the source document's numbering.
    pub page_number: usize,

    /// Derived file name, e.g. `report_page_3.png`.
    pub name: String,

    /// Encoded PNG bytes. Empty when `return_page_content` is disabled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<u8>,

    /// Absolute path of the written file, when an output folder is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Viewport width in pixels.
    pub width: u32,

    /// Viewport height in pixels.
    pub height: u32,
}
