//! Output file naming.
//!
//! Resolved once per conversion, then applied to each page number.

use crate::config::{ConversionOptions, OutputFileMaskFn};

/// Stem used for buffer input when no mask is configured.
pub const DEFAULT_OUTPUT_FILE_MASK: &str = "buffer";

/// How page file names are produced.
#[derive(Clone)]
pub enum PageNaming {
    /// Caller-supplied function returns the full name.
    Custom(OutputFileMaskFn),
    /// `<stem>_page_<n>.png`.
    Stem(String),
}

impl PageNaming {
    /// Pick the naming rule: mask function, then mask, then the input file's
    /// stem, then [`DEFAULT_OUTPUT_FILE_MASK`].
    pub fn resolve(options: &ConversionOptions, input_stem: Option<&str>) -> Self {
        if let Some(ref f) = options.output_file_mask_fn {
            return PageNaming::Custom(f.clone());
        }
        let stem = options
            .output_file_mask
            .as_deref()
            .filter(|m| !m.is_empty())
            .or(input_stem.filter(|s| !s.is_empty()))
            .unwrap_or(DEFAULT_OUTPUT_FILE_MASK);
        PageNaming::Stem(stem.to_string())
    }

    pub fn name_for(&self, page_number: usize) -> String {
        match self {
            PageNaming::Custom(f) => f(page_number),
            PageNaming::Stem(stem) => format!("{stem}_page_{page_number}.png"),
        }
    }
}
