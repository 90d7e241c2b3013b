//! Page selection: turn the caller's page list into a render plan.
//!
//! Two policies share one function. In strict mode any out-of-range page
//! number is an error; in lenient mode (the default) it is dropped from the
//! plan and reported as skipped, so callers can ask for "pages 1–10" across
//! PDFs of different lengths without checking each one first.
//!
//! Order and duplicates in the requested list are preserved either way.

use crate::error::{Pdf2PngError, RangeViolation};

/// The validated render plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    /// 1-indexed page numbers to render, in order. All within `[1, total]`.
    pub pages: Vec<usize>,
    /// Requested page numbers that were dropped (lenient mode only).
    pub skipped: Vec<i64>,
}

/// Build the render plan for a document with `total_pages` pages.
///
/// `requested = None` selects every page in document order.
pub fn select_pages(
    requested: Option<&[i64]>,
    total_pages: usize,
    strict: bool,
) -> Result<PageSelection, Pdf2PngError> {
    let Some(requested) = requested else {
        return Ok(PageSelection {
            pages: (1..=total_pages).collect(),
            skipped: Vec::new(),
        });
    };

    if strict {
        if let Some(&page) = requested.iter().find(|&&p| p < 1) {
            return Err(Pdf2PngError::InvalidPageRange {
                page,
                total: total_pages,
                violation: RangeViolation::BelowOne,
            });
        }
        if let Some(&page) = requested.iter().find(|&&p| !in_range(p, total_pages)) {
            return Err(Pdf2PngError::InvalidPageRange {
                page,
                total: total_pages,
                violation: RangeViolation::AboveTotal,
            });
        }
    }

    let (pages, skipped): (Vec<i64>, Vec<i64>) = requested
        .iter()
        .copied()
        .partition(|&p| in_range(p, total_pages));

    Ok(PageSelection {
        pages: pages.into_iter().map(|p| p as usize).collect(),
        skipped,
    })
}

fn in_range(page: i64, total_pages: usize) -> bool {
    page >= 1 && (page as u64) <= total_pages as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_pages_when_nothing_requested() {
        let sel = select_pages(None, 4, false).unwrap();
        assert_eq!(sel.pages, vec![1, 2, 3, 4]);
        assert!(sel.skipped.is_empty());
    }

    #[test]
    fn empty_document_selects_nothing() {
        let sel = select_pages(None, 0, true).unwrap();
        assert!(sel.pages.is_empty());
    }

    #[test]
    fn lenient_skips_out_of_range_keeping_order_and_duplicates() {
        let sel = select_pages(Some([3, 0, 1, 9, 3, -2].as_slice()), 4, false).unwrap();
        assert_eq!(sel.pages, vec![3, 1, 3]);
        assert_eq!(sel.skipped, vec![0, 9, -2]);
    }

    #[test]
    fn strict_rejects_below_one() {
        let err = select_pages(Some([1, 0].as_slice()), 4, true).unwrap_err();
        assert!(matches!(
            err,
            Pdf2PngError::InvalidPageRange {
                page: 0,
                violation: RangeViolation::BelowOne,
                ..
            }
        ));
    }

    #[test]
    fn strict_rejects_above_total() {
        let err = select_pages(Some([2, 5].as_slice()), 4, true).unwrap_err();
        assert!(matches!(
            err,
            Pdf2PngError::InvalidPageRange {
                page: 5,
                total: 4,
                violation: RangeViolation::AboveTotal,
            }
        ));
    }

    #[test]
    fn strict_reports_below_one_first() {
        let err = select_pages(Some([7, -1].as_slice()), 4, true).unwrap_err();
        assert!(matches!(
            err,
            Pdf2PngError::InvalidPageRange {
                violation: RangeViolation::BelowOne,
                ..
            }
        ));
    }

    #[test]
    fn strict_accepts_in_range_list() {
        let sel = select_pages(Some([4, 2, 2].as_slice()), 4, true).unwrap();
        assert_eq!(sel.pages, vec![4, 2, 2]);
        assert!(sel.skipped.is_empty());
    }
}
