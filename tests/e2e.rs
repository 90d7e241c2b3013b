//! End-to-end tests against the real pdfium library.
//!
//! These use PDF files in `./test_cases/` and need a pdfium shared library
//! (see `PDFIUM_LIB_PATH`). They are gated behind the `E2E_ENABLED`
//! environment variable so they do not run in CI unless explicitly requested.
//!
//! Run with:
//!   E2E_ENABLED=1 PDFIUM_LIB_PATH=./libpdfium.so cargo test --test e2e -- --nocapture

use edgequake_pdf2png::{convert, page_count, ConversionOptions, Pdf2PngError};
use std::path::PathBuf;

fn test_cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_cases")
}

/// Skip this test if E2E_ENABLED is not set *or* no PDF file at `path`.
macro_rules! e2e_skip_unless_ready {
    ($path:expr) => {{
        if std::env::var("E2E_ENABLED").is_err() {
            println!("SKIP: set E2E_ENABLED=1 to run e2e tests");
            return;
        }
        let p: PathBuf = $path;
        if !p.exists() {
            println!("SKIP: test file not found: {}", p.display());
            return;
        }
        p
    }};
}

#[tokio::test]
async fn test_render_all_pages() {
    let path = e2e_skip_unless_ready!(test_cases_dir().join("sample.pdf"));

    let total = page_count(&path, &ConversionOptions::default())
        .await
        .expect("page_count() should succeed");
    let pages = convert(&path, &ConversionOptions::default())
        .await
        .expect("conversion should succeed");

    assert_eq!(pages.len(), total);
    for (i, page) in pages.iter().enumerate() {
        assert_eq!(page.page_number, i + 1);
        assert_eq!(page.name, format!("sample_page_{}.png", i + 1));
        let decoded = image::load_from_memory(&page.content).expect("valid PNG");
        assert_eq!((decoded.width(), decoded.height()), (page.width, page.height));
    }
}

#[tokio::test]
async fn test_render_from_buffer_at_double_scale() {
    let path = e2e_skip_unless_ready!(test_cases_dir().join("sample.pdf"));
    let bytes = std::fs::read(&path).unwrap();

    let base = convert(
        bytes.as_slice(),
        &ConversionOptions::builder().pages_to_process([1]).build().unwrap(),
    )
    .await
    .expect("scale 1 render");
    let doubled = convert(
        bytes,
        &ConversionOptions::builder()
            .pages_to_process([1])
            .viewport_scale(2.0)
            .build()
            .unwrap(),
    )
    .await
    .expect("scale 2 render");

    assert_eq!(base[0].name, "buffer_page_1.png");
    assert!(doubled[0].width >= base[0].width * 2 - 1);
    assert!(doubled[0].height >= base[0].height * 2 - 1);
}

#[tokio::test]
async fn test_corrupt_pdf_is_load_error() {
    if std::env::var("E2E_ENABLED").is_err() {
        println!("SKIP");
        return;
    }

    let err = convert(b"%PDF-1.7 truncated".as_slice(), &ConversionOptions::default())
        .await
        .unwrap_err();
    assert!(
        matches!(err, Pdf2PngError::DocumentLoad { .. }),
        "got: {err}"
    );
}
