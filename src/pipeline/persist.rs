//! Writing rendered pages to the output folder.
//!
//! Runs on the blocking render thread, one page at a time, so no locking is
//! needed around the folder.

use crate::error::Pdf2PngError;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Create `folder` (and its parents) if it does not exist yet.
pub fn ensure_output_folder(folder: &Path) -> Result<(), Pdf2PngError> {
    if folder.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(folder).map_err(|source| Pdf2PngError::OutputDirFailed {
        path: folder.to_path_buf(),
        source,
    })?;
    debug!("Created output folder {}", folder.display());
    Ok(())
}

/// Write `png` to `<folder>/<name>` and return the absolute path written.
///
/// The path is made absolute against the current directory and `.`/`..`
/// segments are folded lexically. Symlinks are not resolved.
pub fn write_page(folder: &Path, name: &str, png: &[u8]) -> Result<PathBuf, Pdf2PngError> {
    let joined = folder.join(name);
    let path = std::path::absolute(&joined)
        .map(|p| normalize_lexically(&p))
        .map_err(|source| Pdf2PngError::OutputWriteFailed {
            path: joined.clone(),
            source,
        })?;

    std::fs::write(&path, png).map_err(|source| Pdf2PngError::OutputWriteFailed {
        path: path.clone(),
        source,
    })?;

    debug!("Wrote {} ({} bytes)", path.display(), png.len());
    Ok(path)
}

/// Drop `.` segments and let `..` pop the previous normal segment.
/// `..` at the root stays at the root.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_folder() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        ensure_output_folder(&nested).unwrap();
        assert!(nested.is_dir());
        // Second call is a no-op.
        ensure_output_folder(&nested).unwrap();
    }

    #[test]
    fn writes_and_returns_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_page(dir.path(), "doc_page_1.png", b"png-bytes").unwrap();
        assert!(path.is_absolute());
        assert_eq!(path.file_name().unwrap(), "doc_page_1.png");
        assert_eq!(std::fs::read(&path).unwrap(), b"png-bytes");
    }

    #[test]
    fn parent_segments_are_folded() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("a/../b");
        ensure_output_folder(&folder).unwrap();

        let path = write_page(&folder, "buffer_page_1.png", b"png").unwrap();

        let expected = std::path::absolute(dir.path().join("b/buffer_page_1.png")).unwrap();
        assert_eq!(path, expected);
        assert!(!path.components().any(|c| c == Component::ParentDir));
        assert_eq!(std::fs::read(&path).unwrap(), b"png");
    }

    #[test]
    fn normalize_handles_dots_and_root() {
        assert_eq!(
            normalize_lexically(Path::new("/x/./y/../z")),
            PathBuf::from("/x/z")
        );
        assert_eq!(normalize_lexically(Path::new("/../x")), PathBuf::from("/x"));
    }

    #[test]
    fn folder_blocked_by_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, b"x").unwrap();
        let err = ensure_output_folder(&blocker.join("sub")).unwrap_err();
        assert!(matches!(err, Pdf2PngError::OutputDirFailed { .. }));
    }
}
