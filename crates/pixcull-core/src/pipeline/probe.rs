//! Header-only dimension reads.
//!
//! Only enough of each file is parsed to learn its size; pixel data is never
//! decoded.

use image::ImageReader;
use std::path::Path;

use crate::error::FileError;
use crate::types::Resolution;

/// Read the pixel dimensions of the image at `path`.
///
/// The format is sniffed from content first and falls back to the extension,
/// so a PNG saved as `.jpg` still probes correctly.
pub fn dimensions(path: &Path) -> Result<Resolution, FileError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| FileError::Probe {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if reader.format().is_none() {
        return Err(FileError::UnsupportedFormat {
            path: path.to_path_buf(),
            format: path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_lowercase(),
        });
    }

    let (width, height) = reader.into_dimensions().map_err(|e| FileError::Probe {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(Resolution::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageFormat};

    #[test]
    fn test_reads_png_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.png");
        GrayImage::new(64, 48).save(&path).unwrap();

        assert_eq!(dimensions(&path).unwrap(), Resolution::new(64, 48));
    }

    #[test]
    fn test_format_detected_by_content() {
        let dir = tempfile::tempdir().unwrap();
        let misnamed = dir.path().join("actually_png.jpg");
        GrayImage::new(10, 20)
            .save_with_format(&misnamed, ImageFormat::Png)
            .unwrap();

        assert_eq!(dimensions(&misnamed).unwrap(), Resolution::new(10, 20));
    }

    #[test]
    fn test_corrupt_file_is_probe_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nnot really").unwrap();

        assert!(matches!(dimensions(&path), Err(FileError::Probe { .. })));
    }

    #[test]
    fn test_svg_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.svg");
        std::fs::write(
            &path,
            br#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"/>"#,
        )
        .unwrap();

        match dimensions(&path) {
            Err(FileError::UnsupportedFormat { format, .. }) => assert_eq!(format, "svg"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_probe_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = dimensions(&dir.path().join("gone.png"));
        assert!(matches!(result, Err(FileError::Probe { .. })));
    }
}
