//! Image decode and encode glue with path-tagged errors

use crate::io::error::{MosaicError, Result};
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// Decode an image file into a pixel buffer
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] naming the file if it cannot be opened
/// or decoded.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Encode the composite canvas to disk
///
/// The parent directory is created if missing. Nothing is written until the
/// full canvas exists, so a failed run never leaves a partial output file.
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] if the parent directory cannot be
/// created, or [`MosaicError::ImageExport`] if encoding fails.
pub fn save_composite(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb};

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| {
            unreachable!("tempdir must be created: {e}");
        });
        let path = dir.path().join("nested").join("out.png");
        let canvas = RgbImage::from_pixel(8, 6, Rgb([10, 20, 30]));

        assert!(save_composite(&canvas, &path).is_ok());
        let reloaded = load_image(&path).unwrap_or_else(|e| {
            unreachable!("saved file must reload: {e}");
        });
        assert_eq!(reloaded.dimensions(), (8, 6));
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let result = load_image(Path::new("does/not/exist.png"));
        assert!(matches!(result, Err(MosaicError::ImageLoad { .. })));
    }
}
