//! Candidate file listing and seeded sampling without replacement

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{MosaicError, Result};
use rand::Rng;
use std::path::{Path, PathBuf};

/// List candidate image files in a directory, sorted by path
///
/// Only regular files with a supported raster extension are returned. The
/// sort keeps the listing independent of directory iteration order so a
/// fixed seed always draws the same sample.
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] if the directory cannot be read.
pub fn list_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| MosaicError::FileSystem {
        path: dir.to_path_buf(),
        operation: "list directory",
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| MosaicError::FileSystem {
                path: dir.to_path_buf(),
                operation: "read directory entry",
                source: e,
            })?
            .path();
        if path.is_file() && has_supported_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Draw `num_sources` distinct candidate paths uniformly at random
///
/// # Errors
///
/// Returns [`MosaicError::InsufficientSources`] if the directory holds fewer
/// candidates than requested, or a [`MosaicError::FileSystem`] error from the
/// listing itself.
pub fn sample_candidates(
    dir: &Path,
    num_sources: usize,
    rng: &mut impl Rng,
) -> Result<Vec<PathBuf>> {
    let files = list_candidates(dir)?;
    if num_sources > files.len() {
        return Err(MosaicError::InsufficientSources {
            requested: num_sources,
            available: files.len(),
            directory: dir.to_path_buf(),
        });
    }

    let chosen = rand::seq::index::sample(rng, files.len(), num_sources);
    Ok(chosen
        .iter()
        .filter_map(|index| files.get(index).cloned())
        .collect())
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lowered = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lowered.as_str())
        })
}
