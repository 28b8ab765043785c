//! Source pool construction from a sampled set of candidate files
//!
//! Each selected file is decoded, normalized to the shared thumbnail
//! geometry, and reduced to its mean color. A decode or normalization
//! failure on any file is fatal to the run; the pool never silently drops
//! candidates, so the sampled composition is exactly what the seed chose.

use crate::color::{ColorSummary, mean_color};
use crate::io::error::{MosaicError, Result, invalid_image_at};
use crate::io::files::sample_candidates;
use crate::io::image::load_image;
use crate::io::progress::ProgressManager;
use crate::tile::normalize::normalize;
use image::RgbImage;
use rand::Rng;
use std::path::Path;

/// A normalized source thumbnail paired with its mean color
///
/// Entries are immutable once built and may be matched to any number of
/// grid cells.
#[derive(Debug, Clone)]
pub struct SourceEntry {
    /// Thumbnail at the shared tile dimensions
    pub thumbnail: RgbImage,
    /// Mean color of the thumbnail in [0, 1] channel space
    pub summary: ColorSummary,
}

impl SourceEntry {
    /// Build an entry from a single candidate file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be decoded or normalized; the
    /// error names the offending path.
    pub fn from_file(path: &Path, aspect_ratio: f64, thumb_width: u32) -> Result<Self> {
        let raw = load_image(path)?;
        let thumbnail = normalize(&raw, aspect_ratio, thumb_width).map_err(|e| match e {
            MosaicError::InvalidImage { reason, .. } => invalid_image_at(path, &reason),
            other => other,
        })?;
        let summary = mean_color(&thumbnail)?;
        Ok(Self { thumbnail, summary })
    }
}

/// Sample candidate files and build the source pool
///
/// Draws `num_sources` distinct files from `dir` using the injected random
/// source, then normalizes and reduces each one. Entry order follows the
/// sample order and serves as the matcher's tie-break order.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed, holds fewer
/// candidates than requested, or any selected file fails to decode or
/// normalize.
pub fn build_pool(
    dir: &Path,
    num_sources: usize,
    aspect_ratio: f64,
    thumb_width: u32,
    rng: &mut impl Rng,
    progress: Option<&ProgressManager>,
) -> Result<Vec<SourceEntry>> {
    let paths = sample_candidates(dir, num_sources, rng)?;

    let mut entries = Vec::with_capacity(paths.len());
    for path in &paths {
        entries.push(SourceEntry::from_file(path, aspect_ratio, thumb_width)?);
        if let Some(pm) = progress {
            pm.tick();
        }
    }
    Ok(entries)
}
