//! End-to-end orchestration of the mosaic pipeline
//!
//! Wiring order: sample and normalize the source pool, downsample the
//! target to one color per cell, match every cell against the pool, then
//! paste the winners into the composite canvas.

use crate::io::error::{Result, invalid_parameter};
use crate::io::image::load_image;
use crate::io::progress::ProgressManager;
use crate::mosaic::compositor::composite;
use crate::mosaic::matcher::best_match;
use crate::mosaic::sampler::sample_target;
use crate::tile::normalize::thumb_height_for;
use crate::tile::pool::build_pool;
use image::{GenericImageView, RgbImage};
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Immutable per-run configuration for the mosaic pipeline
#[derive(Debug, Clone)]
pub struct MosaicConfig {
    /// Path to the target image file
    pub target: PathBuf,
    /// Directory of candidate source images
    pub sources_dir: PathBuf,
    /// Number of source images to sample from the directory
    pub num_sources: usize,
    /// Grid dimension, applied to both axes
    pub num_tiles: u32,
    /// Output width budget in pixels before tile rounding
    pub max_width: u32,
    /// Seed for the source sampling random state
    pub seed: u64,
}

impl MosaicConfig {
    /// Per-tile width implied by the width budget and grid dimension
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidParameter`] if `num_tiles` is
    /// zero or the budget rounds the tile width down to zero pixels.
    pub fn thumb_width(&self) -> Result<u32> {
        if self.num_tiles == 0 {
            return Err(invalid_parameter(
                "num_tiles",
                &self.num_tiles,
                &"grid must have at least one tile per axis",
            ));
        }
        let width = self.max_width / self.num_tiles;
        if width == 0 {
            return Err(invalid_parameter(
                "max_width",
                &self.max_width,
                &format!("yields zero-width tiles at {} tiles per axis", self.num_tiles),
            ));
        }
        Ok(width)
    }
}

/// Run the full pipeline and return the in-memory composite
///
/// The composite is `num_tiles * thumb` pixels per axis where the thumbnail
/// geometry derives from the width budget and the target's aspect ratio.
/// Writing the result to disk is the caller's concern.
///
/// # Errors
///
/// Any failure while validating parameters, listing or decoding sources, or
/// preparing the target aborts the run; there is no partial-mosaic fallback.
pub fn mosaicify(
    config: &MosaicConfig,
    mut progress: Option<&mut ProgressManager>,
) -> Result<RgbImage> {
    let thumb_width = config.thumb_width()?;

    let target = load_image(&config.target)?;
    let (target_w, target_h) = target.dimensions();
    let grid = sample_target(&target, config.num_tiles)?;

    // Source crops share the target's aspect ratio so tiles never distort
    let aspect_ratio = f64::from(target_w) / f64::from(target_h);
    let thumb_height = thumb_height_for(thumb_width, aspect_ratio)?;

    if let Some(pm) = progress.as_deref_mut() {
        pm.start_phase("Sources", config.num_sources as u64);
    }
    let mut rng = StdRng::seed_from_u64(config.seed);
    let pool = build_pool(
        &config.sources_dir,
        config.num_sources,
        aspect_ratio,
        thumb_width,
        &mut rng,
        progress.as_deref(),
    )?;

    if let Some(pm) = progress.as_deref_mut() {
        pm.start_phase("Matching", grid.len() as u64);
    }
    let mut matched = Vec::with_capacity(grid.len());
    for cell in &grid {
        matched.push(&best_match(cell, &pool)?.thumbnail);
        if let Some(pm) = progress.as_deref() {
            pm.tick();
        }
    }
    let tiles = Array2::from_shape_vec(grid.dim(), matched).map_err(|e| {
        invalid_parameter("num_tiles", &config.num_tiles, &format!("grid shape error: {e}"))
    })?;

    let canvas = composite(&tiles, thumb_width, thumb_height)?;
    if let Some(pm) = progress.as_deref_mut() {
        pm.finish_phase();
    }
    Ok(canvas)
}
