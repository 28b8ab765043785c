//! Photo-mosaic generation from randomly sampled source image tiles
//!
//! The pipeline partitions a target image into a square grid, reduces each
//! grid cell and each candidate source image to a mean color, and rebuilds
//! the target as a composite of the best-matching source thumbnails.

#![forbid(unsafe_code)]

/// Mean-color summaries and the similarity metric
pub mod color;
/// Input/output operations, CLI surface, and error handling
pub mod io;
/// Grid sampling, tile matching, and composite assembly
pub mod mosaic;
/// Source thumbnail normalization and pool construction
pub mod tile;

pub use io::error::{MosaicError, Result};
pub use mosaic::pipeline::{MosaicConfig, mosaicify};
