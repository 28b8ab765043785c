//! Pipeline constants and runtime configuration defaults

// Default values for configurable parameters
/// Default number of source images sampled from the candidate directory
pub const DEFAULT_NUM_SOURCES: usize = 50;

/// Default grid dimension, applied to both axes
pub const DEFAULT_NUM_TILES: u32 = 72;

/// Default output width budget in pixels before tile rounding
pub const DEFAULT_MAX_WIDTH: u32 = 800;

/// Fixed seed for reproducible source sampling
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames when no explicit path is given
pub const OUTPUT_SUFFIX: &str = "_mosaic";

/// File extensions considered candidate source images
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];
