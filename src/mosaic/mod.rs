//! Target sampling, tile matching, and composite assembly

/// Canvas allocation and tile pasting
pub mod compositor;
/// Best-match selection over the source pool
pub mod matcher;
/// End-to-end orchestration and run configuration
pub mod pipeline;
/// Per-cell color sampling of the target image
pub mod sampler;

pub use compositor::composite;
pub use matcher::best_match;
pub use sampler::sample_target;
