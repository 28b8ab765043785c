//! Source image normalization and pool construction

/// Centered aspect-ratio crop and thumbnail resize
pub mod normalize;
/// Source entry records and seeded pool building
pub mod pool;

pub use normalize::normalize;
pub use pool::{SourceEntry, build_pool};
