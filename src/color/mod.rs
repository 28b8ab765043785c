//! Color reduction and similarity scoring

/// Mean-color summaries in normalized [0, 1] channel space
pub mod summary;

pub use summary::{ColorSummary, mean_color};
