//! Best-match selection of a source entry for a grid cell color
//!
//! Every cell scans the full pool; no lower bound on the distance is
//! assumed, so there is no early exit. Ties keep the earliest entry in pool
//! order, which makes matching deterministic for a fixed sample.

use crate::color::ColorSummary;
use crate::io::error::{MosaicError, Result};
use crate::tile::pool::SourceEntry;

/// Select the pool entry whose mean color is closest to the cell color
///
/// Similarity is squared Euclidean distance in normalized channel space.
/// The returned reference may be handed to any number of cells; entries are
/// never consumed.
///
/// # Errors
///
/// Returns [`MosaicError::EmptyPool`] if the pool holds no entries.
pub fn best_match<'a>(cell: &ColorSummary, pool: &'a [SourceEntry]) -> Result<&'a SourceEntry> {
    let mut best: Option<(f64, &SourceEntry)> = None;
    for entry in pool {
        let score = entry.summary.squared_distance(cell);
        let closer = best.is_none_or(|(best_score, _)| score < best_score);
        if closer {
            best = Some((score, entry));
        }
    }
    best.map(|(_, entry)| entry).ok_or(MosaicError::EmptyPool)
}
