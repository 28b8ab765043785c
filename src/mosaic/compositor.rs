//! Composite canvas assembly from matched thumbnails
//!
//! The canvas is `num_tiles * thumb` pixels per axis and every grid cell
//! writes exactly one disjoint rectangle, so paste order is irrelevant and
//! there are no seams or gaps.

use crate::io::error::{Result, invalid_parameter};
use image::RgbImage;
use ndarray::Array2;

/// Paste matched thumbnails into a freshly allocated canvas
///
/// `tiles` is indexed `(row, col)`; the tile at `(row, col)` lands at pixel
/// offset `(col * thumb_width, row * thumb_height)`.
///
/// # Errors
///
/// Returns [`crate::MosaicError::InvalidParameter`] if either thumbnail
/// dimension is zero or any tile's dimensions differ from the shared
/// geometry.
pub fn composite(
    tiles: &Array2<&RgbImage>,
    thumb_width: u32,
    thumb_height: u32,
) -> Result<RgbImage> {
    if thumb_width == 0 || thumb_height == 0 {
        return Err(invalid_parameter(
            "thumb_dimensions",
            &format!("{thumb_width}x{thumb_height}"),
            &"tile dimensions must be non-zero",
        ));
    }

    let (rows, cols) = tiles.dim();
    let mut canvas = RgbImage::new(cols as u32 * thumb_width, rows as u32 * thumb_height);

    for ((row, col), tile) in tiles.indexed_iter() {
        if tile.width() != thumb_width || tile.height() != thumb_height {
            return Err(invalid_parameter(
                "tile_dimensions",
                &format!("{}x{}", tile.width(), tile.height()),
                &format!(
                    "tile at ({row}, {col}) does not match shared geometry {thumb_width}x{thumb_height}"
                ),
            ));
        }
        let x = i64::from(col as u32 * thumb_width);
        let y = i64::from(row as u32 * thumb_height);
        image::imageops::replace(&mut canvas, *tile, x, y);
    }

    Ok(canvas)
}
