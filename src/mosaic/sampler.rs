//! Downsampling of the target image to one color per grid cell

use crate::color::ColorSummary;
use crate::io::error::{Result, invalid_image, invalid_parameter};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use ndarray::Array2;

/// Resize the target to exactly one pixel per grid cell and summarize each
///
/// The antialiased resize makes each remaining pixel the filtered average of
/// its cell's region, so the grid holds one representative color per tile
/// position. Rows index vertically, columns horizontally.
///
/// # Errors
///
/// Returns an error if `num_tiles` is zero or the target has a zero
/// dimension.
pub fn sample_target(target: &DynamicImage, num_tiles: u32) -> Result<Array2<ColorSummary>> {
    if num_tiles == 0 {
        return Err(invalid_parameter(
            "num_tiles",
            &num_tiles,
            &"grid must have at least one tile per axis",
        ));
    }
    let (width, height) = target.dimensions();
    if width == 0 || height == 0 {
        return Err(invalid_image(&format!(
            "target has degenerate dimensions {width}x{height}"
        )));
    }

    let reduced = target
        .resize_exact(num_tiles, num_tiles, FilterType::Lanczos3)
        .to_rgb8();

    let side = num_tiles as usize;
    Ok(Array2::from_shape_fn((side, side), |(row, col)| {
        let pixel = reduced.get_pixel(col as u32, row as u32);
        ColorSummary::from_raw(pixel.0.map(f64::from))
    }))
}
