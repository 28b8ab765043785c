//! Geometric normalization of raw source images into uniform thumbnails
//!
//! Every source is cropped to the target's aspect ratio before resizing so a
//! pasted tile never distorts its content. The crop takes the largest
//! centered rectangle matching the ratio that fits inside the source.

use crate::io::error::{Result, invalid_image, invalid_parameter};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, RgbImage};

/// Compute the thumbnail height implied by a width and an aspect ratio
///
/// # Errors
///
/// Returns [`crate::MosaicError::InvalidParameter`] if the ratio is so wide
/// that the height rounds down to zero pixels.
pub fn thumb_height_for(thumb_width: u32, aspect_ratio: f64) -> Result<u32> {
    let height = (f64::from(thumb_width) / aspect_ratio) as u32;
    if height == 0 {
        return Err(invalid_parameter(
            "thumb_width",
            &thumb_width,
            &format!("aspect ratio {aspect_ratio} collapses thumbnail height to zero"),
        ));
    }
    Ok(height)
}

/// Crop and resize a source image to a fixed aspect ratio and thumbnail width
///
/// The crop box is the largest centered rectangle with the requested ratio
/// that fits within the source; the resize uses a Lanczos filter for
/// antialiased downsampling.
///
/// # Errors
///
/// Returns an error if:
/// - `aspect_ratio` is not a positive finite number, or `thumb_width` is zero
/// - the source has a zero dimension, or the crop box collapses to zero area
pub fn normalize(image: &DynamicImage, aspect_ratio: f64, thumb_width: u32) -> Result<RgbImage> {
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return Err(invalid_parameter(
            "aspect_ratio",
            &aspect_ratio,
            &"must be a positive finite width/height ratio",
        ));
    }
    if thumb_width == 0 {
        return Err(invalid_parameter(
            "thumb_width",
            &thumb_width,
            &"must be at least one pixel",
        ));
    }

    let (src_w, src_h) = image.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(invalid_image(&format!(
            "source has degenerate dimensions {src_w}x{src_h}"
        )));
    }

    // Largest centered box matching the ratio without exceeding either side
    let crop_w = src_w.min((f64::from(src_h) * aspect_ratio) as u32);
    let crop_h = ((f64::from(src_w) / aspect_ratio) as u32).min(src_h);
    if crop_w == 0 || crop_h == 0 {
        return Err(invalid_image(&format!(
            "aspect ratio {aspect_ratio} yields a zero-area crop of a {src_w}x{src_h} source"
        )));
    }

    let left = (src_w - crop_w) / 2;
    let top = (src_h - crop_h) / 2;
    let thumb_h = thumb_height_for(thumb_width, aspect_ratio)?;

    let thumbnail = image
        .crop_imm(left, top, crop_w, crop_h)
        .resize_exact(thumb_width, thumb_h, FilterType::Lanczos3);

    Ok(thumbnail.to_rgb8())
}
