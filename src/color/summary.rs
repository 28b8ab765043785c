//! Mean-color reduction of pixel buffers into normalized summaries
//!
//! A summary is the arithmetic per-channel mean over all pixels, divided by
//! the 8-bit sample maximum so every channel lands in [0, 1]. Summaries are
//! the only representation the matcher ever compares.

use crate::io::error::{Result, invalid_image};
use image::RgbImage;

/// Maximum 8-bit sample value used for normalization
const SAMPLE_MAX: f64 = 255.0;

/// Per-channel mean color of an image, normalized to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSummary {
    channels: [f64; 3],
}

impl ColorSummary {
    /// Create a summary from already-normalized channel means
    pub const fn new(channels: [f64; 3]) -> Self {
        Self { channels }
    }

    /// Create a summary from raw 0-255 channel values
    pub fn from_raw(raw: [f64; 3]) -> Self {
        Self {
            channels: raw.map(|v| v / SAMPLE_MAX),
        }
    }

    /// The normalized channel means (red, green, blue)
    pub const fn channels(&self) -> [f64; 3] {
        self.channels
    }

    /// Squared Euclidean distance to another summary
    ///
    /// Lower is more similar; zero means identical mean color.
    pub fn squared_distance(&self, other: &Self) -> f64 {
        self.channels
            .iter()
            .zip(other.channels.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}

/// Reduce an image to its per-channel mean color
///
/// # Errors
///
/// Returns [`crate::MosaicError::InvalidImage`] if the buffer contains no
/// pixels.
pub fn mean_color(image: &RgbImage) -> Result<ColorSummary> {
    let pixel_count = u64::from(image.width()) * u64::from(image.height());
    if pixel_count == 0 {
        return Err(invalid_image(&"cannot average a zero-pixel buffer"));
    }

    let mut sums = [0.0_f64; 3];
    for pixel in image.pixels() {
        for (sum, value) in sums.iter_mut().zip(pixel.0.iter()) {
            *sum += f64::from(*value);
        }
    }

    let divisor = pixel_count as f64 * SAMPLE_MAX;
    Ok(ColorSummary::new(sums.map(|s| s / divisor)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_mean_color_of_solid_image_is_normalized_fill() {
        let image = RgbImage::from_pixel(4, 4, Rgb([255, 0, 51]));
        let summary = mean_color(&image).unwrap_or_else(|e| {
            unreachable!("solid image must reduce: {e}");
        });
        let [r, g, b] = summary.channels();
        assert!((r - 1.0).abs() < 1e-12);
        assert!(g.abs() < 1e-12);
        assert!((b - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_mean_color_stays_in_unit_range() {
        let mut image = RgbImage::new(3, 2);
        for (i, pixel) in image.pixels_mut().enumerate() {
            *pixel = Rgb([(i * 40) as u8, 255 - (i * 30) as u8, 7]);
        }
        let summary = mean_color(&image).unwrap_or_else(|e| {
            unreachable!("non-empty image must reduce: {e}");
        });
        for channel in summary.channels() {
            assert!((0.0..=1.0).contains(&channel));
        }
    }

    #[test]
    fn test_mean_color_rejects_empty_buffer() {
        let image = RgbImage::new(0, 0);
        assert!(mean_color(&image).is_err());
    }

    #[test]
    fn test_squared_distance_is_symmetric_and_zero_on_self() {
        let a = ColorSummary::new([0.9, 0.1, 0.1]);
        let b = ColorSummary::new([0.1, 0.9, 0.1]);
        assert!((a.squared_distance(&b) - b.squared_distance(&a)).abs() < f64::EPSILON);
        assert!(a.squared_distance(&a).abs() < f64::EPSILON);
    }
}
