//! Matcher and compositor properties exercised through the public API

use image::{Rgb, RgbImage};
use ndarray::Array2;
use tessella::color::ColorSummary;
use tessella::io::error::MosaicError;
use tessella::mosaic::{best_match, composite};
use tessella::tile::SourceEntry;

fn entry(color: [f64; 3], width: u32, height: u32) -> SourceEntry {
    let raw = color.map(|c| (c * 255.0) as u8);
    SourceEntry {
        thumbnail: RgbImage::from_pixel(width, height, Rgb(raw)),
        summary: ColorSummary::new(color),
    }
}

// Sweeps a spread of cell colors and checks the returned entry is never
// beaten by another pool entry
#[test]
fn test_returned_entry_has_globally_minimal_distance() {
    let pool: Vec<SourceEntry> = (0..12)
        .map(|i| {
            let step = f64::from(i) / 12.0;
            entry([step, 1.0 - step, (step * 3.0).fract()], 3, 3)
        })
        .collect();

    for r in 0..5 {
        for g in 0..5 {
            let cell = ColorSummary::new([f64::from(r) / 4.0, f64::from(g) / 4.0, 0.5]);
            let chosen = best_match(&cell, &pool).unwrap_or_else(|e| {
                unreachable!("non-empty pool must match: {e}");
            });
            let chosen_score = chosen.summary.squared_distance(&cell);
            for other in &pool {
                assert!(
                    chosen_score <= other.summary.squared_distance(&cell),
                    "entry {:?} beats the chosen {:?} for cell {:?}",
                    other.summary,
                    chosen.summary,
                    cell
                );
            }
        }
    }
}

#[test]
fn test_matching_an_empty_pool_fails() {
    let cell = ColorSummary::new([0.2, 0.2, 0.2]);
    assert!(matches!(
        best_match(&cell, &[]),
        Err(MosaicError::EmptyPool)
    ));
}

// The same physical thumbnail may fill many cells; compositing must still
// cover every rectangle exactly once
#[test]
fn test_reused_thumbnail_tiles_the_full_canvas() {
    let shared = entry([0.5, 0.25, 0.75], 4, 6);
    let tiles = Array2::from_elem((3, 3), &shared.thumbnail);

    let canvas = composite(&tiles, 4, 6).unwrap_or_else(|e| {
        unreachable!("uniform tiles must composite: {e}");
    });

    assert_eq!((canvas.width(), canvas.height()), (12, 18));
    let expected = Rgb([127, 63, 191]);
    for pixel in canvas.pixels() {
        assert_eq!(*pixel, expected);
    }
}

#[test]
fn test_compositor_rejects_foreign_tile_geometry() {
    let good = entry([0.1, 0.1, 0.1], 4, 4);
    let bad = entry([0.9, 0.9, 0.9], 5, 4);
    let tiles = Array2::from_shape_fn((1, 2), |(_, col)| {
        if col == 0 {
            &good.thumbnail
        } else {
            &bad.thumbnail
        }
    });

    assert!(matches!(
        composite(&tiles, 4, 4),
        Err(MosaicError::InvalidParameter { .. })
    ));
}
