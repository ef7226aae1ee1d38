//! 2x2 plate grid.
//!
//! Tiles four equally sized plates into one poster: top-left, top-right,
//! bottom-left, bottom-right.

use image::imageops;
use image::RgbaImage;

use crate::error::{PlatesError, Result};

/// Tile four plates into a 2x2 grid twice as wide and twice as tall.
pub fn tile_grid(plates: [&RgbaImage; 4]) -> Result<RgbaImage> {
    let (width, height) = plates[0].dimensions();

    if let Some(odd) = plates.iter().find(|p| p.dimensions() != (width, height)) {
        return Err(PlatesError::SizeMismatch {
            context: "grid",
            expected_width: width,
            expected_height: height,
            actual_width: odd.width(),
            actual_height: odd.height(),
        });
    }

    let mut canvas = RgbaImage::new(width * 2, height * 2);
    for (i, plate) in plates.iter().enumerate() {
        let col = (i % 2) as i64;
        let row = (i / 2) as i64;
        imageops::replace(
            &mut canvas,
            *plate,
            col * i64::from(width),
            row * i64::from(height),
        );
    }

    Ok(canvas)
}
