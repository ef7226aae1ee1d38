//! Mask compositing.
//!
//! Folds a mask onto a base image: wherever the mask is opaque the output
//! takes the tint, everywhere else it keeps the base pixel. There is no
//! blending, any non-zero mask alpha counts as opaque.

use image::{Rgba, RgbaImage};

use crate::error::{PlatesError, Result};
use crate::types::Colour;

/// Paint `tint` onto `base` wherever `overlay` has non-zero alpha.
///
/// The output has the overlay's dimensions. `base` must be at least that
/// large; a smaller base is rejected with [`PlatesError::SizeMismatch`].
pub fn overlay(base: &RgbaImage, overlay: &RgbaImage, tint: Colour) -> Result<RgbaImage> {
    let (width, height) = overlay.dimensions();
    if base.width() < width || base.height() < height {
        return Err(PlatesError::SizeMismatch {
            context: "overlay",
            expected_width: width,
            expected_height: height,
            actual_width: base.width(),
            actual_height: base.height(),
        });
    }

    let tint: Rgba<u8> = tint.into();
    Ok(RgbaImage::from_fn(width, height, |x, y| {
        if overlay.get_pixel(x, y).0[3] > 0 {
            tint
        } else {
            *base.get_pixel(x, y)
        }
    }))
}
