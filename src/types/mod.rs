//! Core colour types for plates.
//!
//! This module contains the colour algebra used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `Hls` - hue/lightness/saturation conversion
//! - `paint_mix` - circular-hue paint mixing

mod colour;
pub mod hls;
mod mix;

pub use colour::Colour;
pub use hls::{hls_to_rgb, rgb_to_hls, rgb_to_hsv, rgb_to_hue, Hls};
pub use mix::{circular_mean, paint_mix, paint_mix_with, MixAngle};
