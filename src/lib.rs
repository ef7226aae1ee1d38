//! plates - Two-ink poster plates from a single image
//!
//! Separates an image into buckets around pairs of ink colours and their
//! paint mix, flattens each pair into a plate, and tiles the plates into a
//! 2x2 poster.

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use codec::{decode, encode, read_image, write_image, ImageKind};
pub use config::{InkPair, PlatesConfig, PLATE_COUNT};
pub use error::{PlatesError, Result};
pub use output::Printer;
pub use render::{
    close_to, close_to_uniform, count_opaque, encode_xpm, isolate_channel, overlay, separate,
    tile_grid, Channel, Pipeline, Separator, ThresholdMode,
};
pub use types::{
    circular_mean, hls_to_rgb, paint_mix, paint_mix_with, rgb_to_hls, rgb_to_hsv, rgb_to_hue, Colour,
    Hls, MixAngle,
};
