//! Three-way colour separation.
//!
//! Each pixel is matched against three reference colours in two stages:
//!
//! 1. A coarse match on hue and saturation picks a candidate reference.
//!    References are tried in order 1, 2, 3 and the first one whose rule
//!    holds wins, so overlapping rules always resolve toward the lowest index.
//! 2. A fine gate accepts the candidate only if at least one of the R, G, B
//!    channel differences to the reference is below the threshold.
//!
//! Accepted pixels are written into that reference's mask as the opaque
//! reference colour. Everything else stays transparent black.

use clap::ValueEnum;
use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::types::{Colour, Hls};

/// How per-channel differences are computed for the threshold gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ThresholdMode {
    /// Full-width absolute difference, `0..=255`.
    #[default]
    Widened,
    /// Subtract the channels as signed 8-bit values with wraparound, `0..=128`,
    /// as older releases did.
    Wrapping,
}

impl ThresholdMode {
    /// Absolute difference between two channel values.
    pub fn channel_diff(self, a: u8, b: u8) -> u16 {
        match self {
            Self::Widened => (i16::from(a) - i16::from(b)).unsigned_abs(),
            Self::Wrapping => u16::from((a as i8).wrapping_sub(b as i8).unsigned_abs()),
        }
    }

    /// True when any of R, G, B differs from `target` by less than `threshold`.
    pub fn any_channel_within(self, pixel: Colour, target: Colour, threshold: u8) -> bool {
        let threshold = u16::from(threshold);
        self.channel_diff(pixel.r, target.r) < threshold
            || self.channel_diff(pixel.g, target.g) < threshold
            || self.channel_diff(pixel.b, target.b) < threshold
    }
}

/// A reference colour with its precomputed hue and saturation.
#[derive(Debug, Clone, Copy)]
struct Reference {
    colour: Colour,
    hue: f64,
    saturation: f64,
}

impl Reference {
    fn new(colour: Colour) -> Self {
        let hls = Hls::from_colour(colour);
        Self {
            colour,
            hue: hls.hue,
            saturation: hls.saturation,
        }
    }
}

/// Splits images into three masks around three reference colours.
#[derive(Debug, Clone)]
pub struct Separator {
    references: [Reference; 3],
    threshold: u8,
    mode: ThresholdMode,
}

impl Separator {
    pub fn new(first: Colour, second: Colour, third: Colour, threshold: u8) -> Self {
        Self {
            references: [
                Reference::new(first),
                Reference::new(second),
                Reference::new(third),
            ],
            threshold,
            mode: ThresholdMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ThresholdMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn mode(&self) -> ThresholdMode {
        self.mode
    }

    /// Index (0, 1 or 2) of the mask a pixel belongs to, if any.
    pub fn classify(&self, pixel: Colour) -> Option<usize> {
        let hls = Hls::from_colour(pixel);

        let candidate = if self.coarse_match(0, hls) {
            0
        } else if self.coarse_match(1, hls) {
            1
        } else if self.coarse_match(2, hls) {
            2
        } else {
            return None;
        };

        let reference = self.references[candidate].colour;
        self.mode
            .any_channel_within(pixel, reference, self.threshold)
            .then_some(candidate)
    }

    /// Hue or saturation strictly closer to reference `index` than to both others.
    fn coarse_match(&self, index: usize, hls: Hls) -> bool {
        let this = &self.references[index];
        let others = self
            .references
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, r)| r);

        let hue_dist = (hls.hue - this.hue).abs();
        let sat_dist = (hls.saturation - this.saturation).abs();

        let (mut hue_closer, mut sat_closer) = (true, true);
        for other in others {
            hue_closer &= hue_dist < (hls.hue - other.hue).abs();
            sat_closer &= sat_dist < (hls.saturation - other.saturation).abs();
        }

        hue_closer || sat_closer
    }

    /// Split `image` into three masks, one per reference colour.
    pub fn separate(&self, image: &RgbaImage) -> (RgbaImage, RgbaImage, RgbaImage) {
        let (width, height) = image.dimensions();
        let mut masks = [
            RgbaImage::new(width, height),
            RgbaImage::new(width, height),
            RgbaImage::new(width, height),
        ];

        for (x, y, pixel) in image.enumerate_pixels() {
            if let Some(index) = self.classify(Colour::from(*pixel)) {
                let colour = self.references[index].colour.with_alpha(255);
                masks[index].put_pixel(x, y, colour.into());
            }
        }

        let [first, second, third] = masks;
        (first, second, third)
    }
}

/// Split `image` into three masks using full-width threshold arithmetic.
///
/// See [`Separator`] to choose the threshold arithmetic or reuse the
/// precomputed references across images.
pub fn separate(
    image: &RgbaImage,
    first: Colour,
    second: Colour,
    third: Colour,
    threshold: u8,
) -> (RgbaImage, RgbaImage, RgbaImage) {
    Separator::new(first, second, third, threshold).separate(image)
}

/// Number of pixels with non-zero alpha.
pub fn count_opaque(image: &RgbaImage) -> usize {
    image.pixels().filter(|p| p.0[3] > 0).count()
}
