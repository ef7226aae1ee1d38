//! Single-image colour filters.

use image::{Rgba, RgbaImage};

use crate::types::Colour;

use super::separate::ThresholdMode;

/// An RGB colour channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

/// Keep one colour channel and the alpha, zeroing the other two channels.
pub fn isolate_channel(image: &RgbaImage, channel: Channel) -> RgbaImage {
    let keep = channel.index();
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let src = image.get_pixel(x, y).0;
        let mut out = [0, 0, 0, src[3]];
        out[keep] = src[keep];
        Rgba(out)
    })
}

/// Per-channel closeness filter.
///
/// Each channel that lies within `threshold` of the target's channel takes
/// the target's value; the others become 0. The source alpha is kept.
pub fn close_to(
    image: &RgbaImage,
    target: Colour,
    threshold: u8,
    mode: ThresholdMode,
) -> RgbaImage {
    let threshold = u16::from(threshold);
    let target = target.to_rgba();

    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let src = image.get_pixel(x, y).0;
        let mut out = [0, 0, 0, src[3]];
        for i in 0..3 {
            if mode.channel_diff(target[i], src[i]) < threshold {
                out[i] = target[i];
            }
        }
        Rgba(out)
    })
}

/// Uniform closeness filter.
///
/// A pixel with any channel within `threshold` of the target becomes the
/// target colour with the source alpha; all other pixels become fully
/// transparent.
pub fn close_to_uniform(
    image: &RgbaImage,
    target: Colour,
    threshold: u8,
    mode: ThresholdMode,
) -> RgbaImage {
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let src = Colour::from(*image.get_pixel(x, y));
        if mode.any_channel_within(src, target, threshold) {
            target.with_alpha(src.a).into()
        } else {
            Colour::TRANSPARENT.into()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RgbaImage {
        RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([200, 100, 50, 255])
            } else {
                Rgba([10, 20, 30, 128])
            }
        })
    }

    #[test]
    fn test_isolate_channel() {
        let image = sample();

        let red = isolate_channel(&image, Channel::Red);
        assert_eq!(red.get_pixel(0, 0).0, [200, 0, 0, 255]);
        assert_eq!(red.get_pixel(1, 0).0, [10, 0, 0, 128]);

        let green = isolate_channel(&image, Channel::Green);
        assert_eq!(green.get_pixel(0, 0).0, [0, 100, 0, 255]);

        let blue = isolate_channel(&image, Channel::Blue);
        assert_eq!(blue.get_pixel(1, 0).0, [0, 0, 30, 128]);
    }

    #[test]
    fn test_close_to_keeps_matching_channels() {
        let target = Colour::rgb(190, 180, 60);
        let filtered = close_to(&sample(), target, 20, ThresholdMode::Widened);

        // Red (10 away) and blue (10 away) match, green (80 away) does not
        assert_eq!(filtered.get_pixel(0, 0).0, [190, 0, 60, 255]);
        // Nothing in the second pixel is within 20
        assert_eq!(filtered.get_pixel(1, 0).0, [0, 0, 0, 128]);
    }

    #[test]
    fn test_close_to_uniform() {
        let target = Colour::rgb(0, 0, 25);
        let filtered = close_to_uniform(&sample(), target, 15, ThresholdMode::Widened);

        assert_eq!(filtered.get_pixel(0, 0).0, [0, 0, 0, 0]);
        // Red is 10 away, which is enough for the whole pixel
        assert_eq!(filtered.get_pixel(1, 0).0, [0, 0, 25, 128]);
    }

    #[test]
    fn test_close_to_uniform_wrapping_mode() {
        // 255 and 0 are one step apart with 8-bit wraparound
        let image = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]));
        let target = Colour::BLACK;

        let widened = close_to_uniform(&image, target, 2, ThresholdMode::Widened);
        assert_eq!(widened.get_pixel(0, 0).0, [0, 0, 0, 0]);

        let wrapped = close_to_uniform(&image, target, 2, ThresholdMode::Wrapping);
        assert_eq!(wrapped.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }
}
