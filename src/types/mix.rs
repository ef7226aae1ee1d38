//! Paint-style colour mixing.
//!
//! Two colours are averaged in HLS space. Lightness and saturation take the
//! arithmetic mean; hue takes the circular mean, so that mixing a hue just
//! below 1.0 with one just above 0.0 lands near red instead of near cyan.

use std::f64::consts::TAU;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::hls::{hls_to_rgb, normalize_hue, Hls};
use super::Colour;

/// Components below this are treated as zero when summing hue vectors.
///
/// Exactly opposite hues never cancel to a clean zero in floating point
/// (`sin π` is about 1.2e-16), while the closest distinct 8-bit hues leave a
/// vector several orders of magnitude longer than this.
const CANCEL_EPSILON: f64 = 1e-9;

/// The full turn used by older releases, `2 × 3.141592653`.
#[allow(clippy::approx_constant)]
const TRUNCATED_TURN: f64 = 2.0 * 3.141592653;

/// The angle of a full turn when hues are mapped onto the unit circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MixAngle {
    /// `2π`. Opposite hues cancel and the mix collapses to grey.
    #[default]
    Exact,
    /// `2 × 3.141592653`, as older releases computed it.
    ///
    /// Opposite hues no longer cancel, so complementary mixes come out
    /// green instead of grey.
    Truncated,
}

impl MixAngle {
    fn full_turn(self) -> f64 {
        match self {
            Self::Exact => TAU,
            Self::Truncated => TRUNCATED_TURN,
        }
    }

    fn cancels(self, x: f64, y: f64) -> bool {
        match self {
            Self::Exact => x.abs() < CANCEL_EPSILON && y.abs() < CANCEL_EPSILON,
            Self::Truncated => x == 0.0 && y == 0.0,
        }
    }
}

/// Mix two colours, a bit like mixing paint.
///
/// The result is always opaque. When the two hues cancel each other out
/// (complementary colours) the mix collapses to a grey of the mean lightness.
pub fn paint_mix(first: Colour, second: Colour) -> Colour {
    paint_mix_with(first, second, MixAngle::Exact)
}

/// [`paint_mix`] with an explicit full-turn angle.
pub fn paint_mix_with(first: Colour, second: Colour, angle: MixAngle) -> Colour {
    let a = Hls::from_colour(first);
    let b = Hls::from_colour(second);

    let lightness = 0.5 * (a.lightness + b.lightness);
    let mixed = match mean_hue(a.hue, b.hue, angle) {
        Some(hue) => Hls::new(hue, lightness, 0.5 * (a.saturation + b.saturation)),
        None => Hls::new(0.0, lightness, 0.0),
    };

    let (r, g, b) = hls_to_rgb(mixed);
    Colour::rgb(quantize(r), quantize(g), quantize(b))
}

/// Circular mean of two hues in `[0, 1)`.
///
/// Returns `None` when the hues are exactly opposite and the mean is undefined.
pub fn circular_mean(first: f64, second: f64) -> Option<f64> {
    mean_hue(first, second, MixAngle::Exact)
}

fn mean_hue(first: f64, second: f64, angle: MixAngle) -> Option<f64> {
    let turn = angle.full_turn();
    let (sin1, cos1) = (turn * first).sin_cos();
    let (sin2, cos2) = (turn * second).sin_cos();
    let x = cos1 + cos2;
    let y = sin1 + sin2;

    if angle.cancels(x, y) {
        return None;
    }

    Some(normalize_hue(y.atan2(x) / turn))
}

/// Truncate a `[0, 1]` channel to 8 bits.
fn quantize(channel: f64) -> u8 {
    (channel * 255.0) as u8
}
