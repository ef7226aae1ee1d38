//! RGB <-> HLS conversion.
//!
//! Channels are floats in `[0, 1]`. Hue is circular and always reported in
//! `[0, 1)`; lightness and saturation are in `[0, 1]`.
//!
//! The integer HSV and degree-hue helpers at the bottom are standalone
//! utilities; separation and paint mixing only use HLS.

use super::Colour;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// A colour in hue/lightness/saturation form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hls {
    pub hue: f64,
    pub lightness: f64,
    pub saturation: f64,
}

impl Hls {
    pub const fn new(hue: f64, lightness: f64, saturation: f64) -> Self {
        Self {
            hue,
            lightness,
            saturation,
        }
    }

    /// Convert an 8-bit colour, ignoring alpha.
    pub fn from_colour(colour: Colour) -> Self {
        rgb_to_hls(
            f64::from(colour.r) / 255.0,
            f64::from(colour.g) / 255.0,
            f64::from(colour.b) / 255.0,
        )
    }

    /// Back to RGB floats in `[0, 1]`.
    pub fn to_rgb(self) -> (f64, f64, f64) {
        hls_to_rgb(self)
    }
}

/// Wrap a hue into `[0, 1)`.
pub(crate) fn normalize_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(1.0);
    // rem_euclid rounds tiny negative inputs up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Convert RGB to HLS.
pub fn rgb_to_hls(r: f64, g: f64, b: f64) -> Hls {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let lightness = (minc + maxc) / 2.0;

    if minc == maxc {
        return Hls::new(0.0, lightness, 0.0);
    }

    let span = maxc - minc;
    let saturation = if lightness <= 0.5 {
        span / (maxc + minc)
    } else {
        span / (2.0 - maxc - minc)
    };

    let rc = (maxc - r) / span;
    let gc = (maxc - g) / span;
    let bc = (maxc - b) / span;
    let hue = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    Hls::new(normalize_hue(hue / 6.0), lightness, saturation)
}

/// Convert HLS to RGB.
pub fn hls_to_rgb(hls: Hls) -> (f64, f64, f64) {
    let Hls {
        hue,
        lightness: l,
        saturation: s,
    } = hls;

    if s == 0.0 {
        return (l, l, l);
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;

    (
        channel(m1, m2, hue + ONE_THIRD),
        channel(m1, m2, hue),
        channel(m1, m2, hue - ONE_THIRD),
    )
}

/// Piecewise-linear channel level for a hue offset.
fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = normalize_hue(hue);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

/// Hue of a colour in degrees, `[0, 360)`. Greys report 0.
pub fn rgb_to_hue(colour: Colour) -> f64 {
    let r = f64::from(colour.r) / 255.0;
    let g = f64::from(colour.g) / 255.0;
    let b = f64::from(colour.b) / 255.0;
    let maxc = r.max(g).max(b);
    let span = maxc - r.min(g).min(b);

    if span == 0.0 {
        return 0.0;
    }

    let degrees = if maxc == r {
        60.0 * (g - b) / span
    } else if maxc == g {
        120.0 + 60.0 * (b - r) / span
    } else {
        240.0 + 60.0 * (r - g) / span
    };

    degrees.rem_euclid(360.0)
}

/// Integer HSV, every component in `0..=255`.
///
/// Hue sextants are 43 steps wide and start at 0 (red), 85 (green) and
/// 171 (blue); negative hues wrap around modulo 256.
pub fn rgb_to_hsv(colour: Colour) -> (u8, u8, u8) {
    let (r, g, b) = (
        i32::from(colour.r),
        i32::from(colour.g),
        i32::from(colour.b),
    );
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let value = max as u8;
    if max == 0 {
        return (0, 0, value);
    }

    let span = max - min;
    let saturation = (255 * span / max) as u8;
    if saturation == 0 {
        return (0, 0, value);
    }

    let hue = if max == r {
        43 * (g - b) / span
    } else if max == g {
        85 + 43 * (b - r) / span
    } else {
        171 + 43 * (r - g) / span
    };

    (hue.rem_euclid(256) as u8, saturation, value)
}
