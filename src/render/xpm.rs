//! XPM (X PixMap) output.
//!
//! Writes images as XPM3 C source: an indexed palette followed by one string
//! per pixel row. XPM has no alpha channel, so fully transparent pixels map
//! to the special `None` colour and every other pixel is written opaque.

use std::collections::HashMap;
use std::fmt::Write;

use image::RgbaImage;

use crate::types::Colour;

/// Printable symbols usable as pixel keys. Excludes `"` and `\`.
const SYMBOLS: &[u8] = b" .XoO+@#$%&*=-;:>,<1234567890qwertyuipasdfghjklzxcvbnmMNBVCZASDFGHJKLPIUYTREWQ!~^/()_`'][{}|";

/// Encode an image as XPM3 text.
///
/// `name` becomes the C array identifier; anything that is not a valid
/// identifier character is replaced with `_`.
pub fn encode_xpm(image: &RgbaImage, name: &str) -> String {
    let (palette, indices) = build_palette(image);
    let cpp = chars_per_pixel(palette.len());

    let mut out = String::new();
    out.push_str("/* XPM */\n");
    let _ = writeln!(out, "static char *{}[] = {{", identifier(name));
    let _ = writeln!(
        out,
        "\"{} {} {} {}\",",
        image.width(),
        image.height(),
        palette.len(),
        cpp
    );

    for (i, colour) in palette.iter().enumerate() {
        let value = if colour.is_transparent() {
            "None".to_string()
        } else {
            format!("#{:02X}{:02X}{:02X}", colour.r, colour.g, colour.b)
        };
        let _ = writeln!(out, "\"{} c {}\",", key(i, cpp), value);
    }

    let width = image.width() as usize;
    for (row, chunk) in indices.chunks(width.max(1)).enumerate() {
        out.push('"');
        for &index in chunk {
            out.push_str(&key(index, cpp));
        }
        out.push('"');
        if row + 1 < image.height() as usize {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str("};\n");
    out
}

/// Distinct colours in first-seen order plus the palette index of every pixel.
///
/// All fully transparent pixels share a single entry.
fn build_palette(image: &RgbaImage) -> (Vec<Colour>, Vec<usize>) {
    let mut palette = Vec::new();
    let mut lookup: HashMap<Colour, usize> = HashMap::new();
    let mut indices = Vec::with_capacity(image.pixels().len());

    for pixel in image.pixels() {
        let colour = Colour::from(*pixel);
        let colour = if colour.is_transparent() {
            Colour::TRANSPARENT
        } else {
            colour.with_alpha(255)
        };
        let index = *lookup.entry(colour).or_insert_with(|| {
            palette.push(colour);
            palette.len() - 1
        });
        indices.push(index);
    }

    (palette, indices)
}

/// Smallest key length that can address `colours` palette entries.
fn chars_per_pixel(colours: usize) -> usize {
    let mut cpp = 1;
    let mut capacity = SYMBOLS.len();
    while capacity < colours {
        cpp += 1;
        capacity *= SYMBOLS.len();
    }
    cpp
}

/// Fixed-width key for a palette index, least significant symbol last.
fn key(mut index: usize, cpp: usize) -> String {
    let mut symbols = vec![SYMBOLS[0]; cpp];
    for slot in symbols.iter_mut().rev() {
        *slot = SYMBOLS[index % SYMBOLS.len()];
        index /= SYMBOLS.len();
    }
    String::from_utf8_lossy(&symbols).into_owned()
}

fn identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if !ident.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        ident.insert(0, '_');
    }
    ident
}
