//! Image decoding and encoding.
//!
//! The format is chosen from the file extension. PNG, JPEG, GIF, BMP, ICO and
//! WebP are read and written through the `image` crate; XPM is write-only.
//! Decoded images are always normalized to 8-bit RGBA.

use std::fmt;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::{PlatesError, Result};
use crate::render::encode_xpm;

/// Supported image file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Ico,
    WebP,
    Xpm,
}

const SUPPORTED: &str = "png, jpg, jpeg, gif, bmp, ico, webp (xpm for output only)";

impl ImageKind {
    /// Resolve a format from a file extension, ignoring case.
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "gif" => Ok(Self::Gif),
            "bmp" => Ok(Self::Bmp),
            "ico" => Ok(Self::Ico),
            "webp" => Ok(Self::WebP),
            "xpm" => Ok(Self::Xpm),
            _ => Err(PlatesError::UnsupportedFormat {
                extension: ext.to_string(),
                help: Some(format!("Supported extensions: {}", SUPPORTED)),
            }),
        }
    }

    /// Resolve a format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }

    /// Whether images of this kind can be decoded.
    pub fn is_readable(self) -> bool {
        self != Self::Xpm
    }

    fn image_format(self) -> Option<ImageFormat> {
        match self {
            Self::Png => Some(ImageFormat::Png),
            Self::Jpeg => Some(ImageFormat::Jpeg),
            Self::Gif => Some(ImageFormat::Gif),
            Self::Bmp => Some(ImageFormat::Bmp),
            Self::Ico => Some(ImageFormat::Ico),
            Self::WebP => Some(ImageFormat::WebP),
            Self::Xpm => None,
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Gif => "GIF",
            Self::Bmp => "BMP",
            Self::Ico => "ICO",
            Self::WebP => "WebP",
            Self::Xpm => "XPM",
        };
        f.write_str(name)
    }
}

/// Decode image bytes of the given kind into RGBA.
pub fn decode(bytes: &[u8], kind: ImageKind) -> Result<RgbaImage> {
    let format = kind.image_format().ok_or_else(|| PlatesError::UnsupportedFormat {
        extension: kind.to_string(),
        help: Some(format!("{} is an output-only format", kind)),
    })?;

    let image = image::load_from_memory_with_format(bytes, format).map_err(|e| {
        PlatesError::Decode {
            message: format!("Failed to decode {}: {}", kind, e),
            help: None,
        }
    })?;

    Ok(image.to_rgba8())
}

/// Encode an RGBA image as the given kind.
///
/// JPEG has no alpha channel, so the image is flattened to RGB first.
/// `name` is only used by XPM, as the C identifier of the pixmap.
pub fn encode(image: &RgbaImage, kind: ImageKind, name: &str) -> Result<Vec<u8>> {
    let Some(format) = kind.image_format() else {
        return Ok(encode_xpm(image, name).into_bytes());
    };

    let dynamic = match kind {
        ImageKind::Jpeg => {
            DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(image.clone()).to_rgb8())
        }
        _ => DynamicImage::ImageRgba8(image.clone()),
    };

    let mut bytes = Cursor::new(Vec::new());
    dynamic
        .write_to(&mut bytes, format)
        .map_err(|e| PlatesError::Encode {
            message: format!("Failed to encode {}: {}", kind, e),
            help: (kind == ImageKind::Ico)
                .then(|| "ICO images are limited to 256x256 pixels".to_string()),
        })?;

    Ok(bytes.into_inner())
}

/// Read an image file, choosing the decoder from its extension.
pub fn read_image(path: &Path) -> Result<RgbaImage> {
    let kind = ImageKind::from_path(path)?;
    if !kind.is_readable() {
        return Err(PlatesError::UnsupportedFormat {
            extension: kind.to_string(),
            help: Some(format!("Input images must be one of: {}", SUPPORTED)),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| PlatesError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;

    decode(&bytes, kind).map_err(|e| match e {
        PlatesError::Decode { message, help } => PlatesError::Decode {
            message: format!("{}: {}", path.display(), message),
            help,
        },
        other => other,
    })
}

/// Write an image file, choosing the encoder from its extension.
pub fn write_image(path: &Path, image: &RgbaImage) -> Result<()> {
    let kind = ImageKind::from_path(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");

    let bytes = encode(image, kind, name)?;

    std::fs::write(path, bytes).map_err(|e| PlatesError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write image: {}", e),
    })?;

    Ok(())
}
