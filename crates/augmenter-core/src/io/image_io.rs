use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GrayAlphaImage, GrayImage, ImageFormat, RgbImage, RgbaImage};
use thiserror::Error;

use crate::config::OutputFormat;
use crate::error::{AugmentError, Result};
use crate::raster::Image;

/// Source bytes that could not be turned into an [`Image`].
#[derive(Error, Debug)]
#[error("{reason}")]
pub struct DecodeFailure {
    pub reason: String,
}

impl DecodeFailure {
    fn new(reason: impl std::fmt::Display) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

/// Decode JPEG/PNG (or any format the `image` crate recognizes) into 8-bit pixels.
///
/// Grayscale stays single-channel, images with alpha become RGBA, everything
/// else becomes RGB. Higher bit depths are reduced to 8 bits.
pub fn decode(bytes: &[u8]) -> std::result::Result<Image, DecodeFailure> {
    let img = image::load_from_memory(bytes).map_err(DecodeFailure::new)?;
    let width = img.width() as usize;
    let height = img.height() as usize;
    let color = img.color();

    let (channels, pixels) = if color.has_alpha() {
        (4, img.into_rgba8().into_raw())
    } else if color.channel_count() == 1 {
        (1, img.into_luma8().into_raw())
    } else {
        (3, img.into_rgb8().into_raw())
    };

    Image::from_raw(width, height, channels, pixels).map_err(DecodeFailure::new)
}

/// Read and decode an image file. Any failure is reported as [`AugmentError::Decode`].
pub fn load_image(path: &Path) -> Result<Image> {
    let bytes = std::fs::read(path).map_err(|e| AugmentError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    decode(&bytes).map_err(|e| AugmentError::Decode {
        path: path.to_path_buf(),
        reason: e.reason,
    })
}

fn to_dynamic(image: &Image) -> Result<DynamicImage> {
    let w = image.width() as u32;
    let h = image.height() as u32;
    let raw = image.to_raw();
    let invalid = || AugmentError::InvalidDimensions {
        width: image.width(),
        height: image.height(),
        channels: image.channels(),
    };

    let dynamic = match image.channels() {
        1 => DynamicImage::ImageLuma8(GrayImage::from_raw(w, h, raw).ok_or_else(invalid)?),
        2 => DynamicImage::ImageLumaA8(GrayAlphaImage::from_raw(w, h, raw).ok_or_else(invalid)?),
        3 => DynamicImage::ImageRgb8(RgbImage::from_raw(w, h, raw).ok_or_else(invalid)?),
        4 => DynamicImage::ImageRgba8(RgbaImage::from_raw(w, h, raw).ok_or_else(invalid)?),
        _ => return Err(invalid()),
    };
    Ok(dynamic)
}

/// Encode an image losslessly in the requested format.
pub fn encode(image: &Image, format: OutputFormat) -> Result<Vec<u8>> {
    let dynamic = to_dynamic(image)?;
    let image_format = match format {
        OutputFormat::Png => ImageFormat::Png,
        OutputFormat::Tiff => ImageFormat::Tiff,
    };

    let mut buf = Vec::new();
    dynamic.write_to(&mut Cursor::new(&mut buf), image_format)?;
    Ok(buf)
}

/// Encode and write an image. Write failures are filesystem errors.
pub fn save_image(image: &Image, path: &Path, format: OutputFormat) -> Result<()> {
    let bytes = encode(image, format)?;
    std::fs::write(path, bytes).map_err(|e| AugmentError::filesystem(path, e))
}
