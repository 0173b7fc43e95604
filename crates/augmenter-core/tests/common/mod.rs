use std::path::Path;

use augmenter_core::raster::Image;
use image::{GrayImage, Luma, Rgb, RgbImage};

/// Image whose every channel value is distinct along rows and columns.
pub fn make_gradient_image(h: usize, w: usize, channels: usize) -> Image {
    let mut pixels = Vec::with_capacity(h * w * channels);
    for row in 0..h {
        for col in 0..w {
            for ch in 0..channels {
                pixels.push(((row * 31 + col * 7 + ch * 50) % 256) as u8);
            }
        }
    }
    Image::from_raw(w, h, channels, pixels).expect("valid dimensions")
}

/// Image where pixel (row, col) has value `row * w + col` in every channel.
pub fn make_index_image(h: usize, w: usize) -> Image {
    let mut pixels = Vec::with_capacity(h * w * 3);
    for row in 0..h {
        for col in 0..w {
            let v = (row * w + col) as u8;
            pixels.extend_from_slice(&[v, v, v]);
        }
    }
    Image::from_raw(w, h, 3, pixels).expect("valid dimensions")
}

/// Write a small color PNG or JPEG (chosen by extension).
pub fn write_color_image(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 20) as u8, (y * 20) as u8, ((x + y) * 10) as u8])
    });
    img.save(path).expect("write test image");
}

/// Write a small grayscale PNG.
pub fn write_gray_png(path: &Path, width: u32, height: u32) {
    let img = GrayImage::from_fn(width, height, |x, y| Luma([(x * 16 + y) as u8]));
    img.save(path).expect("write test image");
}

/// Write bytes that no decoder accepts.
pub fn write_garbage(path: &Path) {
    std::fs::write(path, b"definitely not an image").expect("write garbage");
}
