use rand::Rng;

use crate::consts::{CHANNEL_MAX, CONTRAST_PIVOT, LUT_SIZE, MAX_FRACTION_LIMIT};
use crate::error::Result;
use crate::raster::Image;

use super::{check_limit, check_probability, should_apply, uniform};

/// Build the 8-bit lookup table for a brightness/contrast adjustment.
///
/// `out = clamp(round((in - 128) * factor + 128 + delta * 255), 0, 255)`.
/// `delta` is a fraction of the channel range, `factor` scales around mid-gray.
pub fn brightness_contrast_lut(delta: f64, factor: f64) -> [u8; LUT_SIZE] {
    let pivot = CONTRAST_PIVOT as f64;
    let max = CHANNEL_MAX as f64;
    let mut lut = [0u8; LUT_SIZE];
    for (v, out) in lut.iter_mut().enumerate() {
        let adjusted = (v as f64 - pivot) * factor + pivot + delta * max;
        *out = adjusted.round().clamp(0.0, max) as u8;
    }
    lut
}

/// Adjust brightness and contrast of every channel.
pub fn brightness_contrast(image: &Image, delta: f64, factor: f64) -> Image {
    let lut = brightness_contrast_lut(delta, factor);
    image.map_values(|v| lut[v as usize])
}

/// Random brightness shift in `[-brightness_limit, +brightness_limit]` and
/// contrast factor in `[1 - contrast_limit, 1 + contrast_limit]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrightnessContrast {
    brightness_limit: f64,
    contrast_limit: f64,
    probability: f64,
}

impl BrightnessContrast {
    pub fn new(brightness_limit: f64, contrast_limit: f64, probability: f64) -> Result<Self> {
        check_limit("brightness_limit", brightness_limit, MAX_FRACTION_LIMIT)?;
        check_limit("contrast_limit", contrast_limit, MAX_FRACTION_LIMIT)?;
        check_probability("brightness/contrast probability", probability)?;
        Ok(Self {
            brightness_limit,
            contrast_limit,
            probability,
        })
    }

    pub fn brightness_limit(&self) -> f64 {
        self.brightness_limit
    }

    pub fn contrast_limit(&self) -> f64 {
        self.contrast_limit
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn apply<R: Rng + ?Sized>(&self, image: &Image, rng: &mut R) -> Image {
        if !should_apply(rng, self.probability) {
            return image.clone();
        }
        let delta = uniform(rng, -self.brightness_limit, self.brightness_limit);
        let factor = uniform(rng, 1.0 - self.contrast_limit, 1.0 + self.contrast_limit);
        brightness_contrast(image, delta, factor)
    }
}
