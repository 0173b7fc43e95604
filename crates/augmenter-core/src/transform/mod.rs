pub mod geometric;
pub mod photometric;
pub mod sample;

use rand::Rng;

use crate::error::{AugmentError, Result};
use crate::raster::Image;

pub use geometric::{Affine, HorizontalFlip, Rotate, ShiftScaleRotate};
pub use photometric::BrightnessContrast;
pub use sample::BorderMode;

/// A single randomized image-to-image operator.
///
/// Every variant first draws its apply-or-skip decision from `rng`, then its
/// parameters only when applied. Output always has the input's shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Rotate(Rotate),
    ShiftScaleRotate(ShiftScaleRotate),
    BrightnessContrast(BrightnessContrast),
    HorizontalFlip(HorizontalFlip),
}

impl Transform {
    pub fn apply<R: Rng + ?Sized>(&self, image: &Image, rng: &mut R) -> Image {
        match self {
            Self::Rotate(t) => t.apply(image, rng),
            Self::ShiftScaleRotate(t) => t.apply(image, rng),
            Self::BrightnessContrast(t) => t.apply(image, rng),
            Self::HorizontalFlip(t) => t.apply(image, rng),
        }
    }

    pub fn probability(&self) -> f64 {
        match self {
            Self::Rotate(t) => t.probability(),
            Self::ShiftScaleRotate(t) => t.probability(),
            Self::BrightnessContrast(t) => t.probability(),
            Self::HorizontalFlip(t) => t.probability(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rotate(_) => "Rotate",
            Self::ShiftScaleRotate(_) => "Shift/Scale/Rotate",
            Self::BrightnessContrast(_) => "Brightness/Contrast",
            Self::HorizontalFlip(_) => "Horizontal Flip",
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rotate(t) => write!(
                f,
                "Rotate (±{}°, border={}, p={:.2})",
                t.limit_degrees(),
                t.border(),
                t.probability()
            ),
            Self::ShiftScaleRotate(t) => write!(
                f,
                "Shift/Scale/Rotate (shift=±{}, scale=±{}, rotate=±{}°, border={}, p={:.2})",
                t.shift_limit(),
                t.scale_limit(),
                t.rotate_limit(),
                t.border(),
                t.probability()
            ),
            Self::BrightnessContrast(t) => write!(
                f,
                "Brightness/Contrast (brightness=±{}, contrast=±{}, p={:.2})",
                t.brightness_limit(),
                t.contrast_limit(),
                t.probability()
            ),
            Self::HorizontalFlip(t) => write!(f, "Horizontal Flip (p={:.2})", t.probability()),
        }
    }
}

impl From<Rotate> for Transform {
    fn from(t: Rotate) -> Self {
        Self::Rotate(t)
    }
}

impl From<ShiftScaleRotate> for Transform {
    fn from(t: ShiftScaleRotate) -> Self {
        Self::ShiftScaleRotate(t)
    }
}

impl From<BrightnessContrast> for Transform {
    fn from(t: BrightnessContrast) -> Self {
        Self::BrightnessContrast(t)
    }
}

impl From<HorizontalFlip> for Transform {
    fn from(t: HorizontalFlip) -> Self {
        Self::HorizontalFlip(t)
    }
}

/// Uniform draw from `[low, high]`. A collapsed range returns `low`.
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if low >= high {
        return low;
    }
    rng.random_range(low..=high)
}

pub(crate) fn should_apply<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    rng.random_bool(probability)
}

pub(crate) fn check_probability(name: &str, p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(AugmentError::Config(format!(
            "{name} must be in [0.0, 1.0], got {p}"
        )));
    }
    Ok(())
}

pub(crate) fn check_limit(name: &str, limit: f64, max: f64) -> Result<()> {
    if !limit.is_finite() || limit < 0.0 {
        return Err(AugmentError::Config(format!(
            "{name} must be a non-negative number, got {limit}"
        )));
    }
    if limit > max {
        return Err(AugmentError::Config(format!(
            "{name} must be at most {max}, got {limit}"
        )));
    }
    Ok(())
}
