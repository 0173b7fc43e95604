use rand::Rng;

use crate::config::TransformConfig;
use crate::error::Result;
use crate::raster::Image;
use crate::transform::{BrightnessContrast, HorizontalFlip, Rotate, ShiftScaleRotate, Transform};

/// Ordered composition of transform operators.
///
/// Built once and shared read-only; all randomness comes from the caller's
/// rng, so one pipeline can serve any number of workers.
#[derive(Clone, Debug, PartialEq)]
pub struct AugmentationPipeline {
    transforms: Vec<Transform>,
}

impl AugmentationPipeline {
    pub fn new(transforms: Vec<Transform>) -> Self {
        Self { transforms }
    }

    /// Rotate → ShiftScaleRotate → BrightnessContrast → HorizontalFlip.
    ///
    /// The shift/scale operator carries no rotation of its own. The flip
    /// operator is always present; a disabled flip gets probability 0.
    pub fn from_config(config: &TransformConfig) -> Result<Self> {
        let transforms: Vec<Transform> = vec![
            Rotate::new(
                config.rotate_limit,
                config.border_mode,
                config.rotate_probability,
            )?
            .into(),
            ShiftScaleRotate::new(
                config.shift_limit,
                config.scale_limit,
                0.0,
                config.border_mode,
                config.shift_scale_probability,
            )?
            .into(),
            BrightnessContrast::new(
                config.brightness_limit,
                config.contrast_limit,
                config.brightness_contrast_probability,
            )?
            .into(),
            HorizontalFlip::new(config.effective_flip_probability())?.into(),
        ];
        Ok(Self::new(transforms))
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Pass `image` once through every operator in order.
    pub fn apply<R: Rng + ?Sized>(&self, image: &Image, rng: &mut R) -> Image {
        let mut current = image.clone();
        for transform in &self.transforms {
            current = transform.apply(&current, rng);
        }
        current
    }

    /// Produce exactly `count` independently sampled variants of `image`.
    pub fn augment<R: Rng + ?Sized>(&self, image: &Image, count: usize, rng: &mut R) -> Vec<Image> {
        (0..count).map(|_| self.apply(image, rng)).collect()
    }
}
