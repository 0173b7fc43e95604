use ndarray::{s, Array3, Axis};
use rand::Rng;
use rayon::prelude::*;

use crate::consts::{MAX_FRACTION_LIMIT, MAX_ROTATE_LIMIT, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{AugmentError, Result};
use crate::raster::Image;

use super::sample::{bilinear_into, BorderMode};
use super::{check_limit, check_probability, should_apply, uniform};

/// Similarity transform about the image center.
///
/// Forward mapping: `p' = scale * R(angle) * (p - c) + c + (dx, dy)`.
/// Positive angles rotate counter-clockwise as displayed (y axis down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub angle_degrees: f64,
    pub scale: f64,
    /// Translation in pixels.
    pub dx: f64,
    pub dy: f64,
}

impl Affine {
    pub fn identity() -> Self {
        Self {
            angle_degrees: 0.0,
            scale: 1.0,
            dx: 0.0,
            dy: 0.0,
        }
    }

    pub fn rotation(angle_degrees: f64) -> Self {
        Self {
            angle_degrees,
            ..Self::identity()
        }
    }

    pub fn is_identity(&self) -> bool {
        self.angle_degrees == 0.0 && self.scale == 1.0 && self.dx == 0.0 && self.dy == 0.0
    }
}

/// Warp `image` by `affine`, keeping its size. Uncovered pixels follow `border`.
///
/// Uses inverse mapping with bilinear sampling. The identity transform
/// returns an exact copy.
pub fn warp_affine(image: &Image, affine: &Affine, border: BorderMode) -> Image {
    if affine.is_identity() {
        return image.clone();
    }

    let src = image.data();
    let (h, w, c) = src.dim();
    let cx = (w as f64 - 1.0) / 2.0;
    let cy = (h as f64 - 1.0) / 2.0;
    let (sin, cos) = affine.angle_degrees.to_radians().sin_cos();
    let inv_scale = 1.0 / affine.scale;

    let warp_row = |row: usize, mut out_row: ndarray::ArrayViewMut2<'_, u8>| {
        let uy = row as f64 - cy - affine.dy;
        for col in 0..w {
            let ux = col as f64 - cx - affine.dx;
            let src_x = (cos * ux - sin * uy) * inv_scale + cx;
            let src_y = (sin * ux + cos * uy) * inv_scale + cy;
            bilinear_into(src, src_y, src_x, border, out_row.row_mut(col));
        }
    };

    let mut result = Array3::<u8>::zeros((h, w, c));
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        result
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, out_row)| warp_row(row, out_row));
    } else {
        for (row, out_row) in result.axis_iter_mut(Axis(0)).enumerate() {
            warp_row(row, out_row);
        }
    }

    Image::from_array_unchecked(result)
}

/// Mirror an image left-right.
pub fn flip_horizontal(image: &Image) -> Image {
    Image::from_array_unchecked(image.data().slice(s![.., ..;-1, ..]).to_owned())
}

/// Random rotation about the center by an angle in `[-limit, +limit]` degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotate {
    limit_degrees: f64,
    border: BorderMode,
    probability: f64,
}

impl Rotate {
    pub fn new(limit_degrees: f64, border: BorderMode, probability: f64) -> Result<Self> {
        check_limit("rotate_limit", limit_degrees, MAX_ROTATE_LIMIT)?;
        check_probability("rotate probability", probability)?;
        Ok(Self {
            limit_degrees,
            border,
            probability,
        })
    }

    pub fn limit_degrees(&self) -> f64 {
        self.limit_degrees
    }

    pub fn border(&self) -> BorderMode {
        self.border
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn apply<R: Rng + ?Sized>(&self, image: &Image, rng: &mut R) -> Image {
        if !should_apply(rng, self.probability) {
            return image.clone();
        }
        let angle = uniform(rng, -self.limit_degrees, self.limit_degrees);
        warp_affine(image, &Affine::rotation(angle), self.border)
    }
}

/// Random translation, scale and rotation combined into one warp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShiftScaleRotate {
    shift_limit: f64,
    scale_limit: f64,
    rotate_limit: f64,
    border: BorderMode,
    probability: f64,
}

impl ShiftScaleRotate {
    pub fn new(
        shift_limit: f64,
        scale_limit: f64,
        rotate_limit: f64,
        border: BorderMode,
        probability: f64,
    ) -> Result<Self> {
        check_limit("shift_limit", shift_limit, MAX_FRACTION_LIMIT)?;
        check_limit("scale_limit", scale_limit, MAX_FRACTION_LIMIT)?;
        if scale_limit >= 1.0 {
            return Err(AugmentError::Config(format!(
                "scale_limit must be below 1.0, got {scale_limit}"
            )));
        }
        check_limit("shift-scale rotate_limit", rotate_limit, MAX_ROTATE_LIMIT)?;
        check_probability("shift-scale probability", probability)?;
        Ok(Self {
            shift_limit,
            scale_limit,
            rotate_limit,
            border,
            probability,
        })
    }

    pub fn shift_limit(&self) -> f64 {
        self.shift_limit
    }

    pub fn scale_limit(&self) -> f64 {
        self.scale_limit
    }

    pub fn rotate_limit(&self) -> f64 {
        self.rotate_limit
    }

    pub fn border(&self) -> BorderMode {
        self.border
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Draw one warp for an image of the given size.
    pub fn sample_affine<R: Rng + ?Sized>(&self, width: usize, height: usize, rng: &mut R) -> Affine {
        let angle_degrees = uniform(rng, -self.rotate_limit, self.rotate_limit);
        let scale = uniform(rng, 1.0 - self.scale_limit, 1.0 + self.scale_limit);
        let dx = uniform(rng, -self.shift_limit, self.shift_limit) * width as f64;
        let dy = uniform(rng, -self.shift_limit, self.shift_limit) * height as f64;
        Affine {
            angle_degrees,
            scale,
            dx,
            dy,
        }
    }

    pub fn apply<R: Rng + ?Sized>(&self, image: &Image, rng: &mut R) -> Image {
        if !should_apply(rng, self.probability) {
            return image.clone();
        }
        let affine = self.sample_affine(image.width(), image.height(), rng);
        warp_affine(image, &affine, self.border)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalFlip {
    probability: f64,
}

impl HorizontalFlip {
    pub fn new(probability: f64) -> Result<Self> {
        check_probability("flip probability", probability)?;
        Ok(Self { probability })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn apply<R: Rng + ?Sized>(&self, image: &Image, rng: &mut R) -> Image {
        if should_apply(rng, self.probability) {
            flip_horizontal(image)
        } else {
            image.clone()
        }
    }
}
