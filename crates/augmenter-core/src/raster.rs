use ndarray::{Array3, ArrayView1};

use crate::error::{AugmentError, Result};

/// An 8-bit image with interleaved channels.
///
/// Pixel data is row-major with shape `(height, width, channels)`.
/// Transforms never mutate an `Image` in place; they return a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    data: Array3<u8>,
}

impl Image {
    /// Wrap an existing pixel array. Rejects empty dimensions.
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let (h, w, c) = data.dim();
        if h == 0 || w == 0 || c == 0 {
            return Err(AugmentError::InvalidDimensions {
                width: w,
                height: h,
                channels: c,
            });
        }
        Ok(Self { data })
    }

    /// Build an image from a flat interleaved buffer.
    pub fn from_raw(width: usize, height: usize, channels: usize, pixels: Vec<u8>) -> Result<Self> {
        let data = Array3::from_shape_vec((height, width, channels), pixels).map_err(|_| {
            AugmentError::InvalidDimensions {
                width,
                height,
                channels,
            }
        })?;
        Self::new(data)
    }

    /// An image with every channel of every pixel set to `value`.
    pub fn filled(width: usize, height: usize, channels: usize, value: u8) -> Result<Self> {
        Self::new(Array3::from_elem((height, width, channels), value))
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    pub fn data(&self) -> &Array3<u8> {
        &self.data
    }

    pub fn into_data(self) -> Array3<u8> {
        self.data
    }

    /// Channel values of the pixel at (`row`, `col`).
    pub fn pixel(&self, row: usize, col: usize) -> ArrayView1<'_, u8> {
        self.data.slice(ndarray::s![row, col, ..])
    }

    /// Flat interleaved copy of the pixel data, in row-major order.
    pub fn to_raw(&self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }

    /// Apply `f` to every channel value, producing a new image of the same shape.
    pub fn map_values(&self, f: impl Fn(u8) -> u8) -> Self {
        Self {
            data: self.data.mapv(f),
        }
    }

    pub(crate) fn from_array_unchecked(data: Array3<u8>) -> Self {
        Self { data }
    }
}
