use ndarray::{Array3, ArrayViewMut1};
use serde::{Deserialize, Serialize};

use crate::consts::CHANNEL_MAX;

/// How geometric transforms fill pixels whose source lies outside the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderMode {
    /// Mirror about the edge pixel without repeating it: `dcb|abcd|cba`.
    #[default]
    Reflect101,
    /// Repeat the nearest edge pixel: `aaa|abcd|ddd`.
    Replicate,
    /// Fill every channel with a fixed value.
    Constant(u8),
}

impl BorderMode {
    /// Map a possibly out-of-range index onto `0..len`.
    ///
    /// Returns `None` when the index falls outside and the mode is `Constant`.
    pub fn resolve(self, index: i64, len: usize) -> Option<usize> {
        let n = len as i64;
        match self {
            Self::Constant(_) => (0..n).contains(&index).then_some(index as usize),
            Self::Replicate => Some(index.clamp(0, n - 1) as usize),
            Self::Reflect101 => {
                if n == 1 {
                    return Some(0);
                }
                let period = 2 * (n - 1);
                let m = index.rem_euclid(period);
                Some(if m >= n { period - m } else { m } as usize)
            }
        }
    }

    fn fill(self) -> f32 {
        match self {
            Self::Constant(v) => v as f32,
            _ => 0.0,
        }
    }
}

impl std::fmt::Display for BorderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reflect101 => write!(f, "Reflect 101"),
            Self::Replicate => write!(f, "Replicate"),
            Self::Constant(v) => write!(f, "Constant ({v})"),
        }
    }
}

/// Bilinearly sample every channel at fractional (`y`, `x`) into `dst`.
///
/// At integer coordinates the result is the source pixel exactly.
pub fn bilinear_into(
    src: &Array3<u8>,
    y: f64,
    x: f64,
    border: BorderMode,
    mut dst: ArrayViewMut1<'_, u8>,
) {
    let (h, w, c) = src.dim();

    let x0 = x.floor();
    let y0 = y.floor();
    let fx = (x - x0) as f32;
    let fy = (y - y0) as f32;
    let x0 = x0 as i64;
    let y0 = y0 as i64;

    let cols = [border.resolve(x0, w), border.resolve(x0.saturating_add(1), w)];
    let rows = [border.resolve(y0, h), border.resolve(y0.saturating_add(1), h)];
    let weights = [
        (1.0 - fx) * (1.0 - fy),
        fx * (1.0 - fy),
        (1.0 - fx) * fy,
        fx * fy,
    ];
    let fill = border.fill();

    for ch in 0..c {
        let fetch = |r: Option<usize>, col: Option<usize>| match (r, col) {
            (Some(r), Some(col)) => src[[r, col, ch]] as f32,
            _ => fill,
        };
        let v = fetch(rows[0], cols[0]) * weights[0]
            + fetch(rows[0], cols[1]) * weights[1]
            + fetch(rows[1], cols[0]) * weights[2]
            + fetch(rows[1], cols[1]) * weights[3];
        dst[ch] = v.round().clamp(0.0, CHANNEL_MAX) as u8;
    }
}
