mod validation;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_AUGMENTATION_COUNT, DEFAULT_BRIGHTNESS_LIMIT, DEFAULT_CONTRAST_LIMIT,
    DEFAULT_FLIP_PROBABILITY, DEFAULT_OPERATOR_PROBABILITY, DEFAULT_ROTATE_LIMIT,
    DEFAULT_SCALE_LIMIT, DEFAULT_SHIFT_LIMIT, OUTPUT_ROOT_SUFFIX,
};
use crate::transform::BorderMode;

pub use validation::validate;

/// Full configuration of a dataset augmentation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AugmentConfig {
    /// Root of the labeled image tree.
    pub input: PathBuf,
    /// Root of the mirrored output tree. Defaults to `<input>_augmented`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Augmented variants written per source image.
    #[serde(default = "default_augmentation_count")]
    pub augmentation_count: usize,
    /// Base seed for reproducible runs. Drawn from entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub output_format: OutputFormat,
    #[serde(default)]
    pub transforms: TransformConfig,
}

impl AugmentConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            augmentation_count: DEFAULT_AUGMENTATION_COUNT,
            seed: None,
            output_format: OutputFormat::default(),
            transforms: TransformConfig::default(),
        }
    }

    /// The output root, falling back to `<input>_augmented`.
    pub fn output_root(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_root(&self.input))
    }
}

/// Sibling directory of `input` named `<input>_augmented`.
pub fn default_output_root(input: &Path) -> PathBuf {
    let mut name = input
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(OUTPUT_ROOT_SUFFIX);
    input.with_file_name(name)
}

fn default_augmentation_count() -> usize {
    DEFAULT_AUGMENTATION_COUNT
}

/// Parameter ranges and probabilities of the augmentation operators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Maximum rotation angle in degrees.
    pub rotate_limit: f64,
    /// Maximum translation as a fraction of width/height.
    pub shift_limit: f64,
    /// Maximum deviation of the scale factor from 1.0.
    pub scale_limit: f64,
    /// Maximum brightness delta as a fraction of the channel range.
    pub brightness_limit: f64,
    /// Maximum deviation of the contrast factor from 1.0.
    pub contrast_limit: f64,
    /// When false the flip operator never fires.
    pub horizontal_flip: bool,
    pub rotate_probability: f64,
    pub shift_scale_probability: f64,
    pub brightness_contrast_probability: f64,
    /// Flip probability used when `horizontal_flip` is enabled.
    pub flip_probability: f64,
    pub border_mode: BorderMode,
}

impl TransformConfig {
    /// Probability actually given to the flip operator.
    pub fn effective_flip_probability(&self) -> f64 {
        if self.horizontal_flip {
            self.flip_probability
        } else {
            0.0
        }
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            rotate_limit: DEFAULT_ROTATE_LIMIT,
            shift_limit: DEFAULT_SHIFT_LIMIT,
            scale_limit: DEFAULT_SCALE_LIMIT,
            brightness_limit: DEFAULT_BRIGHTNESS_LIMIT,
            contrast_limit: DEFAULT_CONTRAST_LIMIT,
            horizontal_flip: true,
            rotate_probability: DEFAULT_OPERATOR_PROBABILITY,
            shift_scale_probability: DEFAULT_OPERATOR_PROBABILITY,
            brightness_contrast_probability: DEFAULT_OPERATOR_PROBABILITY,
            flip_probability: DEFAULT_FLIP_PROBABILITY,
            border_mode: BorderMode::default(),
        }
    }
}

/// Encoding used for every written image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Png,
    Tiff,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Tiff => "tiff",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Png => write!(f, "PNG"),
            Self::Tiff => write!(f, "TIFF"),
        }
    }
}
