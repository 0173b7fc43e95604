/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Channel value treated as the contrast pivot (mid-gray for 8-bit data).
pub const CONTRAST_PIVOT: f32 = 128.0;

/// Maximum 8-bit channel value. Brightness deltas are fractions of this.
pub const CHANNEL_MAX: f32 = 255.0;

/// Number of entries in an 8-bit lookup table.
pub const LUT_SIZE: usize = 256;

/// Source file extensions eligible for augmentation. Matched case-sensitively.
pub const ELIGIBLE_EXTENSIONS: [&str; 2] = ["jpg", "png"];

/// Suffix appended to the input root when no output root is given.
pub const OUTPUT_ROOT_SUFFIX: &str = "_augmented";

/// Stem suffix for the unmodified copy of a source image.
pub const ORIGINAL_SUFFIX: &str = "_original";

/// Stem infix for augmented variants: `<stem>_aug_<index>`.
pub const AUGMENTED_INFIX: &str = "_aug_";

/// Largest accepted rotation limit in degrees.
pub const MAX_ROTATE_LIMIT: f64 = 360.0;

/// Largest accepted shift, brightness and contrast limit.
pub const MAX_FRACTION_LIMIT: f64 = 1.0;

/// Default maximum rotation angle in degrees.
pub const DEFAULT_ROTATE_LIMIT: f64 = 60.0;

/// Default maximum translation as a fraction of image width/height.
pub const DEFAULT_SHIFT_LIMIT: f64 = 0.2;

/// Default maximum scale deviation from 1.0.
pub const DEFAULT_SCALE_LIMIT: f64 = 0.2;

/// Default maximum brightness delta as a fraction of the channel range.
pub const DEFAULT_BRIGHTNESS_LIMIT: f64 = 0.2;

/// Default maximum contrast deviation from 1.0.
pub const DEFAULT_CONTRAST_LIMIT: f64 = 0.4;

/// Default application probability for rotate, shift-scale and brightness/contrast.
pub const DEFAULT_OPERATOR_PROBABILITY: f64 = 0.5;

/// Default flip probability when horizontal flipping is enabled.
pub const DEFAULT_FLIP_PROBABILITY: f64 = 1.0;

/// Default number of augmented variants per source image.
pub const DEFAULT_AUGMENTATION_COUNT: usize = 2;
