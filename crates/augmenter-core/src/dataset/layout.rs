//! Input eligibility and output file naming.

use std::path::{Path, PathBuf};

use crate::config::OutputFormat;
use crate::consts::{AUGMENTED_INFIX, ELIGIBLE_EXTENSIONS, ORIGINAL_SUFFIX};

/// True when the file name ends in exactly `.jpg` or `.png`. `.JPG` is not
/// eligible; a bare `.jpg` is.
pub fn is_eligible(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| {
            ELIGIBLE_EXTENSIONS.iter().any(|ext| {
                name.strip_suffix(*ext)
                    .is_some_and(|rest| rest.ends_with('.'))
            })
        })
}

/// Output files written for one source image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    /// `<stem>_original.<ext>`
    pub original: PathBuf,
    /// `<stem>_aug_<i>.<ext>` for `i` in `0..count`
    pub augmented: Vec<PathBuf>,
}

/// Paths under `output_dir` for `source` and `count` augmented variants.
pub fn output_paths(
    output_dir: &Path,
    source: &Path,
    count: usize,
    format: OutputFormat,
) -> OutputPaths {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = format.extension();

    OutputPaths {
        original: output_dir.join(format!("{stem}{ORIGINAL_SUFFIX}.{ext}")),
        augmented: (0..count)
            .map(|i| output_dir.join(format!("{stem}{AUGMENTED_INFIX}{i}.{ext}")))
            .collect(),
    }
}
