//! Configuration validation.

use std::path::Path;

use super::AugmentConfig;
use crate::augment::AugmentationPipeline;
use crate::error::{AugmentError, Result};

/// Validate the configuration before any file is touched.
pub fn validate(config: &AugmentConfig) -> Result<()> {
    if config.input.as_os_str().is_empty() {
        return Err(AugmentError::Config("input root is required".into()));
    }
    if !config.input.is_dir() {
        return Err(AugmentError::Config(format!(
            "input root {} is not a directory",
            config.input.display()
        )));
    }

    let output = config.output_root();
    if output.as_os_str().is_empty() {
        return Err(AugmentError::Config("output root is empty".into()));
    }
    if output == config.input || same_directory(&output, &config.input) {
        return Err(AugmentError::Config(
            "output root cannot be the same as the input root".into(),
        ));
    }
    if output.is_file() {
        return Err(AugmentError::Config(format!(
            "output root {} exists and is a file",
            output.display()
        )));
    }

    AugmentationPipeline::from_config(&config.transforms)?;
    // Checked even when flipping is disabled.
    if !(0.0..=1.0).contains(&config.transforms.flip_probability) {
        return Err(AugmentError::Config(format!(
            "flip_probability must be in [0.0, 1.0], got {}",
            config.transforms.flip_probability
        )));
    }

    Ok(())
}

/// True when both paths exist and resolve to the same directory.
fn same_directory(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
