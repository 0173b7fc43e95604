use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AugmentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid image dimensions: {width}x{height}x{channels}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        channels: usize,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AugmentError {
    /// Wrap an I/O error that happened while creating or writing `path`.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// True for errors that only affect a single source file.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, AugmentError>;
