pub mod layout;
mod runner;
mod types;
pub mod walker;

pub use runner::{augment_file, run_augmentation, run_augmentation_reported};
pub use types::{CancelToken, FileOutcome, NoOpReporter, ProgressReporter, RunSummary};
