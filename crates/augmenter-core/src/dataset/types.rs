use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Thread-safe progress reporting for a dataset run.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// Processing of an input directory has started. `relative` is its path
    /// under the input root; `total_files` counts eligible images in it.
    fn begin_directory(&self, _relative: &Path, _total_files: usize) {}

    /// One source image in the current directory has been handled.
    fn advance(&self) {}

    /// A source image was skipped because it could not be read or decoded.
    fn file_skipped(&self, _path: &Path, _reason: &str) {}

    /// The current directory is finished.
    fn finish_directory(&self) {}
}

/// No-op progress reporter, used when `run_augmentation` delegates.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// Cooperative cancellation flag shared between the caller and the runner.
///
/// Once set, no new source images are scheduled; images already in flight
/// finish normally.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// What happened to one source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    /// Original plus variants written; holds the number of files written.
    Written(usize),
    /// Unreadable or undecodable; nothing written.
    Skipped,
    /// Not started because the run was cancelled.
    NotScheduled,
}

/// Totals for a finished (or cancelled) run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Base seed the per-file random streams were derived from.
    pub seed: u64,
    pub directories: usize,
    pub images_processed: usize,
    pub images_skipped: usize,
    pub files_written: usize,
    pub cancelled: bool,
}

impl RunSummary {
    pub(super) fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Written(n) => {
                self.images_processed += 1;
                self.files_written += n;
            }
            FileOutcome::Skipped => self.images_skipped += 1,
            FileOutcome::NotScheduled => self.cancelled = true,
        }
    }
}
