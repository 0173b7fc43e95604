//! Directory traversal of the input tree.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use super::layout::is_eligible;

/// One input directory and the eligible images directly inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryJob {
    pub source_dir: PathBuf,
    /// Path of `source_dir` relative to the input root (empty for the root).
    pub relative: PathBuf,
    /// Eligible image files, sorted by name.
    pub files: Vec<PathBuf>,
}

/// Walk `root` and list every directory, including empty ones, in sorted order.
///
/// `exclude` (typically the output root) is skipped along with everything
/// below it. Unreadable entries are logged and skipped.
pub fn scan(root: &Path, exclude: Option<&Path>) -> Vec<DirectoryJob> {
    let excluded = exclude.and_then(|p| p.canonicalize().ok());

    let mut jobs: Vec<DirectoryJob> = Vec::new();
    let mut index: HashMap<PathBuf, usize> = HashMap::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            !(e.file_type().is_dir()
                && excluded.is_some()
                && e.path().canonicalize().ok() == excluded)
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();

        if entry.file_type().is_dir() {
            let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
            index.insert(path.to_path_buf(), jobs.len());
            jobs.push(DirectoryJob {
                source_dir: path.to_path_buf(),
                relative,
                files: Vec::new(),
            });
        } else if path.is_file() && is_eligible(path) {
            if let Some(&i) = path.parent().and_then(|parent| index.get(parent)) {
                jobs[i].files.push(path.to_path_buf());
            }
        }
    }

    jobs
}
