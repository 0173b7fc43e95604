use std::path::Path;
use std::sync::Arc;

use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::augment::{derive_rng, entropy_seed, AugmentationPipeline};
use crate::config::{validate, AugmentConfig, OutputFormat};
use crate::error::{AugmentError, Result};
use crate::io::{load_image, save_image};

use super::layout::output_paths;
use super::types::{CancelToken, FileOutcome, NoOpReporter, ProgressReporter, RunSummary};
use super::walker::scan;

/// Augment a whole dataset without progress reporting or cancellation.
pub fn run_augmentation(config: &AugmentConfig) -> Result<RunSummary> {
    run_augmentation_reported(config, Arc::new(NoOpReporter), CancelToken::new())
}

/// Augment every eligible image under the input root into the mirrored output tree.
///
/// Undecodable sources are skipped and counted; filesystem failures abort
/// the run. Files within a directory are processed in parallel, each with
/// its own random stream derived from the base seed.
pub fn run_augmentation_reported(
    config: &AugmentConfig,
    reporter: Arc<dyn ProgressReporter>,
    cancel: CancelToken,
) -> Result<RunSummary> {
    validate(config)?;
    let pipeline = AugmentationPipeline::from_config(&config.transforms)?;
    let seed = config.seed.unwrap_or_else(entropy_seed);
    let output_root = config.output_root();

    let jobs = scan(&config.input, Some(&output_root));
    info!(
        input = %config.input.display(),
        output = %output_root.display(),
        directories = jobs.len(),
        seed,
        "Starting augmentation"
    );

    let mut summary = RunSummary {
        seed,
        ..Default::default()
    };
    let mut stream_base: u64 = 0;

    for job in &jobs {
        if cancel.is_cancelled() {
            summary.cancelled = true;
            break;
        }

        let output_dir = output_root.join(&job.relative);
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| AugmentError::filesystem(&output_dir, e))?;
        summary.directories += 1;

        info!(
            directory = %job.source_dir.display(),
            images = job.files.len(),
            "Augmenting images"
        );
        reporter.begin_directory(&job.relative, job.files.len());

        let outcomes: Vec<FileOutcome> = job
            .files
            .par_iter()
            .enumerate()
            .map(|(i, source)| {
                if cancel.is_cancelled() {
                    return Ok(FileOutcome::NotScheduled);
                }
                let mut rng = derive_rng(seed, stream_base + i as u64);
                let outcome = augment_file(
                    &pipeline,
                    source,
                    &output_dir,
                    config.augmentation_count,
                    config.output_format,
                    &mut rng,
                );
                match outcome {
                    Ok(outcome) => {
                        reporter.advance();
                        Ok(outcome)
                    }
                    Err(e) if e.is_per_file() => {
                        warn!(file = %source.display(), error = %e, "Error reading image");
                        reporter.file_skipped(source, &e.to_string());
                        reporter.advance();
                        Ok(FileOutcome::Skipped)
                    }
                    Err(e) => Err(e),
                }
            })
            .collect::<Result<_>>()?;

        for outcome in outcomes {
            summary.record(outcome);
        }
        stream_base += job.files.len() as u64;
        reporter.finish_directory();
    }

    info!(
        processed = summary.images_processed,
        skipped = summary.images_skipped,
        written = summary.files_written,
        cancelled = summary.cancelled,
        "Augmentation complete"
    );
    Ok(summary)
}

/// Decode one source image and write its original copy plus `count` variants.
///
/// Returns [`AugmentError::Decode`] when the source cannot be read or
/// decoded; nothing is written in that case.
pub fn augment_file<R: Rng + ?Sized>(
    pipeline: &AugmentationPipeline,
    source: &Path,
    output_dir: &Path,
    count: usize,
    format: OutputFormat,
    rng: &mut R,
) -> Result<FileOutcome> {
    let image = load_image(source)?;
    debug!(
        file = %source.display(),
        width = image.width(),
        height = image.height(),
        channels = image.channels(),
        "Decoded image"
    );

    let paths = output_paths(output_dir, source, count, format);
    save_image(&image, &paths.original, format)?;

    let variants = pipeline.augment(&image, count, rng);
    for (variant, path) in variants.iter().zip(&paths.augmented) {
        save_image(variant, path, format)?;
    }

    Ok(FileOutcome::Written(1 + variants.len()))
}
