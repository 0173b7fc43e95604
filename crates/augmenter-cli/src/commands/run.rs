use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Context, Result};
use augmenter_core::augment::AugmentationPipeline;
use augmenter_core::config::{validate, AugmentConfig, OutputFormat, TransformConfig};
use augmenter_core::dataset::{run_augmentation_reported, CancelToken, ProgressReporter};
use augmenter_core::transform::BorderMode;
use clap::{Args, ValueEnum};
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::summary::{print_run_summary, print_totals};

#[derive(Clone, ValueEnum)]
pub enum BorderModeArg {
    Reflect101,
    Replicate,
    Constant,
}

#[derive(Clone, ValueEnum)]
pub enum FormatArg {
    Png,
    Tiff,
}

#[derive(Args)]
pub struct RunArgs {
    /// Root directory of the labeled dataset
    pub input: Option<PathBuf>,

    /// Augmentation config file (TOML); replaces the parameter flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output root (default: <input>_augmented)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Augmented variants per source image
    #[arg(short = 'n', long, default_value = "2")]
    pub count: usize,

    /// Maximum rotation angle in degrees
    #[arg(long, default_value = "60")]
    pub rotate_limit: f64,

    /// Maximum shift as a fraction of width/height
    #[arg(long, default_value = "0.2")]
    pub shift_limit: f64,

    /// Maximum scale deviation from 1.0
    #[arg(long, default_value = "0.2")]
    pub scale_limit: f64,

    /// Maximum brightness delta as a fraction of full range
    #[arg(long, default_value = "0.2")]
    pub brightness_limit: f64,

    /// Maximum contrast deviation from 1.0
    #[arg(long, default_value = "0.4")]
    pub contrast_limit: f64,

    /// Probability of each rotate, shift/scale and brightness/contrast step
    #[arg(long, default_value = "0.5")]
    pub probability: f64,

    /// Disable horizontal flipping
    #[arg(long)]
    pub no_flip: bool,

    /// Border handling for rotated and shifted pixels
    #[arg(long, value_enum, default_value = "reflect101")]
    pub border: BorderModeArg,

    /// Fill value for the constant border mode
    #[arg(long, default_value = "0")]
    pub border_value: u8,

    /// Output image format
    #[arg(long, value_enum, default_value = "png")]
    pub format: FormatArg,

    /// Base seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        let mut config: AugmentConfig =
            toml::from_str(&contents).context("Invalid augmentation config")?;
        if let Some(ref input) = args.input {
            config.input = input.clone();
        }
        if args.output.is_some() {
            config.output = args.output.clone();
        }
        if args.seed.is_some() {
            config.seed = args.seed;
        }
        config
    } else {
        build_config_from_args(args)?
    };

    debug!(?config, "Resolved configuration");
    validate(&config)?;
    let pipeline = AugmentationPipeline::from_config(&config.transforms)?;
    print_run_summary(&config, &pipeline);

    let reporter = Arc::new(BarReporter::new()?);
    let summary = run_augmentation_reported(&config, reporter, CancelToken::new())?;

    print_totals(&summary, &config.output_root());
    Ok(())
}

fn build_config_from_args(args: &RunArgs) -> Result<AugmentConfig> {
    let Some(ref input) = args.input else {
        bail!("An input directory is required unless --config names one");
    };

    let border_mode = match args.border {
        BorderModeArg::Reflect101 => BorderMode::Reflect101,
        BorderModeArg::Replicate => BorderMode::Replicate,
        BorderModeArg::Constant => BorderMode::Constant(args.border_value),
    };
    let output_format = match args.format {
        FormatArg::Png => OutputFormat::Png,
        FormatArg::Tiff => OutputFormat::Tiff,
    };

    Ok(AugmentConfig {
        input: input.clone(),
        output: args.output.clone(),
        augmentation_count: args.count,
        seed: args.seed,
        output_format,
        transforms: TransformConfig {
            rotate_limit: args.rotate_limit,
            shift_limit: args.shift_limit,
            scale_limit: args.scale_limit,
            brightness_limit: args.brightness_limit,
            contrast_limit: args.contrast_limit,
            horizontal_flip: !args.no_flip,
            rotate_probability: args.probability,
            shift_scale_probability: args.probability,
            brightness_contrast_probability: args.probability,
            border_mode,
            ..Default::default()
        },
    })
}

/// One progress bar per input directory.
struct BarReporter {
    style: ProgressStyle,
    current: Mutex<Option<ProgressBar>>,
}

impl BarReporter {
    fn new() -> Result<Self> {
        let style = ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> ");
        Ok(Self {
            style,
            current: Mutex::new(None),
        })
    }
}

impl ProgressReporter for BarReporter {
    fn begin_directory(&self, relative: &Path, total_files: usize) {
        let pb = ProgressBar::new(total_files as u64);
        pb.set_style(self.style.clone());
        let label = if relative.as_os_str().is_empty() {
            ".".to_string()
        } else {
            relative.display().to_string()
        };
        pb.set_message(label);
        if let Ok(mut current) = self.current.lock() {
            *current = Some(pb);
        }
    }

    fn advance(&self) {
        if let Ok(current) = self.current.lock() {
            if let Some(ref pb) = *current {
                pb.inc(1);
            }
        }
    }

    fn file_skipped(&self, path: &Path, reason: &str) {
        let warn = Style::new().yellow();
        if let Ok(current) = self.current.lock() {
            if let Some(ref pb) = *current {
                pb.println(format!(
                    "  {} {} ({})",
                    warn.apply_to("skipped"),
                    path.display(),
                    reason
                ));
            }
        }
    }

    fn finish_directory(&self) {
        if let Ok(mut current) = self.current.lock() {
            if let Some(pb) = current.take() {
                pb.finish();
            }
        }
    }
}
