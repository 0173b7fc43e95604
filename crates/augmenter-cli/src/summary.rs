use std::path::Path;

use augmenter_core::augment::AugmentationPipeline;
use augmenter_core::config::AugmentConfig;
use augmenter_core::dataset::RunSummary;
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_run_summary(config: &AugmentConfig, pipeline: &AugmentationPipeline) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Dataset Augmentation"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(20)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output_root().display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Variants"),
        s.value.apply_to(config.augmentation_count)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Format"),
        s.method.apply_to(config.output_format)
    );
    match config.seed {
        Some(seed) => println!(
            "  {:<14}{}",
            s.label.apply_to("Seed"),
            s.value.apply_to(seed)
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Seed"),
            s.disabled.apply_to("random")
        ),
    }
    println!();

    println!("  {}", s.header.apply_to("Operators"));
    for (i, transform) in pipeline.transforms().iter().enumerate() {
        if transform.probability() > 0.0 {
            println!(
                "    {}. {}",
                s.label.apply_to(i + 1),
                s.value.apply_to(transform)
            );
        } else {
            println!(
                "    {}. {}",
                s.label.apply_to(i + 1),
                s.disabled.apply_to(format!("{} (disabled)", transform.name()))
            );
        }
    }
    println!();
}

pub fn print_totals(summary: &RunSummary, output_root: &Path) {
    let s = Styles::new();

    println!();
    if summary.cancelled {
        println!("  {}", s.disabled.apply_to("Run cancelled"));
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Directories"),
        s.value.apply_to(summary.directories)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Images"),
        s.value.apply_to(summary.images_processed)
    );
    if summary.images_skipped > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Skipped"),
            s.disabled.apply_to(summary.images_skipped)
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Files written"),
        s.value.apply_to(summary.files_written)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Seed"),
        s.value.apply_to(summary.seed)
    );
    println!(
        "\nOutput saved to {}",
        s.path.apply_to(output_root.display())
    );
}
