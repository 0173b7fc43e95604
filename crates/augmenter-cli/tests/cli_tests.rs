//! CLI integration tests for the `augmenter` binary.

use std::path::Path;

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("augmenter").unwrap()
}

fn write_image(path: &Path) {
    RgbImage::from_fn(12, 9, |x, y| Rgb([(x * 20) as u8, (y * 25) as u8, 90]))
        .save(path)
        .unwrap();
}

fn make_dataset(root: &Path) -> std::path::PathBuf {
    let input = root.join("dataset");
    std::fs::create_dir_all(input.join("cats")).unwrap();
    write_image(&input.join("cats/a.png"));
    std::fs::write(input.join("cats/broken.jpg"), b"garbage").unwrap();
    input
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn test_help_shows_all_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_run_subcommand_help() {
    cmd()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--count"))
        .stdout(predicate::str::contains("--rotate-limit"))
        .stdout(predicate::str::contains("--no-flip"))
        .stdout(predicate::str::contains("--seed"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("augmenter"));
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_config_prints_default_toml() {
    cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("augmentation_count = 2"))
        .stdout(predicate::str::contains("[transforms]"));
}

#[test]
fn test_config_writes_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("augment.toml");
    cmd()
        .args(["config", "-o"])
        .arg(&path)
        .assert()
        .success();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("rotate_limit"));
}

// =============================================================================
// Run
// =============================================================================

#[test]
fn test_run_writes_mirrored_tree() {
    let dir = TempDir::new().unwrap();
    let input = make_dataset(dir.path());

    cmd()
        .arg("run")
        .arg(&input)
        .args(["--count", "3", "--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Output saved to"));

    let out = dir.path().join("dataset_augmented/cats");
    assert!(out.join("a_original.png").is_file());
    for i in 0..3 {
        assert!(out.join(format!("a_aug_{i}.png")).is_file());
    }
    assert!(!out.join("broken_original.png").exists());
}

#[test]
fn test_run_from_config_file() {
    let dir = TempDir::new().unwrap();
    let input = make_dataset(dir.path());
    let output = dir.path().join("out");
    let config = dir.path().join("augment.toml");
    std::fs::write(
        &config,
        format!(
            "input = {:?}\noutput = {:?}\naugmentation_count = 1\nseed = 3\noutput_format = \"Tiff\"\n",
            input.display().to_string(),
            output.display().to_string()
        ),
    )
    .unwrap();

    cmd().arg("run").arg("--config").arg(&config).assert().success();

    assert!(output.join("cats/a_original.tiff").is_file());
    assert!(output.join("cats/a_aug_0.tiff").is_file());
}

#[test]
fn test_run_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    cmd()
        .arg("run")
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_run_without_input_fails() {
    cmd()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input directory is required"));
}

#[test]
fn test_run_rejects_bad_limit() {
    let dir = TempDir::new().unwrap();
    let input = make_dataset(dir.path());
    cmd()
        .arg("run")
        .arg(&input)
        .args(["--contrast-limit", "1.5"])
        .assert()
        .failure();
    assert!(!dir.path().join("dataset_augmented").exists());
}

#[test]
fn test_run_rejects_unknown_border_mode() {
    cmd()
        .args(["run", "dataset", "--border", "wrap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
