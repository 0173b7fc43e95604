#[allow(dead_code)]
mod common;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use augmenter_core::augment::{derive_rng, AugmentationPipeline};
use augmenter_core::config::TransformConfig;
use augmenter_core::transform::Transform;

use common::make_gradient_image;

/// Every operator fires with a non-trivial range.
fn always_on_config() -> TransformConfig {
    TransformConfig {
        rotate_probability: 1.0,
        shift_scale_probability: 1.0,
        brightness_contrast_probability: 1.0,
        flip_probability: 1.0,
        ..TransformConfig::default()
    }
}

fn never_config() -> TransformConfig {
    TransformConfig {
        rotate_probability: 0.0,
        shift_scale_probability: 0.0,
        brightness_contrast_probability: 0.0,
        horizontal_flip: false,
        ..TransformConfig::default()
    }
}

#[test]
fn test_default_pipeline_order() {
    let pipeline = AugmentationPipeline::from_config(&TransformConfig::default()).unwrap();
    let names: Vec<&str> = pipeline.transforms().iter().map(|t| t.name()).collect();
    assert_eq!(
        names,
        ["Rotate", "Shift/Scale/Rotate", "Brightness/Contrast", "Horizontal Flip"]
    );
    assert_eq!(pipeline.len(), 4);
    assert!(!pipeline.is_empty());
}

#[test]
fn test_default_pipeline_parameters() {
    let pipeline = AugmentationPipeline::from_config(&TransformConfig::default()).unwrap();
    match pipeline.transforms()[1] {
        Transform::ShiftScaleRotate(t) => {
            assert_eq!(t.rotate_limit(), 0.0);
            assert_eq!(t.shift_limit(), 0.2);
            assert_eq!(t.scale_limit(), 0.2);
            assert_eq!(t.probability(), 0.5);
        }
        ref other => panic!("unexpected operator {other}"),
    }
    assert_eq!(pipeline.transforms()[3].probability(), 1.0);
}

#[test]
fn test_disabled_flip_has_zero_probability() {
    let config = TransformConfig {
        horizontal_flip: false,
        ..TransformConfig::default()
    };
    let pipeline = AugmentationPipeline::from_config(&config).unwrap();
    assert_eq!(pipeline.transforms()[3].probability(), 0.0);
}

#[test]
fn test_augment_returns_exact_count() {
    let pipeline = AugmentationPipeline::from_config(&TransformConfig::default()).unwrap();
    let image = make_gradient_image(12, 17, 3);
    let mut rng = StdRng::seed_from_u64(9);
    for count in [0, 1, 2, 5] {
        let variants = pipeline.augment(&image, count, &mut rng);
        assert_eq!(variants.len(), count);
        for v in &variants {
            assert_eq!(v.channels(), image.channels());
            assert_eq!(v.width(), image.width());
            assert_eq!(v.height(), image.height());
        }
    }
}

#[test]
fn test_augment_does_not_mutate_input() {
    let pipeline = AugmentationPipeline::from_config(&always_on_config()).unwrap();
    let image = make_gradient_image(10, 10, 3);
    let before = image.clone();
    let mut rng = StdRng::seed_from_u64(5);
    let _ = pipeline.augment(&image, 3, &mut rng);
    assert_eq!(image, before);
}

#[test]
fn test_never_config_returns_copies() {
    let pipeline = AugmentationPipeline::from_config(&never_config()).unwrap();
    let image = make_gradient_image(8, 9, 3);
    let mut rng = StdRng::seed_from_u64(11);
    for v in pipeline.augment(&image, 4, &mut rng) {
        assert_eq!(v, image);
    }
}

#[test]
fn test_empty_pipeline_is_identity() {
    let pipeline = AugmentationPipeline::new(Vec::new());
    let image = make_gradient_image(4, 4, 1);
    let mut rng = StdRng::seed_from_u64(0);
    assert!(pipeline.is_empty());
    assert_eq!(pipeline.apply(&image, &mut rng), image);
}

#[test]
fn test_same_seed_same_variants() {
    let pipeline = AugmentationPipeline::from_config(&TransformConfig::default()).unwrap();
    let image = make_gradient_image(20, 24, 3);
    let a = pipeline.augment(&image, 4, &mut StdRng::seed_from_u64(77));
    let b = pipeline.augment(&image, 4, &mut StdRng::seed_from_u64(77));
    assert_eq!(a, b);
}

#[test]
fn test_variants_are_independent() {
    let pipeline = AugmentationPipeline::from_config(&always_on_config()).unwrap();
    let image = make_gradient_image(20, 24, 3);
    let variants = pipeline.augment(&image, 3, &mut StdRng::seed_from_u64(1));
    assert_ne!(variants[0], variants[1]);
    assert_ne!(variants[1], variants[2]);

    let other = pipeline.augment(&image, 3, &mut StdRng::seed_from_u64(2));
    assert_ne!(variants, other);
}

#[test]
fn test_derive_rng_streams() {
    let mut a = derive_rng(42, 3);
    let mut b = derive_rng(42, 3);
    let mut c = derive_rng(42, 4);
    let xa: u64 = a.random();
    let xb: u64 = b.random();
    let xc: u64 = c.random();
    assert_eq!(xa, xb);
    assert_ne!(xa, xc);
}

#[test]
fn test_pipeline_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AugmentationPipeline>();

    let pipeline = AugmentationPipeline::from_config(&TransformConfig::default()).unwrap();
    let image = make_gradient_image(16, 16, 3);

    let parallel: Vec<_> = (0..8u64)
        .into_par_iter()
        .map(|i| pipeline.augment(&image, 2, &mut derive_rng(123, i)))
        .collect();
    let sequential: Vec<_> = (0..8u64)
        .map(|i| pipeline.augment(&image, 2, &mut derive_rng(123, i)))
        .collect();
    assert_eq!(parallel, sequential);
}

#[test]
fn test_invalid_config_rejected() {
    let config = TransformConfig {
        scale_limit: 1.5,
        ..TransformConfig::default()
    };
    assert!(AugmentationPipeline::from_config(&config).is_err());

    let config = TransformConfig {
        rotate_probability: 2.0,
        ..TransformConfig::default()
    };
    assert!(AugmentationPipeline::from_config(&config).is_err());
}
