mod pipeline;
mod rng;

pub use pipeline::AugmentationPipeline;
pub use rng::{derive_rng, entropy_seed};
