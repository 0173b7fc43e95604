use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Independent random stream number `stream` under `base_seed`.
///
/// The dataset runner gives every source file its own stream, so a seeded
/// run produces the same variants regardless of worker scheduling.
pub fn derive_rng(base_seed: u64, stream: u64) -> StdRng {
    StdRng::seed_from_u64(base_seed.wrapping_add(stream))
}

/// Fresh base seed from the thread-local generator.
pub fn entropy_seed() -> u64 {
    rand::rng().random()
}
