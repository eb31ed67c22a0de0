//! Synthetic cloud generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `count` points uniformly distributed in `[0, 1]³`.
///
/// The same seed always yields the same cloud. Coordinates are flat and
/// row-major.
pub fn generate_uniform(count: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count * 3).map(|_| rng.gen_range(0.0..=1.0)).collect()
}
