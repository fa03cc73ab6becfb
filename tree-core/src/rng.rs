//! The single random stream behind every generation call.
//!
//! Each call to [`crate::scene::generate`] owns exactly one stream,
//! seeded from `TreeParameters::seed`, and every builder draws from it
//! in a fixed order. Reordering draws changes the output for a given
//! seed and is therefore a correctness bug, not a style choice.

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// The concrete stream type used by the generator.
pub type SceneRng = SmallRng;

/// Creates a fresh stream for one generation call.
pub fn seeded(seed: u64) -> SceneRng {
    SmallRng::seed_from_u64(seed)
}

/// Draws a uniform value in `[0, 1)`.
///
/// All unit-interval draws in the generator go through this helper so
/// the consumption order of the stream stays auditable.
#[inline]
pub fn unit(rng: &mut impl Rng) -> f32 {
    rng.random::<f32>()
}
