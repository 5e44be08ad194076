//! Deterministic per-axis seed derivation.
//!
//! A single world seed fans out into one decorrelated noise seed per climate
//! axis. Each axis reads its own ChaCha stream, so the derived seeds are stable
//! across platforms and Rust releases.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::climate::{AxisNoise, ClimateAxis, ClimateConfig};

/// Derive the noise seed for `axis` from a world seed.
pub fn derive_axis_seed(world_seed: u64, axis: ClimateAxis) -> u32 {
    let mut rng = ChaCha8Rng::seed_from_u64(world_seed);
    rng.set_stream(axis.index() as u64);
    rng.random()
}

impl ClimateConfig {
    /// Replace every layer's seed with one derived from `world_seed`,
    /// keeping all other noise parameters.
    pub fn reseed(&mut self, world_seed: u64) {
        self.temperature.seed = derive_axis_seed(world_seed, ClimateAxis::Temperature);
        self.moisture.seed = derive_axis_seed(world_seed, ClimateAxis::Moisture);
        self.continentalness.seed = derive_axis_seed(world_seed, ClimateAxis::Continentalness);
        self.erosion.seed = derive_axis_seed(world_seed, ClimateAxis::Erosion);
        if let AxisNoise::Noise(weirdness) = &mut self.weirdness {
            weirdness.seed = derive_axis_seed(world_seed, ClimateAxis::Weirdness);
        }
    }
}
