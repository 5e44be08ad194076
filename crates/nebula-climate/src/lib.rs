//! Procedural climate fields and multi-noise biome classification.
//!
//! Derives a five-axis climate sample for every cell of a 2D grid from layered
//! coherent noise, and resolves each sample against a catalog of biome
//! definitions into a smoothly blended set of up to four weighted biomes.

mod error;
mod grid;
mod noise_field;
mod seed;

pub mod biome;
pub mod classify;
pub mod climate;

pub use biome::{
    AxisWeights, BiomeBlendResult, BiomeCatalog, BiomeDefinition, BiomeResolver, CatalogError,
    DEFAULT_BLEND_RADIUS, MAX_BLEND, WeightedBiome, resolve, validate_blend_radius,
    validate_catalog,
};
pub use classify::{BiomeCoverage, SliceParams, classify_map, climate_slice, dominant_map};
pub use climate::{
    AxisNoise, AxisRange, ClimateAxis, ClimateConfig, ClimateSample, DEFAULT_LATITUDE_INFLUENCE,
    generate_climate_map, latitude_temperature,
};
pub use error::{GenerationError, NoiseConfigError};
pub use grid::Grid;
pub use noise_field::{
    FractalKind, MAX_OCTAVES, NoiseConfig, NoiseKind, NoiseSampler, generate_noise_field,
    normalize_sample,
};
pub use seed::derive_axis_seed;
