//! Biome catalog and multi-noise classification.
//!
//! A [`BiomeCatalog`] holds biome definitions, per-axis importance weights and
//! a blend radius. Resolving a [`crate::ClimateSample`] against it yields a
//! [`BiomeBlendResult`] of up to [`MAX_BLEND`] weighted biomes.

mod blend;
mod catalog;
mod def;
mod resolver;

pub use blend::{BiomeBlendResult, MAX_BLEND, WeightedBiome};
pub use catalog::{
    AxisWeights, BiomeCatalog, CatalogError, DEFAULT_BLEND_RADIUS, validate_blend_radius,
};
pub use def::BiomeDefinition;
pub use resolver::{BiomeResolver, resolve, validate_catalog};
