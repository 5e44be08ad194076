//! Multi-noise biome resolution: nearest match, then inverse-distance blending.

use super::{
    BiomeBlendResult, BiomeCatalog, BiomeDefinition, CatalogError, MAX_BLEND, WeightedBiome,
};
use crate::climate::ClimateSample;

/// Guards the inverse-distance weights against a zero distance.
const WEIGHT_EPSILON: f64 = 1e-6;

/// Anything that can classify a climate sample into a biome blend.
pub trait BiomeResolver {
    /// Per-biome payload carried through to the blend result.
    type Payload;

    /// Classify one climate sample.
    fn resolve(&self, climate: &ClimateSample) -> BiomeBlendResult<'_, Self::Payload>;

    /// Check the resolver is ready for classification.
    fn validate(&self) -> Result<(), CatalogError>;
}

impl<P> BiomeResolver for BiomeCatalog<P> {
    type Payload = P;

    /// Nearest biome by weighted distance; when blending is enabled and the
    /// match is not exact, every biome within `best + blend_radius` competes
    /// for one of four slots and the slots are weighted by inverse distance.
    fn resolve(&self, climate: &ClimateSample) -> BiomeBlendResult<'_, P> {
        let mut best: Option<Candidate<'_, P>> = None;
        for (index, biome) in self.biomes() {
            let distance = self.weighted_distance(biome, climate);
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(Candidate {
                    index,
                    biome,
                    distance,
                });
            }
        }

        let Some(best) = best else {
            return BiomeBlendResult::empty();
        };
        // NaN radius falls through to a single match as well.
        if !(self.blend_radius > 0.0) || best.distance <= 0.0 {
            return BiomeBlendResult::single(best.index, best.biome, best.distance);
        }

        let threshold = best.distance + self.blend_radius;
        let mut nearest = NearestSlots::new();
        for (index, biome) in self.biomes() {
            let distance = self.weighted_distance(biome, climate);
            if distance > threshold {
                continue;
            }
            nearest.insert(Candidate {
                index,
                biome,
                distance,
            });
        }
        nearest.into_blend()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        BiomeCatalog::validate(self)
    }
}

/// Classify `climate` against `catalog`.
///
/// The catalog is expected to have passed [`validate_catalog`]; an empty
/// catalog yields an empty result and empty slots are skipped.
pub fn resolve<'a, P>(
    catalog: &'a BiomeCatalog<P>,
    climate: &ClimateSample,
) -> BiomeBlendResult<'a, P> {
    BiomeResolver::resolve(catalog, climate)
}

/// Check that `catalog` is non-empty, has no empty slots, and has a usable
/// blend radius and axis weights.
pub fn validate_catalog<P>(catalog: &BiomeCatalog<P>) -> Result<(), CatalogError> {
    catalog.validate()
}

struct Candidate<'a, P> {
    index: usize,
    biome: &'a BiomeDefinition<P>,
    distance: f64,
}

impl<P> Clone for Candidate<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Candidate<'_, P> {}

/// The four smallest distances seen so far, strictly ascending by insertion.
///
/// Insertion shifts later slots down by one and drops whatever falls off the
/// end. Equal distances keep catalog order.
struct NearestSlots<'a, P> {
    slots: [Option<Candidate<'a, P>>; MAX_BLEND],
    len: usize,
}

impl<'a, P> NearestSlots<'a, P> {
    fn new() -> Self {
        Self {
            slots: [None; MAX_BLEND],
            len: 0,
        }
    }

    fn insert(&mut self, candidate: Candidate<'a, P>) {
        let position = self.slots[..self.len]
            .iter()
            .flatten()
            .position(|slot| candidate.distance < slot.distance)
            .unwrap_or(self.len);
        if position >= MAX_BLEND {
            return;
        }

        let mut i = self.len.min(MAX_BLEND - 1);
        while i > position {
            self.slots[i] = self.slots[i - 1];
            i -= 1;
        }
        self.slots[position] = Some(candidate);
        self.len = (self.len + 1).min(MAX_BLEND);
    }

    fn into_blend(self) -> BiomeBlendResult<'a, P> {
        let filled = &self.slots[..self.len];
        match filled {
            [] => BiomeBlendResult::empty(),
            [Some(only)] => BiomeBlendResult::single(only.index, only.biome, only.distance),
            _ => {
                let mut weights = [0.0; MAX_BLEND];
                let mut total = 0.0;
                for (weight, slot) in weights.iter_mut().zip(filled.iter().flatten()) {
                    *weight = 1.0 / (slot.distance + WEIGHT_EPSILON);
                    total += *weight;
                }
                BiomeBlendResult::from_weighted(filled.iter().flatten().zip(weights).map(
                    |(slot, weight)| WeightedBiome {
                        index: slot.index,
                        biome: slot.biome,
                        weight: weight / total,
                        distance: slot.distance,
                    },
                ))
            }
        }
    }
}
