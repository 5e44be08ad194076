//! Biome catalog: ordered biome definitions plus classification tuning.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::BiomeDefinition;
use crate::climate::{ClimateAxis, ClimateSample};

/// Default blend radius for newly created catalogs.
pub const DEFAULT_BLEND_RADIUS: f64 = 0.02;

/// Errors reported when a catalog is not fit for classification.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// The catalog holds no entries at all.
    #[error("no biomes in catalog")]
    Empty,

    /// An entry slot holds no biome.
    #[error("biome at index [{index}] is missing")]
    MissingBiome {
        /// Position of the empty slot.
        index: usize,
    },

    /// A biome with this name is already registered.
    #[error("duplicate biome name: {0}")]
    DuplicateName(String),

    /// Blend radius is negative, NaN, or infinite.
    #[error("blend radius must be finite and non-negative, got {0}")]
    BlendRadius(f64),

    /// An axis weight is zero, negative, NaN, or infinite.
    #[error("{axis} weight must be positive and finite, got {value}")]
    AxisWeight {
        /// Axis carrying the bad weight.
        axis: ClimateAxis,
        /// The offending weight.
        value: f64,
    },
}

/// Reject a blend radius that would break the blend threshold.
pub fn validate_blend_radius(blend_radius: f64) -> Result<(), CatalogError> {
    if blend_radius.is_finite() && blend_radius >= 0.0 {
        Ok(())
    } else {
        Err(CatalogError::BlendRadius(blend_radius))
    }
}

/// Importance multiplier per climate axis. Higher weight gives that axis more
/// say in biome selection. Recommended range `(0, 5]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisWeights {
    pub temperature: f64,
    pub moisture: f64,
    pub continentalness: f64,
    pub erosion: f64,
    pub weirdness: f64,
}

impl Default for AxisWeights {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            moisture: 1.0,
            continentalness: 1.0,
            erosion: 1.0,
            weirdness: 0.5,
        }
    }
}

impl AxisWeights {
    /// Every axis weighted equally.
    pub const UNIFORM: AxisWeights = AxisWeights {
        temperature: 1.0,
        moisture: 1.0,
        continentalness: 1.0,
        erosion: 1.0,
        weirdness: 1.0,
    };

    pub fn get(&self, axis: ClimateAxis) -> f64 {
        match axis {
            ClimateAxis::Temperature => self.temperature,
            ClimateAxis::Moisture => self.moisture,
            ClimateAxis::Continentalness => self.continentalness,
            ClimateAxis::Erosion => self.erosion,
            ClimateAxis::Weirdness => self.weirdness,
        }
    }

    /// Every weight must be positive and finite; the first bad axis is reported.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for axis in ClimateAxis::ALL {
            let value = self.get(axis);
            if !(value.is_finite() && value > 0.0) {
                return Err(CatalogError::AxisWeight { axis, value });
            }
        }
        Ok(())
    }
}

/// Ordered collection of biome definitions with per-axis weights and a blend radius.
///
/// Entry slots may be empty (`None`), which mirrors catalogs assembled by an
/// external authoring layer. [`BiomeCatalog::validate`] rejects such catalogs;
/// classification skips empty slots.
///
/// Treat a catalog as immutable while classifying with it: build a new one and
/// swap it in rather than mutating in place.
#[derive(Clone, Debug)]
pub struct BiomeCatalog<P> {
    entries: Vec<Option<BiomeDefinition<P>>>,
    name_to_index: HashMap<String, usize>,
    /// Per-axis importance used by the weighted distance.
    pub axis_weights: AxisWeights,
    /// Distance tolerance beyond the best match within which other biomes
    /// still contribute. Zero or less disables blending.
    pub blend_radius: f64,
}

impl<P> BiomeCatalog<P> {
    /// Creates an empty catalog with default weights and blend radius.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            name_to_index: HashMap::new(),
            axis_weights: AxisWeights::default(),
            blend_radius: DEFAULT_BLEND_RADIUS,
        }
    }

    /// Build a catalog from raw entry slots, empty slots included.
    ///
    /// Name lookup resolves to the first entry carrying a name.
    pub fn from_entries(entries: Vec<Option<BiomeDefinition<P>>>) -> Self {
        let mut name_to_index = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            if let Some(biome) = entry {
                name_to_index.entry(biome.name.clone()).or_insert(index);
            }
        }
        Self {
            entries,
            name_to_index,
            ..Self::new()
        }
    }

    pub fn with_axis_weights(mut self, axis_weights: AxisWeights) -> Self {
        self.axis_weights = axis_weights;
        self
    }

    pub fn with_blend_radius(mut self, blend_radius: f64) -> Self {
        self.blend_radius = blend_radius;
        self
    }

    /// Append a biome without checking its name, returning its index.
    pub fn push(&mut self, biome: BiomeDefinition<P>) -> usize {
        let index = self.entries.len();
        self.name_to_index.entry(biome.name.clone()).or_insert(index);
        self.entries.push(Some(biome));
        index
    }

    /// Append a biome, returning its index.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateName`] if a biome with the same name exists.
    pub fn register(&mut self, biome: BiomeDefinition<P>) -> Result<usize, CatalogError> {
        if self.name_to_index.contains_key(&biome.name) {
            return Err(CatalogError::DuplicateName(biome.name));
        }
        Ok(self.push(biome))
    }

    /// The biome at `index`, or `None` if out of range or the slot is empty.
    pub fn get(&self, index: usize) -> Option<&BiomeDefinition<P>> {
        self.entries.get(index).and_then(Option::as_ref)
    }

    /// Looks up a biome index by name.
    pub fn lookup_by_name(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// Number of entry slots, empty ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no entry slots.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(index, biome)` for every non-empty slot.
    pub fn biomes(&self) -> impl Iterator<Item = (usize, &BiomeDefinition<P>)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.as_ref().map(|biome| (index, biome)))
    }

    /// Check the catalog is non-empty, has no empty slots, and carries a usable
    /// blend radius and axis weights.
    ///
    /// Run once after building or editing a catalog; classification does not
    /// re-check.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(index) = self.entries.iter().position(Option::is_none) {
            return Err(CatalogError::MissingBiome { index });
        }
        validate_blend_radius(self.blend_radius)?;
        self.axis_weights.validate()
    }

    /// Weighted soft-interval distance from `biome` to `climate`:
    /// `Σ weight_axis · squared_distance_axis + offset²`.
    #[inline]
    pub fn weighted_distance(&self, biome: &BiomeDefinition<P>, climate: &ClimateSample) -> f64 {
        let w = &self.axis_weights;
        biome.temperature.squared_distance(climate.temperature) * w.temperature
            + biome.moisture.squared_distance(climate.moisture) * w.moisture
            + biome
                .continentalness
                .squared_distance(climate.continentalness)
                * w.continentalness
            + biome.erosion.squared_distance(climate.erosion) * w.erosion
            + biome.weirdness.squared_distance(climate.weirdness) * w.weirdness
            + biome.offset * biome.offset
    }
}

impl<P> Default for BiomeCatalog<P> {
    fn default() -> Self {
        Self::new()
    }
}
