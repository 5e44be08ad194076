//! Fixed-capacity blend of up to four weighted biomes.

use std::ops::{Add, Mul};

use super::BiomeDefinition;

/// Maximum number of biomes in one blend. Four is the most that can plausibly
/// meet near a cell boundary under 4-way interpolation; it is not tunable.
pub const MAX_BLEND: usize = 4;

/// A biome's contribution to a blend.
#[derive(Debug)]
pub struct WeightedBiome<'a, P> {
    /// Position of the biome in its catalog.
    pub index: usize,
    pub biome: &'a BiomeDefinition<P>,
    /// Normalized weight in `[0, 1]`.
    pub weight: f64,
    /// Weighted distance from the classified sample to this biome.
    pub distance: f64,
}

impl<P> Clone for WeightedBiome<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for WeightedBiome<'_, P> {}

/// Result of classifying one climate sample: 0 to [`MAX_BLEND`] weighted biomes.
///
/// Entries are stored inline (no heap allocation) in ascending distance order.
/// Weights of the filled entries sum to 1.
#[derive(Debug)]
pub struct BiomeBlendResult<'a, P> {
    entries: [Option<WeightedBiome<'a, P>>; MAX_BLEND],
    count: usize,
}

impl<P> Clone for BiomeBlendResult<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for BiomeBlendResult<'_, P> {}

impl<'a, P> BiomeBlendResult<'a, P> {
    /// A result with no biomes, produced only for catalogs with nothing to match.
    pub fn empty() -> Self {
        Self {
            entries: [None; MAX_BLEND],
            count: 0,
        }
    }

    /// A single biome at full weight.
    pub fn single(index: usize, biome: &'a BiomeDefinition<P>, distance: f64) -> Self {
        let mut entries = [None; MAX_BLEND];
        entries[0] = Some(WeightedBiome {
            index,
            biome,
            weight: 1.0,
            distance,
        });
        Self { entries, count: 1 }
    }

    /// Build from already-weighted entries, nearest first. Entries past
    /// [`MAX_BLEND`] are ignored.
    pub fn from_weighted(weighted: impl IntoIterator<Item = WeightedBiome<'a, P>>) -> Self {
        let mut result = Self::empty();
        for (slot, entry) in result.entries.iter_mut().zip(weighted) {
            *slot = Some(entry);
            result.count += 1;
        }
        result
    }

    /// Number of contributing biomes.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterate over the contributing entries, nearest first.
    pub fn iter(&self) -> impl Iterator<Item = &WeightedBiome<'a, P>> {
        self.entries[..self.count].iter().flatten()
    }

    /// The entry with the largest weight. Ties go to the nearer entry.
    pub fn dominant(&self) -> Option<&WeightedBiome<'a, P>> {
        self.iter().fold(None, |best, entry| match best {
            Some(b) if b.weight >= entry.weight => Some(b),
            _ => Some(entry),
        })
    }

    /// The biome with the largest weight.
    pub fn dominant_biome(&self) -> Option<&'a BiomeDefinition<P>> {
        self.dominant().map(|entry| entry.biome)
    }

    /// Sum of weights; 1 for any non-empty result.
    pub fn total_weight(&self) -> f64 {
        self.iter().map(|entry| entry.weight).sum()
    }

    /// Weighted average of a per-biome scalar. 0 for an empty result.
    pub fn blend_scalar(&self, mut select: impl FnMut(&BiomeDefinition<P>) -> f64) -> f64 {
        self.iter()
            .map(|entry| entry.weight * select(entry.biome))
            .sum()
    }

    /// Weighted average of a per-biome vector, e.g. a `glam::DVec4` color.
    /// `V::default()` for an empty result.
    pub fn blend_vector<V>(&self, mut select: impl FnMut(&BiomeDefinition<P>) -> V) -> V
    where
        V: Default + Add<Output = V> + Mul<f64, Output = V>,
    {
        self.iter().fold(V::default(), |acc, entry| {
            acc + select(entry.biome) * entry.weight
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::{DVec3, DVec4};

    use super::*;

    struct Style {
        color: DVec4,
        roughness: f64,
    }

    fn style(name: &str, color: DVec4, roughness: f64) -> BiomeDefinition<Style> {
        BiomeDefinition::new(name, Style { color, roughness })
    }

    #[test]
    fn test_empty_result() {
        let result = BiomeBlendResult::<Style>::empty();
        assert_eq!(result.count(), 0);
        assert!(result.is_empty());
        assert!(result.dominant().is_none());
        assert_eq!(result.blend_scalar(|b| b.payload.roughness), 0.0);
        assert_eq!(result.blend_vector(|b| b.payload.color), DVec4::ZERO);
        assert_eq!(result.iter().count(), 0);
    }

    #[test]
    fn test_single_has_full_weight() {
        let sand = style("sand", DVec4::new(0.9, 0.8, 0.5, 1.0), 0.3);
        let result = BiomeBlendResult::single(3, &sand, 0.0);
        assert_eq!(result.count(), 1);
        let dominant = result.dominant().unwrap();
        assert_eq!(dominant.index, 3);
        assert_eq!(dominant.weight, 1.0);
        assert_eq!(result.blend_vector(|b| b.payload.color), sand.payload.color);
        assert!((result.blend_scalar(|b| b.payload.roughness) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_blends_are_weighted_averages() {
        let red = style("red", DVec4::new(1.0, 0.0, 0.0, 1.0), 1.0);
        let blue = style("blue", DVec4::new(0.0, 0.0, 1.0, 1.0), 0.0);
        let result = BiomeBlendResult::from_weighted([
            WeightedBiome {
                index: 0,
                biome: &red,
                weight: 0.75,
                distance: 0.01,
            },
            WeightedBiome {
                index: 1,
                biome: &blue,
                weight: 0.25,
                distance: 0.03,
            },
        ]);
        assert_eq!(result.count(), 2);
        assert_eq!(result.dominant_biome().unwrap().name, "red");
        assert!((result.total_weight() - 1.0).abs() < 1e-12);
        assert!((result.blend_scalar(|b| b.payload.roughness) - 0.75).abs() < 1e-12);

        let color = result.blend_vector(|b| b.payload.color);
        assert!((color - DVec4::new(0.75, 0.0, 0.25, 1.0)).abs().max_element() < 1e-12);

        let rgb = result.blend_vector(|b| b.payload.color.truncate());
        assert!((rgb - DVec3::new(0.75, 0.0, 0.25)).abs().max_element() < 1e-12);
    }

    #[test]
    fn test_dominant_tie_prefers_nearer_entry() {
        let a = style("a", DVec4::ZERO, 0.0);
        let b = style("b", DVec4::ONE, 0.0);
        let result = BiomeBlendResult::from_weighted([
            WeightedBiome {
                index: 0,
                biome: &a,
                weight: 0.5,
                distance: 0.01,
            },
            WeightedBiome {
                index: 1,
                biome: &b,
                weight: 0.5,
                distance: 0.01,
            },
        ]);
        assert_eq!(result.dominant().unwrap().index, 0);
    }

    #[test]
    fn test_from_weighted_caps_at_capacity() {
        let a = style("a", DVec4::ZERO, 0.0);
        let entries = (0..6).map(|i| WeightedBiome {
            index: i,
            biome: &a,
            weight: 1.0 / 6.0,
            distance: i as f64,
        });
        let result = BiomeBlendResult::from_weighted(entries);
        assert_eq!(result.count(), MAX_BLEND);
        let indices: Vec<usize> = result.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}
