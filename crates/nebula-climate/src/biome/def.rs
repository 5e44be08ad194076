//! Biome definition: the climate envelope of a single biome type.

use crate::climate::{AxisRange, ClimateAxis, ClimateSample};

/// One biome: a range on each climate axis, a priority offset, and an opaque payload.
///
/// The payload (colors, geology, vegetation, ...) is never inspected by the
/// classifier; it is only read back through the blend operations on
/// [`crate::BiomeBlendResult`].
#[derive(Clone, Debug, PartialEq)]
pub struct BiomeDefinition<P> {
    /// Human-readable biome name (e.g., "temperate_forest").
    pub name: String,
    pub temperature: AxisRange,
    pub moisture: AxisRange,
    pub continentalness: AxisRange,
    pub erosion: AxisRange,
    pub weirdness: AxisRange,
    /// Priority penalty in `[0, 1]`. Adds `offset²` to every distance, so higher
    /// values make the biome win only under very specific conditions.
    pub offset: f64,
    pub payload: P,
}

impl<P> BiomeDefinition<P> {
    /// A biome accepting the whole climate space with no offset.
    pub fn new(name: impl Into<String>, payload: P) -> Self {
        Self {
            name: name.into(),
            temperature: AxisRange::FULL,
            moisture: AxisRange::FULL,
            continentalness: AxisRange::FULL,
            erosion: AxisRange::FULL,
            weirdness: AxisRange::FULL,
            offset: 0.0,
            payload,
        }
    }

    /// Restrict `axis` to `[min, max]` (clamped into `[0, 1]`).
    pub fn with_range(mut self, axis: ClimateAxis, min: f64, max: f64) -> Self {
        *self.range_mut(axis) = AxisRange::new(min, max);
        self
    }

    /// Set the priority offset, clamped to `[0, 1]`.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset.clamp(0.0, 1.0);
        self
    }

    pub fn range(&self, axis: ClimateAxis) -> AxisRange {
        match axis {
            ClimateAxis::Temperature => self.temperature,
            ClimateAxis::Moisture => self.moisture,
            ClimateAxis::Continentalness => self.continentalness,
            ClimateAxis::Erosion => self.erosion,
            ClimateAxis::Weirdness => self.weirdness,
        }
    }

    pub fn range_mut(&mut self, axis: ClimateAxis) -> &mut AxisRange {
        match axis {
            ClimateAxis::Temperature => &mut self.temperature,
            ClimateAxis::Moisture => &mut self.moisture,
            ClimateAxis::Continentalness => &mut self.continentalness,
            ClimateAxis::Erosion => &mut self.erosion,
            ClimateAxis::Weirdness => &mut self.weirdness,
        }
    }

    /// Unweighted soft-interval distance to `climate`, including `offset²`.
    pub fn squared_distance_to(&self, climate: &ClimateSample) -> f64 {
        ClimateAxis::ALL
            .iter()
            .map(|&axis| self.range(axis).squared_distance(climate.get(axis)))
            .sum::<f64>()
            + self.offset * self.offset
    }

    /// Returns `true` if `climate` lies inside every one of this biome's ranges.
    pub fn contains_climate(&self, climate: &ClimateSample) -> bool {
        ClimateAxis::ALL
            .iter()
            .all(|&axis| self.range(axis).contains(climate.get(axis)))
    }
}
