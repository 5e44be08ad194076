//! Batch classification helpers built on [`BiomeResolver`].
//!
//! Classification is per sample and side-effect free, so whole grids are split
//! over worker threads the same way the generators are.

use crate::biome::{BiomeBlendResult, BiomeResolver};
use crate::climate::{ClimateAxis, ClimateSample};
use crate::error::GenerationError;
use crate::grid::{Grid, build_rows};

/// Resolve every cell of a climate grid.
pub fn classify_map<'a, R>(
    resolver: &'a R,
    climate: &Grid<ClimateSample>,
) -> Grid<BiomeBlendResult<'a, R::Payload>>
where
    R: BiomeResolver + Sync,
    R::Payload: Sync,
{
    build_rows(
        climate.width(),
        climate.height(),
        || (),
        |_, x, y| resolver.resolve(&climate[(x, y)]),
    )
}

/// Catalog index of the dominant biome for every cell, `None` where nothing matched.
pub fn dominant_map<R>(resolver: &R, climate: &Grid<ClimateSample>) -> Grid<Option<usize>>
where
    R: BiomeResolver + Sync,
{
    build_rows(
        climate.width(),
        climate.height(),
        || (),
        |_, x, y| {
            resolver
                .resolve(&climate[(x, y)])
                .dominant()
                .map(|entry| entry.index)
        },
    )
}

/// A 2D cut through climate space for inspecting a catalog's biome layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceParams {
    /// Axis swept along columns, from 0 at `x = 0` to 1 at the last column.
    pub x_axis: ClimateAxis,
    /// Axis swept along rows, from 0 at `y = 0` to 1 at the last row.
    pub y_axis: ClimateAxis,
    /// Values for the axes that are not swept.
    pub fixed: ClimateSample,
    /// Samples per side.
    pub resolution: usize,
}

impl Default for SliceParams {
    fn default() -> Self {
        Self {
            x_axis: ClimateAxis::Temperature,
            y_axis: ClimateAxis::Moisture,
            fixed: ClimateSample::new(0.5, 0.5, 0.5, 0.5, 0.0),
            resolution: 96,
        }
    }
}

impl SliceParams {
    /// The climate sample at slice cell `(x, y)`.
    ///
    /// Resolutions below 2 use a unit step so coordinates stay finite.
    pub fn sample_at(&self, x: usize, y: usize) -> ClimateSample {
        let step = self.resolution.saturating_sub(1).max(1) as f64;
        // Sweep y first so that x wins when both axes are the same.
        self.fixed
            .with(self.y_axis, y as f64 / step)
            .with(self.x_axis, x as f64 / step)
    }
}

/// Dominant biome index over a `resolution x resolution` slice of climate space.
pub fn climate_slice<R>(
    resolver: &R,
    params: &SliceParams,
) -> Result<Grid<Option<usize>>, GenerationError>
where
    R: BiomeResolver + Sync,
{
    if params.resolution < 2 {
        return Err(GenerationError::SliceResolution(params.resolution));
    }
    if params.x_axis == params.y_axis {
        tracing::warn!(axis = %params.x_axis, "climate slice sweeps the same axis twice");
    }
    Ok(build_rows(
        params.resolution,
        params.resolution,
        || (),
        |_, x, y| {
            resolver
                .resolve(&params.sample_at(x, y))
                .dominant()
                .map(|entry| entry.index)
        },
    ))
}

/// How many cells each biome dominates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BiomeCoverage {
    /// Cell count per catalog index.
    pub counts: Vec<usize>,
    /// Cells where no biome matched.
    pub unclassified: usize,
}

impl BiomeCoverage {
    /// Tally a dominant-biome grid for a catalog of `biome_count` slots.
    /// Indices at or past `biome_count` grow the table.
    pub fn from_dominant(dominant: &Grid<Option<usize>>, biome_count: usize) -> Self {
        let mut coverage = Self {
            counts: vec![0; biome_count],
            unclassified: 0,
        };
        for cell in dominant.iter() {
            match *cell {
                Some(index) => {
                    if index >= coverage.counts.len() {
                        coverage.counts.resize(index + 1, 0);
                    }
                    coverage.counts[index] += 1;
                }
                None => coverage.unclassified += 1,
            }
        }
        coverage
    }

    /// Total number of cells tallied.
    pub fn total(&self) -> usize {
        self.counts.iter().sum::<usize>() + self.unclassified
    }

    /// Share of cells dominated by `index`, in `[0, 1]`.
    pub fn fraction(&self, index: usize) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.counts.get(index).copied().unwrap_or(0) as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::{AxisWeights, BiomeCatalog, BiomeDefinition, resolve};
    use crate::climate::{ClimateConfig, generate_climate_map};

    fn four_quadrants() -> BiomeCatalog<&'static str> {
        let quadrant = |name: &'static str, t: (f64, f64), m: (f64, f64)| {
            BiomeDefinition::new(name, name)
                .with_range(ClimateAxis::Temperature, t.0, t.1)
                .with_range(ClimateAxis::Moisture, m.0, m.1)
        };
        BiomeCatalog::from_entries(vec![
            Some(quadrant("tundra", (0.0, 0.5), (0.0, 0.5))),
            Some(quadrant("taiga", (0.0, 0.5), (0.5, 1.0))),
            Some(quadrant("desert", (0.5, 1.0), (0.0, 0.5))),
            Some(quadrant("jungle", (0.5, 1.0), (0.5, 1.0))),
        ])
        .with_axis_weights(AxisWeights::UNIFORM)
        .with_blend_radius(0.02)
    }

    #[test]
    fn test_classify_map_matches_per_cell_resolve() {
        let catalog = four_quadrants();
        let mut config = ClimateConfig::from_world_seed(3);
        config.temperature.frequency = 0.05;
        config.moisture.frequency = 0.05;
        let climate = generate_climate_map(140, 130, &config).unwrap();

        let classified = classify_map(&catalog, &climate);
        assert_eq!(classified.width(), 140);
        assert_eq!(classified.height(), 130);
        for (x, y, result) in classified.indexed_iter().step_by(37) {
            let expected = resolve(&catalog, &climate[(x, y)]);
            assert_eq!(result.count(), expected.count());
            assert_eq!(
                result.dominant().map(|e| e.index),
                expected.dominant().map(|e| e.index)
            );
            assert!((result.total_weight() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_dominant_map_and_coverage() {
        let catalog = four_quadrants();
        let climate = Grid::from_fn(4, 1, |x, _| {
            ClimateSample::from_temperature_moisture(0.1 + 0.25 * x as f64, 0.2)
        });
        let dominant = dominant_map(&catalog, &climate);
        assert_eq!(dominant.as_slice(), &[Some(0), Some(0), Some(2), Some(2)]);

        let coverage = BiomeCoverage::from_dominant(&dominant, catalog.len());
        assert_eq!(coverage.counts, vec![2, 0, 2, 0]);
        assert_eq!(coverage.total(), 4);
        assert!((coverage.fraction(2) - 0.5).abs() < 1e-12);
        assert_eq!(coverage.fraction(7), 0.0);
    }

    #[test]
    fn test_coverage_counts_unclassified() {
        let dominant = Grid::from_vec(3, 1, vec![None, Some(5), None]);
        let coverage = BiomeCoverage::from_dominant(&dominant, 2);
        assert_eq!(coverage.unclassified, 2);
        assert_eq!(coverage.counts.len(), 6);
        assert_eq!(coverage.counts[5], 1);
    }

    #[test]
    fn test_climate_slice_corners() {
        let catalog = four_quadrants();
        let params = SliceParams {
            resolution: 9,
            ..Default::default()
        };
        let slice = climate_slice(&catalog, &params).unwrap();
        assert_eq!(slice[(0, 0)], catalog.lookup_by_name("tundra"));
        assert_eq!(slice[(0, 8)], catalog.lookup_by_name("taiga"));
        assert_eq!(slice[(8, 0)], catalog.lookup_by_name("desert"));
        assert_eq!(slice[(8, 8)], catalog.lookup_by_name("jungle"));
    }

    #[test]
    fn test_slice_sample_positions() {
        let params = SliceParams {
            x_axis: ClimateAxis::Erosion,
            y_axis: ClimateAxis::Weirdness,
            resolution: 5,
            ..Default::default()
        };
        let sample = params.sample_at(4, 2);
        assert_eq!(sample.erosion, 1.0);
        assert_eq!(sample.weirdness, 0.5);
        assert_eq!(sample.temperature, params.fixed.temperature);
    }

    #[test]
    fn test_sample_at_tolerates_tiny_resolution() {
        for resolution in [0, 1] {
            let params = SliceParams {
                resolution,
                ..Default::default()
            };
            let sample = params.sample_at(0, 0);
            assert_eq!(sample.temperature, 0.0);
            assert_eq!(sample.moisture, 0.0);
            assert_eq!(sample.continentalness, params.fixed.continentalness);
        }
    }

    #[test]
    fn test_slice_rejects_tiny_resolution() {
        let catalog = four_quadrants();
        let params = SliceParams {
            resolution: 1,
            ..Default::default()
        };
        assert_eq!(
            climate_slice(&catalog, &params),
            Err(GenerationError::SliceResolution(1))
        );
    }

    #[test]
    fn test_empty_catalog_leaves_cells_unclassified() {
        let catalog = BiomeCatalog::<()>::new();
        let climate = Grid::from_fn(3, 3, |_, _| ClimateSample::default());
        let dominant = dominant_map(&catalog, &climate);
        assert!(dominant.iter().all(Option::is_none));
        assert_eq!(BiomeCoverage::from_dominant(&dominant, 0).unclassified, 9);
    }
}
