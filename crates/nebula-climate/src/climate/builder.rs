//! Climate map builder: layered noise plus a latitude gradient.

use serde::{Deserialize, Serialize};

use super::{ClimateAxis, ClimateSample};
use crate::error::{GenerationError, check_dimensions};
use crate::grid::{Grid, build_rows};
use crate::noise_field::{NoiseConfig, NoiseSampler};

/// Blend between latitude banding and temperature noise that reads well on most maps.
pub const DEFAULT_LATITUDE_INFLUENCE: f64 = 0.6;

const DEFAULT_WORLD_SEED: u64 = 42;

/// Continentalness wants very broad features so oceans read as masses.
const CONTINENTALNESS_FREQUENCY: f64 = 0.003;

/// An optional noise layer. A disabled layer contributes a constant zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum AxisNoise {
    #[default]
    Disabled,
    Noise(NoiseConfig),
}

impl AxisNoise {
    /// The layer's config, if enabled.
    pub fn config(&self) -> Option<&NoiseConfig> {
        match self {
            AxisNoise::Disabled => None,
            AxisNoise::Noise(config) => Some(config),
        }
    }
}

/// Noise layers and latitude blend for a climate map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateConfig {
    pub temperature: NoiseConfig,
    pub moisture: NoiseConfig,
    pub continentalness: NoiseConfig,
    pub erosion: NoiseConfig,
    /// Optional variant axis; disabled means weirdness is zero everywhere.
    pub weirdness: AxisNoise,
    /// 0 = temperature is pure noise, 1 = pure latitude gradient. Clamped to `[0, 1]`.
    pub latitude_influence: f64,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self::from_world_seed(DEFAULT_WORLD_SEED)
    }
}

impl ClimateConfig {
    /// Default layers with every seed derived from `world_seed`.
    pub fn from_world_seed(world_seed: u64) -> Self {
        let mut config = Self {
            temperature: NoiseConfig::default(),
            moisture: NoiseConfig::default(),
            continentalness: NoiseConfig {
                frequency: CONTINENTALNESS_FREQUENCY,
                ..NoiseConfig::default()
            },
            erosion: NoiseConfig::default(),
            weirdness: AxisNoise::Disabled,
            latitude_influence: DEFAULT_LATITUDE_INFLUENCE,
        };
        config.reseed(world_seed);
        config
    }

    /// Check every layer and the latitude blend.
    pub fn validate(&self) -> Result<(), GenerationError> {
        let layers = [
            (ClimateAxis::Temperature, Some(&self.temperature)),
            (ClimateAxis::Moisture, Some(&self.moisture)),
            (ClimateAxis::Continentalness, Some(&self.continentalness)),
            (ClimateAxis::Erosion, Some(&self.erosion)),
            (ClimateAxis::Weirdness, self.weirdness.config()),
        ];
        for (axis, config) in layers {
            if let Some(config) = config {
                config
                    .validate()
                    .map_err(|source| GenerationError::InvalidNoise {
                        layer: axis.name(),
                        source,
                    })?;
            }
        }
        if !self.latitude_influence.is_finite() {
            return Err(GenerationError::LatitudeInfluence(self.latitude_influence));
        }
        Ok(())
    }
}

/// Temperature implied by latitude alone for row `y` of a grid `height` rows tall.
///
/// 1 at the vertical center (the equator), falling linearly to 0 at the top
/// and bottom edges.
#[inline]
pub fn latitude_temperature(y: usize, height: usize) -> f64 {
    let latitude = y as f64 / height as f64;
    let distance_from_equator = (latitude - 0.5).abs() * 2.0;
    1.0 - distance_from_equator
}

/// Per-worker samplers for every enabled layer.
struct ClimateSamplers {
    temperature: NoiseSampler,
    moisture: NoiseSampler,
    continentalness: NoiseSampler,
    erosion: NoiseSampler,
    weirdness: Option<NoiseSampler>,
}

impl ClimateSamplers {
    fn from_validated(config: &ClimateConfig) -> Self {
        Self {
            temperature: NoiseSampler::from_validated(&config.temperature),
            moisture: NoiseSampler::from_validated(&config.moisture),
            continentalness: NoiseSampler::from_validated(&config.continentalness),
            erosion: NoiseSampler::from_validated(&config.erosion),
            weirdness: config.weirdness.config().map(NoiseSampler::from_validated),
        }
    }

    fn sample(&self, x: usize, y: usize, height: usize, latitude_influence: f64) -> ClimateSample {
        let (fx, fy) = (x as f64, y as f64);
        let base = latitude_temperature(y, height);
        let noise = self.temperature.sample(fx, fy);
        let temperature =
            (base * latitude_influence + noise * (1.0 - latitude_influence)).clamp(0.0, 1.0);

        ClimateSample {
            temperature,
            moisture: self.moisture.sample(fx, fy),
            continentalness: self.continentalness.sample(fx, fy),
            erosion: self.erosion.sample(fx, fy),
            weirdness: self
                .weirdness
                .as_ref()
                .map_or(0.0, |sampler| sampler.sample(fx, fy)),
        }
    }
}

/// Build a `width x height` grid of climate samples.
///
/// Each cell reads every layer at the same `(x, y)`, so the result equals
/// generating each layer's noise field separately and combining them cell by
/// cell.
pub fn generate_climate_map(
    width: usize,
    height: usize,
    config: &ClimateConfig,
) -> Result<Grid<ClimateSample>, GenerationError> {
    check_dimensions(width, height)?;
    config.validate()?;
    let latitude_influence = config.latitude_influence.clamp(0.0, 1.0);

    let grid = build_rows(
        width,
        height,
        || ClimateSamplers::from_validated(config),
        |samplers, x, y| samplers.sample(x, y, height, latitude_influence),
    );
    tracing::debug!(
        width,
        height,
        latitude_influence,
        weirdness = config.weirdness.config().is_some(),
        "generated climate map"
    );
    Ok(grid)
}
