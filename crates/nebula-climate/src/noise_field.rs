//! Seeded fractal noise fields over a 2D grid.
//!
//! Wraps the `noise` crate's primitives behind a small closed set of noise and
//! fractal kinds. Every raw sample is remapped from `[-1, 1]` to `[0, 1]` and
//! clamped, so downstream consumers never see primitive overshoot.

use noise::{
    Billow, Fbm, HybridMulti, MultiFractal, NoiseFn, OpenSimplex, Perlin, RidgedMulti, Seedable,
    Simplex, SuperSimplex, Value, Worley,
};
use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, NoiseConfigError, check_dimensions};
use crate::grid::{Grid, build_rows};

/// Upper bound on fractal octaves.
pub const MAX_OCTAVES: u32 = 8;

/// Base noise primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoiseKind {
    /// Classic simplex noise.
    Simplex,
    /// OpenSimplex noise.
    #[default]
    OpenSimplex,
    /// OpenSimplex "super" variant with smoother gradients.
    SuperSimplex,
    /// Gradient (Perlin) noise.
    Perlin,
    /// Interpolated value noise.
    Value,
    /// Cellular (Worley) noise.
    Cellular,
}

/// How octaves of the base primitive are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FractalKind {
    /// A single octave at the base frequency.
    None,
    /// Fractal Brownian motion.
    #[default]
    Fbm,
    /// Absolute-value fBm, producing puffy billows.
    Billow,
    /// Ridged multifractal.
    Ridged,
    /// Hybrid multifractal.
    HybridMulti,
}

/// Parameters for one noise layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Seed for the underlying permutation tables.
    pub seed: u32,
    /// Base primitive.
    pub kind: NoiseKind,
    /// Frequency of the first octave, in cycles per grid cell. Must be positive.
    pub frequency: f64,
    /// Octave combination mode.
    pub fractal: FractalKind,
    /// Octave count, `1..=MAX_OCTAVES`. Ignored for [`FractalKind::None`].
    pub octaves: u32,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves.
    pub gain: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            kind: NoiseKind::OpenSimplex,
            frequency: 0.01,
            fractal: FractalKind::Fbm,
            octaves: 4,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }
}

impl NoiseConfig {
    /// Same parameters with a different seed.
    pub fn with_seed(&self, seed: u32) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }

    /// Check that every parameter is usable by the noise primitives.
    pub fn validate(&self) -> Result<(), NoiseConfigError> {
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(NoiseConfigError::Frequency(self.frequency));
        }
        if !(1..=MAX_OCTAVES).contains(&self.octaves) {
            return Err(NoiseConfigError::Octaves(self.octaves));
        }
        if !self.lacunarity.is_finite() {
            return Err(NoiseConfigError::NonFinite {
                name: "lacunarity",
                value: self.lacunarity,
            });
        }
        if !self.gain.is_finite() {
            return Err(NoiseConfigError::NonFinite {
                name: "gain",
                value: self.gain,
            });
        }
        Ok(())
    }
}

/// Remap a raw sample from `[-1, 1]` to `[0, 1]`, clamping overshoot.
#[inline]
pub fn normalize_sample(raw: f64) -> f64 {
    ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
}

/// A ready-to-sample noise layer built from a [`NoiseConfig`].
///
/// Construction allocates the permutation tables; sampling is allocation-free.
/// Samplers are cheap enough to build once per worker thread.
pub struct NoiseSampler {
    source: Box<dyn NoiseFn<f64, 2>>,
}

impl NoiseSampler {
    /// Validate `config` and build the sampler.
    pub fn new(config: &NoiseConfig) -> Result<Self, NoiseConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    pub(crate) fn from_validated(config: &NoiseConfig) -> Self {
        let source = match config.kind {
            NoiseKind::Simplex => build_source::<Simplex>(config),
            NoiseKind::OpenSimplex => build_source::<OpenSimplex>(config),
            NoiseKind::SuperSimplex => build_source::<SuperSimplex>(config),
            NoiseKind::Perlin => build_source::<Perlin>(config),
            NoiseKind::Value => build_source::<Value>(config),
            NoiseKind::Cellular => build_source::<Worley>(config),
        };
        Self { source }
    }

    /// Raw primitive output at grid position `(x, y)`, nominally in `[-1, 1]`.
    #[inline]
    pub fn raw(&self, x: f64, y: f64) -> f64 {
        self.source.get([x, y])
    }

    /// Normalized output at grid position `(x, y)`, always in `[0, 1]`.
    #[inline]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        normalize_sample(self.raw(x, y))
    }
}

/// Base primitive sampled at a single scaled frequency.
struct SingleOctave<T> {
    source: T,
    frequency: f64,
}

impl<T: NoiseFn<f64, 2>> NoiseFn<f64, 2> for SingleOctave<T> {
    fn get(&self, [x, y]: [f64; 2]) -> f64 {
        self.source.get([x * self.frequency, y * self.frequency])
    }
}

fn build_source<T>(config: &NoiseConfig) -> Box<dyn NoiseFn<f64, 2>>
where
    T: Default + Seedable + NoiseFn<f64, 2> + 'static,
{
    match config.fractal {
        FractalKind::None => Box::new(SingleOctave {
            source: T::default().set_seed(config.seed),
            frequency: config.frequency,
        }),
        FractalKind::Fbm => Box::new(configure(Fbm::<T>::new(config.seed), config)),
        FractalKind::Billow => Box::new(configure(Billow::<T>::new(config.seed), config)),
        FractalKind::Ridged => Box::new(configure(RidgedMulti::<T>::new(config.seed), config)),
        FractalKind::HybridMulti => {
            Box::new(configure(HybridMulti::<T>::new(config.seed), config))
        }
    }
}

fn configure<M: MultiFractal>(fractal: M, config: &NoiseConfig) -> M {
    fractal
        .set_octaves(config.octaves as usize)
        .set_frequency(config.frequency)
        .set_lacunarity(config.lacunarity)
        .set_persistence(config.gain)
}

/// Generate a `width x height` grid of normalized noise values.
///
/// Cell `(x, y)` samples the noise at integer grid coordinates; the config's
/// frequency sets the spatial scale. The result is a pure function of the
/// inputs.
pub fn generate_noise_field(
    width: usize,
    height: usize,
    config: &NoiseConfig,
) -> Result<Grid<f64>, GenerationError> {
    check_dimensions(width, height)?;
    config
        .validate()
        .map_err(|source| GenerationError::InvalidNoise {
            layer: "noise",
            source,
        })?;

    let grid = build_rows(
        width,
        height,
        || NoiseSampler::from_validated(config),
        |sampler, x, y| sampler.sample(x as f64, y as f64),
    );
    tracing::debug!(
        width,
        height,
        seed = config.seed,
        kind = ?config.kind,
        fractal = ?config.fractal,
        "generated noise field"
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [NoiseKind; 6] = [
        NoiseKind::Simplex,
        NoiseKind::OpenSimplex,
        NoiseKind::SuperSimplex,
        NoiseKind::Perlin,
        NoiseKind::Value,
        NoiseKind::Cellular,
    ];

    const ALL_FRACTALS: [FractalKind; 5] = [
        FractalKind::None,
        FractalKind::Fbm,
        FractalKind::Billow,
        FractalKind::Ridged,
        FractalKind::HybridMulti,
    ];

    #[test]
    fn test_normalize_sample_maps_and_clamps() {
        assert_eq!(normalize_sample(-1.0), 0.0);
        assert_eq!(normalize_sample(0.0), 0.5);
        assert_eq!(normalize_sample(1.0), 1.0);
        assert_eq!(normalize_sample(1.7), 1.0);
        assert_eq!(normalize_sample(-3.0), 0.0);
    }

    #[test]
    fn test_determinism_same_config() {
        let config = NoiseConfig {
            seed: 1234,
            frequency: 0.05,
            ..Default::default()
        };
        let a = generate_noise_field(32, 24, &config).unwrap();
        let b = generate_noise_field(32, 24, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_noise_field(16, 16, &NoiseConfig::default().with_seed(1)).unwrap();
        let b = generate_noise_field(16, 16, &NoiseConfig::default().with_seed(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_values_in_unit_range_for_every_kind() {
        for kind in ALL_KINDS {
            for fractal in ALL_FRACTALS {
                let config = NoiseConfig {
                    kind,
                    fractal,
                    frequency: 0.07,
                    octaves: 5,
                    ..Default::default()
                };
                let grid = generate_noise_field(20, 20, &config).unwrap();
                for &v in grid.iter() {
                    assert!(
                        (0.0..=1.0).contains(&v),
                        "{kind:?}/{fractal:?} produced {v}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_grid_matches_sampler() {
        let config = NoiseConfig {
            seed: 77,
            frequency: 0.03,
            ..Default::default()
        };
        // Large enough to be filled by several workers.
        let grid = generate_noise_field(200, 120, &config).unwrap();
        let sampler = NoiseSampler::new(&config).unwrap();
        for (x, y) in [(0, 0), (199, 0), (57, 63), (0, 119), (199, 119)] {
            assert_eq!(grid[(x, y)], sampler.sample(x as f64, y as f64));
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let config = NoiseConfig::default();
        assert!(matches!(
            generate_noise_field(0, 10, &config),
            Err(GenerationError::ZeroDimension { .. })
        ));
        assert!(matches!(
            generate_noise_field(10, 0, &config),
            Err(GenerationError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let bad_frequency = NoiseConfig {
            frequency: 0.0,
            ..Default::default()
        };
        assert_eq!(
            bad_frequency.validate(),
            Err(NoiseConfigError::Frequency(0.0))
        );

        for octaves in [0, MAX_OCTAVES + 1] {
            let config = NoiseConfig {
                octaves,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(NoiseConfigError::Octaves(octaves)));
        }

        let bad_gain = NoiseConfig {
            gain: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            bad_gain.validate(),
            Err(NoiseConfigError::NonFinite { name: "gain", .. })
        ));

        assert!(matches!(
            generate_noise_field(4, 4, &bad_frequency),
            Err(GenerationError::InvalidNoise { layer: "noise", .. })
        ));
    }

    #[test]
    fn test_default_matches_authoring_defaults() {
        let config = NoiseConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.kind, NoiseKind::OpenSimplex);
        assert_eq!(config.fractal, FractalKind::Fbm);
        assert_eq!(config.octaves, 4);
        assert!((config.frequency - 0.01).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }
}
