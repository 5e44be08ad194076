//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Climate map generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "nebula-climate", about = "Climate map and biome classification preview")]
pub struct CliArgs {
    /// Map width in cells.
    #[arg(long)]
    pub width: Option<usize>,

    /// Map height in cells.
    #[arg(long)]
    pub height: Option<usize>,

    /// World seed; re-derives the seed of every climate noise layer.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Latitude influence on temperature, 0 (noise only) to 1 (latitude only).
    #[arg(long)]
    pub latitude_influence: Option<f64>,

    /// Biome blend radius; 0 disables blending.
    #[arg(long)]
    pub blend_radius: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.map.width = w;
        }
        if let Some(h) = args.height {
            self.map.height = h;
        }
        if let Some(seed) = args.seed {
            self.climate.reseed(seed);
        }
        if let Some(influence) = args.latitude_influence {
            self.climate.latitude_influence = influence;
        }
        if let Some(radius) = args.blend_radius {
            self.classifier.blend_radius = radius;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use nebula_climate::ClimateConfig;

    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1024),
            blend_radius: Some(0.0),
            log_level: Some("debug".to_string()),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.map.width, 1024);
        assert_eq!(config.classifier.blend_radius, 0.0);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.map.height, 256);
        assert_eq!(config.climate, ClimateConfig::default());
    }

    #[test]
    fn test_cli_no_override() {
        let defaults = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, defaults);
    }

    #[test]
    fn test_seed_reseeds_every_layer() {
        let mut config = Config::default();
        config.climate.moisture.frequency = 0.05;
        config.apply_cli_overrides(&CliArgs {
            seed: Some(7),
            ..CliArgs::default()
        });
        let fresh = ClimateConfig::from_world_seed(7);
        assert_eq!(config.climate.temperature.seed, fresh.temperature.seed);
        assert_eq!(config.climate.erosion.seed, fresh.erosion.seed);
        assert_eq!(config.climate.moisture.seed, fresh.moisture.seed);
        // Only seeds change
        assert_eq!(config.climate.moisture.frequency, 0.05);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "nebula-climate",
            "--width",
            "64",
            "--latitude-influence",
            "0.3",
            "--seed",
            "99",
        ])
        .unwrap();
        assert_eq!(args.width, Some(64));
        assert_eq!(args.latitude_influence, Some(0.3));
        assert_eq!(args.seed, Some(99));
        assert!(args.config.is_none());
    }
}
