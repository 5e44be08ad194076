//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use nebula_climate::{AxisWeights, BiomeCatalog, CatalogError, ClimateConfig};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Output map dimensions.
    pub map: MapConfig,
    /// Noise layers and latitude blend.
    pub climate: ClimateConfig,
    /// Biome classification tuning.
    pub classifier: ClassifierConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Map dimensions in cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    pub width: usize,
    pub height: usize,
}

/// Classifier tuning applied to a biome catalog before use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Distance tolerance beyond the best match. Zero disables blending.
    pub blend_radius: f64,
    /// Per-axis importance in the biome distance.
    pub axis_weights: AxisWeights,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            blend_radius: nebula_climate::DEFAULT_BLEND_RADIUS,
            axis_weights: AxisWeights::default(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl ClassifierConfig {
    /// Reject a negative or non-finite blend radius and non-positive axis weights.
    pub fn validate(&self) -> Result<(), CatalogError> {
        nebula_climate::validate_blend_radius(self.blend_radius)?;
        self.axis_weights.validate()
    }

    /// Copy the blend radius and axis weights onto `catalog`.
    pub fn apply_to<P>(&self, catalog: &mut BiomeCatalog<P>) {
        catalog.blend_radius = self.blend_radius;
        catalog.axis_weights = self.axis_weights;
    }
}

/// Platform config directory for this tool, e.g. `~/.config/nebula-climate`.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("nebula-climate"))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        log::debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Re-read the file: `Some(new_config)` if it differs from `self`, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
