//! Built-in biome catalog used by the preview binary.

use glam::DVec4;
use nebula_climate::{BiomeCatalog, BiomeDefinition, CatalogError, ClimateAxis};

/// Terrain shaping parameters carried by each biome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GeologyProfile {
    /// Height amplitude in world units.
    pub amplitude: f64,
    /// Hydraulic erosion strength, 0 to 1.
    pub erosion_strength: f64,
    /// Maximum stable slope in degrees.
    pub talus_angle: f64,
    pub domain_warp_strength: f64,
}

/// Per-biome payload: a debug color for previews plus geology.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BiomeStyle {
    /// Linear RGBA.
    pub debug_color: DVec4,
    pub geology: GeologyProfile,
}

struct Preset {
    name: &'static str,
    temperature: (f64, f64),
    moisture: (f64, f64),
    continentalness: (f64, f64),
    erosion: (f64, f64),
    weirdness: (f64, f64),
    offset: f64,
    color: [f64; 3],
    geology: GeologyProfile,
}

const fn geology(amplitude: f64, erosion_strength: f64, talus_angle: f64) -> GeologyProfile {
    GeologyProfile {
        amplitude,
        erosion_strength,
        talus_angle,
        domain_warp_strength: 0.0,
    }
}

const ANY: (f64, f64) = (0.0, 1.0);

const PRESETS: &[Preset] = &[
    Preset {
        name: "ocean",
        temperature: ANY,
        moisture: ANY,
        continentalness: (0.0, 0.3),
        erosion: ANY,
        weirdness: ANY,
        offset: 0.0,
        color: [0.05, 0.2, 0.55],
        geology: geology(20.0, 0.1, 20.0),
    },
    Preset {
        name: "beach",
        temperature: (0.3, 1.0),
        moisture: ANY,
        continentalness: (0.3, 0.36),
        erosion: (0.4, 1.0),
        weirdness: ANY,
        offset: 0.0,
        color: [0.9, 0.85, 0.6],
        geology: geology(4.0, 0.6, 25.0),
    },
    Preset {
        name: "tundra",
        temperature: (0.0, 0.25),
        moisture: ANY,
        continentalness: (0.3, 1.0),
        erosion: ANY,
        weirdness: ANY,
        offset: 0.0,
        color: [0.85, 0.9, 0.95],
        geology: geology(30.0, 0.2, 35.0),
    },
    Preset {
        name: "taiga",
        temperature: (0.25, 0.45),
        moisture: (0.4, 1.0),
        continentalness: (0.3, 1.0),
        erosion: ANY,
        weirdness: ANY,
        offset: 0.0,
        color: [0.2, 0.4, 0.3],
        geology: geology(45.0, 0.4, 38.0),
    },
    Preset {
        name: "plains",
        temperature: (0.4, 0.7),
        moisture: (0.2, 0.5),
        continentalness: (0.3, 1.0),
        erosion: (0.4, 1.0),
        weirdness: ANY,
        offset: 0.0,
        color: [0.55, 0.75, 0.35],
        geology: geology(12.0, 0.5, 30.0),
    },
    Preset {
        name: "forest",
        temperature: (0.4, 0.7),
        moisture: (0.5, 0.8),
        continentalness: (0.3, 1.0),
        erosion: ANY,
        weirdness: ANY,
        offset: 0.0,
        color: [0.15, 0.5, 0.2],
        geology: geology(25.0, 0.6, 33.0),
    },
    Preset {
        name: "swamp",
        temperature: (0.5, 0.8),
        moisture: (0.8, 1.0),
        continentalness: (0.3, 0.5),
        erosion: (0.6, 1.0),
        weirdness: ANY,
        offset: 0.05,
        color: [0.3, 0.35, 0.2],
        geology: geology(3.0, 0.8, 15.0),
    },
    Preset {
        name: "desert",
        temperature: (0.7, 1.0),
        moisture: (0.0, 0.25),
        continentalness: (0.3, 1.0),
        erosion: ANY,
        weirdness: ANY,
        offset: 0.0,
        color: [0.93, 0.8, 0.45],
        geology: geology(18.0, 0.1, 32.0),
    },
    Preset {
        name: "savanna",
        temperature: (0.7, 1.0),
        moisture: (0.25, 0.55),
        continentalness: (0.3, 1.0),
        erosion: ANY,
        weirdness: ANY,
        offset: 0.0,
        color: [0.75, 0.7, 0.3],
        geology: geology(14.0, 0.3, 30.0),
    },
    Preset {
        name: "jungle",
        temperature: (0.7, 1.0),
        moisture: (0.55, 1.0),
        continentalness: (0.3, 1.0),
        erosion: ANY,
        weirdness: ANY,
        offset: 0.0,
        color: [0.05, 0.45, 0.1],
        geology: geology(35.0, 0.7, 40.0),
    },
    Preset {
        name: "mountains",
        temperature: ANY,
        moisture: ANY,
        continentalness: (0.55, 1.0),
        erosion: (0.0, 0.25),
        weirdness: ANY,
        offset: 0.0,
        color: [0.5, 0.5, 0.52],
        geology: GeologyProfile {
            domain_warp_strength: 0.3,
            ..geology(180.0, 0.5, 45.0)
        },
    },
    Preset {
        name: "badlands",
        temperature: (0.65, 1.0),
        moisture: (0.0, 0.3),
        continentalness: (0.4, 1.0),
        erosion: ANY,
        weirdness: (0.7, 1.0),
        offset: 0.15,
        color: [0.75, 0.4, 0.2],
        geology: GeologyProfile {
            domain_warp_strength: 0.6,
            ..geology(60.0, 0.9, 60.0)
        },
    },
];

impl Preset {
    fn to_definition(&self) -> BiomeDefinition<BiomeStyle> {
        let [r, g, b] = self.color;
        BiomeDefinition::new(
            self.name,
            BiomeStyle {
                debug_color: DVec4::new(r, g, b, 1.0),
                geology: self.geology,
            },
        )
        .with_range(ClimateAxis::Temperature, self.temperature.0, self.temperature.1)
        .with_range(ClimateAxis::Moisture, self.moisture.0, self.moisture.1)
        .with_range(
            ClimateAxis::Continentalness,
            self.continentalness.0,
            self.continentalness.1,
        )
        .with_range(ClimateAxis::Erosion, self.erosion.0, self.erosion.1)
        .with_range(ClimateAxis::Weirdness, self.weirdness.0, self.weirdness.1)
        .with_offset(self.offset)
    }
}

/// The built-in catalog with default weights and blend radius.
pub(crate) fn default_catalog() -> Result<BiomeCatalog<BiomeStyle>, CatalogError> {
    let mut catalog = BiomeCatalog::new();
    for preset in PRESETS {
        catalog.register(preset.to_definition())?;
    }
    Ok(catalog)
}
