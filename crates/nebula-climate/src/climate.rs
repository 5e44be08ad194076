//! Climate sampling: five-axis samples, soft axis ranges, and the climate map builder.
//!
//! Temperature blends a latitude gradient with noise; moisture, continentalness
//! and erosion come straight from their noise layers; weirdness is optional.

mod builder;
mod range;
mod sample;

pub use builder::{
    AxisNoise, ClimateConfig, DEFAULT_LATITUDE_INFLUENCE, generate_climate_map,
    latitude_temperature,
};
pub use range::AxisRange;
pub use sample::{ClimateAxis, ClimateSample};
