//! The five climate axes and the per-cell climate sample.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One axis of climate space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClimateAxis {
    /// 0 = freezing, 1 = hot.
    Temperature,
    /// 0 = arid, 1 = soaking wet.
    Moisture,
    /// Low = ocean, mid = coast, high = deep inland.
    Continentalness,
    /// Low = mountains, high = flat eroded plains.
    Erosion,
    /// 0 = normal, 1 = rare variants.
    Weirdness,
}

impl ClimateAxis {
    /// All axes in canonical order.
    pub const ALL: [ClimateAxis; 5] = [
        ClimateAxis::Temperature,
        ClimateAxis::Moisture,
        ClimateAxis::Continentalness,
        ClimateAxis::Erosion,
        ClimateAxis::Weirdness,
    ];

    /// Position of this axis in [`ClimateAxis::ALL`].
    pub fn index(self) -> usize {
        match self {
            ClimateAxis::Temperature => 0,
            ClimateAxis::Moisture => 1,
            ClimateAxis::Continentalness => 2,
            ClimateAxis::Erosion => 3,
            ClimateAxis::Weirdness => 4,
        }
    }

    /// Lowercase axis name.
    pub fn name(self) -> &'static str {
        match self {
            ClimateAxis::Temperature => "temperature",
            ClimateAxis::Moisture => "moisture",
            ClimateAxis::Continentalness => "continentalness",
            ClimateAxis::Erosion => "erosion",
            ClimateAxis::Weirdness => "weirdness",
        }
    }
}

impl fmt::Display for ClimateAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Climate descriptor for one grid cell. Each component is conventionally in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClimateSample {
    pub temperature: f64,
    pub moisture: f64,
    pub continentalness: f64,
    pub erosion: f64,
    pub weirdness: f64,
}

impl ClimateSample {
    pub fn new(
        temperature: f64,
        moisture: f64,
        continentalness: f64,
        erosion: f64,
        weirdness: f64,
    ) -> Self {
        Self {
            temperature,
            moisture,
            continentalness,
            erosion,
            weirdness,
        }
    }

    /// A two-axis sample: continentalness and erosion sit at the midpoint,
    /// weirdness at zero.
    pub fn from_temperature_moisture(temperature: f64, moisture: f64) -> Self {
        Self::new(temperature, moisture, 0.5, 0.5, 0.0)
    }

    /// Value along `axis`.
    #[inline]
    pub fn get(&self, axis: ClimateAxis) -> f64 {
        match axis {
            ClimateAxis::Temperature => self.temperature,
            ClimateAxis::Moisture => self.moisture,
            ClimateAxis::Continentalness => self.continentalness,
            ClimateAxis::Erosion => self.erosion,
            ClimateAxis::Weirdness => self.weirdness,
        }
    }

    /// Copy of this sample with `axis` replaced by `value`.
    pub fn with(mut self, axis: ClimateAxis, value: f64) -> Self {
        match axis {
            ClimateAxis::Temperature => self.temperature = value,
            ClimateAxis::Moisture => self.moisture = value,
            ClimateAxis::Continentalness => self.continentalness = value,
            ClimateAxis::Erosion => self.erosion = value,
            ClimateAxis::Weirdness => self.weirdness = value,
        }
        self
    }
}

impl fmt::Display for ClimateSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Climate(T:{:.2} M:{:.2} C:{:.2} E:{:.2} W:{:.2})",
            self.temperature, self.moisture, self.continentalness, self.erosion, self.weirdness
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_index_matches_order() {
        for (i, axis) in ClimateAxis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn test_get_and_with_agree() {
        let sample = ClimateSample::new(0.1, 0.2, 0.3, 0.4, 0.5);
        for axis in ClimateAxis::ALL {
            let changed = sample.with(axis, 0.9);
            assert_eq!(changed.get(axis), 0.9);
            for other in ClimateAxis::ALL.into_iter().filter(|&a| a != axis) {
                assert_eq!(changed.get(other), sample.get(other));
            }
        }
    }

    #[test]
    fn test_two_axis_constructor_defaults() {
        let sample = ClimateSample::from_temperature_moisture(0.8, 0.2);
        assert_eq!(sample.continentalness, 0.5);
        assert_eq!(sample.erosion, 0.5);
        assert_eq!(sample.weirdness, 0.0);
    }

    #[test]
    fn test_display_format() {
        let sample = ClimateSample::new(0.5, 0.25, 1.0, 0.0, 0.1);
        assert_eq!(
            sample.to_string(),
            "Climate(T:0.50 M:0.25 C:1.00 E:0.00 W:0.10)"
        );
    }
}
