//! Soft interval on a single climate axis.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Accepted `[min, max]` interval on one climate axis, both ends in `[0, 1]`.
///
/// Distance to the interval is zero inside it and the squared distance to the
/// nearer edge outside it. Callers keep `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RangeBounds")]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Unclamped wire form of [`AxisRange`].
#[derive(Deserialize)]
struct RangeBounds {
    min: f64,
    max: f64,
}

impl From<RangeBounds> for AxisRange {
    fn from(bounds: RangeBounds) -> Self {
        AxisRange::new(bounds.min, bounds.max)
    }
}

impl AxisRange {
    /// The whole axis.
    pub const FULL: AxisRange = AxisRange { min: 0.0, max: 1.0 };

    /// Build a range, clamping both ends into `[0, 1]`.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: min.clamp(0.0, 1.0),
            max: max.clamp(0.0, 1.0),
        }
    }

    /// Midpoint of the interval.
    pub fn center(&self) -> f64 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Zero inside the range, squared distance to the nearer edge outside it.
    #[inline]
    pub fn squared_distance(&self, value: f64) -> f64 {
        if value < self.min {
            let d = self.min - value;
            d * d
        } else if value > self.max {
            let d = value - self.max;
            d * d
        } else {
            0.0
        }
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}–{:.2}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_bounds() {
        let range = AxisRange::new(-0.5, 1.5);
        assert_eq!(range, AxisRange::FULL);
    }

    #[test]
    fn test_contains_iff_zero_distance() {
        let ranges = [
            AxisRange::new(0.2, 0.6),
            AxisRange::new(0.0, 0.0),
            AxisRange::FULL,
            AxisRange::new(0.95, 1.0),
        ];
        for range in ranges {
            for i in -20..=120 {
                let v = i as f64 / 100.0;
                assert_eq!(
                    range.contains(v),
                    range.squared_distance(v) == 0.0,
                    "range {range} value {v}"
                );
            }
        }
    }

    #[test]
    fn test_squared_distance_outside() {
        let range = AxisRange::new(0.4, 0.6);
        assert!((range.squared_distance(0.1) - 0.09).abs() < 1e-12);
        assert!((range.squared_distance(0.8) - 0.04).abs() < 1e-12);
        assert_eq!(range.squared_distance(0.5), 0.0);
        assert_eq!(range.squared_distance(0.4), 0.0);
        assert_eq!(range.squared_distance(0.6), 0.0);
    }

    #[test]
    fn test_deserialize_clamps_bounds() {
        let range: AxisRange = ron::from_str("(min: -1.0, max: 2.0)").unwrap();
        assert_eq!(range, AxisRange::FULL);
        assert!(!range.contains(-0.5));

        let range: AxisRange = ron::from_str("(min: 0.25, max: 0.5)").unwrap();
        assert_eq!(range, AxisRange::new(0.25, 0.5));
    }

    #[test]
    fn test_center_and_display() {
        let range = AxisRange::new(0.2, 0.8);
        assert!((range.center() - 0.5).abs() < 1e-12);
        assert_eq!(range.to_string(), "[0.20–0.80]");
    }
}
