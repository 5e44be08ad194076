//! Error types for grid and climate generation.

/// Rejected noise layer parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoiseConfigError {
    /// Base frequency is zero, negative, or not a number.
    #[error("frequency must be positive and finite, got {0}")]
    Frequency(f64),

    /// Octave count outside `1..=MAX_OCTAVES`.
    #[error("octaves must be within 1..=8, got {0}")]
    Octaves(u32),

    /// A fractal parameter is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Parameter name (`lacunarity` or `gain`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Invalid input handed to a generator. Always a caller bug; never transient.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    /// Width or height is zero.
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// One of the noise layers has malformed parameters.
    #[error("invalid {layer} noise config: {source}")]
    InvalidNoise {
        /// Which layer was rejected (e.g. `temperature`).
        layer: &'static str,
        /// What was wrong with it.
        #[source]
        source: NoiseConfigError,
    },

    /// Latitude influence is NaN or infinite.
    #[error("latitude influence must be finite, got {0}")]
    LatitudeInfluence(f64),

    /// A climate-space slice needs at least two samples per side.
    #[error("slice resolution must be at least 2, got {0}")]
    SliceResolution(usize),
}

/// Reject grids with a zero dimension.
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<(), GenerationError> {
    if width == 0 || height == 0 {
        return Err(GenerationError::ZeroDimension { width, height });
    }
    Ok(())
}
