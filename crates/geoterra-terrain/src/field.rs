//! Elevation grids produced by the sampler.

use crate::{Result, TerrainError};

/// A completed elevation field: `resolution²` samples in meters, row-major,
/// row 0 southernmost.
#[derive(Debug, Clone)]
pub struct ElevationField {
    samples: Vec<f64>,
    resolution: u32,
}

impl ElevationField {
    /// Build a field from row-major samples.
    ///
    /// `samples.len()` must equal `resolution²`.
    pub fn new(samples: Vec<f64>, resolution: u32) -> Self {
        debug_assert_eq!(samples.len(), (resolution * resolution) as usize);
        Self {
            samples,
            resolution,
        }
    }

    /// The samples in row-major order, row 0 southernmost.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Edge length of the square grid.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Lowest sample in the field.
    pub fn min(&self) -> f64 {
        self.samples.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Highest sample in the field.
    pub fn max(&self) -> f64 {
        self.samples
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Sampler output before any hole policy is applied.
///
/// Each cell is either an elevation or a hole where the DEM store had no
/// coverage. Holes are carried explicitly so the caller decides whether
/// they are fatal; [`SampledGrid::into_field`] applies the fail-fast
/// policy.
#[derive(Debug)]
pub struct SampledGrid {
    samples: Vec<Option<f64>>,
    resolution: u32,
    holes: usize,
    first_hole: Option<(f64, f64)>,
}

impl SampledGrid {
    pub(crate) fn new(
        samples: Vec<Option<f64>>,
        resolution: u32,
        first_hole: Option<(f64, f64)>,
    ) -> Self {
        let holes = samples.iter().filter(|s| s.is_none()).count();
        Self {
            samples,
            resolution,
            holes,
            first_hole,
        }
    }

    /// Number of grid cells without DEM coverage.
    pub fn holes(&self) -> usize {
        self.holes
    }

    /// Edge length of the square grid.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Convert into a complete field, failing if any cell is a hole.
    pub fn into_field(self) -> Result<ElevationField> {
        if self.holes > 0 {
            let (lat, lon) = self.first_hole.unwrap_or((f64::NAN, f64::NAN));
            return Err(TerrainError::MissingElevation {
                lat,
                lon,
                holes: self.holes,
                total: self.samples.len(),
            });
        }

        let samples = self.samples.into_iter().flatten().collect();
        Ok(ElevationField::new(samples, self.resolution))
    }
}
