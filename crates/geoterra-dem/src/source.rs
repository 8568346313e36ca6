//! The elevation source capability.

use crate::Result;

/// A source of elevation data addressable by geographic coordinate.
///
/// The pipeline is generic over this trait so the grid sampler never knows
/// where elevations come from; the production implementation is
/// [`DemReader`](crate::DemReader), tests substitute synthetic surfaces.
///
/// `Ok(None)` means the source has no coverage at the coordinate: a data
/// hole, not a failure. Implementations must be deterministic: the same
/// coordinate against the same backing data always yields the same
/// elevation or the same hole.
pub trait ElevationSource: Sync {
    /// Elevation in meters above sea level at `(lat, lon)`, or `None` when
    /// the backing data does not cover the coordinate.
    fn elevation_at(&self, lat: f64, lon: f64) -> Result<Option<f64>>;
}
