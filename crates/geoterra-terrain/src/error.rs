//! Error types for the terrain pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a terrain generation run.
///
/// A dimension mismatch between mosaic columns is deliberately not an
/// error: mismatched columns are dropped with a warning so a partially
/// downloaded tile set at the mosaic edge cannot fail the run.
#[derive(Debug, Error)]
pub enum TerrainError {
    /// I/O error reading tiles or writing outputs.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raster decoding or encoding error.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Invalid coordinates or bounds.
    #[error(transparent)]
    Coord(#[from] geoterra_coords::CoordError),

    /// Elevation source failure.
    #[error(transparent)]
    Dem(#[from] geoterra_dem::DemError),

    /// Metadata record could not be parsed.
    #[error("Invalid metadata record: {0}")]
    Metadata(#[from] serde_json::Error),

    /// The DEM store has no coverage for one or more sampled grid points.
    #[error("No elevation data at ({lat:.6}, {lon:.6}) ({holes} of {total} samples missing)")]
    MissingElevation {
        /// Latitude of the first missing sample.
        lat: f64,
        /// Longitude of the first missing sample.
        lon: f64,
        /// Total number of missing samples in the grid.
        holes: usize,
        /// Total number of grid samples.
        total: usize,
    },

    /// The DEM store has no coverage at the terrain origin.
    #[error("No elevation data at terrain origin ({lat:.6}, {lon:.6})")]
    MissingOriginElevation {
        /// Origin latitude.
        lat: f64,
        /// Origin longitude.
        lon: f64,
    },

    /// The mosaicker found no tiles within the snapped boundary.
    #[error("No tiles found under {root} at zoom {zoom}")]
    EmptyTileSet {
        /// Tile store root that was searched.
        root: PathBuf,
        /// Zoom level that was searched.
        zoom: u8,
    },
}
