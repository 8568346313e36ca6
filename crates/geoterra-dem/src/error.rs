//! Error types for the DEM crate.

use thiserror::Error;

/// Errors that can occur when working with DEM data.
#[derive(Debug, Error)]
pub enum DemError {
    /// I/O error reading a tile file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raster decoding error.
    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    /// Invalid tile coordinates.
    #[error(transparent)]
    Coord(#[from] geoterra_coords::CoordError),

    /// Tile cache lock was poisoned (a thread panicked while holding the lock).
    #[error("Tile cache lock was poisoned")]
    CacheLockPoisoned,
}
