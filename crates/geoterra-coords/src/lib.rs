//! # geoterra-coords
//!
//! Web Mercator tile arithmetic and spherical geodesic math.
//!
//! This crate is the pure-math foundation of the geoterra pipeline: it maps
//! geographic coordinates to Slippy Map tile indices and back, snaps a raw
//! bounding quad to a square tile coverage, and provides the great-circle
//! distance/destination helpers the grid sampler and parameter calculator
//! build on. It performs no I/O.
//!
//! ## Tile Coordinate System
//!
//! Uses the OpenStreetMap Slippy Map tile naming convention:
//! - `zoom` is the zoom level (0 to 22)
//! - `x` is the column (0 to 2^zoom - 1, from west to east)
//! - `y` is the row (0 to 2^zoom - 1, from north to south)
//!
//! Latitudes are clamped to the Web Mercator validity range (±85.0511°)
//! before any tile conversion.
//!
//! ## Example
//!
//! ```
//! use geoterra_coords::{RawQuad, TileIndex, TileSpan};
//!
//! // Seattle is in tile (12, 656, 1430)
//! let tile = TileIndex::from_lat_lon(47.6062, -122.3321, 12)?;
//! assert_eq!((tile.x, tile.y), (656, 1430));
//!
//! // Snap a raw quad to a square tile coverage
//! let quad = RawQuad::from_csv("-122.5,47.4,-122.2,47.7")?;
//! let span = TileSpan::square(&quad, 12)?;
//! assert_eq!(span.width(), span.height());
//! # Ok::<(), geoterra_coords::CoordError>(())
//! ```

mod error;
mod geodesy;
mod point;
mod tile;

pub use error::CoordError;
pub use geodesy::{destination, haversine_distance, EARTH_RADIUS_M};
pub use point::{BoundingBox, GeoPoint, RawQuad, MAX_MERCATOR_LAT};
pub use tile::{TileIndex, TileSpan, MAX_ZOOM, MIN_ZOOM};

/// Result type for coordinate operations.
pub type Result<T> = std::result::Result<T, CoordError>;
