//! Web Mercator tile arithmetic.

use crate::{BoundingBox, CoordError, GeoPoint, RawQuad, Result};
use std::f64::consts::PI;

/// Minimum valid zoom level.
pub const MIN_ZOOM: u8 = 0;

/// Maximum valid zoom level.
pub const MAX_ZOOM: u8 = 22;

/// Slippy Map tile coordinates (zoom, x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndex {
    /// Zoom level (0-22).
    pub zoom: u8,
    /// X coordinate (column, 0 at 180°W, increases eastward).
    pub x: u32,
    /// Y coordinate (row, 0 at ~85.05°N, increases southward).
    pub y: u32,
}

impl TileIndex {
    /// Convert latitude/longitude to tile coordinates.
    ///
    /// Uses the OpenStreetMap Slippy Map tiling formula:
    /// - x = floor((lon + 180) / 360 * 2^zoom)
    /// - y = floor((1 - ln(tan(lat) + sec(lat)) / π) / 2 * 2^zoom)
    ///
    /// Latitude is clamped to the Web Mercator validity range (±85.0511°)
    /// before conversion; the resulting coordinates are clamped to the tile
    /// grid so inputs at exactly ±180° stay in range.
    pub fn from_lat_lon(lat: f64, lon: f64, zoom: u8) -> Result<Self> {
        if zoom > MAX_ZOOM {
            return Err(CoordError::InvalidZoom(zoom));
        }

        let lat_clamped = GeoPoint::new(lat, lon).mercator_lat();
        let n = (1u32 << zoom) as f64;

        let x = ((lon + 180.0) / 360.0 * n).floor() as u32;

        let lat_rad = lat_clamped.to_radians();
        let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n).floor() as u32;

        let max_coord = (1u32 << zoom) - 1;
        Ok(Self {
            zoom,
            x: x.min(max_coord),
            y: y.min(max_coord),
        })
    }

    /// Get the four corner points of this tile.
    pub fn bounds(&self) -> BoundingBox {
        let n = (1u32 << self.zoom) as f64;

        let min_lon = self.x as f64 / n * 360.0 - 180.0;
        let max_lon = (self.x + 1) as f64 / n * 360.0 - 180.0;

        // Inverse of the Slippy Map formula
        let max_lat = (PI * (1.0 - 2.0 * self.y as f64 / n)).sinh().atan().to_degrees();
        let min_lat = (PI * (1.0 - 2.0 * (self.y + 1) as f64 / n))
            .sinh()
            .atan()
            .to_degrees();

        BoundingBox {
            northwest: GeoPoint::new(max_lat, min_lon),
            northeast: GeoPoint::new(max_lat, max_lon),
            southwest: GeoPoint::new(min_lat, min_lon),
            southeast: GeoPoint::new(min_lat, max_lon),
        }
    }
}

/// The tile-index coverage of a bounds quad, snapped to a square.
///
/// Corner-independent tile lookups can yield unequal x and y spans due to
/// tile-grid discretization; downstream mosaicking requires a rectangular,
/// aligned grid, so when the spans differ both collapse to the smaller one
/// anchored at the northwest corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpan {
    /// Zoom level of the covered tiles.
    pub zoom: u8,
    /// Westernmost tile column.
    pub min_x: u32,
    /// Easternmost tile column (inclusive).
    pub max_x: u32,
    /// Northernmost tile row.
    pub min_y: u32,
    /// Southernmost tile row (inclusive).
    pub max_y: u32,
}

impl TileSpan {
    /// Compute the square tile coverage of a raw bounds quad.
    pub fn square(quad: &RawQuad, zoom: u8) -> Result<Self> {
        let nw = TileIndex::from_lat_lon(quad.north, quad.west, zoom)?;
        let ne = TileIndex::from_lat_lon(quad.north, quad.east, zoom)?;
        let sw = TileIndex::from_lat_lon(quad.south, quad.west, zoom)?;

        let x_span = ne.x.abs_diff(nw.x);
        let y_span = sw.y.abs_diff(nw.y);
        let span = x_span.min(y_span);

        Ok(Self {
            zoom,
            min_x: nw.x,
            max_x: nw.x + span,
            min_y: nw.y,
            max_y: nw.y + span,
        })
    }

    /// Number of tile columns covered.
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Number of tile rows covered.
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// The geographic boundary of the covered tile grid.
    ///
    /// Each corner is taken from the matching corner of its corner tile, so
    /// the result is the exact outline of the stitched mosaic rather than
    /// the raw quad the user requested.
    pub fn true_boundaries(&self) -> BoundingBox {
        let nw = TileIndex {
            zoom: self.zoom,
            x: self.min_x,
            y: self.min_y,
        };
        let ne = TileIndex {
            zoom: self.zoom,
            x: self.max_x,
            y: self.min_y,
        };
        let sw = TileIndex {
            zoom: self.zoom,
            x: self.min_x,
            y: self.max_y,
        };
        let se = TileIndex {
            zoom: self.zoom,
            x: self.max_x,
            y: self.max_y,
        };

        BoundingBox {
            northwest: nw.bounds().northwest,
            northeast: ne.bounds().northeast,
            southwest: sw.bounds().southwest,
            southeast: se.bounds().southeast,
        }
    }
}
